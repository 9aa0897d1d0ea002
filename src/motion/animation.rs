//! Time-based property interpolation.
//!
//! An `Animator` drives tweens over a shared subject `S`. Each tween writes
//! one interpolated value per tick through its setter and, when it reaches
//! the end, runs its completion once and retires. Tweens are keyed by
//! `TrackId`: starting a tween on a busy track supersedes the running one,
//! and a superseded tween never completes.

use serde::{Deserialize, Serialize};

use crate::core::geometry::Vec2;

/// Values that can be linearly interpolated.
pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, to: f32, t: f32) -> f32 {
        self + (to - self) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(self, to: Vec2, t: f32) -> Vec2 {
        Vec2::new(self.x.lerp(to.x, t), self.y.lerp(to.y, t))
    }
}

/// Key for one animated property. At most one tween runs per track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackId(pub u32);

impl TrackId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

type Setter<S, V> = Box<dyn FnMut(&mut S, V)>;
type Completion<S> = Box<dyn FnOnce(&mut S)>;

/// A single interpolation from `from` to `to` over `duration` seconds.
pub struct Tween<S, V> {
    from: V,
    to: V,
    duration: f32,
    elapsed: f32,
    setter: Setter<S, V>,
    on_complete: Option<Completion<S>>,
}

impl<S, V: Lerp> Tween<S, V> {
    /// Create a tween. `setter` receives every interpolated value.
    pub fn new(from: V, to: V, duration: f32, setter: impl FnMut(&mut S, V) + 'static) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            setter: Box::new(setter),
            on_complete: None,
        }
    }

    /// Run `callback` once when the tween reaches its end value.
    #[must_use]
    pub fn on_complete(mut self, callback: impl FnOnce(&mut S) + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Fraction of the tween completed, `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    /// Advance and write the new value. Returns `true` once finished.
    fn step(&mut self, dt: f32, subject: &mut S) -> bool {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        let progress = self.progress();
        if progress >= 1.0 {
            (self.setter)(subject, self.to);
            return true;
        }
        (self.setter)(subject, self.from.lerp(self.to, progress));
        false
    }
}

impl<S, V: std::fmt::Debug> std::fmt::Debug for Tween<S, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tween")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("duration", &self.duration)
            .field("elapsed", &self.elapsed)
            .finish_non_exhaustive()
    }
}

/// Set of running tweens over subject `S`.
///
/// ## Example
///
/// ```
/// use solitaire_table::motion::{Animator, TrackId, Tween};
///
/// let mut animator: Animator<f32, f32> = Animator::new();
/// animator.start(
///     TrackId::new(0),
///     Tween::new(0.0, 10.0, 1.0, |v: &mut f32, x| *v = x),
/// );
///
/// let mut value = 0.0;
/// animator.tick(0.5, &mut value);
/// assert_eq!(value, 5.0);
/// animator.tick(0.5, &mut value);
/// assert_eq!(value, 10.0);
/// assert!(animator.is_idle());
/// ```
pub struct Animator<S, V> {
    tweens: Vec<(TrackId, Tween<S, V>)>,
}

impl<S, V> Default for Animator<S, V> {
    fn default() -> Self {
        Self { tweens: Vec::new() }
    }
}

impl<S, V: Lerp> Animator<S, V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `tween` on `track`, dropping whatever was running there.
    pub fn start(&mut self, track: TrackId, tween: Tween<S, V>) {
        if let Some(slot) = self.tweens.iter_mut().find(|(t, _)| *t == track) {
            log::trace!("tween on track {} superseded", track.raw());
            slot.1 = tween;
        } else {
            self.tweens.push((track, tween));
        }
    }

    /// Advance every tween by `dt` seconds.
    ///
    /// Finished tweens run their completion and are removed in the same tick.
    pub fn tick(&mut self, dt: f32, subject: &mut S) {
        let mut i = 0;
        while i < self.tweens.len() {
            if self.tweens[i].1.step(dt, subject) {
                let (_, tween) = self.tweens.remove(i);
                if let Some(done) = tween.on_complete {
                    done(subject);
                }
            } else {
                i += 1;
            }
        }
    }

    /// Drop every tween without running completions.
    pub fn stop_all(&mut self) {
        self.tweens.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Whether a tween is running on `track`.
    #[must_use]
    pub fn is_animating(&self, track: TrackId) -> bool {
        self.tweens.iter().any(|(t, _)| *t == track)
    }
}

impl<S, V> std::fmt::Debug for Animator<S, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Animator")
            .field("tweens", &self.tweens.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Subject {
        value: f32,
        completions: u32,
    }

    fn tween(to: f32, duration: f32) -> Tween<Subject, f32> {
        Tween::new(0.0, to, duration, |s: &mut Subject, v| s.value = v)
            .on_complete(|s: &mut Subject| s.completions += 1)
    }

    #[test]
    fn test_completion_fires_once() {
        let mut animator = Animator::new();
        let mut subject = Subject::default();
        animator.start(TrackId::new(1), tween(4.0, 0.2));

        animator.tick(0.1, &mut subject);
        assert_eq!(subject.value, 2.0);
        assert_eq!(subject.completions, 0);

        animator.tick(0.5, &mut subject);
        assert_eq!(subject.value, 4.0);
        assert_eq!(subject.completions, 1);

        animator.tick(0.5, &mut subject);
        assert_eq!(subject.completions, 1);
        assert!(animator.is_idle());
    }

    #[test]
    fn test_zero_duration_finishes_on_first_tick() {
        let mut animator = Animator::new();
        let mut subject = Subject::default();
        animator.start(TrackId::new(1), tween(3.0, 0.0));

        animator.tick(0.0, &mut subject);
        assert_eq!(subject.value, 3.0);
        assert_eq!(subject.completions, 1);
    }

    #[test]
    fn test_supersede_skips_completion() {
        let mut animator = Animator::new();
        let mut subject = Subject::default();
        animator.start(TrackId::new(1), tween(4.0, 1.0));
        animator.tick(0.5, &mut subject);

        animator.start(TrackId::new(1), tween(8.0, 0.1));
        assert_eq!(animator.len(), 1);

        animator.tick(0.1, &mut subject);
        assert_eq!(subject.value, 8.0);
        assert_eq!(subject.completions, 1);
    }

    #[test]
    fn test_independent_tracks() {
        let mut animator = Animator::new();
        let mut subject = Subject::default();
        animator.start(TrackId::new(1), tween(1.0, 0.1));
        animator.start(TrackId::new(2), tween(1.0, 0.3));

        animator.tick(0.2, &mut subject);
        assert!(!animator.is_animating(TrackId::new(1)));
        assert!(animator.is_animating(TrackId::new(2)));
        assert_eq!(subject.completions, 1);
    }

    #[test]
    fn test_stop_all_drops_completions() {
        let mut animator = Animator::new();
        let mut subject = Subject::default();
        animator.start(TrackId::new(1), tween(1.0, 0.1));
        animator.stop_all();
        animator.tick(1.0, &mut subject);
        assert_eq!(subject.completions, 0);
        assert_eq!(subject.value, 0.0);
    }

    #[test]
    fn test_vec2_lerp() {
        let a = Vec2::new(0.0, 10.0);
        let b = Vec2::new(10.0, 0.0);
        assert_eq!(a.lerp(b, 0.5), Vec2::new(5.0, 5.0));
    }
}
