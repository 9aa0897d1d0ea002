//! Cooperative routine scheduling.
//!
//! A routine is a step-wise procedure that yields timed waits. Routines run
//! on the frame thread, one after another, and only suspend where they say
//! so. The scheduler lives inside its context `C` (the table), so routines
//! get full mutable access to the context while they run.
//!
//! ## Lifecycle
//!
//! 1. `start` resumes the routine immediately, up to its first wait.
//! 2. Each `advance` counts the waits down by the frame's `dt` and resumes
//!    every routine whose wait ran out. A frame longer than a wait carries
//!    the overshoot into the next wait.
//! 3. `Step::Done` drops the routine.
//!
//! `stop_all` cancels every parked routine. It is global: there is no
//! per-routine handle.

use std::collections::VecDeque;

/// What a routine wants after a resume.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// Park for this many seconds, then resume.
    Wait(f32),
    /// Finished.
    Done,
}

/// A resumable procedure over context `C`.
pub trait Routine<C> {
    /// Run until the next wait point or the end.
    fn resume(&mut self, ctx: &mut C) -> Step;
}

/// Contexts that carry their own scheduler.
pub trait Cooperative: Sized {
    fn scheduler(&mut self) -> &mut Scheduler<Self>;
}

struct Parked<C> {
    routine: Box<dyn Routine<C>>,
    remaining: f32,
}

/// Parked routines for context `C`.
pub struct Scheduler<C> {
    parked: Vec<Parked<C>>,
    epoch: u64,
}

impl<C> Default for Scheduler<C> {
    fn default() -> Self {
        Self {
            parked: Vec::new(),
            epoch: 0,
        }
    }
}

impl<C> Scheduler<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of parked routines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parked.len()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.parked.is_empty()
    }

    /// Cancel every parked routine.
    ///
    /// Called from inside a routine, this also discards the rest of the batch
    /// currently being advanced. Nothing already done is rolled back.
    pub fn stop_all(&mut self) {
        log::debug!("stopping {} routines", self.parked.len());
        self.parked.clear();
        self.epoch += 1;
    }

    fn park(&mut self, routine: Box<dyn Routine<C>>, remaining: f32) {
        self.parked.push(Parked { routine, remaining });
    }
}

impl<C> std::fmt::Debug for Scheduler<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("parked", &self.parked.len())
            .field("epoch", &self.epoch)
            .finish()
    }
}

/// Start `routine` on `ctx`, running it synchronously up to its first wait.
pub fn start<C: Cooperative>(ctx: &mut C, mut routine: Box<dyn Routine<C>>) {
    match routine.resume(ctx) {
        Step::Wait(secs) => ctx.scheduler().park(routine, secs),
        Step::Done => {}
    }
}

/// Advance every parked routine by `dt` seconds.
///
/// Routines started while the batch runs are parked separately and first
/// counted down on the next call.
pub fn advance<C: Cooperative>(ctx: &mut C, dt: f32) {
    let batch = std::mem::take(&mut ctx.scheduler().parked);
    let epoch = ctx.scheduler().epoch;
    let mut kept = Vec::with_capacity(batch.len());

    'batch: for mut parked in batch {
        parked.remaining -= dt;
        while parked.remaining <= 0.0 {
            let step = parked.routine.resume(ctx);
            if ctx.scheduler().epoch != epoch {
                break 'batch;
            }
            match step {
                Step::Wait(secs) => parked.remaining += secs,
                Step::Done => continue 'batch,
            }
        }
        kept.push(parked);
    }

    let scheduler = ctx.scheduler();
    if scheduler.epoch == epoch {
        kept.append(&mut scheduler.parked);
        scheduler.parked = kept;
    }
}

/// Stage of a `Sequence`.
enum Stage<C> {
    Run(Box<dyn FnOnce(&mut C)>),
    Wait(f32),
}

/// A routine built from a queue of actions and waits.
///
/// ## Example
///
/// ```
/// use solitaire_table::motion::{advance, start, Cooperative, Scheduler, Sequence};
///
/// #[derive(Default)]
/// struct Counter {
///     count: u32,
///     scheduler: Scheduler<Counter>,
/// }
///
/// impl Cooperative for Counter {
///     fn scheduler(&mut self) -> &mut Scheduler<Self> {
///         &mut self.scheduler
///     }
/// }
///
/// let mut ctx = Counter::default();
/// let seq = Sequence::new()
///     .then(|c: &mut Counter| c.count += 1)
///     .wait(0.5)
///     .then(|c: &mut Counter| c.count += 1);
/// start(&mut ctx, Box::new(seq));
/// assert_eq!(ctx.count, 1);
///
/// advance(&mut ctx, 0.5);
/// assert_eq!(ctx.count, 2);
/// assert!(ctx.scheduler.is_idle());
/// ```
pub struct Sequence<C> {
    stages: VecDeque<Stage<C>>,
}

impl<C> Default for Sequence<C> {
    fn default() -> Self {
        Self {
            stages: VecDeque::new(),
        }
    }
}

impl<C> Sequence<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action.
    #[must_use]
    pub fn then(mut self, action: impl FnOnce(&mut C) + 'static) -> Self {
        self.push(action);
        self
    }

    /// Append a wait.
    #[must_use]
    pub fn wait(mut self, secs: f32) -> Self {
        self.push_wait(secs);
        self
    }

    pub fn push(&mut self, action: impl FnOnce(&mut C) + 'static) {
        self.stages.push_back(Stage::Run(Box::new(action)));
    }

    pub fn push_wait(&mut self, secs: f32) {
        self.stages.push_back(Stage::Wait(secs));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl<C> Routine<C> for Sequence<C> {
    fn resume(&mut self, ctx: &mut C) -> Step {
        while let Some(stage) = self.stages.pop_front() {
            match stage {
                Stage::Run(action) => action(ctx),
                Stage::Wait(secs) => return Step::Wait(secs),
            }
        }
        Step::Done
    }
}
