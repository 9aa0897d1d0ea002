//! Frame-driven motion: tweens and cooperative routines.
//!
//! - `animation`: per-property interpolation with completion callbacks
//! - `schedule`: timed, resumable procedures with global cancellation
//!
//! Both advance only when the host hands the table a frame's `dt`.

pub mod animation;
pub mod schedule;

pub use animation::{Animator, Lerp, TrackId, Tween};
pub use schedule::{advance, start, Cooperative, Routine, Scheduler, Sequence, Step};
