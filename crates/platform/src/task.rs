//! Cooperative task contract.
//!
//! Every subsystem is a [`Task`]. The main loop calls [`Task::initialize`]
//! once for each task, then calls [`Task::run_tick`] on every task once per
//! 1 ms quantum, always in the same order.
//!
//! ```text
//! reset ──► initialize(t0) ──► run_tick(t1) ──► run_tick(t2) ──► ...
//!                              └─ all tasks share one quantum ─┘
//! ```
//!
//! Rules for implementors:
//!
//! - `run_tick` never blocks or spins. A wait is "compare `now`
//!   against a stored start time and return if not due yet".
//! - State changes only happen inside `run_tick` (or an explicit control call
//!   such as a transport command).
//! - A task is never re-entered: `run_tick` is not called while another call
//!   on the same task is in progress.
//!
//! `Ctx` is the capability a task is lent for the duration of one call. The
//! link task gets the player's transport controls, the display task gets the
//! player's now-playing queries, and self-contained tasks use `()`.

use crate::time::Instant;

/// A cooperatively scheduled, non-blocking unit of work.
pub trait Task<Ctx: ?Sized = ()> {
    /// One-time setup. Called exactly once, before the first `run_tick`.
    fn initialize(&mut self, now: Instant, ctx: &mut Ctx);

    /// Run one bounded step of the task's current state.
    fn run_tick(&mut self, now: Instant, ctx: &mut Ctx);
}
