//! Focus session engine.
//!
//! The engine is a tick-driven state machine. It does not sleep and it owns
//! no thread - the command driver advances it by calling `tick()` once per
//! second and feeds cancellation in at tick boundaries with `cancel()`.
//! This keeps the engine fully deterministic: tests drive it tick by tick
//! without any real waiting.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Working -> (OnBreak <-> Working)* -> Completed | Cancelled
//! ```
//!
//! Work time only advances in the `Working` state; breaks suspend the work
//! countdown, so a completed session with breaks occupies
//! `planned + breaks * break_duration` minutes of wall time.

use crate::libs::error::Error;

/// Seconds of wall time represented by a single `tick()` call.
pub const TICK_SECS: u64 = 1;

const SECS_PER_MINUTE: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Working,
    OnBreak,
    Completed,
    Cancelled,
}

/// Validated session parameters. Construction is the only place the
/// duration and break invariants are checked.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    planned_minutes: u64,
    break_every: Option<u64>,
    break_duration: Option<u64>,
}

impl SessionConfig {
    /// Validates and builds a session configuration.
    ///
    /// Rules:
    /// - `planned_minutes` must be greater than zero.
    /// - When `break_every` is set it must satisfy `0 < break_every < planned_minutes`,
    ///   and `break_duration` must be set and greater than zero.
    /// - `break_duration` without `break_every` is rejected.
    pub fn new(planned_minutes: u64, break_every: Option<u64>, break_duration: Option<u64>) -> Result<Self, Error> {
        if planned_minutes == 0 {
            return Err(Error::InvalidDuration);
        }
        match (break_every, break_duration) {
            (None, None) => {}
            (None, Some(_)) => {
                return Err(Error::InvalidBreakConfig("break duration given without a break interval".to_string()));
            }
            (Some(every), duration) => {
                if every == 0 || every >= planned_minutes {
                    return Err(Error::InvalidBreakConfig(format!(
                        "break interval must be between 1 and {} minutes",
                        planned_minutes - 1
                    )));
                }
                match duration {
                    Some(d) if d > 0 => {}
                    _ => return Err(Error::InvalidBreakConfig("break duration must be greater than zero".to_string())),
                }
            }
        }
        Ok(SessionConfig {
            planned_minutes,
            break_every,
            break_duration,
        })
    }

    pub fn planned_minutes(&self) -> u64 {
        self.planned_minutes
    }
}

/// Outcome of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionResult {
    pub completed: bool,
    /// Whole minutes of focused work. Always <= the planned duration.
    pub actual_minutes: u64,
}

/// Core session engine. Created in `Idle`, advanced by the caller.
#[derive(Debug)]
pub struct SessionEngine {
    config: SessionConfig,
    state: SessionState,
    /// Seconds of work accumulated. Break time is excluded.
    worked_secs: u64,
    /// Seconds of work since the last break ended (or since start).
    since_break_secs: u64,
    /// Seconds left in the current break, valid only in `OnBreak`.
    break_left_secs: u64,
    breaks_taken: u32,
}

impl SessionEngine {
    pub fn new(config: SessionConfig) -> Self {
        SessionEngine {
            config,
            state: SessionState::Idle,
            worked_secs: 0,
            since_break_secs: 0,
            break_left_secs: 0,
            breaks_taken: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whole minutes of work accumulated so far.
    pub fn worked_minutes(&self) -> u64 {
        self.worked_secs / SECS_PER_MINUTE
    }

    /// Seconds of work remaining until natural completion.
    pub fn remaining_secs(&self) -> u64 {
        self.config.planned_minutes * SECS_PER_MINUTE - self.worked_secs
    }

    /// Seconds left in the current break (zero outside `OnBreak`).
    pub fn break_remaining_secs(&self) -> u64 {
        self.break_left_secs
    }

    pub fn breaks_taken(&self) -> u32 {
        self.breaks_taken
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.state, SessionState::Completed | SessionState::Cancelled)
    }

    /// Moves the engine from `Idle` into `Working`. No-op in any other state.
    pub fn start(&mut self) {
        if self.state == SessionState::Idle {
            self.state = SessionState::Working;
        }
    }

    /// Advances the engine by one tick of wall time and returns the state
    /// after the transition.
    ///
    /// In `Working`, completion is checked before the break trigger so a
    /// session never ends on a break. In `OnBreak`, the break countdown
    /// drains without advancing work time.
    pub fn tick(&mut self) -> SessionState {
        match self.state {
            SessionState::Working => {
                self.worked_secs += TICK_SECS;
                self.since_break_secs += TICK_SECS;

                if self.worked_secs >= self.config.planned_minutes * SECS_PER_MINUTE {
                    self.state = SessionState::Completed;
                } else if let Some(every) = self.config.break_every {
                    if self.since_break_secs >= every * SECS_PER_MINUTE {
                        // break_duration is guaranteed by SessionConfig::new
                        let duration = self.config.break_duration.unwrap_or(0);
                        self.break_left_secs = duration * SECS_PER_MINUTE;
                        self.breaks_taken += 1;
                        self.state = SessionState::OnBreak;
                    }
                }
            }
            SessionState::OnBreak => {
                self.break_left_secs = self.break_left_secs.saturating_sub(TICK_SECS);
                if self.break_left_secs == 0 {
                    self.since_break_secs = 0;
                    self.state = SessionState::Working;
                }
            }
            SessionState::Idle | SessionState::Completed | SessionState::Cancelled => {}
        }
        self.state
    }

    /// Cancels the session at a tick boundary. Work accumulated so far is
    /// kept; a break in progress contributes nothing further.
    pub fn cancel(&mut self) {
        if !self.is_terminal() {
            self.state = SessionState::Cancelled;
        }
    }

    /// Finalizes the session into a result. Only meaningful once the engine
    /// has reached a terminal state.
    pub fn result(&self) -> SessionResult {
        let completed = self.state == SessionState::Completed;
        SessionResult {
            completed,
            actual_minutes: if completed {
                self.config.planned_minutes
            } else {
                self.worked_minutes()
            },
        }
    }
}
