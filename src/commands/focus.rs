//! Foreground focus session command.
//!
//! Runs the session engine in the calling terminal: one tick per second,
//! a `\r`-rewritten countdown line, and Ctrl+C for cancellation. The
//! terminal is occupied for the whole session; that is the point of a
//! foreground timer. Cancellation is a normal exit (code 0) with the
//! partial duration recorded; invalid configuration exits non-zero before
//! anything is persisted.

use crate::libs::config::Config;
use crate::libs::formatter::format_countdown;
use crate::libs::messages::Message;
use crate::libs::notifier::{DesktopNotifier, Notifier, SilentNotifier};
use crate::libs::session::{SessionConfig, SessionEngine, SessionResult, SessionState, TICK_SECS};
use crate::store::focus_stats::FocusStats;
use crate::{msg_error_anyhow, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::io::{self, Write};
use std::time::Duration;

#[derive(Debug, Args)]
pub struct FocusArgs {
    #[arg(long, short, help = "Focus session duration in minutes")]
    minutes: Option<u64>,

    #[arg(long, help = "Hours added on top of --minutes")]
    hours: Option<u64>,

    #[arg(long, help = "Take a break every N minutes")]
    break_every: Option<u64>,

    #[arg(long, help = "Break length in minutes")]
    break_duration: Option<u64>,
}

pub async fn cmd(args: FocusArgs) -> Result<()> {
    let focus_config = Config::read()?.focus.unwrap_or_default();

    // No explicit duration at all falls back to the configured default.
    let planned = match (args.minutes, args.hours) {
        (None, None) => focus_config.default_minutes,
        (minutes, hours) => hours.unwrap_or(0) * 60 + minutes.unwrap_or(0),
    };
    let break_every = args.break_every.or(focus_config.break_every);
    // A lone --break-duration flows through so validation can reject it.
    let break_duration = match break_every {
        Some(_) => Some(args.break_duration.unwrap_or(focus_config.break_duration)),
        None => args.break_duration,
    };

    let session_config = SessionConfig::new(planned, break_every, break_duration).map_err(|e| msg_error_anyhow!(e))?;

    msg_print!(Message::FocusSessionStarting(planned), true);
    let mut engine = SessionEngine::new(session_config);
    let result = run_session(&mut engine).await?;

    // Any terminal state with worked time persists a stats entry.
    if result.actual_minutes > 0 {
        FocusStats::new()?.record_session(Local::now().date_naive(), result.actual_minutes)?;
    }

    let notifier: Box<dyn Notifier> = if focus_config.notifications {
        Box::new(DesktopNotifier)
    } else {
        Box::new(SilentNotifier)
    };
    announce_outcome(&result, notifier.as_ref());

    Ok(())
}

/// Reports the session outcome. Completion fires exactly one notification;
/// cancellation fires none.
pub fn announce_outcome(result: &SessionResult, notifier: &dyn Notifier) {
    if result.completed {
        notifier.notify(
            &Message::FocusNotificationTitle.to_string(),
            &Message::FocusNotificationBody(result.actual_minutes).to_string(),
        );
        msg_success!(Message::FocusSessionCompleted(result.actual_minutes));
    } else {
        msg_info!(Message::FocusSessionCancelled(result.actual_minutes));
    }
}

/// Drives the engine to a terminal state: sleeps one tick, advances the
/// state machine, and checks Ctrl+C at each tick boundary.
async fn run_session(engine: &mut SessionEngine) -> Result<SessionResult> {
    engine.start();

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut prev_state = engine.state();

    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                engine.cancel();
            }
            _ = tokio::time::sleep(Duration::from_secs(TICK_SECS)) => {
                let state = engine.tick();
                render_tick(engine, prev_state, state);
                prev_state = state;
            }
        }
        if engine.is_terminal() {
            println!();
            return Ok(engine.result());
        }
    }
}

/// Rewrites the countdown line in place and announces break transitions.
fn render_tick(engine: &SessionEngine, prev: SessionState, state: SessionState) {
    match (prev, state) {
        (SessionState::Working, SessionState::OnBreak) => {
            println!();
            msg_info!(Message::FocusBreakStarted(engine.break_remaining_secs() / 60));
        }
        (SessionState::OnBreak, SessionState::Working) => {
            println!();
            msg_info!(Message::FocusBreakEnded);
        }
        (_, SessionState::Working) => {
            print!("\r⏳ {} ", format_countdown(engine.remaining_secs()));
            let _ = io::stdout().flush();
        }
        (_, SessionState::OnBreak) => {
            print!("\r☕ {} ", format_countdown(engine.break_remaining_secs()));
            let _ = io::stdout().flush();
        }
        _ => {}
    }
}
