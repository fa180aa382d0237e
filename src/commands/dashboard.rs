//! Combined weekly dashboard.
//!
//! Reads the todo, focus-stats, timesheet, and learning stores and renders
//! one row per day of the current week (Monday through Sunday) with that
//! day's completed todos, focused minutes, tracked minutes, and problems
//! added to the learning tracker.

use crate::libs::messages::Message;
use crate::libs::view::{DashboardDay, View};
use crate::store::focus_stats::{week_start, FocusStats, StatsRange};
use crate::store::problems::Problems;
use crate::store::timesheet::Timesheet;
use crate::store::todos::{TodoFilter, Todos};
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::{Duration, Local};
use clap::Args;

#[derive(Debug, Args)]
pub struct DashboardArgs {}

pub fn cmd(_args: DashboardArgs) -> Result<()> {
    let today = Local::now().date_naive();
    let monday = week_start(today);

    let todos = Todos::new()?;
    let all_todos = todos.fetch(TodoFilter::All)?;
    let focus_entries = FocusStats::new()?.report(StatsRange::Week)?;
    let tracked = Timesheet::new()?.all_entries()?;
    let problems = Problems::new()?.all()?;

    let days: Vec<DashboardDay> = (0..7)
        .map(|offset| {
            let date = monday + Duration::days(offset);
            DashboardDay {
                date,
                todos_done: all_todos.iter().filter(|t| t.date_completed == Some(date)).count(),
                focus_minutes: focus_entries
                    .iter()
                    .find(|e| e.date == date)
                    .map(|e| e.total_minutes)
                    .unwrap_or(0),
                tracked_minutes: tracked
                    .iter()
                    .filter(|e| e.start.date() == date)
                    .map(|e| e.duration().num_minutes().max(0) as u64)
                    .sum(),
                problems_added: problems.iter().filter(|p| p.added_date == date).count(),
            }
        })
        .collect();

    let week_label = format!("{} - {}", monday.format("%d-%m-%Y"), (monday + Duration::days(6)).format("%d-%m-%Y"));
    msg_print!(Message::DashboardHeader(week_label), true);
    View::dashboard(&days)?;

    let open_todos = all_todos.iter().filter(|t| t.date_completed.is_none()).count();
    msg_info!(Message::DashboardOpenTodos(open_todos));

    Ok(())
}
