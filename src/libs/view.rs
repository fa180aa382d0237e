//! Terminal table rendering for all modules.

use super::formatter::{format_duration, format_minutes, short_date};
use crate::store::focus_stats::FocusStatsEntry;
use crate::store::problems::{Problem, ProblemStats};
use crate::store::timesheet::{Entry, Sheet};
use crate::store::todos::Todo;
use anyhow::Result;
use chrono::NaiveDate;
use prettytable::{row, Table};

/// One dashboard row: a day of the current week with per-module totals.
pub struct DashboardDay {
    pub date: NaiveDate,
    pub todos_done: usize,
    pub focus_minutes: u64,
    pub tracked_minutes: u64,
    pub problems_added: usize,
}

pub struct View {}

impl View {
    pub fn todos(todos: &[Todo]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TASK", "PRIORITY", "STATUS", "DUE", "ADDED", "COMPLETED", "REPEAT"]);
        for todo in todos {
            table.add_row(row![
                todo.id,
                todo.task,
                todo.priority,
                todo.status,
                todo.due_date.map(|d| short_date(&d)).unwrap_or_else(|| "-".to_string()),
                short_date(&todo.date_added),
                todo.date_completed.map(|d| short_date(&d)).unwrap_or_else(|| "-".to_string()),
                todo.recurrence.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string()),
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn sheets(sheets: &[Sheet], current: Option<&str>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "SHEET", "CURRENT"]);
        for sheet in sheets {
            let marker = if current == Some(sheet.name.as_str()) { "yes" } else { "" };
            table.add_row(row![sheet.id, sheet.name, marker]);
        }
        table.printstd();

        Ok(())
    }

    pub fn entries(entries: &[Entry]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "START", "END", "DURATION", "NOTE"]);
        for entry in entries {
            table.add_row(row![
                entry.id,
                entry.start.format("%Y-%m-%d %H:%M"),
                entry.end.map(|e| e.format("%Y-%m-%d %H:%M").to_string()).unwrap_or_else(|| "running".to_string()),
                format_duration(&entry.duration()),
                entry.note.as_deref().unwrap_or("-"),
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn running(running: &[(Sheet, Entry)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["SHEET", "START", "ELAPSED", "NOTE"]);
        for (sheet, entry) in running {
            table.add_row(row![
                sheet.name,
                entry.start.format("%Y-%m-%d %H:%M"),
                format_duration(&entry.duration()),
                entry.note.as_deref().unwrap_or("-"),
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn problems(problems: &[Problem]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "PLATFORM", "NAME", "DIFFICULTY", "STATUS", "ADDED", "TAGS", "NOTES"]);
        for problem in problems {
            // Truncation counts chars so multi-byte notes never split.
            let notes = if problem.notes.chars().count() > 50 {
                let cut: String = problem.notes.chars().take(47).collect();
                format!("{}...", cut)
            } else {
                problem.notes.clone()
            };
            table.add_row(row![
                problem.id,
                problem.platform,
                problem.name,
                problem.difficulty,
                problem.status,
                short_date(&problem.added_date),
                problem.tags.join(", "),
                notes,
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn problem_stats(stats: &ProblemStats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TOTAL", "SOLVED", "ATTEMPTED", "REVISIT", "UNSOLVED"]);
        table.add_row(row![stats.total, stats.solved, stats.attempted, stats.revisit, stats.unsolved]);
        table.printstd();

        if !stats.by_platform.is_empty() {
            let mut by_platform = Table::new();
            by_platform.add_row(row!["PLATFORM", "PROBLEMS"]);
            for (platform, count) in &stats.by_platform {
                by_platform.add_row(row![platform, count]);
            }
            by_platform.printstd();
        }

        Ok(())
    }

    pub fn focus_stats(entries: &[FocusStatsEntry]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "FOCUS TIME"]);
        let mut total = 0u64;
        for entry in entries {
            table.add_row(row![short_date(&entry.date), format_minutes(entry.total_minutes)]);
            total += entry.total_minutes;
        }
        table.add_row(row!["TOTAL", format_minutes(total)]);
        table.printstd();

        Ok(())
    }

    pub fn dashboard(days: &[DashboardDay]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DAY", "TODOS DONE", "FOCUS", "TRACKED", "PROBLEMS ADDED"]);
        for day in days {
            table.add_row(row![
                day.date.format("%a %d-%m"),
                day.todos_done,
                format_minutes(day.focus_minutes),
                format_minutes(day.tracked_minutes),
                day.problems_added,
            ]);
        }
        table.printstd();

        Ok(())
    }
}
