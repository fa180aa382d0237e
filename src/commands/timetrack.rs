//! Timesheet tracking command.
//!
//! Modeled on timetrap-style workflows: select a sheet, check in, check
//! out, and display entries. The current sheet is remembered between
//! invocations.

use crate::libs::formatter::format_duration;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::store::timesheet::{Sheet, Timesheet};
use crate::{msg_bail_anyhow, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use chrono::{Local, NaiveDateTime, NaiveTime};
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
enum TimetrackCommand {
    /// Switch to a timesheet (created if missing); list sheets when no name is given
    Sheet {
        /// Sheet name
        name: Option<String>,
    },
    /// Start the timer for the current timesheet
    In {
        /// Note attached to the entry
        note: Option<String>,
        /// Check-in time ('YYYY-MM-DD HH:MM' or 'HH:MM', defaults to now)
        #[arg(long, short)]
        at: Option<String>,
    },
    /// Stop the timer for the current (or named) timesheet
    Out {
        /// Sheet to check out of, defaults to the current sheet
        sheet: Option<String>,
        /// Check-out time ('YYYY-MM-DD HH:MM' or 'HH:MM', defaults to now)
        #[arg(long, short)]
        at: Option<String>,
    },
    /// Display entries for the current (or named) timesheet
    Display {
        /// Sheet to display, defaults to the current sheet
        sheet: Option<String>,
    },
    /// Show running entries across all timesheets
    Now,
}

#[derive(Debug, Args)]
pub struct TimetrackArgs {
    #[command(subcommand)]
    command: TimetrackCommand,
}

pub fn cmd(args: TimetrackArgs) -> Result<()> {
    let timesheet = Timesheet::new()?;

    match args.command {
        TimetrackCommand::Sheet { name: Some(name) } => {
            let (sheet, created) = timesheet.select_sheet(&name)?;
            if created {
                msg_success!(Message::SheetCreated(sheet.name.clone()));
            }
            msg_print!(Message::SheetSwitched(sheet.name));
        }
        TimetrackCommand::Sheet { name: None } => {
            let sheets = timesheet.sheets()?;
            if sheets.is_empty() {
                msg_info!(Message::NoSheets);
            } else {
                let current = timesheet.current_sheet()?;
                msg_print!(Message::SheetsHeader);
                View::sheets(&sheets, current.as_ref().map(|s| s.name.as_str()))?;
            }
        }
        TimetrackCommand::In { note, at } => {
            let sheet = require_current(&timesheet)?;
            if !timesheet.running_entries(sheet.id)?.is_empty() {
                msg_warning!(Message::RunningEntryExists(sheet.name.clone()));
            }
            let start = at.as_deref().map(parse_time).transpose()?.unwrap_or_else(|| Local::now().naive_local());
            timesheet.check_in(sheet.id, start, note)?;
            msg_success!(Message::CheckedIn(sheet.name));
        }
        TimetrackCommand::Out { sheet, at } => {
            let sheet = resolve_sheet(&timesheet, sheet)?;
            let end = at.as_deref().map(parse_time).transpose()?.unwrap_or_else(|| Local::now().naive_local());
            match timesheet.check_out(sheet.id, end)? {
                Some(entry) => msg_success!(Message::CheckedOut(sheet.name, format_duration(&entry.duration()))),
                None => msg_info!(Message::NoRunningEntry(sheet.name)),
            }
        }
        TimetrackCommand::Display { sheet } => {
            let sheet = resolve_sheet(&timesheet, sheet)?;
            let entries = timesheet.entries(sheet.id)?;
            if entries.is_empty() {
                msg_info!(Message::NoEntriesForSheet(sheet.name));
            } else {
                msg_print!(Message::TimesheetHeader(sheet.name), true);
                View::entries(&entries)?;
            }
        }
        TimetrackCommand::Now => {
            let running = timesheet.all_running()?;
            if running.is_empty() {
                msg_info!(Message::NoRunningEntries);
            } else {
                msg_print!(Message::RunningEntriesHeader);
                View::running(&running)?;
            }
        }
    }

    Ok(())
}

fn require_current(timesheet: &Timesheet) -> Result<Sheet> {
    match timesheet.current_sheet()? {
        Some(sheet) => Ok(sheet),
        None => msg_bail_anyhow!(Message::NoCurrentSheet),
    }
}

fn resolve_sheet(timesheet: &Timesheet, name: Option<String>) -> Result<Sheet> {
    match name {
        Some(name) => match timesheet.sheet_by_name(&name)? {
            Some(sheet) => Ok(sheet),
            None => msg_bail_anyhow!(Message::SheetNotFound(name)),
        },
        None => require_current(timesheet),
    }
}

/// Parses `YYYY-MM-DD HH:MM`, or `HH:MM` taken as today.
fn parse_time(input: &str) -> Result<NaiveDateTime> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M") {
        return Ok(datetime);
    }
    if let Ok(time) = NaiveTime::parse_from_str(input, "%H:%M") {
        return Ok(Local::now().date_naive().and_time(time));
    }
    msg_bail_anyhow!(Message::InvalidTimeFormat(input.to_string()))
}
