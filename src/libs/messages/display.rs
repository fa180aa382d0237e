//! Display implementation for tempo application messages.
//!
//! All user-facing text lives here, in a single `Display` impl over the
//! `Message` enum. Keeping the text in one place keeps wording consistent
//! across commands and makes the message catalog easy to audit.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === FOCUS SESSION MESSAGES ===
            Message::FocusSessionStarting(minutes) => format!("Starting a {} minute focus session. Press Ctrl+C to cancel.", minutes),
            Message::FocusSessionCompleted(minutes) => format!("Session complete! {} minutes of focused work recorded.", minutes),
            Message::FocusSessionCancelled(minutes) => match minutes {
                0 => "Session cancelled before any full minute was worked.".to_string(),
                _ => format!("Session cancelled. {} minute(s) of focused work recorded.", minutes),
            },
            Message::FocusBreakStarted(minutes) => format!("Break time! {} minute(s) until work resumes.", minutes),
            Message::FocusBreakEnded => "Break over. Back to work.".to_string(),
            Message::FocusNotificationTitle => "Focus session complete".to_string(),
            Message::FocusNotificationBody(minutes) => format!("{} minutes of focused work. Time for a break!", minutes),
            Message::NotificationFailed(error) => format!("Desktop notification failed: {}", error),

            // === FOCUS STATS MESSAGES ===
            Message::FocusStatsHeader(range) => format!("Focus time ({})", range),
            Message::NoFocusSessions(range) => format!("No focus sessions recorded ({}).", range),

            // === TODO MESSAGES ===
            Message::TodoAdded(task) => format!("Task '{}' added to your todo list.", task),
            Message::TodoCompleted(task) => format!("Task '{}' marked as done.", task),
            Message::TodoUpdated(task) => format!("Task '{}' updated.", task),
            Message::TodoRescheduled(task, due) => format!("Recurring task '{}' scheduled again for {}.", task, due),
            Message::TodoDeleted(task) => format!("Task '{}' deleted.", task),
            Message::TodoStatusUpdated(task, status) => format!("Task '{}' is now {}.", task, status),
            Message::TodoNotFound(id) => format!("Todo with ID {} not found.", id),
            Message::NoTodosFound => "No todos found.".to_string(),
            Message::TodosHeader => "Your todos:".to_string(),
            Message::ConfirmDeleteTodo(task) => format!("Delete task '{}'?", task),
            Message::NoTodosMatchingQuery(query) => format!("No todos matching '{}'.", query),

            // === TIMETRACK MESSAGES ===
            Message::SheetCreated(name) => format!("Created new timesheet '{}'.", name),
            Message::SheetSwitched(name) => format!("Switched to timesheet '{}'.", name),
            Message::SheetNotFound(name) => format!("Timesheet '{}' not found.", name),
            Message::NoSheets => "No timesheets created yet. Use 'tempo timetrack sheet <name>' to create one.".to_string(),
            Message::NoCurrentSheet => "No current timesheet selected. Use 'tempo timetrack sheet <name>' first.".to_string(),
            Message::CheckedIn(sheet) => format!("Checked into timesheet '{}'.", sheet),
            Message::CheckedOut(sheet, duration) => format!("Checked out of timesheet '{}' after {}.", sheet, duration),
            Message::NoRunningEntry(sheet) => format!("No running entry in timesheet '{}'.", sheet),
            Message::RunningEntryExists(sheet) => format!("Timesheet '{}' already has a running entry. Checking in will start another.", sheet),
            Message::TimesheetHeader(sheet) => format!("Entries for timesheet '{}':", sheet),
            Message::NoEntriesForSheet(sheet) => format!("No entries recorded in timesheet '{}'.", sheet),
            Message::SheetsHeader => "Timesheets:".to_string(),
            Message::RunningEntriesHeader => "Running entries:".to_string(),
            Message::NoRunningEntries => "No running entries on any timesheet.".to_string(),

            // === LEARNING MESSAGES ===
            Message::ProblemAdded(name, platform) => format!("Problem '{}' ({}) added to the learning tracker.", name, platform),
            Message::ProblemUpdated(name) => format!("Problem '{}' updated.", name),
            Message::ProblemNotFound(name) => format!("Problem '{}' not found.", name),
            Message::NoProblemsFound => "No problems found matching your criteria.".to_string(),
            Message::ProblemsHeader => "Your coding problems:".to_string(),
            Message::LearningStatsHeader => "Learning progress:".to_string(),
            Message::OpeningProblem(url) => format!("Opening {} in your browser...", url),
            Message::ProblemMissingUrl(name) => format!("Problem '{}' has no URL recorded.", name),
            Message::ProblemAdditionCancelled => "Problem addition cancelled.".to_string(),

            // === DASHBOARD MESSAGES ===
            Message::DashboardHeader(week) => format!("Weekly dashboard ({})", week),
            Message::DashboardOpenTodos(count) => format!("Open todos: {}", count),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::PromptDefaultSessionMinutes => "Default focus session length (minutes)".to_string(),
            Message::PromptBreakEvery => "Take a break every N minutes (0 for no breaks)".to_string(),
            Message::PromptBreakDuration => "Break length (minutes)".to_string(),
            Message::PromptNotificationsEnabled => "Show a desktop notification when a session completes?".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::InvalidDateFormat(input) => format!("Could not parse date '{}'. Use YYYY-MM-DD or 'today'.", input),
            Message::InvalidTimeFormat(input) => format!("Could not parse time '{}'. Use 'YYYY-MM-DD HH:MM' or 'HH:MM'.", input),
        };

        write!(f, "{}", text)
    }
}
