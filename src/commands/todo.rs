//! Todo management command.

use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::store::todos::{Priority, Recurrence, Status, TodoFilter, Todos};
use crate::{msg_bail_anyhow, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Subcommand)]
enum TodoCommand {
    /// Add a new task
    Add {
        /// Task description
        task: String,
        /// Task priority
        #[arg(short, long, value_enum, default_value = "medium")]
        priority: Priority,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
        /// Recurrence pattern
        #[arg(long, value_enum)]
        repeat: Option<Recurrence>,
    },
    /// List tasks (open tasks by default)
    List {
        /// Include completed tasks
        #[arg(long)]
        all: bool,
        /// Filter by status
        #[arg(long, value_enum)]
        status: Option<Status>,
    },
    /// Mark a task as done
    Done {
        /// Task ID
        id: u64,
    },
    /// Edit a task's fields
    Update {
        /// Task ID
        id: u64,
        /// New task description
        #[arg(long)]
        task: Option<String>,
        /// New priority
        #[arg(long, value_enum)]
        priority: Option<Priority>,
        /// New due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
        /// New recurrence pattern
        #[arg(long, value_enum)]
        repeat: Option<Recurrence>,
    },
    /// Set a task's status
    Status {
        /// Task ID
        id: u64,
        /// New status
        #[arg(value_enum)]
        status: Status,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: u64,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Search tasks by text
    Search {
        /// Substring to look for in task descriptions
        query: String,
    },
}

#[derive(Debug, Args)]
pub struct TodoArgs {
    #[command(subcommand)]
    command: TodoCommand,
}

pub fn cmd(args: TodoArgs) -> Result<()> {
    let todos = Todos::new()?;

    match args.command {
        TodoCommand::Add { task, priority, due, repeat } => {
            let due_date = due.as_deref().map(parse_due_date).transpose()?;
            let todo = todos.insert(&task, priority, due_date, repeat)?;
            msg_success!(Message::TodoAdded(todo.task));
        }
        TodoCommand::List { all, status } => {
            let filter = match (all, status) {
                (_, Some(status)) => TodoFilter::Status(status),
                (true, None) => TodoFilter::All,
                (false, None) => TodoFilter::Open,
            };
            let list = todos.fetch(filter)?;
            if list.is_empty() {
                msg_info!(Message::NoTodosFound);
            } else {
                msg_print!(Message::TodosHeader);
                View::todos(&list)?;
            }
        }
        TodoCommand::Done { id } => match todos.complete(id)? {
            Some((todo, respawned)) => {
                msg_success!(Message::TodoCompleted(todo.task));
                if let Some(next) = respawned {
                    let due = next.due_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
                    msg_info!(Message::TodoRescheduled(next.task, due));
                }
            }
            None => msg_bail_anyhow!(Message::TodoNotFound(id)),
        },
        TodoCommand::Update { id, task, priority, due, repeat } => {
            let due_date = due.as_deref().map(parse_due_date).transpose()?;
            match todos.edit(id, task, priority, due_date, repeat)? {
                Some(todo) => msg_success!(Message::TodoUpdated(todo.task)),
                None => msg_bail_anyhow!(Message::TodoNotFound(id)),
            }
        }
        TodoCommand::Status { id, status } => match todos.set_status(id, status)? {
            Some(todo) => msg_success!(Message::TodoStatusUpdated(todo.task, todo.status.to_string())),
            None => msg_bail_anyhow!(Message::TodoNotFound(id)),
        },
        TodoCommand::Delete { id, yes } => {
            let todo = match todos.get_by_id(id)? {
                Some(todo) => todo,
                None => msg_bail_anyhow!(Message::TodoNotFound(id)),
            };
            let confirmed = yes
                || Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmDeleteTodo(todo.task.clone()).to_string())
                    .default(false)
                    .interact()?;
            if !confirmed {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }
            todos.delete(id)?;
            msg_success!(Message::TodoDeleted(todo.task));
        }
        TodoCommand::Search { query } => {
            let matches = todos.search(&query)?;
            if matches.is_empty() {
                msg_info!(Message::NoTodosMatchingQuery(query));
            } else {
                View::todos(&matches)?;
            }
        }
    }

    Ok(())
}

fn parse_due_date(input: &str) -> Result<NaiveDate> {
    if input.eq_ignore_ascii_case("today") {
        return Ok(chrono::Local::now().date_naive());
    }
    match NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(_) => msg_bail_anyhow!(Message::InvalidDateFormat(input.to_string())),
    }
}
