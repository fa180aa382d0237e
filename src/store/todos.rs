//! Todo record store.
//!
//! Todos are prioritized, optionally recurring tasks with a lifecycle of
//! pending -> in-progress -> done. Records live in one JSON file; all
//! filtering is linear over the loaded collection.

use crate::libs::error::Error;
use crate::store::record::RecordStore;
use chrono::{Duration, Local, Months, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const TODOS_FILE_NAME: &str = "todos.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Pending,
    InProgress,
    Done,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pending => write!(f, "pending"),
            Status::InProgress => write!(f, "in-progress"),
            Status::Done => write!(f, "done"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recurrence::Daily => write!(f, "daily"),
            Recurrence::Weekly => write!(f, "weekly"),
            Recurrence::Monthly => write!(f, "monthly"),
        }
    }
}

impl Recurrence {
    /// Next occurrence after `from`.
    pub fn next_after(&self, from: NaiveDate) -> NaiveDate {
        match self {
            Recurrence::Daily => from + Duration::days(1),
            Recurrence::Weekly => from + Duration::days(7),
            Recurrence::Monthly => from.checked_add_months(Months::new(1)).unwrap_or(from),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub task: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub status: Status,
    pub date_added: NaiveDate,
    pub date_completed: Option<NaiveDate>,
    pub recurrence: Option<Recurrence>,
}

#[derive(Debug, Clone)]
pub enum TodoFilter {
    All,
    Open,
    Done,
    Status(Status),
}

pub struct Todos {
    store: RecordStore<Vec<Todo>>,
}

impl Todos {
    pub fn new() -> Result<Self, Error> {
        Ok(Todos {
            store: RecordStore::new(TODOS_FILE_NAME)?,
        })
    }

    /// Adds a todo and returns it with its assigned ID.
    pub fn insert(&self, task: &str, priority: Priority, due_date: Option<NaiveDate>, recurrence: Option<Recurrence>) -> Result<Todo, Error> {
        let mut todos = self.store.load()?;
        let id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let todo = Todo {
            id,
            task: task.to_string(),
            priority,
            due_date,
            status: Status::Pending,
            date_added: Local::now().date_naive(),
            date_completed: None,
            recurrence,
        };
        todos.push(todo.clone());
        self.store.save(&todos)?;
        Ok(todo)
    }

    pub fn fetch(&self, filter: TodoFilter) -> Result<Vec<Todo>, Error> {
        let todos = self.store.load()?;
        Ok(todos
            .into_iter()
            .filter(|t| match &filter {
                TodoFilter::All => true,
                TodoFilter::Open => t.status != Status::Done,
                TodoFilter::Done => t.status == Status::Done,
                TodoFilter::Status(status) => t.status == *status,
            })
            .collect())
    }

    pub fn get_by_id(&self, id: u64) -> Result<Option<Todo>, Error> {
        Ok(self.store.load()?.into_iter().find(|t| t.id == id))
    }

    /// Marks a todo done, stamping the completion date. A recurring todo
    /// respawns as a fresh pending todo due at its next occurrence; the
    /// respawn is returned alongside the completed record. Returns `None`
    /// when the ID does not exist.
    pub fn complete(&self, id: u64) -> Result<Option<(Todo, Option<Todo>)>, Error> {
        let mut todos = self.store.load()?;
        let completed = match todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.status = Status::Done;
                todo.date_completed = Some(Local::now().date_naive());
                Some(todo.clone())
            }
            None => return Ok(None),
        };

        let respawned = completed.as_ref().and_then(|done| {
            done.recurrence.map(|recurrence| {
                let today = Local::now().date_naive();
                // Overdue recurring todos reschedule from today, not the
                // missed due date.
                let base = done.due_date.unwrap_or(today).max(today);
                let todo = Todo {
                    id: todos.iter().map(|t| t.id).max().unwrap_or(0) + 1,
                    task: done.task.clone(),
                    priority: done.priority,
                    due_date: Some(recurrence.next_after(base)),
                    status: Status::Pending,
                    date_added: today,
                    date_completed: None,
                    recurrence: Some(recurrence),
                };
                todos.push(todo.clone());
                todo
            })
        });

        self.store.save(&todos)?;
        Ok(completed.map(|done| (done, respawned)))
    }

    /// Edits the given fields of a todo, leaving `None` fields untouched.
    /// Returns the updated record, or `None` when the ID does not exist.
    pub fn edit(
        &self,
        id: u64,
        task: Option<String>,
        priority: Option<Priority>,
        due_date: Option<NaiveDate>,
        recurrence: Option<Recurrence>,
    ) -> Result<Option<Todo>, Error> {
        self.update(id, |todo| {
            if let Some(task) = task {
                todo.task = task;
            }
            if let Some(priority) = priority {
                todo.priority = priority;
            }
            if let Some(due_date) = due_date {
                todo.due_date = Some(due_date);
            }
            if let Some(recurrence) = recurrence {
                todo.recurrence = Some(recurrence);
            }
        })
    }

    /// Sets an explicit status; leaving `Done` clears the completion date.
    pub fn set_status(&self, id: u64, status: Status) -> Result<Option<Todo>, Error> {
        self.update(id, |todo| {
            todo.status = status;
            todo.date_completed = match status {
                Status::Done => Some(Local::now().date_naive()),
                _ => None,
            };
        })
    }

    /// Removes a todo. Returns the deleted record when the ID existed.
    pub fn delete(&self, id: u64) -> Result<Option<Todo>, Error> {
        let mut todos = self.store.load()?;
        let pos = todos.iter().position(|t| t.id == id);
        let removed = pos.map(|p| todos.remove(p));
        if removed.is_some() {
            self.store.save(&todos)?;
        }
        Ok(removed)
    }

    /// Case-insensitive substring search over task text.
    pub fn search(&self, query: &str) -> Result<Vec<Todo>, Error> {
        let needle = query.to_lowercase();
        let todos = self.store.load()?;
        Ok(todos.into_iter().filter(|t| t.task.to_lowercase().contains(&needle)).collect())
    }

    fn update(&self, id: u64, mutate: impl FnOnce(&mut Todo)) -> Result<Option<Todo>, Error> {
        let mut todos = self.store.load()?;
        let updated = match todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                mutate(todo);
                Some(todo.clone())
            }
            None => None,
        };
        if updated.is_some() {
            self.store.save(&todos)?;
        }
        Ok(updated)
    }
}
