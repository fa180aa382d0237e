//! Timesheet record store.
//!
//! Sheets group check-in/check-out entries. The whole module persists as a
//! single JSON document holding the sheets, their entries, and the name of
//! the currently selected sheet. An entry with no end time is "running";
//! its duration is measured against the clock at read time.

use crate::libs::error::Error;
use crate::store::record::RecordStore;
use chrono::{Duration, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub const TIMESHEET_FILE_NAME: &str = "timesheet.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: u64,
    pub sheet_id: u64,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub note: Option<String>,
}

impl Entry {
    /// Elapsed time, against the current clock while still running.
    pub fn duration(&self) -> Duration {
        let end = self.end.unwrap_or_else(|| Local::now().naive_local());
        end - self.start
    }

    pub fn is_running(&self) -> bool {
        self.end.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimesheetData {
    pub sheets: Vec<Sheet>,
    pub entries: Vec<Entry>,
    pub current_sheet: Option<String>,
}

pub struct Timesheet {
    store: RecordStore<TimesheetData>,
}

impl Timesheet {
    pub fn new() -> Result<Self, Error> {
        Ok(Timesheet {
            store: RecordStore::new(TIMESHEET_FILE_NAME)?,
        })
    }

    /// Switches to `name`, creating the sheet first if necessary.
    /// Returns the sheet and whether it was newly created.
    pub fn select_sheet(&self, name: &str) -> Result<(Sheet, bool), Error> {
        let mut data = self.store.load()?;
        let (sheet, created) = match data.sheets.iter().find(|s| s.name == name) {
            Some(sheet) => (sheet.clone(), false),
            None => {
                let sheet = Sheet {
                    id: data.sheets.iter().map(|s| s.id).max().unwrap_or(0) + 1,
                    name: name.to_string(),
                };
                data.sheets.push(sheet.clone());
                (sheet, true)
            }
        };
        data.current_sheet = Some(name.to_string());
        self.store.save(&data)?;
        Ok((sheet, created))
    }

    pub fn sheets(&self) -> Result<Vec<Sheet>, Error> {
        Ok(self.store.load()?.sheets)
    }

    pub fn current_sheet(&self) -> Result<Option<Sheet>, Error> {
        let data = self.store.load()?;
        let current = match data.current_sheet {
            Some(name) => data.sheets.into_iter().find(|s| s.name == name),
            None => None,
        };
        Ok(current)
    }

    pub fn sheet_by_name(&self, name: &str) -> Result<Option<Sheet>, Error> {
        Ok(self.store.load()?.sheets.into_iter().find(|s| s.name == name))
    }

    /// Starts a new entry in the given sheet.
    pub fn check_in(&self, sheet_id: u64, start: NaiveDateTime, note: Option<String>) -> Result<Entry, Error> {
        let mut data = self.store.load()?;
        let entry = Entry {
            id: data.entries.iter().map(|e| e.id).max().unwrap_or(0) + 1,
            sheet_id,
            start,
            end: None,
            note,
        };
        data.entries.push(entry.clone());
        self.store.save(&data)?;
        Ok(entry)
    }

    /// Closes the most recently started running entry in the sheet.
    /// Returns the closed entry, or `None` when nothing was running.
    pub fn check_out(&self, sheet_id: u64, end: NaiveDateTime) -> Result<Option<Entry>, Error> {
        let mut data = self.store.load()?;
        let closed = data
            .entries
            .iter_mut()
            .filter(|e| e.sheet_id == sheet_id && e.end.is_none())
            .max_by_key(|e| e.start)
            .map(|entry| {
                entry.end = Some(end);
                entry.clone()
            });
        if closed.is_some() {
            self.store.save(&data)?;
        }
        Ok(closed)
    }

    pub fn entries(&self, sheet_id: u64) -> Result<Vec<Entry>, Error> {
        let mut entries: Vec<Entry> = self.store.load()?.entries.into_iter().filter(|e| e.sheet_id == sheet_id).collect();
        entries.sort_by_key(|e| e.start);
        Ok(entries)
    }

    pub fn running_entries(&self, sheet_id: u64) -> Result<Vec<Entry>, Error> {
        Ok(self
            .store
            .load()?
            .entries
            .into_iter()
            .filter(|e| e.sheet_id == sheet_id && e.is_running())
            .collect())
    }

    /// All entries across all sheets, for the dashboard.
    pub fn all_entries(&self) -> Result<Vec<Entry>, Error> {
        Ok(self.store.load()?.entries)
    }

    /// Running entries across all sheets, paired with their sheet.
    pub fn all_running(&self) -> Result<Vec<(Sheet, Entry)>, Error> {
        let data = self.store.load()?;
        Ok(data
            .entries
            .iter()
            .filter(|e| e.is_running())
            .filter_map(|e| data.sheets.iter().find(|s| s.id == e.sheet_id).map(|s| (s.clone(), e.clone())))
            .collect())
    }
}
