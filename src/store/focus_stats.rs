//! Per-day focus statistics store.
//!
//! One entry per calendar day, accumulated by upserting the actual duration
//! of every finished session. Entries are never deleted by the core.

use crate::libs::error::Error;
use crate::store::record::RecordStore;
use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

pub const STATS_FILE_NAME: &str = "focus_stats.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusStatsEntry {
    pub date: NaiveDate,
    pub total_minutes: u64,
}

/// Reporting window for `tempo stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsRange {
    Today,
    Week,
    All,
}

impl StatsRange {
    pub fn label(&self) -> &'static str {
        match self {
            StatsRange::Today => "today",
            StatsRange::Week => "this week",
            StatsRange::All => "all time",
        }
    }
}

pub struct FocusStats {
    store: RecordStore<Vec<FocusStatsEntry>>,
}

impl FocusStats {
    pub fn new() -> Result<Self, Error> {
        Ok(FocusStats {
            store: RecordStore::new(STATS_FILE_NAME)?,
        })
    }

    /// Upserts the entry for `date`, summing minutes into any existing total.
    pub fn record_session(&self, date: NaiveDate, minutes: u64) -> Result<(), Error> {
        let mut entries = self.store.load()?;
        match entries.iter_mut().find(|e| e.date == date) {
            Some(entry) => entry.total_minutes += minutes,
            None => entries.push(FocusStatsEntry { date, total_minutes: minutes }),
        }
        self.store.save(&entries)
    }

    /// Returns entries within `range`, ordered by date ascending.
    pub fn report(&self, range: StatsRange) -> Result<Vec<FocusStatsEntry>, Error> {
        let today = Local::now().date_naive();
        let mut entries: Vec<FocusStatsEntry> = self
            .store
            .load()?
            .into_iter()
            .filter(|e| match range {
                StatsRange::Today => e.date == today,
                StatsRange::Week => e.date >= week_start(today) && e.date <= today,
                StatsRange::All => true,
            })
            .collect();
        entries.sort_by_key(|e| e.date);
        Ok(entries)
    }
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}
