//! Learning tracker record store.
//!
//! Each record is a coding problem with its platform, difficulty, solve
//! status, free-form notes, and tags. Filters are linear over the loaded
//! collection, matching platform and status case-insensitively.

use crate::libs::error::Error;
use crate::store::record::RecordStore;
use chrono::{Local, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const PROBLEMS_FILE_NAME: &str = "problems.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Unspecified,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
            Difficulty::Unspecified => write!(f, "unspecified"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SolveStatus {
    Unsolved,
    Attempted,
    Solved,
    Revisit,
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveStatus::Unsolved => write!(f, "unsolved"),
            SolveStatus::Attempted => write!(f, "attempted"),
            SolveStatus::Solved => write!(f, "solved"),
            SolveStatus::Revisit => write!(f, "revisit"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub id: u64,
    pub platform: String,
    pub url: String,
    pub name: String,
    pub difficulty: Difficulty,
    pub status: SolveStatus,
    pub notes: String,
    pub tags: Vec<String>,
    pub added_date: NaiveDate,
}

/// Linear filter over the problem collection. All fields are conjunctive.
#[derive(Debug, Clone, Default)]
pub struct ProblemFilter {
    pub platform: Option<String>,
    pub status: Option<SolveStatus>,
    pub tag: Option<String>,
}

/// Aggregated counts for `tempo learning stats`.
#[derive(Debug, Default)]
pub struct ProblemStats {
    pub total: usize,
    pub solved: usize,
    pub attempted: usize,
    pub revisit: usize,
    pub unsolved: usize,
    pub by_platform: BTreeMap<String, usize>,
}

pub struct Problems {
    store: RecordStore<Vec<Problem>>,
}

impl Problems {
    pub fn new() -> Result<Self, Error> {
        Ok(Problems {
            store: RecordStore::new(PROBLEMS_FILE_NAME)?,
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn insert(
        &self,
        platform: &str,
        url: &str,
        name: &str,
        difficulty: Difficulty,
        status: SolveStatus,
        notes: &str,
        tags: Vec<String>,
    ) -> Result<Problem, Error> {
        let mut problems = self.store.load()?;
        let problem = Problem {
            id: problems.iter().map(|p| p.id).max().unwrap_or(0) + 1,
            platform: platform.to_string(),
            url: url.to_string(),
            name: name.to_string(),
            difficulty,
            status,
            notes: notes.to_string(),
            tags,
            added_date: Local::now().date_naive(),
        };
        problems.push(problem.clone());
        self.store.save(&problems)?;
        Ok(problem)
    }

    pub fn fetch(&self, filter: ProblemFilter) -> Result<Vec<Problem>, Error> {
        let problems = self.store.load()?;
        Ok(problems
            .into_iter()
            .filter(|p| {
                filter.platform.as_ref().map_or(true, |pl| p.platform.eq_ignore_ascii_case(pl))
                    && filter.status.map_or(true, |s| p.status == s)
                    && filter
                        .tag
                        .as_ref()
                        .map_or(true, |tag| p.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)))
            })
            .collect())
    }

    /// Finds a problem by name, case-insensitively.
    pub fn find_by_name(&self, name: &str) -> Result<Option<Problem>, Error> {
        Ok(self.store.load()?.into_iter().find(|p| p.name.eq_ignore_ascii_case(name)))
    }

    /// Updates a problem by name. Returns the updated record, or `None`
    /// when no problem matches.
    pub fn update_by_name(
        &self,
        name: &str,
        status: Option<SolveStatus>,
        difficulty: Option<Difficulty>,
        notes: Option<String>,
        tags: Option<Vec<String>>,
    ) -> Result<Option<Problem>, Error> {
        let mut problems = self.store.load()?;
        let updated = match problems.iter_mut().find(|p| p.name.eq_ignore_ascii_case(name)) {
            Some(problem) => {
                if let Some(status) = status {
                    problem.status = status;
                }
                if let Some(difficulty) = difficulty {
                    problem.difficulty = difficulty;
                }
                if let Some(notes) = notes {
                    problem.notes = notes;
                }
                if let Some(tags) = tags {
                    problem.tags = tags;
                }
                Some(problem.clone())
            }
            None => None,
        };
        if updated.is_some() {
            self.store.save(&problems)?;
        }
        Ok(updated)
    }

    pub fn stats(&self) -> Result<ProblemStats, Error> {
        let problems = self.store.load()?;
        let mut stats = ProblemStats {
            total: problems.len(),
            ..Default::default()
        };
        for problem in &problems {
            match problem.status {
                SolveStatus::Solved => stats.solved += 1,
                SolveStatus::Attempted => stats.attempted += 1,
                SolveStatus::Revisit => stats.revisit += 1,
                SolveStatus::Unsolved => stats.unsolved += 1,
            }
            *stats.by_platform.entry(problem.platform.clone()).or_insert(0) += 1;
        }
        Ok(stats)
    }

    /// All problems, for the dashboard.
    pub fn all(&self) -> Result<Vec<Problem>, Error> {
        self.store.load()
    }
}

/// Splits a comma-separated tag string into trimmed, non-empty tags.
pub fn parse_tags(tags: &str) -> Vec<String> {
    tags.split(',').map(|t| t.trim().to_string()).filter(|t| !t.is_empty()).collect()
}
