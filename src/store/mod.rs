//! Flat-file record stores, one JSON document per module.

pub mod focus_stats;
pub mod problems;
pub mod record;
pub mod timesheet;
pub mod todos;
