//! Focus statistics report command.

use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_info;
use crate::msg_print;
use crate::store::focus_stats::{FocusStats, StatsRange};
use anyhow::Result;
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RangeArg {
    Today,
    Week,
    All,
}

impl From<RangeArg> for StatsRange {
    fn from(range: RangeArg) -> Self {
        match range {
            RangeArg::Today => StatsRange::Today,
            RangeArg::Week => StatsRange::Week,
            RangeArg::All => StatsRange::All,
        }
    }
}

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[arg(long, short, value_enum, default_value = "today", help = "Reporting range")]
    range: RangeArg,
}

pub fn cmd(args: StatsArgs) -> Result<()> {
    let range: StatsRange = args.range.into();
    let entries = FocusStats::new()?.report(range)?;

    if entries.is_empty() {
        msg_info!(Message::NoFocusSessions(range.label().to_string()));
        return Ok(());
    }

    msg_print!(Message::FocusStatsHeader(range.label().to_string()), true);
    View::focus_stats(&entries)?;

    Ok(())
}
