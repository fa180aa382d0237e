//! Learning tracker command.

use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::store::problems::{parse_tags, Difficulty, ProblemFilter, Problems, SolveStatus};
use crate::{msg_bail_anyhow, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Subcommand)]
enum LearningCommand {
    /// Add a coding problem to track
    Add {
        /// Direct URL to the problem
        #[arg(short, long)]
        url: String,
        /// Problem name or title
        #[arg(short, long)]
        name: String,
        /// Platform the problem lives on (e.g. LeetCode)
        #[arg(short, long)]
        platform: String,
        /// Problem difficulty
        #[arg(short, long, value_enum, default_value = "unspecified")]
        difficulty: Difficulty,
        /// Current solve status
        #[arg(short, long, value_enum, default_value = "unsolved")]
        status: SolveStatus,
        /// Personal notes about the solution or concepts
        #[arg(long, default_value = "")]
        notes: String,
        /// Comma-separated tags (e.g. "arrays,dp")
        #[arg(short, long, default_value = "")]
        tags: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// List tracked problems
    List {
        /// Filter by platform
        #[arg(short, long)]
        platform: Option<String>,
        /// Filter by solve status
        #[arg(short, long, value_enum)]
        status: Option<SolveStatus>,
        /// Filter by tag
        #[arg(short, long)]
        tag: Option<String>,
    },
    /// Update a tracked problem by name
    Update {
        /// Problem name
        name: String,
        /// New solve status
        #[arg(long, value_enum)]
        status: Option<SolveStatus>,
        /// New difficulty
        #[arg(long, value_enum)]
        difficulty: Option<Difficulty>,
        /// Replacement notes
        #[arg(long)]
        notes: Option<String>,
        /// Replacement comma-separated tags
        #[arg(long)]
        tags: Option<String>,
    },
    /// Open a problem's URL in the browser
    Open {
        /// Problem name
        name: String,
    },
    /// Show learning statistics
    Stats,
}

#[derive(Debug, Args)]
pub struct LearningArgs {
    #[command(subcommand)]
    command: LearningCommand,
}

pub fn cmd(args: LearningArgs) -> Result<()> {
    let problems = Problems::new()?;

    match args.command {
        LearningCommand::Add {
            url,
            name,
            platform,
            difficulty,
            status,
            notes,
            tags,
            yes,
        } => {
            let confirmed = yes
                || Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(format!("Add problem '{}' ({})?", name, platform))
                    .default(true)
                    .interact()?;
            if !confirmed {
                msg_info!(Message::ProblemAdditionCancelled);
                return Ok(());
            }
            let problem = problems.insert(&platform, &url, &name, difficulty, status, &notes, parse_tags(&tags))?;
            msg_success!(Message::ProblemAdded(problem.name, problem.platform));
        }
        LearningCommand::List { platform, status, tag } => {
            let list = problems.fetch(ProblemFilter { platform, status, tag })?;
            if list.is_empty() {
                msg_info!(Message::NoProblemsFound);
            } else {
                msg_print!(Message::ProblemsHeader);
                View::problems(&list)?;
            }
        }
        LearningCommand::Update {
            name,
            status,
            difficulty,
            notes,
            tags,
        } => {
            let tags = tags.map(|t| parse_tags(&t));
            match problems.update_by_name(&name, status, difficulty, notes, tags)? {
                Some(problem) => msg_success!(Message::ProblemUpdated(problem.name)),
                None => msg_bail_anyhow!(Message::ProblemNotFound(name)),
            }
        }
        LearningCommand::Open { name } => {
            let problem = match problems.find_by_name(&name)? {
                Some(problem) => problem,
                None => msg_bail_anyhow!(Message::ProblemNotFound(name)),
            };
            if problem.url.is_empty() {
                msg_bail_anyhow!(Message::ProblemMissingUrl(problem.name));
            }
            msg_print!(Message::OpeningProblem(problem.url.clone()));
            open::that(problem.url)?;
        }
        LearningCommand::Stats => {
            msg_print!(Message::LearningStatsHeader);
            View::problem_stats(&problems.stats()?)?;
        }
    }

    Ok(())
}
