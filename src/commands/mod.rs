pub mod dashboard;
pub mod focus;
pub mod init;
pub mod learning;
pub mod stats;
pub mod timetrack;
pub mod todo;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Run a focus session")]
    Focus(focus::FocusArgs),
    #[command(about = "View focus session statistics")]
    Stats(stats::StatsArgs),
    #[command(about = "Manage your todo list", arg_required_else_help = true)]
    Todo(todo::TodoArgs),
    #[command(about = "Track your time across timesheets", arg_required_else_help = true)]
    Timetrack(timetrack::TimetrackArgs),
    #[command(about = "Track coding problems and learning progress", arg_required_else_help = true)]
    Learning(learning::LearningArgs),
    #[command(about = "View the weekly productivity dashboard")]
    Dashboard(dashboard::DashboardArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Focus(args) => focus::cmd(args).await,
            Commands::Stats(args) => stats::cmd(args),
            Commands::Todo(args) => todo::cmd(args),
            Commands::Timetrack(args) => timetrack::cmd(args),
            Commands::Learning(args) => learning::cmd(args),
            Commands::Dashboard(args) => dashboard::cmd(args),
        }
    }
}
