//! Command-line interface definition and dispatch.
//!
//! Each subcommand lives in its own module with its argument struct, a
//! `cmd` entry point, and `handle_*` functions for the individual actions.
//! Subcommands invoked without an action fall back to an interactive menu.

pub mod capture;
pub mod init;
pub mod migrations;
pub mod note;
pub mod project;
pub mod resume;
pub mod task;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Capture a task in one line")]
    Capture(capture::CaptureArgs),
    #[command(about = "Manage tasks")]
    Task(task::TaskArgs),
    #[command(about = "Manage notes attached to tasks")]
    Note(note::NoteArgs),
    #[command(about = "Manage projects")]
    Project(project::ProjectArgs),
    #[command(about = "Show the most recently touched open task")]
    Resume(resume::ResumeArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Database migration management (debug builds only)")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Capture(args) => capture::cmd(args),
            Commands::Task(args) => task::cmd(args),
            Commands::Note(args) => note::cmd(args),
            Commands::Project(args) => project::cmd(args),
            Commands::Resume(args) => resume::cmd(args),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
