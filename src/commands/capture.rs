//! One-line task capture.
//!
//! The fastest way into the journal: `worklog capture "title"` records a
//! task with sensible defaults, and a bare `worklog capture` walks through
//! the fields interactively. A configured default project is applied when
//! none is passed.

use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::NewTask;
use crate::libs::view::View;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct CaptureArgs {
    /// Task title; prompts interactively when omitted
    title: Option<String>,
    /// Longer context, also journaled as a snapshot note
    #[arg(short, long)]
    description: Option<String>,
    /// Concrete next step to take on the task
    #[arg(short, long)]
    next_action: Option<String>,
    /// Priority, lower means more urgent
    #[arg(long)]
    priority: Option<i32>,
    /// Project name, created on first use
    #[arg(short, long)]
    project: Option<String>,
}

pub fn cmd(args: CaptureArgs) -> Result<()> {
    let config = Config::read()?;

    let mut new_task = match args.title {
        Some(title) => {
            let mut new_task = NewTask::new(&title);
            new_task.project = config.default_project();
            new_task
        }
        // The prompt already offers the configured default, so a field the
        // user cleared stays cleared.
        None => prompt_task(&config)?,
    };

    if let Some(description) = args.description {
        new_task.description = description;
    }
    if let Some(next_action) = args.next_action {
        new_task.next_action = next_action;
    }
    if let Some(priority) = args.priority {
        new_task.priority = priority;
    }
    if let Some(project) = args.project {
        new_task.project = Some(project);
    }

    let mut tasks = Tasks::new()?;
    let task = tasks.create(&new_task)?;

    msg_success!(Message::CaptureSaved(task.id.unwrap_or(0)));
    View::task(&task)?;

    Ok(())
}

/// Walks through the capture fields interactively.
fn prompt_task(config: &Config) -> Result<NewTask> {
    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptCaptureTitle.to_string())
        .interact_text()?;

    let mut new_task = NewTask::new(&title);

    new_task.description = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptCaptureDescription.to_string())
        .allow_empty(true)
        .interact_text()?;

    new_task.next_action = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptCaptureNextAction.to_string())
        .allow_empty(true)
        .interact_text()?;

    let project: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptCaptureProject.to_string())
        .default(config.default_project().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    if !project.trim().is_empty() {
        new_task.project = Some(project);
    }

    Ok(new_task)
}
