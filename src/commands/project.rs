//! Project commands.

use crate::db::projects::Projects;
use crate::libs::messages::Message;
use crate::libs::project::Project;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct ProjectArgs {
    #[command(subcommand)]
    command: Option<ProjectCommand>,
}

#[derive(Debug, Subcommand)]
enum ProjectCommand {
    /// Create a project
    New {
        /// Project name
        name: Option<String>,
    },
    /// List projects, newest first
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a project along with its tasks and their notes
    Delete {
        /// Project name
        name: String,
    },
}

pub fn cmd(args: ProjectArgs) -> Result<()> {
    match args.command {
        Some(ProjectCommand::New { name }) => handle_new(name),
        Some(ProjectCommand::List { json }) => handle_list(json),
        Some(ProjectCommand::Delete { name }) => handle_delete(name),
        None => handle_interactive(),
    }
}

fn handle_new(name: Option<String>) -> Result<()> {
    let name: String = match name {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptProjectName.to_string())
            .interact_text()?,
    };

    let project = Projects::new()?.create(&name)?;

    msg_success!(Message::ProjectCreated(project.name));
    Ok(())
}

fn handle_list(json: bool) -> Result<()> {
    let projects = Projects::new()?.list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
        return Ok(());
    }

    if projects.is_empty() {
        msg_info!(Message::NoProjectsFound);
        return Ok(());
    }

    msg_print!(Message::ProjectsHeader, true);
    View::projects(&projects)?;
    Ok(())
}

fn handle_delete(name: String) -> Result<()> {
    let projects_db = Projects::new()?;

    let project = match projects_db.get_by_name(&name)? {
        Some(project) => project,
        None => {
            msg_error!(Message::ProjectNotFound(name));
            return Ok(());
        }
    };

    let id = project.id.unwrap_or(0);
    let task_count = projects_db.task_count(id)?;

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteProject(project.name.clone(), task_count as usize).to_string())
        .default(false)
        .interact()?;

    if confirmed {
        projects_db.delete(id)?;
        msg_success!(Message::ProjectDeleted(project.name));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

fn handle_interactive() -> Result<()> {
    let options = vec!["New project", "List projects", "Delete project"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectProjectAction.to_string())
        .items(&options)
        .interact()?;

    match selection {
        0 => handle_new(None),
        1 => handle_list(false),
        2 => {
            let projects: Vec<Project> = Projects::new()?.list()?;
            if projects.is_empty() {
                msg_info!(Message::NoProjectsFound);
                return Ok(());
            }

            let names: Vec<String> = projects.iter().map(|p| p.name.clone()).collect();
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptProjectName.to_string())
                .items(&names)
                .interact()?;
            handle_delete(names[selection].clone())
        }
        _ => Ok(()),
    }
}
