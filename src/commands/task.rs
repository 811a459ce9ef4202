//! Task lifecycle commands.

use crate::db::tasks::Tasks;
use crate::libs::error::StoreError;
use crate::libs::messages::Message;
use crate::libs::task::{NewTask, TaskFilter, TaskPatch, TaskStatus};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: Option<TaskCommand>,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Create a new task
    New {
        /// Task title
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
        /// Initial status
        #[arg(short, long, value_enum)]
        status: Option<TaskStatus>,
        /// Project name, created on first use
        #[arg(short, long)]
        project: Option<String>,
    },
    /// List tasks, most recently touched first
    List {
        /// Only tasks with this status
        #[arg(short, long, value_enum)]
        status: Option<TaskStatus>,
        /// Only tasks in this project
        #[arg(short, long)]
        project: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one task in full
    Show {
        /// Task ID
        id: i32,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Edit task fields
    Edit {
        /// Task ID
        id: i32,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New next step
        #[arg(short, long)]
        next_action: Option<String>,
        /// New priority
        #[arg(long)]
        priority: Option<i32>,
        /// New status
        #[arg(short, long, value_enum)]
        status: Option<TaskStatus>,
        /// New project name; pass an empty string to detach
        #[arg(short, long)]
        project: Option<String>,
    },
    /// Mark a task done, or reopen it when it already is
    Done {
        /// Task ID
        id: i32,
    },
    /// Delete a task along with its notes
    Delete {
        /// Task ID
        id: i32,
    },
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    match args.command {
        Some(TaskCommand::New {
            title,
            description,
            next_action,
            priority,
            status,
            project,
        }) => handle_new(title, description, next_action, priority, status, project),
        Some(TaskCommand::List { status, project, json }) => handle_list(status, project, json),
        Some(TaskCommand::Show { id, json }) => handle_show(id, json),
        Some(TaskCommand::Edit {
            id,
            title,
            description,
            next_action,
            priority,
            status,
            project,
        }) => handle_edit(id, title, description, next_action, priority, status, project),
        Some(TaskCommand::Done { id }) => handle_done(id),
        Some(TaskCommand::Delete { id }) => handle_delete(id),
        None => handle_interactive(),
    }
}

fn handle_new(
    title: Option<String>,
    description: Option<String>,
    next_action: Option<String>,
    priority: Option<i32>,
    status: Option<TaskStatus>,
    project: Option<String>,
) -> Result<()> {
    let title = match title {
        Some(title) => title,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTitle.to_string())
            .interact_text()?,
    };

    let mut new_task = NewTask::new(&title);
    if let Some(description) = description {
        new_task.description = description;
    }
    if let Some(next_action) = next_action {
        new_task.next_action = next_action;
    }
    if let Some(priority) = priority {
        new_task.priority = priority;
    }
    if let Some(status) = status {
        new_task.status = status;
    }
    new_task.project = project;

    let mut tasks = Tasks::new()?;
    let task = tasks.create(&new_task)?;

    msg_success!(Message::TaskCreated(task.id.unwrap_or(0)));
    View::task(&task)?;
    Ok(())
}

fn handle_list(status: Option<TaskStatus>, project: Option<String>, json: bool) -> Result<()> {
    let tasks = Tasks::new()?.list(&TaskFilter { status, project })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&tasks)?;
    Ok(())
}

fn handle_show(id: i32, json: bool) -> Result<()> {
    let task = match Tasks::new()?.get(id) {
        Ok(task) => task,
        Err(StoreError::TaskNotFound(_)) => {
            msg_error!(Message::TaskNotFoundWithId(id));
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&task)?);
        return Ok(());
    }

    msg_print!(Message::TaskDetailsHeader, true);
    View::task(&task)?;
    Ok(())
}

fn handle_edit(
    id: i32,
    title: Option<String>,
    description: Option<String>,
    next_action: Option<String>,
    priority: Option<i32>,
    status: Option<TaskStatus>,
    project: Option<String>,
) -> Result<()> {
    let mut tasks = Tasks::new()?;

    let mut patch = TaskPatch {
        title,
        description,
        next_action,
        priority,
        status,
        project,
    };

    // No flags at all: fall back to an interactive form prefilled with the
    // current values.
    let interactive =
        patch.title.is_none() && patch.description.is_none() && patch.next_action.is_none() && patch.priority.is_none() && patch.status.is_none() && patch.project.is_none();

    if interactive {
        let current = match tasks.get(id) {
            Ok(task) => task,
            Err(StoreError::TaskNotFound(_)) => {
                msg_error!(Message::TaskNotFoundWithId(id));
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        patch.title = Some(
            Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskTitleEdit.to_string())
                .default(current.title)
                .interact_text()?,
        );
        patch.description = Some(
            Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskDescriptionEdit.to_string())
                .default(current.description)
                .allow_empty(true)
                .interact_text()?,
        );
        patch.next_action = Some(
            Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskNextActionEdit.to_string())
                .default(current.next_action)
                .allow_empty(true)
                .interact_text()?,
        );
        patch.priority = Some(
            Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskPriorityEdit.to_string())
                .default(current.priority)
                .interact_text()?,
        );
    }

    let task = match tasks.update(id, &patch) {
        Ok(task) => task,
        Err(StoreError::TaskNotFound(_)) => {
            msg_error!(Message::TaskNotFoundWithId(id));
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    msg_success!(Message::TaskUpdated(id));
    View::task(&task)?;
    Ok(())
}

fn handle_done(id: i32) -> Result<()> {
    let mut tasks = Tasks::new()?;

    let task = match tasks.get(id) {
        Ok(task) => task,
        Err(StoreError::TaskNotFound(_)) => {
            msg_error!(Message::TaskNotFoundWithId(id));
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    // Toggle through the normal update path so the activity clocks move
    let patch = TaskPatch {
        status: Some(if task.status == TaskStatus::Done { TaskStatus::InProgress } else { TaskStatus::Done }),
        ..Default::default()
    };
    let task = tasks.update(id, &patch)?;

    if task.status == TaskStatus::Done {
        msg_success!(Message::TaskCompleted(id));
    } else {
        msg_success!(Message::TaskReopened(id));
    }
    Ok(())
}

fn handle_delete(id: i32) -> Result<()> {
    let mut tasks = Tasks::new()?;

    let task = match tasks.get(id) {
        Ok(task) => task,
        Err(StoreError::TaskNotFound(_)) => {
            msg_error!(Message::TaskNotFoundWithId(id));
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
        .default(false)
        .interact()?;

    if confirmed {
        tasks.delete(id)?;
        msg_success!(Message::TaskDeleted(id));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

fn handle_interactive() -> Result<()> {
    let options = vec!["New task", "List tasks", "Edit task", "Complete task", "Delete task"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectTaskAction.to_string())
        .items(&options)
        .interact()?;

    match selection {
        0 => handle_new(None, None, None, None, None, None),
        1 => handle_list(None, None, false),
        2 => match prompt_task_id()? {
            Some(id) => handle_edit(id, None, None, None, None, None, None),
            None => Ok(()),
        },
        3 => match prompt_task_id()? {
            Some(id) => handle_done(id),
            None => Ok(()),
        },
        4 => match prompt_task_id()? {
            Some(id) => handle_delete(id),
            None => Ok(()),
        },
        _ => Ok(()),
    }
}

/// Lists all tasks and lets the user pick one.
fn prompt_task_id() -> Result<Option<i32>> {
    let tasks = Tasks::new()?.list(&TaskFilter::default())?;

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(None);
    }

    let labels: Vec<String> = tasks.iter().map(|t| format!("#{} {}", t.id.unwrap_or(0), t.title)).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectTask.to_string())
        .items(&labels)
        .interact()?;

    Ok(tasks[selection].id)
}
