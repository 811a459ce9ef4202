//! Note commands: the journal attached to each task.
//!
//! Adding a note marks the task as touched, so `note add` is also the
//! lightweight way to pull a task back to the top of `resume` without
//! editing any of its fields.

use crate::db::notes::Notes;
use crate::libs::config::Config;
use crate::libs::error::StoreError;
use crate::libs::messages::Message;
use crate::libs::note::NoteKind;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct NoteArgs {
    #[command(subcommand)]
    command: Option<NoteCommand>,
}

#[derive(Debug, Subcommand)]
enum NoteCommand {
    /// Add a note to a task
    Add {
        /// Task ID
        task_id: Option<i32>,
        /// Note text
        content: Option<String>,
        /// What the note records
        #[arg(short, long, value_enum)]
        kind: Option<NoteKind>,
    },
    /// List a task's notes, newest first
    List {
        /// Task ID
        task_id: i32,
        /// How many notes to show
        #[arg(short, long)]
        limit: Option<u32>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a note
    Delete {
        /// Note ID
        id: i32,
    },
}

pub fn cmd(args: NoteArgs) -> Result<()> {
    match args.command {
        Some(NoteCommand::Add { task_id, content, kind }) => handle_add(task_id, content, kind),
        Some(NoteCommand::List { task_id, limit, json }) => handle_list(task_id, limit, json),
        Some(NoteCommand::Delete { id }) => handle_delete(id),
        None => handle_interactive(),
    }
}

fn handle_add(task_id: Option<i32>, content: Option<String>, kind: Option<NoteKind>) -> Result<()> {
    let task_id = match task_id {
        Some(task_id) => task_id,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptNoteTaskId.to_string())
            .interact_text()?,
    };
    let content: String = match content {
        Some(content) => content,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptNoteContent.to_string())
            .interact_text()?,
    };

    let mut notes = Notes::new()?;
    match notes.create(task_id, &content, kind.unwrap_or(NoteKind::Note)) {
        Ok(_) => {
            msg_success!(Message::NoteAdded(task_id));
            Ok(())
        }
        Err(StoreError::TaskNotFound(_)) => {
            msg_error!(Message::TaskNotFoundWithId(task_id));
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn handle_list(task_id: i32, limit: Option<u32>, json: bool) -> Result<()> {
    let limit = match limit {
        Some(limit) => limit,
        None => Config::read()?.note_limit(),
    };

    let notes = Notes::new()?.list(task_id, limit)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&notes)?);
        return Ok(());
    }

    if notes.is_empty() {
        msg_info!(Message::NoNotesFound);
        return Ok(());
    }

    msg_print!(Message::NotesHeader(task_id), true);
    View::notes(&notes)?;
    Ok(())
}

fn handle_delete(id: i32) -> Result<()> {
    let mut notes = Notes::new()?;

    if notes.get_by_id(id)?.is_none() {
        msg_error!(Message::NoteNotFoundWithId(id));
        return Ok(());
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteNote(id).to_string())
        .default(false)
        .interact()?;

    if confirmed {
        notes.delete(id)?;
        msg_success!(Message::NoteDeleted(id));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

fn handle_interactive() -> Result<()> {
    let options = vec!["Add note", "List notes", "Delete note"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectNoteAction.to_string())
        .items(&options)
        .interact()?;

    match selection {
        0 => handle_add(None, None, None),
        1 => {
            let task_id = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptNoteTaskId.to_string())
                .interact_text()?;
            handle_list(task_id, None, false)
        }
        2 => {
            let id = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptNoteId.to_string())
                .interact_text()?;
            handle_delete(id)
        }
        _ => Ok(()),
    }
}
