//! Resume command: pick work back up where it was left.

use crate::db::tasks::Tasks;
use crate::libs::error::StoreError;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ResumeArgs {
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: ResumeArgs) -> Result<()> {
    let resume = match Tasks::new()?.resume() {
        Ok(resume) => resume,
        Err(StoreError::NoActiveTask) => {
            msg_info!(Message::NoActiveTasks);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resume)?);
        return Ok(());
    }

    msg_print!(Message::ResumeHeader, true);
    View::task(&resume.task)?;

    if !resume.latest_notes.is_empty() {
        msg_print!(Message::ResumeNotesHeader(resume.latest_notes.len()), true);
        View::notes(&resume.latest_notes)?;
    }

    Ok(())
}
