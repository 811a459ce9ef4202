use super::note::Note;
use super::project::Project;
use super::task::Task;
use anyhow::Result;
use chrono::NaiveDateTime;
use prettytable::{row, Table};

/// Longest content shown in table cells before truncation.
const CELL_MAX_LEN: usize = 60;

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "STATUS", "PRIORITY", "PROJECT", "TOUCHED"]);
        for task in tasks {
            table.add_row(row![
                task.id.unwrap_or(0),
                clip(&task.title),
                task.status,
                task.priority,
                task.project.as_deref().unwrap_or("-"),
                stamp(task.last_touched_at)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn task(task: &Task) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", task.id.unwrap_or(0)]);
        table.add_row(row!["TITLE", task.title]);
        table.add_row(row!["DESCRIPTION", clip(&task.description)]);
        table.add_row(row!["STATUS", task.status]);
        table.add_row(row!["NEXT ACTION", clip(&task.next_action)]);
        table.add_row(row!["PRIORITY", task.priority]);
        table.add_row(row!["PROJECT", task.project.as_deref().unwrap_or("-")]);
        table.add_row(row!["CREATED", stamp(task.created_at)]);
        table.add_row(row!["UPDATED", stamp(task.updated_at)]);
        table.add_row(row!["TOUCHED", stamp(task.last_touched_at)]);
        table.printstd();

        Ok(())
    }

    pub fn notes(notes: &[Note]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "KIND", "CONTENT", "CREATED"]);
        for note in notes {
            table.add_row(row![note.id.unwrap_or(0), note.kind, clip(&note.content), stamp(note.created_at)]);
        }
        table.printstd();

        Ok(())
    }

    pub fn projects(projects: &[Project]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "CREATED"]);
        for project in projects {
            table.add_row(row![project.id.unwrap_or(0), project.name, stamp(project.created_at)]);
        }
        table.printstd();

        Ok(())
    }
}

fn stamp(ts: Option<NaiveDateTime>) -> String {
    ts.map(|t| t.format("%Y-%m-%d %H:%M").to_string()).unwrap_or_else(|| "-".to_string())
}

fn clip(text: &str) -> String {
    let text = text.replace('\n', " ");
    if text.chars().count() <= CELL_MAX_LEN {
        text
    } else {
        let cut: String = text.chars().take(CELL_MAX_LEN).collect();
        format!("{}…", cut)
    }
}
