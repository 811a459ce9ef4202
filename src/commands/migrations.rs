//! Schema inspection commands for development builds.
//!
//! Compiled only with debug assertions. Release binaries migrate on first
//! touch and expose nothing else, so this whole module disappears from
//! them.

#[cfg(debug_assertions)]
use crate::db::db::Db;
#[cfg(debug_assertions)]
use crate::db::migrations::{get_db_version, needs_migration, MigrationManager};
#[cfg(debug_assertions)]
use crate::libs::messages::Message;
#[cfg(debug_assertions)]
use crate::{msg_info, msg_print, msg_warning};
#[cfg(debug_assertions)]
use anyhow::Result;
#[cfg(debug_assertions)]
use clap::{Args, Subcommand};

#[cfg(debug_assertions)]
#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[cfg(debug_assertions)]
#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Show the schema version and whether migrations are pending
    Status,
    /// List applied migrations with timestamps
    History,
}

#[cfg(debug_assertions)]
pub fn cmd(args: MigrationsArgs) -> Result<()> {
    // Opened without migrating so the commands report the state as-is
    // instead of silently fixing it first.
    let db = Db::new_without_migrations()?;

    match args.command {
        MigrationsCommand::Status => handle_status(&db),
        MigrationsCommand::History => handle_history(&db),
    }
}

#[cfg(debug_assertions)]
fn handle_status(db: &Db) -> Result<()> {
    msg_print!(Message::DatabaseVersion(get_db_version(&db.conn)?));

    if needs_migration(&db.conn)? {
        msg_warning!(Message::DatabaseNeedsUpdate);
    } else {
        msg_info!(Message::DatabaseUpToDate);
    }

    Ok(())
}

#[cfg(debug_assertions)]
fn handle_history(db: &Db) -> Result<()> {
    // A database nothing has touched yet has no tracking table to list.
    if get_db_version(&db.conn)? == 0 {
        msg_info!(Message::DatabaseVersion(0));
        return Ok(());
    }

    let history = MigrationManager::new().get_migration_history(&db.conn)?;

    msg_print!(Message::MigrationHistory, true);
    for (version, name, applied_at) in history {
        println!("  v{}: {} (applied: {})", version, name, applied_at);
    }

    Ok(())
}
