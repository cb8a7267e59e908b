//! CLI for the user roster
//!
//! Subcommands mirror the dashboard's consumer actions:
//! - `list`: print the roster, loading it from the source when empty
//! - `refresh`: replace the roster with a fresh batch
//! - `add`: fetch one random user and prepend it
//! - `remove`: drop a record by uid

pub mod roster;

use clap::{Parser, Subcommand};

/// User Roster - reactive record store over a random-user API
#[derive(Parser)]
#[command(name = "user-roster")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the current roster, loading it from the source when empty
    List,

    /// Replace the roster with a fresh batch from the source
    Refresh,

    /// Fetch one random user and prepend it to the roster
    Add,

    /// Remove a record by uid
    Remove(roster::RemoveArgs),
}
