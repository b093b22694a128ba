//! civix - Civic issue triage dashboard
//!
//! Issues and feedback are seeded in memory per invocation; only the
//! staff profile persists between runs.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "civix")]
#[command(about = "Civic issue triage dashboard for municipal staff")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard stat cards
    Dashboard,

    /// List issues
    List {
        /// Filter by status (new, in_progress, completed, rejected)
        #[arg(short, long)]
        status: Option<String>,

        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List distinct issue categories
    Categories,

    /// Show issue details
    Show {
        /// Issue ID
        id: String,
    },

    /// Save staff edits to an issue
    Update {
        /// Issue ID
        id: String,

        /// New status
        #[arg(long)]
        status: Option<String>,

        /// Department to assign
        #[arg(long)]
        assign: Option<String>,

        /// Replace the official notes
        #[arg(long)]
        notes: Option<String>,

        /// Rejection reason (required when moving an issue to rejected)
        #[arg(long)]
        reason: Option<String>,
    },

    /// Move an issue to in-progress
    Acknowledge {
        /// Issue ID
        id: String,
    },

    /// Move an issue to in-progress and route it to a department
    Implement {
        /// Issue ID
        id: String,
    },

    /// Reject an issue with a reason
    Reject {
        /// Issue ID
        id: String,

        /// Rejection reason
        #[arg(short, long)]
        reason: String,
    },

    /// Browse completed issue records
    Records {
        /// Date window (all, today, week, month, year)
        #[arg(short, long, default_value = "all")]
        window: String,
    },

    /// Browse citizen feedback, highest rating first
    Feedback {
        /// Date window (all, today, week, month, year)
        #[arg(short, long, default_value = "all")]
        window: String,

        /// Filter by area
        #[arg(short, long)]
        area: Option<String>,
    },

    /// Show or edit the staff profile
    Profile {
        #[command(subcommand)]
        command: Option<ProfileCommands>,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Show the current profile
    Show,
    /// Update profile fields and persist them
    Set {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        avatar_url: Option<String>,
        #[arg(long)]
        age: Option<u32>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        country: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Dashboard => commands::dashboard(cli.json),
        Commands::List { status, category } => commands::list(status, category, cli.json),
        Commands::Categories => commands::categories(cli.json),
        Commands::Show { id } => commands::show(&id, cli.json),
        Commands::Update {
            id,
            status,
            assign,
            notes,
            reason,
        } => commands::update(&id, status, assign, notes, reason, cli.json),
        Commands::Acknowledge { id } => commands::acknowledge(&id, cli.json),
        Commands::Implement { id } => commands::implement(&id, cli.json),
        Commands::Reject { id, reason } => commands::reject(&id, &reason, cli.json),
        Commands::Records { window } => commands::records(&window, cli.json),
        Commands::Feedback { window, area } => commands::feedback(&window, area, cli.json),
        Commands::Profile { command } => match command {
            Some(ProfileCommands::Set {
                name,
                email,
                avatar_url,
                age,
                department,
                gender,
                state,
                country,
            }) => commands::profile_set(
                commands::ProfileEdit {
                    name,
                    email,
                    avatar_url,
                    age,
                    department,
                    gender,
                    state,
                    country,
                },
                cli.json,
            ),
            Some(ProfileCommands::Show) | None => commands::profile_show(cli.json),
        },
    }
}
