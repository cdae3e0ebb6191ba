//! CLI module for fleetcore
//!
//! Provides the command-line interface using clap.

pub mod commands;
mod project;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use project::Project;

/// FleetCore - Vehicle inspection checklists and their blocking rules
#[derive(Parser, Debug)]
#[command(name = "fleetcore")]
#[command(version)]
#[command(about = "Run vehicle inspection checklists and track their status")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a .fleetcore project in the current directory
    Init {
        /// Overwrite an existing config.json
        #[arg(long)]
        force: bool,
    },

    /// Show the checklist template used for an inspection type
    Template {
        /// Inspection type (periodic, pre_trip, post_trip, incident)
        #[arg(long = "type")]
        inspection_type: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start a new inspection
    Start {
        /// Vehicle ID
        #[arg(long)]
        vehicle: String,

        /// Technician ID
        #[arg(long)]
        technician: String,

        /// Inspection type (defaults to the configured type)
        #[arg(long = "type")]
        inspection_type: Option<String>,

        /// Inspection notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Set the status of a checklist item
    Check {
        /// Inspection ID
        inspection: String,

        /// Checklist item ID
        item: String,

        /// New status (pending, ok, minor_defect, major_defect)
        status: String,

        /// Technician notes for the item
        #[arg(long)]
        notes: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Confirm the major defects of a blocked inspection were repaired
    Resolve {
        /// Inspection ID
        inspection: String,

        /// Who confirms the repair
        #[arg(long)]
        by: String,

        /// Resolution notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Recompute an inspection's counts and status from its checklist
    Refresh {
        /// Inspection ID
        inspection: String,
    },

    /// Show an inspection and its checklist
    Show {
        /// Inspection ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List inspections with optional filtering
    List {
        /// Filter by vehicle ID
        #[arg(long)]
        vehicle: Option<String>,

        /// Filter by status (draft, in_progress, completed, blocked)
        #[arg(long)]
        status: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete an inspection and its checklist
    Delete {
        /// Inspection ID
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_command() {
        let cli = Cli::try_parse_from([
            "fleetcore",
            "check",
            "insp-1",
            "insp-1-brakes-1",
            "major_defect",
            "--notes",
            "Air leak",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Check { inspection, item, status, notes, json }) => {
                assert_eq!(inspection, "insp-1");
                assert_eq!(item, "insp-1-brakes-1");
                assert_eq!(status, "major_defect");
                assert_eq!(notes.as_deref(), Some("Air leak"));
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_start_with_global_flags() {
        let cli = Cli::try_parse_from([
            "fleetcore",
            "--verbose",
            "start",
            "--vehicle",
            "truck-42",
            "--technician",
            "tech-7",
            "--type",
            "pre_trip",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Some(Commands::Start { ref inspection_type, .. }) if inspection_type.as_deref() == Some("pre_trip")
        ));
    }

    #[test]
    fn test_start_requires_vehicle() {
        assert!(Cli::try_parse_from(["fleetcore", "start", "--technician", "tech-7"]).is_err());
    }
}
