//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vellum - outline, draft, polish and publish horror narration
#[derive(Parser, Debug)]
#[command(name = "vellum")]
#[command(about = "Outline, draft, polish and publish horror narration", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write logs to stderr as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Folder holding project folders
    #[arg(long, global = true, value_name = "DIR")]
    pub projects_root: Option<PathBuf>,

    /// Extra configuration file, applied last
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Generate a numbered outline and print it
    Outline {
        /// Story seed
        #[arg(required = true)]
        seed: Vec<String>,

        /// Number of beats
        #[arg(long, default_value_t = 10)]
        beats: u32,

        /// Channel preset
        #[arg(long)]
        channel: Option<String>,
    },

    /// Generate alternative treatments of a seed idea
    Treatments {
        /// Seed idea
        #[arg(required = true)]
        seed: Vec<String>,

        /// Number of treatments
        #[arg(long, default_value_t = 3)]
        count: u32,

        /// Channel preset
        #[arg(long)]
        channel: Option<String>,

        /// Append to this project's concepts.md instead of only printing
        #[arg(long)]
        project: Option<String>,
    },

    /// Save an idea to a project's concepts.md
    Idea {
        /// Project name
        project: String,

        /// Idea text
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Generate a title, description, tags and hashtags
    Metadata {
        /// Video concept
        #[arg(required = true)]
        seed: Vec<String>,

        /// Channel preset
        #[arg(long)]
        channel: Option<String>,
    },

    /// Expand one beat into narration and print it
    Expand {
        /// Beat text
        #[arg(required = true)]
        beat: Vec<String>,

        /// Channel preset
        #[arg(long)]
        channel: Option<String>,

        /// Skip the B-roll shot list
        #[arg(long)]
        no_broll: bool,
    },

    /// Generate thumbnail concepts
    Thumbnail {
        /// Seed idea
        #[arg(required = true)]
        seed: Vec<String>,

        /// Channel preset
        #[arg(long)]
        channel: Option<String>,
    },

    /// Create a project folder from templates
    NewProject {
        /// Project name
        #[arg(required = true)]
        name: Vec<String>,

        /// Project type: shrouded, aperture or novel
        #[arg(long = "type", default_value = "shrouded")]
        project_type: String,
    },

    /// Generate an outline and append it to outline.md
    AddOutline {
        /// Project name
        project: String,

        /// Story seed
        #[arg(required = true)]
        seed: Vec<String>,

        /// Number of beats
        #[arg(long, default_value_t = 10)]
        beats: u32,

        /// Channel preset
        #[arg(long)]
        channel: Option<String>,
    },

    /// Expand one beat of the latest outline into script.md
    AddBeat {
        /// Project name
        project: String,

        /// Beat number
        number: u32,

        /// Channel preset
        #[arg(long)]
        channel: Option<String>,

        /// Skip the B-roll shot list
        #[arg(long)]
        no_broll: bool,

        /// Renumber beats whose numbering skips or repeats
        #[arg(long)]
        renumber: bool,
    },

    /// Choose which outline beats go into the draft
    Curate {
        /// Project name
        project: String,

        /// Output file inside the project
        #[arg(long)]
        output: Option<String>,

        /// Keep these beat numbers, e.g. 1,3,5
        #[arg(long, conflicts_with = "all")]
        select: Option<String>,

        /// Keep every beat
        #[arg(long)]
        all: bool,

        /// Renumber beats whose numbering skips or repeats
        #[arg(long)]
        renumber: bool,
    },

    /// Build Draft 0 from the curated beats
    Draft {
        /// Project name
        project: String,

        /// Curated beats file inside the project
        #[arg(long)]
        beats_file: Option<String>,

        /// Channel preset
        #[arg(long)]
        channel: Option<String>,

        /// Skip B-roll shot lists
        #[arg(long)]
        no_broll: bool,

        /// Show the plan without calling the service or writing
        #[arg(long)]
        dry_run: bool,

        /// Renumber beats whose numbering skips or repeats
        #[arg(long)]
        renumber: bool,
    },

    /// Polish the latest draft beat by beat
    Polish {
        /// Project name
        project: String,

        /// Pass to run: notes, rewrite or tighten
        #[arg(long, default_value = "notes")]
        mode: String,

        /// Channel preset
        #[arg(long)]
        channel: Option<String>,

        /// Show the plan without calling the service or writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Extract narration and apply polish swaps
    Finalize {
        /// Project name
        project: String,

        /// Script to finalize
        #[arg(long)]
        source: Option<String>,

        /// Polish notes supplying sentence swaps
        #[arg(long)]
        notes: Option<String>,

        /// Run a read-aloud smoothing pass
        #[arg(long)]
        smooth: bool,

        /// Channel preset
        #[arg(long)]
        channel: Option<String>,
    },

    /// Build a publish pack from the final narration
    Publish {
        /// Project name
        project: String,

        /// Channel preset
        #[arg(long)]
        channel: Option<String>,

        /// Skip thumbnail concepts
        #[arg(long)]
        no_thumbnails: bool,

        /// Show the prompts without calling the service or writing
        #[arg(long)]
        dry_run: bool,
    },
}

impl Commands {
    /// Whether the command calls the text-generation service.
    ///
    /// Only these commands need a credential.
    pub fn needs_service(&self) -> bool {
        match self {
            Commands::Outline { .. }
            | Commands::Treatments { .. }
            | Commands::Metadata { .. }
            | Commands::Expand { .. }
            | Commands::Thumbnail { .. }
            | Commands::AddOutline { .. }
            | Commands::AddBeat { .. } => true,
            Commands::Draft { dry_run, .. }
            | Commands::Polish { dry_run, .. }
            | Commands::Publish { dry_run, .. } => !dry_run,
            Commands::Finalize { smooth, .. } => *smooth,
            Commands::Idea { .. } | Commands::NewProject { .. } | Commands::Curate { .. } => false,
        }
    }
}
