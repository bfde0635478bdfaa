use clap::{Parser, Subcommand};

use crate::types::{LogLevel, OutputFormat, StatusArg};

#[derive(Parser)]
#[command(name = "sitepulse")]
#[command(about = "Browse site content, view visitor analytics, and send tracking events", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the client configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Manage stored credentials
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },

    /// Service offerings
    Services {
        #[command(subcommand)]
        command: ServicesCommand,
    },

    /// Portfolio projects
    Projects {
        #[command(subcommand)]
        command: ProjectsCommand,
    },

    /// Blog posts
    Posts {
        #[command(subcommand)]
        command: PostsCommand,
    },

    /// Team members and testimonials
    Team {
        #[command(subcommand)]
        command: TeamCommand,
    },

    /// Media library (admin)
    Media {
        #[command(subcommand)]
        command: MediaCommand,
    },

    /// Site-wide settings (admin)
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },

    /// Contact form and inbox
    Contact {
        #[command(subcommand)]
        command: ContactCommand,
    },

    /// Visitor analytics (admin)
    Analytics {
        #[command(subcommand)]
        command: AnalyticsCommand,
    },

    /// Admin dashboard counters
    Dashboard,

    /// Send one navigation event through the tracking pipeline
    Track {
        /// Page path, e.g. /services
        path: String,

        #[arg(long)]
        referrer: Option<String>,

        /// User agent reported to the collector
        #[arg(long)]
        user_agent: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write a config file with the given bases (or defaults)
    Init {
        #[arg(long)]
        api_base: Option<String>,

        #[arg(long)]
        collector_base: Option<String>,
    },

    /// Print the effective configuration
    Show,
}

#[derive(Subcommand)]
pub enum AuthCommand {
    /// Store a bearer token for authenticated requests
    SetToken { token: String },

    /// Forget stored credentials
    Clear,
}

#[derive(Subcommand)]
pub enum ServicesCommand {
    List {
        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        per_page: Option<u32>,

        #[arg(long)]
        status: Option<StatusArg>,

        #[arg(long)]
        search: Option<String>,
    },

    Show {
        slug: String,
    },
}

#[derive(Subcommand)]
pub enum ProjectsCommand {
    List {
        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        per_page: Option<u32>,

        #[arg(long)]
        category: Option<String>,

        /// Only projects highlighted on the home page
        #[arg(long)]
        featured: bool,

        #[arg(long)]
        search: Option<String>,
    },

    Show {
        slug: String,
    },
}

#[derive(Subcommand)]
pub enum PostsCommand {
    List {
        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        per_page: Option<u32>,

        #[arg(long)]
        tag: Option<String>,

        #[arg(long)]
        search: Option<String>,
    },

    Show {
        slug: String,
    },
}

#[derive(Subcommand)]
pub enum TeamCommand {
    /// Team roster
    List,

    /// Published testimonials
    Testimonials,
}

#[derive(Subcommand)]
pub enum MediaCommand {
    List {
        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        per_page: Option<u32>,
    },
}

#[derive(Subcommand)]
pub enum SettingsCommand {
    Show,
}

#[derive(Subcommand)]
pub enum ContactCommand {
    /// Submit the public contact form
    Send {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        subject: Option<String>,

        #[arg(long)]
        message: String,
    },

    /// Admin inbox
    List {
        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        per_page: Option<u32>,
    },
}

#[derive(Subcommand)]
pub enum AnalyticsCommand {
    /// Headline numbers and top pages
    Summary {
        #[arg(long)]
        since: Option<chrono::NaiveDate>,

        #[arg(long)]
        until: Option<chrono::NaiveDate>,
    },

    /// Write per-page view counts to a CSV file
    Export {
        #[arg(long)]
        out: std::path::PathBuf,

        #[arg(long)]
        since: Option<chrono::NaiveDate>,

        #[arg(long)]
        until: Option<chrono::NaiveDate>,

        #[arg(long)]
        limit: Option<u32>,
    },

    /// Recent visitor sessions
    Sessions {
        #[arg(long)]
        limit: Option<u32>,
    },
}
