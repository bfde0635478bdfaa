mod args;
mod commands;
mod context;
mod handlers;
mod output;
pub mod types;

pub use args::{
    AnalyticsCommand, AuthCommand, Cli, Commands, ConfigCommand, ContactCommand, MediaCommand,
    PostsCommand, ProjectsCommand, ServicesCommand, SettingsCommand, TeamCommand,
};
pub use commands::run;
