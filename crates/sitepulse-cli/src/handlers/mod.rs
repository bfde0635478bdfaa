pub mod analytics;
pub mod auth;
pub mod config;
pub mod contact;
pub mod dashboard;
pub mod media;
pub mod posts;
pub mod projects;
pub mod services;
pub mod settings;
pub mod team;
pub mod track;
