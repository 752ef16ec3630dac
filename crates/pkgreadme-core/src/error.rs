#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ReadmeError {
    #[error("Invalid package directory {path}: {reason}")]
    #[diagnostic(help(
        "Point at an existing package directory that contains a composer.json file"
    ))]
    InvalidPackageDirectory { path: PathBuf, reason: String },

    #[error("Invalid composer.json in package directory: {path}")]
    #[diagnostic(help("Check the JSON syntax and make sure 'name' is set"))]
    InvalidManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing command '{command}' defined in composer.json -> extra -> commands")]
    #[diagnostic(help("Make sure the command is registered with the host CLI"))]
    MissingCommand { command: String },

    #[error("Failed to read command tree: {reason}")]
    #[diagnostic(help("Pass --commands-json with a saved command dump, or check 'cmd_dump' in your config"))]
    Introspection { reason: String },

    #[error("Failed to fetch {url}: {reason}")]
    #[diagnostic(help("Check the URL and your network connection"))]
    Fetch { url: String, reason: String },

    #[error("Template rendering failed")]
    #[diagnostic(help("Check your Tera template syntax"))]
    RenderError {
        #[source]
        source: tera::Error,
    },

    #[error("Failed to read template {path}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error creating file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config.toml")]
    #[diagnostic(help("Check the TOML syntax in your pkgreadme config file"))]
    ConfigParse {
        #[source]
        source: toml::de::Error,
    },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Prompt cancelled by user")]
    PromptCancelled,
}

pub type Result<T> = std::result::Result<T, ReadmeError>;
