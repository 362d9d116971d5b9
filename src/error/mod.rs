//! Error types and handling for agr
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostic codes and help text.
//!
//! This module is organized into sub-modules by error domain:
//! - [`reference`]: Reference parsing errors
//! - [`fetch`]: Download and extraction errors
//! - [`fs`]: File system errors

pub mod fetch;
pub mod fs;
pub mod reference;

pub use fetch::{extraction_failed, fetch_failed, network_error};
pub use fs::{io_error, read_failed as file_read_failed, write_failed as file_write_failed};
pub use reference::invalid_reference;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for agr operations
#[derive(Error, Diagnostic, Debug)]
pub enum AgrError {
    // Reference errors
    #[error("Invalid format: '{reference}'. Expected: {expected}")]
    #[diagnostic(code(agr::reference::invalid))]
    InvalidReference { reference: String, expected: String },

    // Remote errors
    #[error("Repository '{repo}' not found on GitHub.")]
    #[diagnostic(
        code(agr::remote::repo_not_found),
        help("Check the owner and repository name, and that the default branch is 'main'")
    )]
    RepoNotFound { repo: String },

    #[error("{kind} '{name}' not found in {repo}. Expected location: {expected}")]
    #[diagnostic(code(agr::remote::resource_not_found))]
    ResourceNotFound {
        kind: String,
        name: String,
        repo: String,
        expected: String,
    },

    #[error("Failed to download repository: {message}")]
    #[diagnostic(code(agr::remote::fetch_failed))]
    FetchFailed { message: String },

    #[error("Network error: {message}")]
    #[diagnostic(code(agr::remote::network))]
    Network { message: String },

    // Archive errors
    #[error("Failed to extract repository archive: {message}")]
    #[diagnostic(code(agr::archive::extraction_failed))]
    ExtractionFailed { message: String },

    #[error("Archive entry escapes the extraction directory: {path}")]
    #[diagnostic(
        code(agr::archive::unsafe_path),
        help("The repository tarball contains absolute or '..' paths and was rejected")
    )]
    UnsafeArchivePath { path: String },

    // Install errors
    #[error("{kind} '{name}' already exists at {path}. Use --overwrite to replace it.")]
    #[diagnostic(code(agr::install::exists))]
    ResourceExists {
        kind: String,
        name: String,
        path: String,
    },

    #[error("Could not determine the home directory for a global install")]
    #[diagnostic(
        code(agr::install::no_home),
        help("Set HOME or install into the current project without --global")
    )]
    HomeDirNotFound,

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(agr::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(agr::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(agr::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(agr::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for AgrError {
    fn from(err: std::io::Error) -> Self {
        AgrError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for AgrError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => AgrError::FetchFailed {
                message: format!("HTTP {status}"),
            },
            None => AgrError::Network {
                message: err.to_string(),
            },
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AgrError>;
