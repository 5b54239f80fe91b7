//! CLI error types with exit code handling
//!
//! Every failure that stops helm-deploy before or around the helm process is
//! a `CliError`. Helm's own non-zero exits are not errors; they are returned
//! as exit codes.

use helm_deploy_core::CoreError;
use miette::Diagnostic;
use thiserror::Error;

use crate::exit_codes;

/// CLI-specific error type that includes exit code information
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum CliError {
    /// Inputs could not be used (bad values, bad kubeconfig, missing field)
    #[error("{message}")]
    #[diagnostic(code(helm_deploy::input))]
    Input {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// `mode` is missing or not one of the supported operations
    #[error("Unknown `mode` specified.")]
    #[diagnostic(
        code(helm_deploy::mode),
        help("set GHINPUT_MODE to one of: install, upgrade, uninstall, template (got {got})")
    )]
    UnknownMode { got: String },

    /// The assembled command line could not be split into words
    #[error("Invalid helm command line: {line}")]
    #[diagnostic(
        code(helm_deploy::command_line),
        help("check inputs for unbalanced quotes")
    )]
    CommandLine { line: String },

    /// The helm binary could not be started or waited on
    #[error("Failed to run {program}: {message}")]
    #[diagnostic(code(helm_deploy::spawn), help("is helm installed and on PATH? see --helm-bin"))]
    Spawn { program: String, message: String },

    /// IO error (working directory, temporary files)
    #[error("IO error: {message}")]
    #[diagnostic(code(helm_deploy::io))]
    Io { message: String },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Input { .. }
            | CliError::UnknownMode { .. }
            | CliError::CommandLine { .. }
            | CliError::Spawn { .. }
            | CliError::Io { .. } => exit_codes::ERROR,
        }
    }

    /// Create a spawn error for `program`
    pub fn spawn(program: impl Into<String>, err: &std::io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidValues(ref source) => CliError::Input {
                message: err.to_string(),
                help: Some(source.to_string()),
            },
            CoreError::BadKubeconfig(ref source) => CliError::Input {
                message: err.to_string(),
                help: Some(format!("KUBECFGB64 is not valid base64: {source}")),
            },
            CoreError::UnknownMode { mode } => CliError::UnknownMode {
                got: mode.map_or_else(|| "nothing".to_string(), |m| format!("`{m}`")),
            },
            CoreError::MissingInput { .. } => CliError::Input {
                message: err.to_string(),
                help: None,
            },
            CoreError::Io(e) => e.into(),
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
