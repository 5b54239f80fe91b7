//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unable to parse `values`.")]
    InvalidValues(#[source] serde_yaml::Error),

    #[error("Bad kubeconfig")]
    BadKubeconfig(#[source] base64::DecodeError),

    #[error("Unknown `mode` specified.")]
    UnknownMode { mode: Option<String> },

    #[error("Missing required input `{name}` (set {env_var})")]
    MissingInput { name: &'static str, env_var: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
