//! helm-deploy core - everything that happens before helm is spawned
//!
//! This crate turns the environment handed to a deploy step into helm
//! command lines:
//! - `Inputs`: the fixed set of `GHINPUT_*` options
//! - `Mode`: which helm subcommand a run performs
//! - `values`: inline values validation and `-f` file lists
//! - `chart`: repository registration data and chart reference resolution
//! - `kubeconfig`: the decoded cluster credential, removed on drop
//! - `args`: per-subcommand argument vectors

pub mod args;
pub mod chart;
pub mod error;
pub mod inputs;
pub mod kubeconfig;
pub mod mode;
pub mod values;

pub use args::{deploy_args, uninstall_args};
pub use chart::{DEFAULT_REPO_NAME, Repository, resolve_chart};
pub use error::{CoreError, Result};
pub use inputs::{INPUT_ENV_PREFIX, Inputs, input_env_var, input_keys};
pub use kubeconfig::{KUBECONFIG_ENV, KUBECONFIG_FILE_NAME, Kubeconfig, decode_kubeconfig};
pub use mode::Mode;
pub use values::{VALUES_FILE_NAME, materialize_values, validate_values, values_files};
