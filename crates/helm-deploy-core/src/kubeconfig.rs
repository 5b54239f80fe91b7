//! Cluster credential handling
//!
//! The kubeconfig arrives base64 encoded in `KUBECFGB64`. It is decoded into
//! the working directory for the lifetime of a [`Kubeconfig`] and removed when
//! that value is dropped, whichever way the caller leaves the scope.

use base64::Engine as _;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, Result};

/// Variable holding the base64 encoded kubeconfig
pub const KUBECONFIG_ENV: &str = "KUBECFGB64";

/// File name of the decoded kubeconfig inside the working directory
pub const KUBECONFIG_FILE_NAME: &str = ".kube_config.yml";

/// Decode a base64 kubeconfig
///
/// ASCII whitespace is ignored so wrapped `base64` output is accepted. Any
/// other byte outside the standard alphabet is rejected rather than skipped,
/// so a mangled secret fails here instead of producing a garbled kubeconfig.
pub fn decode_kubeconfig(encoded: &str) -> Result<Vec<u8>> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    base64::engine::general_purpose::STANDARD
        .decode(compact)
        .map_err(CoreError::BadKubeconfig)
}

/// A decoded kubeconfig on disk, deleted on drop
#[derive(Debug)]
pub struct Kubeconfig {
    path: PathBuf,
}

impl Kubeconfig {
    /// Decode `encoded` and write it to `<workdir>/.kube_config.yml`
    ///
    /// Nothing is written when decoding fails.
    pub fn materialize(workdir: &Path, encoded: &str) -> Result<Self> {
        let decoded = decode_kubeconfig(encoded)?;
        let path = std::path::absolute(workdir.join(KUBECONFIG_FILE_NAME))?;
        std::fs::write(&path, decoded)?;
        tracing::debug!(path = %path.display(), "wrote kubeconfig");
        Ok(Self { path })
    }

    /// Read `KUBECFGB64` from the environment (empty when unset) and materialize it
    pub fn from_env(workdir: &Path) -> Result<Self> {
        let encoded = std::env::var(KUBECONFIG_ENV).unwrap_or_default();
        Self::materialize(workdir, &encoded)
    }

    /// Absolute path of the decoded file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for Kubeconfig {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "removed kubeconfig"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "failed to remove kubeconfig"
            ),
        }
    }
}
