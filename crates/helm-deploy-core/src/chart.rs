//! Chart repository registration and chart references
//!
//! When a repository URL is given without a name it is registered under
//! [`DEFAULT_REPO_NAME`], and bare chart names are prefixed with that same
//! alias. The two must change together.

use crate::inputs::Inputs;

/// Alias used for the repository when `repo-name` is not set
pub const DEFAULT_REPO_NAME: &str = "charts";

/// A chart repository to register before deploying
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub name: String,
    pub url: String,
}

impl Repository {
    /// The repository configured by the inputs, if any
    pub fn from_inputs(inputs: &Inputs) -> Option<Self> {
        let url = inputs.repo.as_ref()?;
        Some(Self {
            name: inputs
                .repo_name
                .clone()
                .unwrap_or_else(|| DEFAULT_REPO_NAME.to_string()),
            url: url.clone(),
        })
    }

    /// Parameters for `helm repo add --force-update`
    pub fn add_params(&self) -> Vec<String> {
        vec![self.name.clone(), self.url.clone()]
    }
}

/// Resolve the chart argument passed to helm
///
/// Without a repository, or with an explicitly named one, the chart is used
/// as given. A repository registered under the default alias gets the chart
/// prefixed with `charts/`.
#[must_use]
pub fn resolve_chart(inputs: &Inputs, chart: &str) -> String {
    if inputs.repo.is_some() && inputs.repo_name.is_none() {
        format!("{DEFAULT_REPO_NAME}/{chart}")
    } else {
        chart.to_string()
    }
}
