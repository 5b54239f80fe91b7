//! Deploy inputs read from the environment
//!
//! Every option `foo-bar` is read from `GHINPUT_FOO_BAR`. Runners export all
//! declared inputs, so an empty variable counts as unset.

use crate::error::{CoreError, Result};
use crate::mode::Mode;

/// Prefix shared by every input variable
pub const INPUT_ENV_PREFIX: &str = "GHINPUT_";

type Slot = fn(&mut Inputs) -> &mut Option<String>;

/// Option names and the field each one fills, in the order they are documented
const INPUT_FIELDS: [(&str, Slot); 13] = [
    ("atomic", |i| &mut i.atomic),
    ("chart-version", |i| &mut i.chart_version),
    ("chart", |i| &mut i.chart),
    ("dry-run", |i| &mut i.dry_run),
    ("helm-version", |i| &mut i.helm_version),
    ("mode", |i| &mut i.mode),
    ("namespace", |i| &mut i.namespace),
    ("release", |i| &mut i.release),
    ("repo-name", |i| &mut i.repo_name),
    ("repo", |i| &mut i.repo),
    ("timeout", |i| &mut i.timeout),
    ("values-files", |i| &mut i.values_files),
    ("values", |i| &mut i.values),
];

/// Every option name
pub fn input_keys() -> impl Iterator<Item = &'static str> {
    INPUT_FIELDS.iter().map(|(key, _)| *key)
}

/// Environment variable name for an option (`chart-version` -> `GHINPUT_CHART_VERSION`)
#[must_use]
pub fn input_env_var(key: &str) -> String {
    format!("{}{}", INPUT_ENV_PREFIX, key.to_uppercase().replace('-', "_"))
}

/// The deploy configuration, loaded once at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    pub atomic: Option<String>,
    pub chart_version: Option<String>,
    pub chart: Option<String>,
    pub dry_run: Option<String>,
    pub helm_version: Option<String>,
    pub mode: Option<String>,
    pub namespace: Option<String>,
    pub release: Option<String>,
    pub repo_name: Option<String>,
    pub repo: Option<String>,
    pub timeout: Option<String>,
    pub values_files: Option<String>,
    pub values: Option<String>,
}

impl Inputs {
    /// Load inputs from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load inputs through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut inputs = Self::default();
        for (key, slot) in INPUT_FIELDS {
            *slot(&mut inputs) = lookup(&input_env_var(key)).filter(|v| !v.is_empty());
        }
        inputs
    }

    /// Look up the requested mode
    pub fn mode(&self) -> Result<Mode> {
        self.mode
            .as_deref()
            .and_then(|m| m.parse().ok())
            .ok_or_else(|| CoreError::UnknownMode {
                mode: self.mode.clone(),
            })
    }

    /// `--atomic` is only passed for the literal string `true`
    pub fn atomic(&self) -> bool {
        self.atomic.as_deref() == Some("true")
    }

    /// `--dry-run` is only passed for the literal string `true`
    pub fn dry_run(&self) -> bool {
        self.dry_run.as_deref() == Some("true")
    }

    /// The release name, which every mode needs
    pub fn require_release(&self) -> Result<&str> {
        require(self.release.as_deref(), "release")
    }

    /// The chart, which every mode except uninstall needs
    pub fn require_chart(&self) -> Result<&str> {
        require(self.chart.as_deref(), "chart")
    }
}

fn require<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str> {
    value.ok_or_else(|| CoreError::MissingInput {
        name,
        env_var: input_env_var(name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_input_env_var_naming() {
        assert_eq!(input_env_var("release"), "GHINPUT_RELEASE");
        assert_eq!(input_env_var("chart-version"), "GHINPUT_CHART_VERSION");
        assert_eq!(input_env_var("values-files"), "GHINPUT_VALUES_FILES");
        assert_eq!(input_env_var("dry-run"), "GHINPUT_DRY_RUN");
    }

    #[test]
    fn test_every_key_has_a_slot() {
        let vars: Vec<(String, String)> = input_keys()
            .map(|k| (input_env_var(k), format!("value-of-{k}")))
            .collect();
        let inputs = Inputs::from_lookup(|name| {
            vars.iter().find(|(k, _)| k == name).map(|(_, v)| v.clone())
        });

        assert_eq!(inputs.atomic.as_deref(), Some("value-of-atomic"));
        assert_eq!(inputs.chart_version.as_deref(), Some("value-of-chart-version"));
        assert_eq!(inputs.chart.as_deref(), Some("value-of-chart"));
        assert_eq!(inputs.dry_run.as_deref(), Some("value-of-dry-run"));
        assert_eq!(inputs.helm_version.as_deref(), Some("value-of-helm-version"));
        assert_eq!(inputs.mode.as_deref(), Some("value-of-mode"));
        assert_eq!(inputs.namespace.as_deref(), Some("value-of-namespace"));
        assert_eq!(inputs.release.as_deref(), Some("value-of-release"));
        assert_eq!(inputs.repo_name.as_deref(), Some("value-of-repo-name"));
        assert_eq!(inputs.repo.as_deref(), Some("value-of-repo"));
        assert_eq!(inputs.timeout.as_deref(), Some("value-of-timeout"));
        assert_eq!(inputs.values_files.as_deref(), Some("value-of-values-files"));
        assert_eq!(inputs.values.as_deref(), Some("value-of-values"));
    }

    #[test]
    fn test_input_keys_are_unique() {
        let mut keys: Vec<&str> = input_keys().collect();
        assert_eq!(keys.len(), 13);
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 13);
    }

    #[test]
    fn test_missing_and_empty_are_absent() {
        let inputs = Inputs::from_lookup(lookup(&[
            ("GHINPUT_RELEASE", "web"),
            ("GHINPUT_NAMESPACE", ""),
        ]));

        assert_eq!(inputs.release.as_deref(), Some("web"));
        assert_eq!(inputs.namespace, None);
        assert_eq!(inputs.chart, None);
    }

    #[test]
    fn test_flags_require_literal_true() {
        let inputs = Inputs::from_lookup(lookup(&[
            ("GHINPUT_ATOMIC", "true"),
            ("GHINPUT_DRY_RUN", "True"),
        ]));

        assert!(inputs.atomic());
        assert!(!inputs.dry_run());
    }

    #[test]
    fn test_mode_lookup() {
        let inputs = Inputs::from_lookup(lookup(&[("GHINPUT_MODE", "upgrade")]));
        assert_eq!(inputs.mode().unwrap(), Mode::Upgrade);

        let inputs = Inputs::from_lookup(lookup(&[("GHINPUT_MODE", "rollback")]));
        assert!(matches!(
            inputs.mode(),
            Err(CoreError::UnknownMode { mode: Some(m) }) if m == "rollback"
        ));

        let inputs = Inputs::default();
        assert!(matches!(
            inputs.mode(),
            Err(CoreError::UnknownMode { mode: None })
        ));
    }

    #[test]
    fn test_require_release_names_the_variable() {
        let err = Inputs::default().require_release().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required input `release` (set GHINPUT_RELEASE)"
        );
    }
}
