//! Helm argument vectors
//!
//! Arguments are built fresh from [`Inputs`] for each invocation. Options
//! that are not set are left out entirely, never passed as empty strings.

use std::path::Path;

use crate::inputs::Inputs;
use crate::mode::Mode;
use crate::values::values_files;

/// Arguments for `helm install`, `helm upgrade` or `helm template`
///
/// Order: release, chart, `--install` (upgrade only), namespace, `--atomic`
/// and `--dry-run` (not for template), explicit values files, the inline
/// values file, `--version`, `--timeout`.
pub fn deploy_args(
    mode: Mode,
    inputs: &Inputs,
    release: &str,
    chart: &str,
    inline_values: Option<&Path>,
) -> Vec<String> {
    let mut args = vec![release.to_string(), chart.to_string()];

    if mode == Mode::Upgrade {
        args.push("--install".to_string());
    }
    push_namespace(&mut args, inputs);

    if mode != Mode::Template {
        if inputs.atomic() {
            args.push("--atomic".to_string());
        }
        if inputs.dry_run() {
            args.push("--dry-run".to_string());
        }
    }

    for file in values_files(inputs.values_files.as_deref()) {
        args.extend(["-f".to_string(), file]);
    }
    if let Some(path) = inline_values {
        args.extend(["-f".to_string(), path.display().to_string()]);
    }

    if let Some(version) = &inputs.chart_version {
        args.extend(["--version".to_string(), version.clone()]);
    }
    if let Some(timeout) = &inputs.timeout {
        args.extend(["--timeout".to_string(), timeout.clone()]);
    }

    args
}

/// Arguments for `helm uninstall`: release and namespace only
pub fn uninstall_args(inputs: &Inputs, release: &str) -> Vec<String> {
    let mut args = vec![release.to_string()];
    push_namespace(&mut args, inputs);
    args
}

fn push_namespace(args: &mut Vec<String>, inputs: &Inputs) {
    if let Some(namespace) = &inputs.namespace {
        args.extend(["--namespace".to_string(), namespace.clone()]);
    }
}
