//! Uninstall command - remove a release from the cluster

use helm_deploy_core::{Mode, uninstall_args};
use tracing::info;

use super::Deployment;
use crate::error::Result;
use crate::runner::Invocation;

/// Run `helm uninstall <release> [--namespace <ns>]`
///
/// No repository is registered and no values are read.
pub async fn run(deployment: &Deployment<'_>) -> Result<i32> {
    let release = deployment.inputs.require_release()?;
    let args = uninstall_args(deployment.inputs, release);

    info!(release, namespace = ?deployment.inputs.namespace, "uninstalling release");
    let invocation = Invocation::new(Mode::Uninstall.subcommand()).params(args);
    deployment.run_with_kubeconfig(invocation).await
}
