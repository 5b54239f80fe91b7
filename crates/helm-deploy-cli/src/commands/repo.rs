//! Chart repository registration

use helm_deploy_core::Repository;
use tracing::{debug, info, warn};

use super::Deployment;
use crate::error::Result;
use crate::exit_codes;
use crate::runner::Invocation;

/// Register the configured repository, if any, and refresh the indexes
///
/// Runs `helm repo add --force-update <name> <url>` followed by
/// `helm repo update`. Their exit codes are logged but do not stop the
/// deploy; helm reports a missing chart itself.
pub async fn register_repository(deployment: &Deployment<'_>) -> Result<()> {
    let Some(repository) = Repository::from_inputs(deployment.inputs) else {
        return Ok(());
    };

    // Repository URLs may embed credentials, keep them out of default logs.
    info!(name = %repository.name, "registering chart repository");
    debug!(url = %repository.url, "chart repository url");

    let add = Invocation::new("repo add --force-update").params(repository.add_params());
    let code = deployment.runner.run(&add).await?;
    if code != exit_codes::SUCCESS {
        warn!(name = %repository.name, code, "helm repo add failed");
    }

    let code = deployment.runner.run(&Invocation::new("repo update")).await?;
    if code != exit_codes::SUCCESS {
        warn!(code, "helm repo update failed");
    }

    Ok(())
}
