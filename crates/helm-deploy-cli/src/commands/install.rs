//! Install command - first deploy of a release

use helm_deploy_core::Mode;

use super::{Deployment, deploy_chart};
use crate::error::Result;

/// Run `helm install` with the kubeconfig in scope
pub async fn run(deployment: &Deployment<'_>) -> Result<i32> {
    deploy_chart(Mode::Install, deployment).await
}
