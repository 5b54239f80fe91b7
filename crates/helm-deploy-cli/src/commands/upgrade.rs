//! Upgrade command - upgrade a release, installing it when missing

use helm_deploy_core::Mode;

use super::{Deployment, deploy_chart};
use crate::error::Result;

/// Run `helm upgrade --install` with the kubeconfig in scope
pub async fn run(deployment: &Deployment<'_>) -> Result<i32> {
    deploy_chart(Mode::Upgrade, deployment).await
}
