//! Template command - render a chart locally

use helm_deploy_core::Mode;

use super::{Deployment, deploy_chart};
use crate::error::Result;

/// Run `helm template`
///
/// Rendering does not touch the cluster, so no kubeconfig is written and
/// `KUBECONFIG` is left as inherited.
pub async fn run(deployment: &Deployment<'_>) -> Result<i32> {
    deploy_chart(Mode::Template, deployment).await
}
