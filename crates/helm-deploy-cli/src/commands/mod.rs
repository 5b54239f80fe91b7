//! Deploy operations
//!
//! Each mode maps to one module. install, upgrade and template share the
//! chart pipeline in [`deploy_chart`]; uninstall only needs the release.

pub mod install;
pub mod repo;
pub mod template;
pub mod uninstall;
pub mod upgrade;

use std::path::Path;

use helm_deploy_core::{Inputs, Kubeconfig, Mode, deploy_args, materialize_values, resolve_chart};
use tracing::{debug, info};

use crate::error::Result;
use crate::runner::{HelmRunner, Invocation};

/// Everything an operation needs for one run
pub struct Deployment<'a> {
    pub inputs: &'a Inputs,
    pub runner: &'a HelmRunner,
    pub workdir: &'a Path,
}

impl<'a> Deployment<'a> {
    pub fn new(inputs: &'a Inputs, runner: &'a HelmRunner, workdir: &'a Path) -> Self {
        Self {
            inputs,
            runner,
            workdir,
        }
    }

    /// Run helm with the decoded kubeconfig exported as `KUBECONFIG`
    ///
    /// The kubeconfig file is removed as soon as helm exits, and also when
    /// anything fails after it was written.
    pub async fn run_with_kubeconfig(&self, invocation: Invocation) -> Result<i32> {
        let kubeconfig = Kubeconfig::from_env(self.workdir)?;
        let invocation = invocation.env("KUBECONFIG", kubeconfig.path());
        let code = self.runner.run(&invocation).await;
        drop(kubeconfig);
        code
    }
}

/// Run the operation selected by `mode` and return helm's exit code
pub async fn dispatch(mode: Mode, deployment: &Deployment<'_>) -> Result<i32> {
    match mode {
        Mode::Install => install::run(deployment).await,
        Mode::Upgrade => upgrade::run(deployment).await,
        Mode::Uninstall => uninstall::run(deployment).await,
        Mode::Template => template::run(deployment).await,
    }
}

/// Shared pipeline for install, upgrade and template
async fn deploy_chart(mode: Mode, deployment: &Deployment<'_>) -> Result<i32> {
    let inputs = deployment.inputs;
    let release = inputs.require_release()?;
    let chart = inputs.require_chart()?;

    repo::register_repository(deployment).await?;

    let chart = resolve_chart(inputs, chart);
    let inline_values = materialize_values(deployment.workdir, inputs.values.as_deref())?;
    let args = deploy_args(mode, inputs, release, &chart, inline_values.as_deref());
    debug!(%mode, ?args, "assembled arguments");

    info!(%mode, release, chart = %chart, "running helm");
    let invocation = Invocation::new(mode.subcommand()).params(args);
    if mode.needs_kubeconfig() {
        deployment.run_with_kubeconfig(invocation).await
    } else {
        deployment.runner.run(&invocation).await
    }
}
