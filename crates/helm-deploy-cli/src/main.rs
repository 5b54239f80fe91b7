//! helm-deploy - run helm install, upgrade, uninstall or template from CI inputs
//!
//! Deploy inputs come from `GHINPUT_*` variables and the cluster credential
//! from `KUBECFGB64`. The process exits with helm's exit code, or 1 when the
//! inputs cannot be used.

use clap::Parser;
use helm_deploy_core::Inputs;
use tracing::info;

mod commands;
mod error;
mod exit_codes;
mod logging;
mod runner;

use commands::Deployment;
use error::Result;
use logging::LogFormat;
use runner::HelmRunner;

#[derive(Parser)]
#[command(name = "helm-deploy")]
#[command(version)]
#[command(about = "Run helm install, upgrade, uninstall or template from GHINPUT_* variables", long_about = None)]
struct Cli {
    /// Helm executable to run
    #[arg(long, env = "HELM_BIN", default_value = "helm")]
    helm_bin: String,

    /// Enable debug logging
    #[arg(long, env = "HELM_DEPLOY_DEBUG")]
    debug: bool,

    /// Log line format
    #[arg(long, env = "HELM_DEPLOY_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    miette::set_panic_hook();

    let cli = Cli::parse();
    logging::init(cli.debug, cli.log_format);

    let code = match run(&cli).await {
        Ok(code) => code,
        Err(err) => {
            let code = err.exit_code();
            eprintln!("{:?}", miette::Report::new(err));
            code
        }
    };

    // The working directory and kubeconfig are gone by now; only exit remains.
    std::process::exit(code);
}

async fn run(cli: &Cli) -> Result<i32> {
    let inputs = Inputs::from_env();
    let mode = inputs.mode()?;
    info!(%mode, helm_version = ?inputs.helm_version, "starting deploy");

    let workdir = tempfile::Builder::new().prefix("helm-deploy-").tempdir()?;
    let workdir_path = workdir.path().canonicalize()?;

    let runner = HelmRunner::new(cli.helm_bin.as_str());
    let deployment = Deployment::new(&inputs, &runner, &workdir_path);

    commands::dispatch(mode, &deployment).await
}
