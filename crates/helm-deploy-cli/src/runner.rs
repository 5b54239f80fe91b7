//! Running helm as a child process
//!
//! A helm call is assembled as one command line, split with shell word rules
//! and spawned without a shell. While the child runs, a [`ChildSupervisor`]
//! turns every SIGINT or SIGTERM received by helm-deploy into one SIGINT for
//! helm, so helm gets to shut down on its own terms.

use nix::sys::signal::{Signal as NixSignal, kill};
use nix::unistd::Pid;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use tokio::process::{Child, Command};
use tokio::signal::unix::{Signal, SignalKind, signal};
use tracing::{debug, info, warn};

use crate::error::{CliError, Result};
use crate::exit_codes;

/// One helm call: subcommand, parameters and process overrides
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    subcommand: String,
    params: Vec<String>,
    cwd: Option<PathBuf>,
    envs: Vec<(String, OsString)>,
}

impl Invocation {
    /// Start an invocation of `helm <subcommand>`
    pub fn new(subcommand: impl Into<String>) -> Self {
        Self {
            subcommand: subcommand.into(),
            ..Default::default()
        }
    }

    /// Append parameters after the subcommand
    #[must_use]
    pub fn params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params.extend(params.into_iter().map(Into::into));
        self
    }

    /// Run helm from `dir` instead of the current directory
    #[must_use]
    #[allow(dead_code)]
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Set an environment variable on top of the inherited environment
    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }
}

/// Runs helm invocations with the configured executable
#[derive(Debug, Clone)]
pub struct HelmRunner {
    program: String,
}

impl HelmRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The command line before word splitting
    pub fn command_line(&self, invocation: &Invocation) -> String {
        let mut words = vec![self.program.as_str(), invocation.subcommand.as_str()];
        words.extend(invocation.params.iter().map(String::as_str));
        words.join(" ")
    }

    /// The argv helm is started with
    pub fn argv(&self, invocation: &Invocation) -> Result<Vec<String>> {
        let line = self.command_line(invocation);
        match shlex::split(&literal_hashes(&line)) {
            Some(argv) if !argv.is_empty() => Ok(argv),
            _ => Err(CliError::CommandLine { line }),
        }
    }

    /// Run helm to completion and return its exit code
    pub async fn run(&self, invocation: &Invocation) -> Result<i32> {
        let argv = self.argv(invocation)?;
        let (program, args) = argv.split_first().ok_or_else(|| CliError::CommandLine {
            line: self.command_line(invocation),
        })?;

        debug!(?argv, cwd = ?invocation.cwd, "helm command");

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &invocation.cwd {
            command.current_dir(dir);
        }
        for (key, value) in &invocation.envs {
            command.env(key, value);
        }

        let supervisor =
            ChildSupervisor::spawn(&mut command).map_err(|e| CliError::spawn(program, &e))?;
        let status = supervisor
            .wait()
            .await
            .map_err(|e| CliError::spawn(program, &e))?;

        let code = exit_codes::from_status(status);
        info!(subcommand = %invocation.subcommand, code, "helm finished");
        Ok(code)
    }
}

/// Escape every `#` that would open a shell comment
///
/// Helm parameters such as `--timeout #5m` or a values file named `#x.yaml`
/// must reach helm as written, so a `#` at the start of an unquoted word is
/// kept literal instead of dropping the rest of the line.
fn literal_hashes(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut word_start = true;

    for c in line.chars() {
        let at_word_start = std::mem::replace(&mut word_start, false);
        match quote {
            Some('\'') => {
                if c == '\'' {
                    quote = None;
                }
            }
            Some(_) => {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == '"' {
                    quote = None;
                }
            }
            None => {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == '\'' || c == '"' {
                    quote = Some(c);
                } else if c.is_whitespace() {
                    word_start = true;
                } else if c == '#' && at_word_start {
                    out.push('\\');
                }
            }
        }
        out.push(c);
    }
    out
}

/// Owns one running child and the signal listeners that forward to it
///
/// Listeners are registered before the child is spawned and dropped together
/// with the supervisor.
pub struct ChildSupervisor {
    child: Child,
    interrupt: Signal,
    terminate: Signal,
}

impl ChildSupervisor {
    /// Spawn `command` under supervision
    pub fn spawn(command: &mut Command) -> std::io::Result<Self> {
        let interrupt = signal(SignalKind::interrupt())?;
        let terminate = signal(SignalKind::terminate())?;
        let child = command.spawn()?;
        debug!(pid = ?child.id(), "helm started");
        Ok(Self {
            child,
            interrupt,
            terminate,
        })
    }

    /// Wait for the child, forwarding signals until it exits
    pub async fn wait(mut self) -> std::io::Result<ExitStatus> {
        loop {
            tokio::select! {
                status = self.child.wait() => return status,
                Some(()) = self.interrupt.recv() => self.forward("SIGINT"),
                Some(()) = self.terminate.recv() => self.forward("SIGTERM"),
            }
        }
    }

    fn forward(&self, received: &str) {
        let Some(pid) = self.child.id() else {
            return;
        };
        info!(received, pid, "forwarding interrupt to helm");
        if let Err(e) = kill(Pid::from_raw(pid as i32), NixSignal::SIGINT) {
            warn!(pid, error = %e, "failed to signal helm");
        }
    }
}
