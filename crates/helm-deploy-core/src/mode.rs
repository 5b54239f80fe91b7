//! Deploy modes

use std::fmt;
use std::str::FromStr;

/// The helm operation a run performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Install,
    Upgrade,
    Uninstall,
    Template,
}

impl Mode {
    /// The helm subcommand for this mode
    pub fn subcommand(&self) -> &'static str {
        match self {
            Mode::Install => "install",
            Mode::Upgrade => "upgrade",
            Mode::Uninstall => "uninstall",
            Mode::Template => "template",
        }
    }

    /// Whether the chart repository is registered before running
    pub fn registers_repository(&self) -> bool {
        !matches!(self, Mode::Uninstall)
    }

    /// Whether helm talks to the cluster and needs the kubeconfig
    pub fn needs_kubeconfig(&self) -> bool {
        !matches!(self, Mode::Template)
    }
}

impl FromStr for Mode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "install" => Ok(Mode::Install),
            "upgrade" => Ok(Mode::Upgrade),
            "uninstall" => Ok(Mode::Uninstall),
            "template" => Ok(Mode::Template),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subcommand())
    }
}
