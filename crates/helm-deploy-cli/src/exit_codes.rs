//! Exit codes for helm-deploy
//!
//! Configuration failures exit with [`ERROR`]. Anything else is helm's own
//! exit code, passed through unchanged.

use std::process::ExitStatus;

/// Success - helm completed without errors
pub const SUCCESS: i32 = 0;

/// General error - bad inputs, bad kubeconfig, unknown mode, helm not runnable
pub const ERROR: i32 = 1;

/// Offset added to the signal number when helm is killed by a signal
pub const SIGNAL_BASE: i32 = 128;

/// Exit code to report for a finished helm process
pub fn from_status(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => SIGNAL_BASE + signal,
        (None, None) => ERROR,
    }
}
