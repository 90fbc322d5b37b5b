//! Harness engineering audit — delegates to `audit_harness.sh`.

use anyhow::Result;

use crate::config::Config;
use crate::delegate::{Delegate, Spawn};

const SCRIPT: &str = "audit_harness.sh";

/// Run the harness audit and return its exit code.
pub fn run(repo_path: &str, config: &Config) -> Result<i32> {
    let delegate = Delegate::new(SCRIPT, config.interpreter(), config.scripts_dir()?);
    delegate.run(repo_path, &[], &Spawn)
}
