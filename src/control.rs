//! Control metalayer audit — delegates to `audit_control.sh`.

use anyhow::Result;

use crate::config::Config;
use crate::delegate::{Delegate, Spawn};

const SCRIPT: &str = "audit_control.sh";

/// Run the control audit and return its exit code. `strict` appends a literal
/// `--strict` after the repo path.
pub fn run(repo_path: &str, strict: bool, config: &Config) -> Result<i32> {
    let delegate = Delegate::new(SCRIPT, config.interpreter(), config.scripts_dir()?);
    let flags: &[&str] = if strict { &["--strict"] } else { &[] };
    delegate.run(repo_path, flags, &Spawn)
}
