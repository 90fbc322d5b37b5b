//! Delegating command wrapper — resolves a companion script next to the
//! running binary, forwards arguments, and propagates the child's exit code.
//!
//! The wrapper is transparent: the child inherits stdin/stdout/stderr
//! unmodified, and exit codes pass through verbatim except for the reserved
//! "script missing" sentinel.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

/// Reserved exit code for "companion script not found at expected location".
/// Chosen to be distinguishable from whatever the script itself returns.
pub const MISSING_SCRIPT: i32 = 2;

/// A fully prepared invocation: interpreter plus its argument list. Args are
/// `OsString` so a non-UTF-8 install path reaches `Command` unmangled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
}

/// Executes an [`Invocation`] and reports the exit code. Production code uses
/// [`Spawn`]; tests substitute a recorder that never launches anything.
pub trait Runner {
    fn run(&self, invocation: &Invocation) -> Result<i32>;
}

/// Real runner — spawns the child with inherited stdio and waits for it.
pub struct Spawn;

impl Runner for Spawn {
    fn run(&self, invocation: &Invocation) -> Result<i32> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .status()
            .with_context(|| format!("failed to launch {}", invocation.program))?;
        Ok(exit_code(status))
    }
}

/// Map an `ExitStatus` to a plain code. A signal-terminated child becomes
/// `128 + signal`, matching shell convention.
fn exit_code(status: std::process::ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

/// One companion script and where to find it.
#[derive(Debug, Clone)]
pub struct Delegate {
    script_name: String,
    interpreter: String,
    base_dir: PathBuf,
}

impl Delegate {
    pub fn new(script_name: &str, interpreter: &str, base_dir: PathBuf) -> Self {
        Delegate {
            script_name: script_name.to_string(),
            interpreter: interpreter.to_string(),
            base_dir,
        }
    }

    /// Absolute path the companion script is expected at.
    pub fn script_path(&self) -> PathBuf {
        self.base_dir.join(&self.script_name)
    }

    /// Build the argument list: interpreter, script, positional path, then
    /// any extra flags in the order given.
    fn invocation(&self, repo_path: &str, extra_flags: &[&str]) -> Invocation {
        let mut args = vec![self.script_path().into_os_string()];
        args.push(OsString::from(repo_path));
        args.extend(extra_flags.iter().map(|f| OsString::from(*f)));
        Invocation {
            program: self.interpreter.clone(),
            args,
        }
    }

    /// Run the companion script against `repo_path` and return its exit code.
    ///
    /// If the script is missing, prints a diagnostic to stderr and returns
    /// [`MISSING_SCRIPT`] without spawning anything.
    pub fn run(&self, repo_path: &str, extra_flags: &[&str], runner: &dyn Runner) -> Result<i32> {
        let script = self.script_path();
        if !script.exists() {
            eprintln!("error: audit script not found: {}", script.display());
            return Ok(MISSING_SCRIPT);
        }
        runner.run(&self.invocation(repo_path, extra_flags))
    }
}

/// Directory companion scripts are resolved in: the directory containing the
/// current executable. Resolved at call time so the binary stays relocatable.
pub fn exe_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("failed to locate current executable")?;
    let dir = exe
        .parent()
        .context("executable has no parent directory")?;
    Ok(dir.to_path_buf())
}
