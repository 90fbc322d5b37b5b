mod config;
mod control;
mod delegate;
mod harness;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "repo-audit", version, about = "Delegating wrappers for repository audit scripts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the control metalayer audit (audit_control.sh)
    Control {
        /// Repository path to audit
        #[arg(default_value = ".")]
        path: String,
        /// Forward --strict to the audit script
        #[arg(long)]
        strict: bool,
    },
    /// Run the harness engineering audit (audit_harness.sh)
    Harness {
        /// Repository path to audit
        #[arg(default_value = ".")]
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = config::load().and_then(|config| match cli.command {
        Commands::Control { path, strict } => control::run(&path, strict, &config),
        Commands::Harness { path } => harness::run(&path, &config),
    });

    // Only the entry point terminates the process — the run functions return
    // codes so they stay testable.
    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {:#}", err);
            std::process::exit(1);
        }
    }
}
