mod cli;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Command};
use orgflow::config::{OrgflowConfig, OutputFormat};
use orgflow::state_machine::{
    OnboardingTrail, allowed_transitions, assert_transition, next_step_from,
};
use ui::Report;

/// Exit code for a rejected transition.
const EXIT_INVALID: i32 = 2;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => OrgflowConfig::load_from(path)?,
        None => OrgflowConfig::load()?,
    };

    // ORGFLOW_LOG was already merged into the config.
    let filter = config.log_filter(cli.verbose);
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_ansi(config.color)
                .with_writer(std::io::stderr),
        )
        .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output
    };
    let report = Report::new(format, config.color);

    let code = execute(cli.command, &report);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

/// Run one command and return the process exit code.
fn execute(command: Command, report: &Report) -> i32 {
    match command {
        Command::NextStep { status } => {
            report.step(&status, next_step_from(&status));
            0
        }
        Command::Check { from, to } => {
            let result = assert_transition(&from, &to);
            report.check(&from, &to, &result);
            exit_code(result.is_ok())
        }
        Command::Allowed { status } => {
            report.allowed(&status, allowed_transitions(&status));
            0
        }
        Command::Walk { statuses, org } => {
            let (trail, failure) = OnboardingTrail::replay(org, &statuses);
            if let Some(err) = &failure {
                tracing::warn!(error = %err, "walk stopped");
            }
            report.walk(&trail, failure.as_ref());
            exit_code(failure.is_none())
        }
        Command::Table => {
            report.table();
            0
        }
    }
}

fn exit_code(ok: bool) -> i32 {
    if ok { 0 } else { EXIT_INVALID }
}
