//! Saída de terminal do orgflow — texto colorido ou JSON.
//!
//! Usa a crate `console` para estilização com cores. O [`Report`] concentra
//! toda a escrita no stdout para que `main` apenas decida o que mostrar.

use console::Style;
use serde_json::json;

use orgflow::OrgflowError;
use orgflow::config::OutputFormat;
use orgflow::state_machine::{OnboardingStep, OnboardingTrail, OrganizationStatus, StatusMachine};

/// Escritor de resultados da CLI.
///
/// Sucesso é mostrado em verde, falha em vermelho e status neutros em amarelo.
pub struct Report {
    format: OutputFormat,
    green: Style,
    red: Style,
    yellow: Style,
    dim: Style,
}

impl Report {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        let style = |s: Style| if color { s } else { Style::new() };
        Self {
            format,
            green: style(Style::new().green().bold()),
            red: style(Style::new().red().bold()),
            yellow: style(Style::new().yellow()),
            dim: style(Style::new().dim()),
        }
    }

    /// Resultado de `next-step`.
    pub fn step(&self, status: &str, step: OnboardingStep) {
        match self.format {
            OutputFormat::Json => print_json(&json!({ "status": status, "step": step })),
            OutputFormat::Text => println!("{}", self.green.apply_to(step)),
        }
    }

    /// Resultado de `check`.
    pub fn check(&self, from: &str, to: &str, result: &Result<(), OrgflowError>) {
        match self.format {
            OutputFormat::Json => {
                let error = result.as_ref().err().map(|e| {
                    json!({ "code": e.code(), "message": e.to_string() })
                });
                print_json(&json!({
                    "from": from,
                    "to": to,
                    "allowed": result.is_ok(),
                    "error": error,
                }));
            }
            OutputFormat::Text => match result {
                Ok(()) => println!("  {} {from} → {to}", self.green.apply_to("✓")),
                Err(err) => println!("  {} {err}", self.red.apply_to("✗")),
            },
        }
    }

    /// Resultado de `allowed`.
    pub fn allowed(&self, status: &str, targets: &[OrganizationStatus]) {
        match self.format {
            OutputFormat::Json => print_json(&json!({ "status": status, "allowed": targets })),
            OutputFormat::Text if targets.is_empty() => {
                println!("  {} no transitions from {status}", self.dim.apply_to("∅"));
            }
            OutputFormat::Text => {
                for target in targets {
                    println!("  {status} → {}", self.yellow.apply_to(target));
                }
            }
        }
    }

    /// Resultado de `walk`: cada mudança registrada e, se houver, o erro que interrompeu.
    pub fn walk(&self, trail: &OnboardingTrail, failure: Option<&OrgflowError>) {
        match self.format {
            OutputFormat::Json => {
                print_json(&json!({
                    "trail": trail,
                    "next_step": trail.next_step(),
                    "error": failure.map(|e| e.to_string()),
                }));
            }
            OutputFormat::Text => {
                println!(
                    "{}",
                    self.dim.apply_to(format!("organization {}", trail.organization_id()))
                );
                for change in trail.history() {
                    println!(
                        "  {} {} → {}",
                        self.green.apply_to("✓"),
                        change.from,
                        change.to
                    );
                }
                if let Some(err) = failure {
                    println!("  {} {err}", self.red.apply_to("✗"));
                }
                println!(
                    "  status {} · next step {}",
                    self.yellow.apply_to(trail.current()),
                    self.green.apply_to(trail.next_step())
                );
            }
        }
    }

    /// Resultado de `table`.
    pub fn table(&self) {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<_> = OrganizationStatus::ALL
                    .into_iter()
                    .map(|status| {
                        json!({
                            "from": status,
                            "allowed": StatusMachine::allowed_from(status),
                            "terminal": status.is_terminal(),
                            "step": status.next_step(),
                        })
                    })
                    .collect();
                print_json(&json!(rows));
            }
            OutputFormat::Text => {
                for status in OrganizationStatus::ALL {
                    let allowed = StatusMachine::allowed_from(status);
                    let targets = if allowed.is_empty() {
                        self.dim.apply_to("(terminal)".to_string()).to_string()
                    } else {
                        allowed
                            .iter()
                            .map(|s| self.yellow.apply_to(s).to_string())
                            .collect::<Vec<_>>()
                            .join(", ")
                    };
                    println!("  {:<18} → {targets}", status.as_str());
                }
            }
        }
    }
}

fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}
