//! Interface de linha de comando do orgflow baseada em clap.
//!
//! Define a struct [`Cli`] com subcomandos [`Command`] (next-step, check,
//! allowed, walk, table) e flags globais (--json, --verbose, --config).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// orgflow — inspeção do fluxo de onboarding de organizações parceiras.
#[derive(Debug, Parser)]
#[command(name = "orgflow", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Emite a saída em JSON em vez de texto.
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    /// Habilita saída detalhada (verbose).
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Caminho alternativo para o arquivo de configuração.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Mostra a etapa de onboarding para um status.
    NextStep {
        /// Status atual da organização.
        status: String,
    },

    /// Valida uma transição de status (código de saída 2 se inválida).
    Check {
        /// Status atual.
        from: String,
        /// Status proposto.
        to: String,
    },

    /// Lista os status alcançáveis a partir de um status.
    Allowed {
        /// Status atual.
        status: String,
    },

    /// Reproduz uma sequência de status a partir de `email_pending`.
    Walk {
        /// Status na ordem em que devem ser aplicados.
        #[arg(required = true)]
        statuses: Vec<String>,

        /// Identificador da organização usado nos registros de auditoria.
        #[arg(long, default_value = "local")]
        org: String,
    },

    /// Imprime a tabela completa de transições.
    Table,
}
