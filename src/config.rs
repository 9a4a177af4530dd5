//! Configuração do orgflow carregada a partir de `orgflow.toml`.
//!
//! A struct [`OrgflowConfig`] contém os parâmetros da CLI de inspeção.
//! Valores não presentes no arquivo usam defaults sensíveis.
//! A variável de ambiente `ORGFLOW_LOG` tem precedência sobre o arquivo.

use serde::Deserialize;
use std::path::Path;

use crate::error::Result;

/// Nome do arquivo procurado no diretório atual.
pub const CONFIG_FILE: &str = "orgflow.toml";

/// Variável de ambiente que sobrescreve `log_level`.
pub const LOG_ENV: &str = "ORGFLOW_LOG";

/// Formato de saída da CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuração de nível superior carregada de `orgflow.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrgflowConfig {
    /// Filtro de log no formato do `EnvFilter` (ex.: "warn", "orgflow=debug").
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Formato padrão de saída quando `--json` não é passado.
    #[serde(default)]
    pub output: OutputFormat,

    /// Habilita cores no terminal.
    #[serde(default = "default_color")]
    pub color: bool,
}

// Valor padrão para o nível de log: "warn".
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_color() -> bool {
    true
}

impl Default for OrgflowConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output: OutputFormat::default(),
            color: default_color(),
        }
    }
}

impl OrgflowConfig {
    /// Carrega a configuração de `orgflow.toml` no diretório atual.
    /// Usa valores padrão se o arquivo não existir.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Carrega a configuração de um caminho explícito (flag `--config`).
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<OrgflowConfig>(&contents)?
        } else {
            Self::default()
        };

        // Variável de ambiente tem precedência sobre o arquivo para o nível de log.
        config.apply_log_override(std::env::var(LOG_ENV).ok().as_deref());

        Ok(config)
    }

    /// Aplica o valor de `ORGFLOW_LOG`. Valor vazio conta como ausente.
    pub fn apply_log_override(&mut self, level: Option<&str>) {
        if let Some(level) = level.map(str::trim).filter(|l| !l.is_empty()) {
            self.log_level = level.to_string();
        }
    }

    /// Filtro efetivo para o subscriber: `--verbose` vence, depois o nível configurado.
    pub fn log_filter(&self, verbose: bool) -> &str {
        if verbose { "debug" } else { &self.log_level }
    }
}
