//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--store-name`, `--invoice-dir`)
//! 2. Environment variables (`RAIRA_*`)
//! 3. Defaults (this file)
//!
//! Currency, locale and the GST rate are fixed and deliberately absent here.

use directories::ProjectDirs;
use serde::Serialize;
use std::path::PathBuf;

/// Heading printed at the top of every invoice.
pub const DEFAULT_STORE_NAME: &str = "RairaTech";

/// Environment variable overriding the store name.
pub const ENV_STORE_NAME: &str = "RAIRA_STORE_NAME";

/// Environment variable overriding the invoice directory.
pub const ENV_INVOICE_DIR: &str = "RAIRA_INVOICE_DIR";

/// Application configuration. Read-only after startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (printed as the invoice heading)
    pub store_name: String,

    /// Where `print` writes documents when no path is given
    pub invoice_dir: PathBuf,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "RairaTech"
    /// - Invoices: `<platform data dir>/invoices`, or `./invoices` when the
    ///   platform has no home directory
    fn default() -> Self {
        ConfigState {
            store_name: DEFAULT_STORE_NAME.to_string(),
            invoice_dir: default_invoice_dir(),
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `RAIRA_STORE_NAME`: Override store name
    /// - `RAIRA_INVOICE_DIR`: Override invoice directory
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup(ENV_STORE_NAME).filter(|s| !s.trim().is_empty()) {
            config.store_name = store_name;
        }

        if let Some(dir) = lookup(ENV_INVOICE_DIR).filter(|s| !s.trim().is_empty()) {
            config.invoice_dir = PathBuf::from(dir);
        }

        config
    }

    /// Applies command line overrides on top of the current values.
    pub fn with_overrides(
        mut self,
        store_name: Option<String>,
        invoice_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(store_name) = store_name {
            self.store_name = store_name;
        }
        if let Some(invoice_dir) = invoice_dir {
            self.invoice_dir = invoice_dir;
        }
        self
    }
}

/// Platform-specific invoice folder.
///
/// - **Linux**: `~/.local/share/billing/invoices`
/// - **macOS**: `~/Library/Application Support/com.rairatech.billing/invoices`
/// - **Windows**: `%APPDATA%\rairatech\billing\data\invoices`
fn default_invoice_dir() -> PathBuf {
    ProjectDirs::from("com", "rairatech", "billing")
        .map(|dirs| dirs.data_dir().join("invoices"))
        .unwrap_or_else(|| PathBuf::from("invoices"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConfigState::from_lookup(|_| None);
        assert_eq!(config.store_name, "RairaTech");
        assert!(config.invoice_dir.ends_with("invoices"));
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(|key| match key {
            ENV_STORE_NAME => Some("Raira Stamps".to_string()),
            ENV_INVOICE_DIR => Some("/tmp/bills".to_string()),
            _ => None,
        });
        assert_eq!(config.store_name, "Raira Stamps");
        assert_eq!(config.invoice_dir, PathBuf::from("/tmp/bills"));
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let config = ConfigState::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config.store_name, DEFAULT_STORE_NAME);
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = ConfigState::from_lookup(|key| {
            (key == ENV_STORE_NAME).then(|| "From Env".to_string())
        })
        .with_overrides(Some("From Flag".to_string()), Some(PathBuf::from("out")));

        assert_eq!(config.store_name, "From Flag");
        assert_eq!(config.invoice_dir, PathBuf::from("out"));
    }
}
