//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del servidor HTTP.

use std::time::Duration;

use super::{parse_or, process_env};
use crate::utils::errors::AppResult;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub request_timeout: Duration,
    /// `true` cuando FLEET_STORE=memory: se sirve sin base de datos
    pub in_memory_store: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            request_timeout: Duration::from_secs(30),
            in_memory_store: false,
        }
    }
}

impl EnvironmentConfig {
    /// Cargar desde las variables de entorno del proceso
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let timeout_secs: u64 = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30)?;

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            host: lookup("HOST").unwrap_or(defaults.host),
            cors_origins,
            request_timeout: Duration::from_secs(timeout_secs),
            in_memory_store: lookup("FLEET_STORE")
                .map(|v| v.trim().eq_ignore_ascii_case("memory"))
                .unwrap_or(false),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::lookup_from;

    #[test]
    fn test_defaults_when_unset() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.is_development());
        assert_eq!(config.server_url(), "0.0.0.0:3000");
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(!config.in_memory_store);
    }

    #[test]
    fn test_reads_overrides() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "production"),
            ("PORT", "8080"),
            ("CORS_ORIGINS", "https://fleet.local, https://ops.local,"),
            ("FLEET_STORE", "Memory"),
        ]))
        .unwrap();
        assert!(config.is_production());
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins, vec!["https://fleet.local", "https://ops.local"]);
        assert!(config.in_memory_store);
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        assert!(EnvironmentConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).is_err());
    }
}
