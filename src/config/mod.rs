//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de base de datos, variables de entorno
//! y la política del motor de pronóstico.

pub mod database;
pub mod environment;
pub mod forecast;

pub use database::DatabaseConfig;
pub use environment::EnvironmentConfig;
pub use forecast::{ForecastPolicy, UrgencyThresholds};

use std::str::FromStr;

use crate::utils::errors::{configuration_error, AppResult};

/// Lee una variable con `lookup`; si falta se usa `default`, si no parsea es un error.
pub(crate) fn parse_or<T, F>(lookup: &F, name: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| configuration_error(name, &format!("invalid value '{}'", raw))),
    }
}

/// Lookup sobre las variables de entorno del proceso
pub(crate) fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

#[cfg(test)]
pub(crate) fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let owned: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| {
        owned
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_defaults_and_errors() {
        let lookup = lookup_from(&[("PORT", "8080"), ("EMPTY", "  "), ("BAD", "abc")]);
        assert_eq!(parse_or::<u16, _>(&lookup, "PORT", 3000).unwrap(), 8080);
        assert_eq!(parse_or::<u16, _>(&lookup, "MISSING", 3000).unwrap(), 3000);
        assert_eq!(parse_or::<u16, _>(&lookup, "EMPTY", 3000).unwrap(), 3000);
        assert!(parse_or::<u16, _>(&lookup, "BAD", 3000).is_err());
    }
}
