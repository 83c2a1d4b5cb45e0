//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean al schema PostgreSQL
//! de la flota y los tipos derivados que produce el motor de pronóstico.

use thiserror::Error;

/// Error al convertir un texto libre en una categoría cerrada
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {category} '{value}'")]
pub struct ParseCategoryError {
    pub category: &'static str,
    pub value: String,
}

impl ParseCategoryError {
    pub fn new(category: &'static str, value: &str) -> Self {
        Self {
            category,
            value: value.to_string(),
        }
    }
}

/// Implementa `as_str`, `Display`, `FromStr` y `TryFrom<String>` para una
/// categoría cerrada a partir de su tabla de nombres.
macro_rules! closed_category {
    ($ty:ident, $label:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::models::ParseCategoryError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value.trim().to_ascii_lowercase().as_str() {
                    $($name => Ok($ty::$variant),)+
                    _ => Err($crate::models::ParseCategoryError::new($label, value)),
                }
            }
        }

        impl TryFrom<String> for $ty {
            type Error = $crate::models::ParseCategoryError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

pub(crate) use closed_category;

pub mod vehicle;
pub mod maintenance;
pub mod mileage;
pub mod forecast;
