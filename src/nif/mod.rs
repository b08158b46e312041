//! Validación de NIF/CIF/NIE españoles.
//!
//! Three tax-identifier formats, each with its own checksum:
//!
//! - **NIF** — natural persons: 8 digits + control letter.
//! - **NIE** — foreign residents: X/Y/Z + 7 digits + control letter.
//! - **CIF** — legal entities: organisation letter + 7 digits + control
//!   character (digit or letter, depending on the organisation type).
//!
//! Validation is a total function: a mistyped ID is an expected,
//! user-facing outcome and comes back as a structured [`ValidacionNif`]
//! with a display-ready message, never as an error.
//!
//! # Example
//!
//! ```
//! use factura_es::nif::*;
//!
//! let v = validar_nif("12345678-z");
//! assert!(v.valido);
//! assert_eq!(v.tipo, Some(TipoIdentificacion::Nif));
//! assert_eq!(v.normalizado.as_deref(), Some("12345678Z"));
//! assert_eq!(formatear_nif("12345678z"), "12345678-Z");
//! ```

mod format;
mod validate;

pub use format::formatear_nif;
pub use validate::{
    TipoIdentificacion, ValidacionNif, es_empresa, es_persona_fisica, normalizar, validar_nif,
};
