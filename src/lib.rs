//! # factura-es
//!
//! Fiscal core for Spanish freelancer invoicing: IVA and IRPF arithmetic,
//! per-rate VAT breakdown (desglose), reduced-rate and reverse-charge
//! (inversión del sujeto pasivo) eligibility, and NIF/CIF/NIE validation.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Amounts are rounded to 2 decimal places, half away from zero, the way
//! Spanish invoices (and AEAT Verifactu reporting) expect them.
//!
//! ## Quick Start
//!
//! ```rust
//! use factura_es::core::*;
//! use factura_es::fiscal::calcular_factura;
//! use rust_decimal_macros::dec;
//!
//! let lineas = vec![LineaFactura {
//!     descripcion: "Reforma de cocina".into(),
//!     cantidad: dec!(3),
//!     precio_unitario: dec!(100),
//!     descuento_porcentaje: dec!(0),
//!     tipo_iva: TipoIva::General,
//!     causa_exencion: None,
//! }];
//!
//! let resultado = calcular_factura(&lineas, dec!(15), false);
//! assert_eq!(resultado.base_imponible, dec!(300.00));
//! assert_eq!(resultado.total_iva, dec!(63.00));
//! assert_eq!(resultado.total_retencion, dec!(45.00));
//! assert_eq!(resultado.total, dec!(318.00));
//!
//! let v = factura_es::nif::validar_nif("12345678-z");
//! assert!(v.valido);
//! assert_eq!(v.normalizado.as_deref(), Some("12345678Z"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Invoice input records, structural validation, numbering |
//! | `fiscal` (default) | IVA/IRPF calculation, desglose, eligibility checks |
//! | `nif` (default) | NIF/CIF/NIE checksum validation and formatting |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "fiscal")]
pub mod fiscal;

#[cfg(feature = "nif")]
pub mod nif;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
