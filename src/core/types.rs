use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Tipos de IVA vigentes en España, as percentage points.
///
/// The set is closed: any other rate on an invoice is a data-entry error
/// and must be rejected by [`super::validar_lineas`] before calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TipoIva {
    /// 21% — tipo general.
    General,
    /// 10% — tipo reducido (reformas de vivienda > 2 años, entre otros).
    Reducido,
    /// 4% — tipo superreducido.
    Superreducido,
    /// 0% — exento o inversión del sujeto pasivo.
    Exento,
}

impl TipoIva {
    /// Rate in percentage points.
    pub fn porcentaje(&self) -> Decimal {
        match self {
            Self::General => dec!(21),
            Self::Reducido => dec!(10),
            Self::Superreducido => dec!(4),
            Self::Exento => Decimal::ZERO,
        }
    }

    /// Parse from integer percentage points.
    pub fn from_porcentaje(porcentaje: u32) -> Option<Self> {
        match porcentaje {
            21 => Some(Self::General),
            10 => Some(Self::Reducido),
            4 => Some(Self::Superreducido),
            0 => Some(Self::Exento),
            _ => None,
        }
    }
}

/// AEAT invoice type codes used by the Verifactu billing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipoFactura {
    /// F1 — factura completa.
    Completa,
    /// F2 — factura simplificada (sin identificación del destinatario).
    Simplificada,
    /// R1 — rectificativa por error fundado en derecho (Art. 80.Uno/Dos LIVA).
    RectificativaError,
    /// R2 — rectificativa por concurso de acreedores (Art. 80.Tres LIVA).
    RectificativaConcurso,
    /// R3 — rectificativa por crédito incobrable (Art. 80.Cuatro LIVA).
    RectificativaIncobrable,
    /// R4 — rectificativa, resto de causas.
    RectificativaResto,
    /// R5 — rectificativa de factura simplificada.
    RectificativaSimplificada,
}

impl TipoFactura {
    /// AEAT type code string.
    pub fn codigo(&self) -> &'static str {
        match self {
            Self::Completa => "F1",
            Self::Simplificada => "F2",
            Self::RectificativaError => "R1",
            Self::RectificativaConcurso => "R2",
            Self::RectificativaIncobrable => "R3",
            Self::RectificativaResto => "R4",
            Self::RectificativaSimplificada => "R5",
        }
    }

    /// Parse from an AEAT type code string.
    pub fn from_codigo(codigo: &str) -> Option<Self> {
        match codigo {
            "F1" => Some(Self::Completa),
            "F2" => Some(Self::Simplificada),
            "R1" => Some(Self::RectificativaError),
            "R2" => Some(Self::RectificativaConcurso),
            "R3" => Some(Self::RectificativaIncobrable),
            "R4" => Some(Self::RectificativaResto),
            "R5" => Some(Self::RectificativaSimplificada),
            _ => None,
        }
    }

    /// Whether this is a rectificative (corrective) invoice type.
    pub fn es_rectificativa(&self) -> bool {
        matches!(
            self,
            Self::RectificativaError
                | Self::RectificativaConcurso
                | Self::RectificativaIncobrable
                | Self::RectificativaResto
                | Self::RectificativaSimplificada
        )
    }
}

/// One invoice line as entered by the user. Consumed by value; the
/// calculator produces a fresh [`crate::fiscal::ResultadoLinea`] per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineaFactura {
    /// Concepto facturado.
    pub descripcion: String,
    /// Invoiced quantity (must be positive).
    pub cantidad: Decimal,
    /// Net unit price (must be non-negative).
    pub precio_unitario: Decimal,
    /// Line discount, 0–100.
    pub descuento_porcentaje: Decimal,
    /// Stated VAT rate. Overridden to 0% invoice-wide under ISP.
    pub tipo_iva: TipoIva,
    /// Exemption cause text, required by AEAT when the rate is 0% exempt.
    pub causa_exencion: Option<String>,
}

/// Reference to the original invoice being corrected, plus the reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenciaRectificativa {
    /// Serie of the original invoice.
    pub serie: String,
    /// Number of the original invoice within its serie.
    pub numero: String,
    /// Issue date of the original invoice.
    pub fecha: NaiveDate,
    /// Motivo de la rectificación.
    pub motivo: String,
}

/// Invoice-level input record consumed by the fiscal calculator.
///
/// This carries no computed amounts; call
/// [`crate::fiscal::calcular_factura`] with `lineas`,
/// `retencion_porcentaje` and `inversion_sujeto_pasivo` to obtain them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factura {
    /// Serie identifier (uppercase letters and digits).
    pub serie: String,
    /// AEAT invoice type.
    pub tipo: TipoFactura,
    /// Fecha de expedición.
    pub fecha_expedicion: NaiveDate,
    /// Invoice lines.
    pub lineas: Vec<LineaFactura>,
    /// Inversión del sujeto pasivo: forces the effective VAT rate of every
    /// line to 0% (Art. 84.Uno.2º LIVA).
    pub inversion_sujeto_pasivo: bool,
    /// IRPF withholding percentage over the base imponible, 0–100.
    pub retencion_porcentaje: Decimal,
    /// For rectificative types, the invoice being corrected.
    pub rectifica: Option<ReferenciaRectificativa>,
}
