use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::ValidationError;
use super::types::*;

/// Validate invoice lines before handing them to the fiscal calculator.
///
/// The calculator assumes these preconditions hold; out-of-range values
/// are rejected here, not inside the arithmetic. Returns all violations
/// found, not just the first.
pub fn validar_lineas(lineas: &[LineaFactura]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (i, linea) in lineas.iter().enumerate() {
        validar_linea(linea, i, &mut errors);
    }
    errors
}

fn validar_linea(linea: &LineaFactura, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("lineas[{index}]");

    if linea.descripcion.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.descripcion"),
            "la descripción de la operación es obligatoria",
            "Art-6.1.f",
        ));
    }

    if linea.cantidad <= Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.cantidad"),
            format!("la cantidad debe ser mayor que 0, got: {}", linea.cantidad),
        ));
    }

    if linea.precio_unitario.is_sign_negative() {
        errors.push(ValidationError::new(
            format!("{prefix}.precio_unitario"),
            format!(
                "el precio unitario no puede ser negativo, got: {}",
                linea.precio_unitario
            ),
        ));
    }

    if linea.descuento_porcentaje < Decimal::ZERO || linea.descuento_porcentaje > dec!(100) {
        errors.push(ValidationError::new(
            format!("{prefix}.descuento_porcentaje"),
            format!(
                "el descuento debe estar entre 0 y 100, got: {}",
                linea.descuento_porcentaje
            ),
        ));
    }
}

/// Validate a full invoice input record (RD 1619/2012 field rules).
pub fn validar_factura(factura: &Factura) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if factura.serie.is_empty() {
        errors.push(ValidationError::with_rule(
            "serie",
            "la serie es obligatoria",
            "Art-6.1.a",
        ));
    } else if !factura
        .serie
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        errors.push(ValidationError::with_rule(
            "serie",
            format!(
                "la serie solo puede contener letras mayúsculas y números, got: '{}'",
                factura.serie
            ),
            "Art-6.1.a",
        ));
    }

    if factura.lineas.is_empty() {
        errors.push(ValidationError::with_rule(
            "lineas",
            "la factura debe incluir al menos una línea",
            "Art-6.1.f",
        ));
    }
    errors.extend(validar_lineas(&factura.lineas));

    if factura.retencion_porcentaje < Decimal::ZERO || factura.retencion_porcentaje > dec!(100) {
        errors.push(ValidationError::new(
            "retencion_porcentaje",
            format!(
                "la retención debe estar entre 0 y 100, got: {}",
                factura.retencion_porcentaje
            ),
        ));
    }

    match (&factura.rectifica, factura.tipo.es_rectificativa()) {
        (None, true) => {
            errors.push(ValidationError::with_rule(
                "rectifica",
                format!(
                    "las facturas rectificativas ({}) requieren referencia a la factura original y motivo",
                    factura.tipo.codigo()
                ),
                "Art-15.4",
            ));
        }
        (Some(referencia), true) => {
            if referencia.motivo.trim().is_empty() {
                errors.push(ValidationError::with_rule(
                    "rectifica.motivo",
                    "el motivo de la rectificación es obligatorio",
                    "Art-15.4",
                ));
            }
        }
        (Some(_), false) => {
            errors.push(ValidationError::new(
                "rectifica",
                format!(
                    "una factura de tipo {} no puede referenciar una factura rectificada",
                    factura.tipo.codigo()
                ),
            ));
        }
        (None, false) => {}
    }

    errors
}
