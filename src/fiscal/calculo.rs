use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::core::LineaFactura;

/// Retención IRPF general para profesionales (%).
pub const RETENCION_GENERAL: Decimal = dec!(15);

/// Retención IRPF reducida — nuevos autónomos, primeros 3 años (%).
pub const RETENCION_REDUCIDA: Decimal = dec!(7);

/// Amounts computed for one invoice line, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultadoLinea {
    /// Taxable base: cantidad × precio, less discount, rounded.
    pub base_linea: Decimal,
    /// VAT amount at the line's effective rate, rounded.
    pub cuota_iva: Decimal,
    /// base_linea + cuota_iva, rounded.
    pub total_linea: Decimal,
}

/// One row of the per-rate VAT breakdown (desglose de IVA).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesgloseIva {
    /// Effective VAT rate in percentage points.
    pub tipo_iva: Decimal,
    /// Sum of line bases at this rate, re-rounded after summation.
    pub base: Decimal,
    /// Sum of line VAT amounts at this rate, re-rounded after summation.
    pub cuota: Decimal,
}

/// Full invoice calculation: per-line amounts, desglose, and totals.
///
/// Invariant: `total == redondear(base_imponible + total_iva - total_retencion)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultadoFactura {
    /// One result per input line, order preserved.
    pub lineas: Vec<ResultadoLinea>,
    /// Sum of line bases, re-rounded after summation.
    pub base_imponible: Decimal,
    /// One entry per distinct effective rate, sorted by rate descending.
    pub desglose_iva: Vec<DesgloseIva>,
    /// Sum of desglose cuotas, rounded.
    pub total_iva: Decimal,
    /// IRPF withholding over the base imponible, rounded.
    pub total_retencion: Decimal,
    /// base_imponible + total_iva - total_retencion, rounded.
    pub total: Decimal,
}

/// Round to 2 decimal places, half away from zero (euro commercial
/// rounding). Every monetary intermediate goes through this; no
/// banker's rounding, no unrounded running sums.
pub fn redondear(valor: Decimal) -> Decimal {
    valor.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Line base amount: `cantidad × precio × (1 - descuento/100)`, rounded.
///
/// Inputs must already have passed [`crate::core::validar_lineas`];
/// out-of-range values are a contract violation.
pub fn calcular_importe_linea(
    cantidad: Decimal,
    precio_unitario: Decimal,
    descuento_porcentaje: Decimal,
) -> Decimal {
    debug_assert!(cantidad > Decimal::ZERO, "cantidad must be positive");
    debug_assert!(
        !precio_unitario.is_sign_negative(),
        "precio_unitario must be non-negative"
    );
    debug_assert!(
        descuento_porcentaje >= Decimal::ZERO && descuento_porcentaje <= dec!(100),
        "descuento must be within [0, 100]"
    );

    let subtotal = cantidad * precio_unitario;
    let descuento = subtotal * descuento_porcentaje / dec!(100);
    redondear(subtotal - descuento)
}

/// VAT amount for a base at a rate in percentage points, rounded.
pub fn calcular_cuota_iva(base: Decimal, tipo_iva: Decimal) -> Decimal {
    redondear(base * tipo_iva / dec!(100))
}

/// IRPF withholding over the base imponible, rounded. Zero when the
/// percentage is zero.
pub fn calcular_retencion_irpf(base: Decimal, porcentaje: Decimal) -> Decimal {
    redondear(base * porcentaje / dec!(100))
}

/// Compute all invoice amounts from the lines and invoice-level flags.
///
/// When `inversion_sujeto_pasivo` is set, the effective VAT rate of every
/// line is forced to 0% regardless of its stated rate (Art. 84.Uno.2º
/// LIVA); the desglose then contains exactly one 0% entry covering the
/// whole base imponible.
///
/// Each line is rounded independently before aggregation and every
/// aggregate is re-rounded after summation, so recomputation from the
/// same inputs is bit-identical.
pub fn calcular_factura(
    lineas: &[LineaFactura],
    retencion_porcentaje: Decimal,
    inversion_sujeto_pasivo: bool,
) -> ResultadoFactura {
    let tipo_efectivo = |linea: &LineaFactura| {
        if inversion_sujeto_pasivo {
            Decimal::ZERO
        } else {
            linea.tipo_iva.porcentaje()
        }
    };

    let lineas_calculadas: Vec<ResultadoLinea> = lineas
        .iter()
        .map(|linea| {
            let base_linea = calcular_importe_linea(
                linea.cantidad,
                linea.precio_unitario,
                linea.descuento_porcentaje,
            );
            let cuota_iva = calcular_cuota_iva(base_linea, tipo_efectivo(linea));
            ResultadoLinea {
                base_linea,
                cuota_iva,
                total_linea: redondear(base_linea + cuota_iva),
            }
        })
        .collect();

    let base_imponible = redondear(lineas_calculadas.iter().map(|l| l.base_linea).sum());

    // Group by effective rate, keeping first-encounter order so the later
    // descending sort is deterministic (stable sort preserves it on ties).
    let mut grupos: Vec<(Decimal, Decimal, Decimal)> = Vec::new();
    for (linea, calculada) in lineas.iter().zip(&lineas_calculadas) {
        let tipo = tipo_efectivo(linea);
        match grupos.iter_mut().find(|(t, _, _)| *t == tipo) {
            Some((_, base, cuota)) => {
                *base += calculada.base_linea;
                *cuota += calculada.cuota_iva;
            }
            None => grupos.push((tipo, calculada.base_linea, calculada.cuota_iva)),
        }
    }

    let mut desglose_iva: Vec<DesgloseIva> = grupos
        .into_iter()
        .map(|(tipo_iva, base, cuota)| DesgloseIva {
            tipo_iva,
            base: redondear(base),
            cuota: redondear(cuota),
        })
        .collect();
    // Mayor a menor
    desglose_iva.sort_by(|a, b| b.tipo_iva.cmp(&a.tipo_iva));

    let total_iva = redondear(desglose_iva.iter().map(|d| d.cuota).sum());
    let total_retencion = calcular_retencion_irpf(base_imponible, retencion_porcentaje);
    let total = redondear(base_imponible + total_iva - total_retencion);

    ResultadoFactura {
        lineas: lineas_calculadas,
        base_imponible,
        desglose_iva,
        total_iva,
        total_retencion,
        total,
    }
}
