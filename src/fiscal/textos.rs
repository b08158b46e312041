//! Legal disclaimer texts printed on invoices.
//!
//! The calculator itself never emits these; the rendering layer picks
//! the right one from the invoice's flags and desglose.

use chrono::NaiveDate;

/// Mandatory disclaimer for invoices under inversión del sujeto pasivo.
pub fn texto_legal_isp() -> &'static str {
    "Operación con inversión del sujeto pasivo conforme al artículo 84.Uno.2º \
     de la Ley 37/1992 del IVA"
}

/// Disclaimer for invoices reported through Verifactu.
pub fn texto_legal_verifactu() -> &'static str {
    "Factura verificable en la sede electrónica de la AEAT"
}

/// Reference text for a rectificative invoice, naming the corrected one.
pub fn texto_rectificativa(serie: &str, numero: &str, fecha: NaiveDate) -> String {
    format!(
        "Factura rectificativa de la factura {serie}-{numero} de fecha {}",
        fecha.format("%d/%m/%Y")
    )
}
