//! Eligibility checks: reduced-rate renovation VAT and inversión del
//! sujeto pasivo (ISP).
//!
//! Both checks are advisory. They never select a rate or set the ISP flag
//! themselves; the caller consults them, shows the returned motivo to
//! the user, and decides. Every combination of inputs yields a verdict,
//! never an error.

use serde::{Deserialize, Serialize};

/// Verdict of an eligibility check. When it does not apply, `motivo`
/// carries the first failing requirement, suitable for direct display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elegibilidad {
    /// Whether the regime applies.
    pub aplica: bool,
    /// First failing requirement, in fixed check order.
    pub motivo: Option<String>,
}

impl Elegibilidad {
    fn cumple() -> Self {
        Self {
            aplica: true,
            motivo: None,
        }
    }

    fn incumple(motivo: &str) -> Self {
        Self {
            aplica: false,
            motivo: Some(motivo.to_string()),
        }
    }
}

/// Facts about a renovation job, gathered from the user.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DatosReformaVivienda {
    /// The dwelling is a private residence, not business premises.
    pub es_vivienda_particular: bool,
    /// Construction finished more than 2 years ago.
    pub antiguedad_mas_de_dos_anos: bool,
    /// Materials are under 40% of the total job cost.
    pub materiales_menos_del_40_por_ciento: bool,
    /// The invoice recipient owns or rents the dwelling.
    pub destinatario_es_propietario_o_arrendatario: bool,
}

/// Whether a renovation can be invoiced at the 10% reduced rate instead
/// of 21% (Art. 91.Uno.2.10º LIVA). All four requirements must hold;
/// they are checked in the listed order and the first failure is the
/// returned motivo.
pub fn puede_aplicar_iva_reducido_reforma(datos: &DatosReformaVivienda) -> Elegibilidad {
    if !datos.es_vivienda_particular {
        return Elegibilidad::incumple(
            "No es vivienda particular (local comercial, oficina, etc.)",
        );
    }

    if !datos.antiguedad_mas_de_dos_anos {
        return Elegibilidad::incumple("La vivienda tiene menos de 2 años de antigüedad");
    }

    if !datos.materiales_menos_del_40_por_ciento {
        return Elegibilidad::incumple("Los materiales superan el 40% del coste total");
    }

    if !datos.destinatario_es_propietario_o_arrendatario {
        return Elegibilidad::incumple("El destinatario no es propietario ni arrendatario");
    }

    Elegibilidad::cumple()
}

/// Facts about an operation between construction-sector parties.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DatosIsp {
    /// The issuer is a construction-sector business or professional.
    pub emisor_es_empresario_construccion: bool,
    /// The recipient is a construction-sector business or professional.
    pub receptor_es_empresario_construccion: bool,
    /// The operation is a construction-work execution.
    pub es_ejecucion_obra: bool,
    /// The operation is land urbanization.
    pub es_urbanizacion_terrenos: bool,
    /// The operation is building rehabilitation.
    pub es_rehabilitacion: bool,
}

/// Whether inversión del sujeto pasivo applies (Art. 84.Uno.2º.f LIVA):
/// both parties must be construction-sector businesses and the operation
/// one of {ejecución de obra, urbanización, rehabilitación}.
pub fn debe_aplicar_isp(datos: &DatosIsp) -> Elegibilidad {
    if !datos.emisor_es_empresario_construccion {
        return Elegibilidad::incumple("El emisor no es del sector construcción");
    }

    if !datos.receptor_es_empresario_construccion {
        return Elegibilidad::incumple(
            "El receptor no es empresario del sector construcción",
        );
    }

    if !datos.es_ejecucion_obra && !datos.es_urbanizacion_terrenos && !datos.es_rehabilitacion {
        return Elegibilidad::incumple(
            "No es ejecución de obra, urbanización ni rehabilitación",
        );
    }

    Elegibilidad::cumple()
}
