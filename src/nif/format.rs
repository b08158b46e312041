use super::validate::{TipoIdentificacion, validar_nif};

/// Format a tax identifier for display, inserting hyphens at the
/// canonical positions. A pure presentation transform: if the input does
/// not validate, it is returned unchanged.
pub fn formatear_nif(nif: &str) -> String {
    let v = validar_nif(nif);
    let (Some(tipo), Some(normalizado)) = (v.tipo, v.normalizado) else {
        return nif.to_string();
    };

    match tipo {
        TipoIdentificacion::Nif => format!("{}-{}", &normalizado[..8], &normalizado[8..]),
        TipoIdentificacion::Nie | TipoIdentificacion::Cif => format!(
            "{}-{}-{}",
            &normalizado[..1],
            &normalizado[1..8],
            &normalizado[8..]
        ),
    }
}
