use serde::{Deserialize, Serialize};

/// Control letter table for NIF/NIE: index = number mod 23.
/// Order is fixed by Orden del Ministerio del Interior; do not touch.
const NIF_LETTERS: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

/// Valid CIF organisation-type leading letters.
const CIF_ORG_LETTERS: &[u8] = b"ABCDEFGHJNPQRSUVW";

/// Classification of a Spanish tax identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipoIdentificacion {
    /// Persona física: 8 digits + control letter.
    Nif,
    /// Foreign resident: X/Y/Z + 7 digits + control letter.
    Nie,
    /// Legal entity: organisation letter + 7 digits + control character.
    Cif,
}

impl TipoIdentificacion {
    /// NIF and NIE identify natural persons.
    pub fn es_persona_fisica(&self) -> bool {
        matches!(self, Self::Nif | Self::Nie)
    }
}

/// Outcome of validating a tax identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidacionNif {
    /// Whether the identifier is well-formed and its checksum matches.
    pub valido: bool,
    /// Format classification, set whenever the shape matched one of the
    /// three formats (even if the checksum then failed).
    pub tipo: Option<TipoIdentificacion>,
    /// Canonical form (uppercase, no separators), only when valid.
    pub normalizado: Option<String>,
    /// Display-ready reason when invalid.
    pub mensaje: Option<String>,
}

impl ValidacionNif {
    fn valido(tipo: TipoIdentificacion, normalizado: String) -> Self {
        Self {
            valido: true,
            tipo: Some(tipo),
            normalizado: Some(normalizado),
            mensaje: None,
        }
    }

    fn invalido(tipo: Option<TipoIdentificacion>, mensaje: impl Into<String>) -> Self {
        Self {
            valido: false,
            tipo,
            normalizado: None,
            mensaje: Some(mensaje.into()),
        }
    }
}

/// Canonical form: uppercase, whitespace and hyphens stripped.
pub fn normalizar(nif: &str) -> String {
    nif.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Validate a NIF, NIE or CIF, classifying by shape in that order.
pub fn validar_nif(nif: &str) -> ValidacionNif {
    let normalizado = normalizar(nif);
    if normalizado.is_empty() {
        return ValidacionNif::invalido(None, "NIF/CIF vacío");
    }

    let bytes = normalizado.as_bytes();
    if bytes.len() == 9 {
        // NIF: 8 digits + letter
        if bytes[..8].iter().all(u8::is_ascii_digit) && bytes[8].is_ascii_uppercase() {
            return validar_letra_nif(numero(&bytes[..8]), bytes[8], TipoIdentificacion::Nif, normalizado);
        }

        // NIE: X/Y/Z + 7 digits + letter
        if matches!(bytes[0], b'X' | b'Y' | b'Z')
            && bytes[1..8].iter().all(u8::is_ascii_digit)
            && bytes[8].is_ascii_uppercase()
        {
            // X→0, Y→1, Z→2: contiguous in ASCII, so a subtraction does it
            let prefijo = u32::from(bytes[0] - b'X');
            let completo = prefijo * 10_000_000 + numero(&bytes[1..8]);
            return validar_letra_nif(completo, bytes[8], TipoIdentificacion::Nie, normalizado);
        }

        // CIF: organisation letter + 7 digits + control digit or letter A–J
        if CIF_ORG_LETTERS.contains(&bytes[0])
            && bytes[1..8].iter().all(u8::is_ascii_digit)
            && (bytes[8].is_ascii_digit() || (b'A'..=b'J').contains(&bytes[8]))
        {
            let bytes_cif = normalizado.clone().into_bytes();
            return validar_cif(&bytes_cif, normalizado);
        }
    }

    ValidacionNif::invalido(None, "Formato de NIF/CIF/NIE no reconocido")
}

/// Parse a run of ASCII digits; callers guarantee at most 8 of them.
fn numero(digitos: &[u8]) -> u32 {
    digitos
        .iter()
        .fold(0u32, |n, b| n * 10 + u32::from(b - b'0'))
}

fn validar_letra_nif(
    numero: u32,
    letra: u8,
    tipo: TipoIdentificacion,
    normalizado: String,
) -> ValidacionNif {
    let esperada = NIF_LETTERS[(numero % 23) as usize] as char;
    if letra as char == esperada {
        ValidacionNif::valido(tipo, normalizado)
    } else {
        ValidacionNif::invalido(
            Some(tipo),
            format!("Letra de control incorrecta. Debería ser {esperada}"),
        )
    }
}

/// Which form the CIF control character must take, by organisation letter.
/// This is a fixed legal classification, kept as a single lookup so it
/// can be audited against the source table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ControlCif {
    /// Must be the control letter (K, P, Q, R, S, N, W).
    Letra,
    /// Must be the control digit (A, B, E, H).
    Digito,
    /// Either representation is accepted.
    Ambas,
}

fn control_cif(letra_org: u8) -> ControlCif {
    match letra_org {
        b'K' | b'P' | b'Q' | b'R' | b'S' | b'N' | b'W' => ControlCif::Letra,
        b'A' | b'B' | b'E' | b'H' => ControlCif::Digito,
        _ => ControlCif::Ambas,
    }
}

/// Luhn-style control digit over the 7 CIF digits: even positions
/// (0-indexed) doubled with over-9 reduced by 9, odd positions plain.
fn digito_control_cif(digitos: &[u8]) -> u32 {
    let mut suma = 0u32;
    for (i, b) in digitos.iter().enumerate() {
        let d = u32::from(b - b'0');
        if i % 2 == 0 {
            let doble = d * 2;
            suma += if doble > 9 { doble - 9 } else { doble };
        } else {
            suma += d;
        }
    }
    (10 - (suma % 10)) % 10
}

/// Letter form of a CIF control digit: A=1 … I=9, J=0.
fn letra_control_cif(digito: u32) -> char {
    if digito == 0 {
        'J'
    } else {
        char::from(b'@' + digito as u8)
    }
}

fn validar_cif(bytes: &[u8], normalizado: String) -> ValidacionNif {
    let digito = digito_control_cif(&bytes[1..8]);
    let como_digito = char::from(b'0' + digito as u8);
    let como_letra = letra_control_cif(digito);
    let control = bytes[8] as char;

    let (ok, esperado) = match control_cif(bytes[0]) {
        ControlCif::Letra => (control == como_letra, como_letra.to_string()),
        ControlCif::Digito => (control == como_digito, como_digito.to_string()),
        ControlCif::Ambas => (
            control == como_letra || control == como_digito,
            format!("{como_digito} o {como_letra}"),
        ),
    };

    if ok {
        ValidacionNif::valido(TipoIdentificacion::Cif, normalizado)
    } else {
        ValidacionNif::invalido(
            Some(TipoIdentificacion::Cif),
            format!("Dígito de control del CIF incorrecto. Debería ser {esperado}"),
        )
    }
}

/// Whether the identifier belongs to a natural person (NIF or NIE).
/// Derived from the shape classification alone.
pub fn es_persona_fisica(nif: &str) -> bool {
    validar_nif(nif)
        .tipo
        .is_some_and(|t| t.es_persona_fisica())
}

/// Whether the identifier belongs to a legal entity (CIF).
pub fn es_empresa(nif: &str) -> bool {
    validar_nif(nif).tipo == Some(TipoIdentificacion::Cif)
}
