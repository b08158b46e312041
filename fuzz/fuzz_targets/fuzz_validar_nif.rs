#![no_main]

use factura_es::nif::{formatear_nif, normalizar, validar_nif};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let v = validar_nif(data);
    if v.valido {
        // A valid identifier must survive its own canonical form
        let normalizado = v.normalizado.as_deref().unwrap_or_default();
        assert!(validar_nif(normalizado).valido);
        assert_eq!(normalizar(normalizado), normalizado);
        // Formatting only inserts hyphens
        assert_eq!(normalizar(&formatear_nif(data)), normalizado);
    }
    let _ = formatear_nif(data);
});
