//! Integration tests for the fiscal calculator: line amounts, desglose,
//! withholding, ISP, and the eligibility checks.

use chrono::NaiveDate;
use factura_es::core::*;
use factura_es::fiscal::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn linea(cantidad: Decimal, precio: Decimal, descuento: Decimal, tipo_iva: TipoIva) -> LineaFactura {
    LineaFactura {
        descripcion: "Ejecución de obra".into(),
        cantidad,
        precio_unitario: precio,
        descuento_porcentaje: descuento,
        tipo_iva,
        causa_exencion: None,
    }
}

#[test]
fn linea_basica_al_21() {
    let resultado = calcular_factura(
        &[linea(dec!(3), dec!(100.00), dec!(0), TipoIva::General)],
        Decimal::ZERO,
        false,
    );

    assert_eq!(resultado.lineas[0].base_linea, dec!(300.00));
    assert_eq!(resultado.lineas[0].cuota_iva, dec!(63.00));
    assert_eq!(resultado.lineas[0].total_linea, dec!(363.00));
    assert_eq!(resultado.total, dec!(363.00));
}

#[test]
fn desglose_dos_tipos_orden_descendente() {
    let resultado = calcular_factura(
        &[
            linea(dec!(3), dec!(100), dec!(0), TipoIva::General),
            linea(dec!(2), dec!(100), dec!(0), TipoIva::Reducido),
        ],
        Decimal::ZERO,
        false,
    );

    assert_eq!(
        resultado.desglose_iva,
        vec![
            DesgloseIva {
                tipo_iva: dec!(21),
                base: dec!(300.00),
                cuota: dec!(63.00),
            },
            DesgloseIva {
                tipo_iva: dec!(10),
                base: dec!(200.00),
                cuota: dec!(20.00),
            },
        ]
    );
    assert_eq!(resultado.base_imponible, dec!(500.00));
    assert_eq!(resultado.total_iva, dec!(83.00));
}

#[test]
fn retencion_del_15_por_ciento() {
    let resultado = calcular_factura(
        &[
            linea(dec!(3), dec!(100), dec!(0), TipoIva::General),
            linea(dec!(2), dec!(100), dec!(0), TipoIva::Reducido),
        ],
        RETENCION_GENERAL,
        false,
    );

    assert_eq!(resultado.total_retencion, dec!(75.00));
    // 500.00 + 83.00 - 75.00
    assert_eq!(resultado.total, dec!(508.00));
}

#[test]
fn isp_colapsa_el_desglose_a_un_grupo_cero() {
    let resultado = calcular_factura(
        &[
            linea(dec!(3), dec!(100), dec!(0), TipoIva::General),
            linea(dec!(2), dec!(100), dec!(0), TipoIva::Reducido),
        ],
        Decimal::ZERO,
        true,
    );

    assert_eq!(
        resultado.desglose_iva,
        vec![DesgloseIva {
            tipo_iva: Decimal::ZERO,
            base: dec!(500.00),
            cuota: dec!(0.00),
        }]
    );
    assert_eq!(resultado.total_iva, dec!(0.00));
    assert_eq!(resultado.total, dec!(500.00));
}

#[test]
fn descuento_por_linea() {
    let resultado = calcular_factura(
        &[linea(dec!(1), dec!(200), dec!(25), TipoIva::General)],
        Decimal::ZERO,
        false,
    );
    assert_eq!(resultado.lineas[0].base_linea, dec!(150.00));
    assert_eq!(resultado.lineas[0].cuota_iva, dec!(31.50));
}

#[test]
fn cuatro_tipos_cuatro_grupos() {
    let resultado = calcular_factura(
        &[
            linea(dec!(1), dec!(100), dec!(0), TipoIva::Exento),
            linea(dec!(1), dec!(100), dec!(0), TipoIva::Superreducido),
            linea(dec!(1), dec!(100), dec!(0), TipoIva::General),
            linea(dec!(1), dec!(100), dec!(0), TipoIva::Reducido),
        ],
        Decimal::ZERO,
        false,
    );

    let tipos: Vec<Decimal> = resultado.desglose_iva.iter().map(|d| d.tipo_iva).collect();
    assert_eq!(tipos, vec![dec!(21), dec!(10), dec!(4), Decimal::ZERO]);
    assert_eq!(resultado.total_iva, dec!(35.00));
}

#[test]
fn recalculo_es_identico() {
    let lineas = vec![
        linea(dec!(7), dec!(33.33), dec!(5), TipoIva::General),
        linea(dec!(2.5), dec!(19.99), dec!(0), TipoIva::Reducido),
    ];
    let a = calcular_factura(&lineas, dec!(7), false);
    let b = calcular_factura(&lineas, dec!(7), false);
    assert_eq!(a, b);
}

#[test]
fn cada_termino_se_redondea_antes_de_combinar() {
    // 1 × 33.335 → base 33.34 (pre-rounded), not 33.335 carried forward.
    let resultado = calcular_factura(
        &[linea(dec!(1), dec!(33.335), dec!(0), TipoIva::General)],
        dec!(15),
        false,
    );
    assert_eq!(resultado.base_imponible, dec!(33.34));
    // 33.34 × 21% = 7.0014 → 7.00; 33.34 × 15% = 5.001 → 5.00
    assert_eq!(resultado.total_iva, dec!(7.00));
    assert_eq!(resultado.total_retencion, dec!(5.00));
    assert_eq!(resultado.total, dec!(35.34));
}

// ── Eligibility ─────────────────────────────────────────────────────────────

#[test]
fn reforma_elegible_y_flujo_de_tipo() {
    let datos = DatosReformaVivienda {
        es_vivienda_particular: true,
        antiguedad_mas_de_dos_anos: true,
        materiales_menos_del_40_por_ciento: true,
        destinatario_es_propietario_o_arrendatario: true,
    };
    let veredicto = puede_aplicar_iva_reducido_reforma(&datos);
    assert!(veredicto.aplica);

    // The caller, not the check, picks the rate.
    let tipo = if veredicto.aplica {
        TipoIva::Reducido
    } else {
        TipoIva::General
    };
    let resultado = calcular_factura(
        &[linea(dec!(1), dec!(1000), dec!(0), tipo)],
        Decimal::ZERO,
        false,
    );
    assert_eq!(resultado.total_iva, dec!(100.00));
}

#[test]
fn reforma_motivo_sigue_el_orden_de_comprobacion() {
    // materials and recipient both fail; materials is checked first
    let datos = DatosReformaVivienda {
        es_vivienda_particular: true,
        antiguedad_mas_de_dos_anos: true,
        materiales_menos_del_40_por_ciento: false,
        destinatario_es_propietario_o_arrendatario: false,
    };
    let veredicto = puede_aplicar_iva_reducido_reforma(&datos);
    assert!(!veredicto.aplica);
    assert_eq!(
        veredicto.motivo.as_deref(),
        Some("Los materiales superan el 40% del coste total")
    );
}

#[test]
fn isp_aplicable_y_calculo_coherente() {
    let veredicto = debe_aplicar_isp(&DatosIsp {
        emisor_es_empresario_construccion: true,
        receptor_es_empresario_construccion: true,
        es_ejecucion_obra: false,
        es_urbanizacion_terrenos: false,
        es_rehabilitacion: true,
    });
    assert!(veredicto.aplica);

    let resultado = calcular_factura(
        &[linea(dec!(10), dec!(85), dec!(0), TipoIva::General)],
        Decimal::ZERO,
        veredicto.aplica,
    );
    assert_eq!(resultado.total_iva, dec!(0.00));
    assert_eq!(resultado.total, dec!(850.00));
}

// ── Legal texts ─────────────────────────────────────────────────────────────

#[test]
fn textos_legales_para_el_renderizador() {
    assert!(texto_legal_isp().contains("inversión del sujeto pasivo"));
    assert!(texto_legal_verifactu().contains("sede electrónica"));

    let fecha = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
    let texto = texto_rectificativa("A", "2026-0031", fecha);
    assert!(texto.contains("A-2026-0031"));
    assert!(texto.contains("01/07/2026"));
}

#[test]
fn resultado_serializa_para_colaboradores() {
    let resultado = calcular_factura(
        &[linea(dec!(3), dec!(100.50), dec!(0), TipoIva::General)],
        dec!(15),
        false,
    );

    let json = serde_json::to_string(&resultado).unwrap();
    let de_vuelta: ResultadoFactura = serde_json::from_str(&json).unwrap();
    assert_eq!(de_vuelta, resultado);
    // Decimals travel as strings to keep exact cents
    assert!(json.contains("\"301.50\""));
}
