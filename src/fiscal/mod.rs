//! Cálculo fiscal: IVA, retención IRPF, desglose, and eligibility checks.
//!
//! Every function here is pure and synchronous: it consumes plain input
//! records and returns freshly allocated results, so concurrent callers
//! need no coordination.
//!
//! # Example
//!
//! ```
//! use factura_es::core::{LineaFactura, TipoIva};
//! use factura_es::fiscal::*;
//! use rust_decimal_macros::dec;
//!
//! let lineas = vec![LineaFactura {
//!     descripcion: "Albañilería".into(),
//!     cantidad: dec!(3),
//!     precio_unitario: dec!(100),
//!     descuento_porcentaje: dec!(0),
//!     tipo_iva: TipoIva::General,
//!     causa_exencion: None,
//! }];
//!
//! let resultado = calcular_factura(&lineas, dec!(0), false);
//! assert_eq!(resultado.total, dec!(363.00));
//!
//! let isp = debe_aplicar_isp(&DatosIsp {
//!     emisor_es_empresario_construccion: true,
//!     receptor_es_empresario_construccion: true,
//!     es_ejecucion_obra: true,
//!     es_urbanizacion_terrenos: false,
//!     es_rehabilitacion: false,
//! });
//! assert!(isp.aplica);
//! ```

mod calculo;
mod elegibilidad;
mod textos;

pub use calculo::{
    DesgloseIva, RETENCION_GENERAL, RETENCION_REDUCIDA, ResultadoFactura, ResultadoLinea,
    calcular_cuota_iva, calcular_factura, calcular_importe_linea, calcular_retencion_irpf,
    redondear,
};
pub use elegibilidad::{
    DatosIsp, DatosReformaVivienda, Elegibilidad, debe_aplicar_isp,
    puede_aplicar_iva_reducido_reforma,
};
pub use textos::{texto_legal_isp, texto_legal_verifactu, texto_rectificativa};
