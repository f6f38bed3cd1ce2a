use serde::Deserialize;

use crate::descriptor::coefficients::{
    Coefficients,
    CoefficientsLinear
};

/// 轉換方法描述紀錄：原始類型標籤加上各類型專屬的選配欄位。
/// 欄位齊備與否的檢查屬於 dispatcher 的建構責任，不在紀錄層。
#[derive(Debug, Clone, Deserialize)]
pub struct MethodDescriptor {
    name: String,
    conversion_type: String,
    #[serde(default)]
    coeffs: Option<Coefficients>,
    #[serde(default)]
    coeffs_linear: Option<CoefficientsLinear>,
    #[serde(default)]
    table_ref: Option<String>,
    #[serde(default)]
    pairs: Option<Vec<(f64, f64)>>,
}

impl MethodDescriptor {
    pub fn new(name: String, conversion_type: String) -> MethodDescriptor {
        MethodDescriptor {
            name,
            conversion_type,
            coeffs: None,
            coeffs_linear: None,
            table_ref: None,
            pairs: None,
        }
    }

    pub fn identical(name: String) -> MethodDescriptor {
        MethodDescriptor::new(name, "IDENTICAL".to_owned())
    }

    pub fn linear(name: String, coeffs: CoefficientsLinear) -> MethodDescriptor {
        let mut descriptor = MethodDescriptor::new(name, "LINEAR".to_owned());
        descriptor.coeffs_linear = Some(coeffs);
        descriptor
    }

    pub fn rat_func(name: String, coeffs: Coefficients) -> MethodDescriptor {
        let mut descriptor = MethodDescriptor::new(name, "RAT_FUNC".to_owned());
        descriptor.coeffs = Some(coeffs);
        descriptor
    }

    pub fn tab_verb(name: String, table_ref: String) -> MethodDescriptor {
        let mut descriptor = MethodDescriptor::new(name, "TAB_VERB".to_owned());
        descriptor.table_ref = Some(table_ref);
        descriptor
    }

    pub fn tab_intp(name: String, pairs: Vec<(f64, f64)>) -> MethodDescriptor {
        let mut descriptor = MethodDescriptor::new(name, "TAB_INTP".to_owned());
        descriptor.pairs = Some(pairs);
        descriptor
    }

    pub fn tab_nointp(name: String, pairs: Vec<(f64, f64)>) -> MethodDescriptor {
        let mut descriptor = MethodDescriptor::new(name, "TAB_NOINTP".to_owned());
        descriptor.pairs = Some(pairs);
        descriptor
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn conversion_type(&self) -> &str {
        &self.conversion_type
    }

    pub fn coeffs(&self) -> Option<&Coefficients> {
        self.coeffs.as_ref()
    }

    pub fn coeffs_linear(&self) -> Option<&CoefficientsLinear> {
        self.coeffs_linear.as_ref()
    }

    pub fn table_ref(&self) -> Option<&str> {
        self.table_ref.as_deref()
    }

    pub fn pairs(&self) -> Option<&[(f64, f64)]> {
        self.pairs.as_deref()
    }
}
