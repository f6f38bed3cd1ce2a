use crate::conversion::conversionerror::ConversionError;
use crate::conversion::identical::Identical;
use crate::conversion::linear::Linear;
use crate::conversion::physicalvalue::PhysicalValue;
use crate::conversion::ratfunc::RatFunc;
use crate::conversion::tabverb::TabVerb;
use crate::conversion::tabverbrange::TabVerbRange;
use crate::descriptor::methoddescriptor::MethodDescriptor;
use crate::descriptor::verbaltable::{
    VerbalRangeTable,
    VerbalTable
};
use crate::math::interpolate::Interpolate1D;
use crate::math::lookup::Lookup;

// ─────────────────────────────────────────────────────────────────────────────
// TableResolver
// ─────────────────────────────────────────────────────────────────────────────

/// 外部轉換表解析能力：依名稱取得已解析的口語轉換表。
/// 引擎不碰任何儲存技術，由呼叫端注入實作。
pub trait TableResolver {
    fn verbal_table(&self, name: &str) -> Option<VerbalTable>;

    fn verbal_range_table(&self, name: &str) -> Option<VerbalRangeTable>;
}

// ─────────────────────────────────────────────────────────────────────────────
// ConversionKind
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionKind {
    Identical,
    Linear,
    RatFunc,
    TabIntp,
    TabNointp,
    TabVerb,
}

impl ConversionKind {
    pub fn parse(tag: &str) -> Result<ConversionKind, ConversionError> {
        match tag {
            "IDENTICAL" => Ok(ConversionKind::Identical),
            "LINEAR" => Ok(ConversionKind::Linear),
            "RAT_FUNC" => Ok(ConversionKind::RatFunc),
            "TAB_INTP" => Ok(ConversionKind::TabIntp),
            "TAB_NOINTP" => Ok(ConversionKind::TabNointp),
            "TAB_VERB" => Ok(ConversionKind::TabVerb),
            _ => Err(ConversionError::UnsupportedKind(tag.to_owned())),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// CompuMethod
// ─────────────────────────────────────────────────────────────────────────────

/// 轉換方法 dispatcher：每種轉換類型一條建構路徑，建構後不可變。
///
/// `convert` 為內部值 → 物理值方向，`invert` 為反方向；
/// 兩者皆直接委派給底層求值器並原樣傳遞其錯誤。
pub enum CompuMethod {
    Identical(Identical),
    Linear(Linear),
    RatFunc(RatFunc),
    TabIntp(Interpolate1D),
    TabNointp(Lookup),
    TabVerb(TabVerb),
    TabVerbRange(TabVerbRange),
}

fn split_pairs(pairs: &[(f64, f64)]) -> (Vec<f64>, Vec<f64>) {
    let xs = pairs.iter().map(|&(x, _)| x).collect();
    let ys = pairs.iter().map(|&(_, y)| y).collect();
    (xs, ys)
}

impl CompuMethod {
    pub fn from_descriptor(
        descriptor: &MethodDescriptor,
        resolver: &dyn TableResolver,
    ) -> Result<CompuMethod, ConversionError> {
        let kind = ConversionKind::parse(descriptor.conversion_type())?;
        match kind {
            ConversionKind::Identical => Ok(CompuMethod::Identical(Identical::new())),
            ConversionKind::Linear => {
                let coeffs = descriptor
                    .coeffs_linear()
                    .ok_or(ConversionError::MissingCoefficients("LINEAR"))?;
                Ok(CompuMethod::Linear(Linear::new(coeffs)))
            }
            ConversionKind::RatFunc => {
                let coeffs = descriptor
                    .coeffs()
                    .ok_or(ConversionError::MissingCoefficients("RAT_FUNC"))?;
                Ok(CompuMethod::RatFunc(RatFunc::new(coeffs)))
            }
            ConversionKind::TabIntp => {
                let pairs = descriptor
                    .pairs()
                    .ok_or(ConversionError::MissingTablePairs("TAB_INTP"))?;
                let (xs, ys) = split_pairs(pairs);
                Ok(CompuMethod::TabIntp(Interpolate1D::new(xs, ys, true)?))
            }
            ConversionKind::TabNointp => {
                let pairs = descriptor
                    .pairs()
                    .ok_or(ConversionError::MissingTablePairs("TAB_NOINTP"))?;
                let (xs, ys) = split_pairs(pairs);
                Ok(CompuMethod::TabNointp(Lookup::new(xs, ys, true, None, None)?))
            }
            ConversionKind::TabVerb => {
                let table_name = descriptor
                    .table_ref()
                    .ok_or(ConversionError::MissingTableRef("TAB_VERB"))?;
                if let Some(table) = resolver.verbal_table(table_name) {
                    Ok(CompuMethod::TabVerb(TabVerb::from_table(&table)))
                } else if let Some(table) = resolver.verbal_range_table(table_name) {
                    Ok(CompuMethod::TabVerbRange(TabVerbRange::from_table(&table)?))
                } else {
                    Err(ConversionError::UnresolvedTable(table_name.to_owned()))
                }
            }
        }
    }

    pub fn kind(&self) -> ConversionKind {
        match self {
            CompuMethod::Identical(_) => ConversionKind::Identical,
            CompuMethod::Linear(_) => ConversionKind::Linear,
            CompuMethod::RatFunc(_) => ConversionKind::RatFunc,
            CompuMethod::TabIntp(_) => ConversionKind::TabIntp,
            CompuMethod::TabNointp(_) => ConversionKind::TabNointp,
            CompuMethod::TabVerb(_) | CompuMethod::TabVerbRange(_) => ConversionKind::TabVerb,
        }
    }

    /// 內部值 → 物理值。口語表查無鍵且無預設標籤時回傳 Ok(None)。
    pub fn convert(&self, x: f64) -> Result<Option<PhysicalValue>, ConversionError> {
        match self {
            CompuMethod::Identical(evaluator) => Ok(Some(PhysicalValue::Scalar(evaluator.value(x)))),
            CompuMethod::Linear(evaluator) => Ok(Some(PhysicalValue::Scalar(evaluator.value(x)))),
            CompuMethod::RatFunc(evaluator) => Ok(Some(PhysicalValue::Scalar(evaluator.value(x)))),
            CompuMethod::TabIntp(evaluator) => Ok(Some(PhysicalValue::Scalar(evaluator.value(x)?))),
            CompuMethod::TabNointp(evaluator) => Ok(Some(PhysicalValue::Scalar(evaluator.value(x)?))),
            CompuMethod::TabVerb(evaluator) => {
                Ok(evaluator.value(x).map(PhysicalValue::from))
            }
            CompuMethod::TabVerbRange(evaluator) => {
                Ok(evaluator.value(x).map(PhysicalValue::from))
            }
        }
    }

    pub fn convert_all(&self, xs: &[f64]) -> Result<Vec<Option<PhysicalValue>>, ConversionError> {
        xs.iter().map(|&x| self.convert(x)).collect()
    }

    /// 物理值 → 內部值。口語表查無標籤時回傳 Ok(None)。
    pub fn invert(&self, y: &PhysicalValue) -> Result<Option<f64>, ConversionError> {
        match self {
            CompuMethod::Identical(evaluator) => {
                Ok(Some(evaluator.inv(expect_scalar(y)?)))
            }
            CompuMethod::Linear(evaluator) => {
                Ok(Some(evaluator.inv(expect_scalar(y)?)?))
            }
            CompuMethod::RatFunc(evaluator) => {
                Ok(Some(evaluator.inv(expect_scalar(y)?)?))
            }
            CompuMethod::TabIntp(_) | CompuMethod::TabNointp(_) => {
                Err(ConversionError::InversionNotSupported)
            }
            CompuMethod::TabVerb(evaluator) => {
                Ok(evaluator.inv(expect_text(y)?).map(|key| key as f64))
            }
            CompuMethod::TabVerbRange(evaluator) => {
                Ok(evaluator.inv(expect_text(y)?).map(|key| key as f64))
            }
        }
    }

    pub fn invert_all(&self, ys: &[PhysicalValue]) -> Result<Vec<Option<f64>>, ConversionError> {
        ys.iter().map(|y| self.invert(y)).collect()
    }
}

fn expect_scalar(value: &PhysicalValue) -> Result<f64, ConversionError> {
    value
        .scalar()
        .ok_or(ConversionError::ValueKindMismatch("scalar"))
}

fn expect_text(value: &PhysicalValue) -> Result<&str, ConversionError> {
    value.text().ok_or(ConversionError::ValueKindMismatch("text"))
}
