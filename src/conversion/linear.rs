use crate::conversion::conversionerror::ConversionError;
use crate::descriptor::coefficients::CoefficientsLinear;

/// 線性轉換：f(x) = a·x + b。
///
/// 反算解 (a·x + b) − y = 0 的唯一根；a = 0 時函數退化為常數，
/// 無反函數，回傳數學錯誤。
pub struct Linear {
    a: f64,
    b: f64,
}

impl Linear {
    pub fn new(coeffs: &CoefficientsLinear) -> Linear {
        Linear { a: coeffs.a(), b: coeffs.b() }
    }

    pub fn value(&self, x: f64) -> f64 {
        self.a.mul_add(x, self.b)
    }

    pub fn value_all(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.value(x)).collect()
    }

    pub fn inv(&self, y: f64) -> Result<f64, ConversionError> {
        if self.a == 0.0 {
            return Err(ConversionError::CannotInvert);
        }
        Ok((y - self.b) / self.a)
    }

    pub fn inv_all(&self, ys: &[f64]) -> Result<Vec<f64>, ConversionError> {
        ys.iter().map(|&y| self.inv(y)).collect()
    }
}
