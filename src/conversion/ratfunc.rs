use crate::conversion::conversionerror::ConversionError;
use crate::descriptor::coefficients::Coefficients;

// ─────────────────────────────────────────────────────────────────────────────
// RatFunc
// ─────────────────────────────────────────────────────────────────────────────
//
// 有理函數轉換：
//
//   f(x) = (a·x² + b·x + c) / (d·x² + e·x + f)
//
// 求值以 Horner form 直接計算分子分母。
//
// 反算只支援仿射特例：分子一次（a = 0, b ≠ 0）且分母為非零常數
// （d = e = 0, f ≠ 0），此時
//
//   x = (f/b)·y − c/b
//
// 建構時即預計算反函數係數。分子分母皆為常數時反函數在數學上不存在
// （數學錯誤）；其餘係數型態（真二次式）刻意不做數值求根（不支援錯誤）。

/// 忽略開頭為零的係數後的多項式次數（[x², x, 1] 排列）。
fn poly_order(coefs: &[f64; 3]) -> usize {
    if coefs[0] != 0.0 {
        2
    } else if coefs[1] != 0.0 {
        1
    } else {
        0
    }
}

fn horner(coefs: &[f64; 3], x: f64) -> f64 {
    let mut result = coefs[0];
    for &beta in &coefs[1..] {
        result = result.mul_add(x, beta);
    }
    result
}

pub struct RatFunc {
    p: [f64; 3],
    q: [f64; 3],
    inv_coefs: Option<(f64, f64)>,
}

impl RatFunc {
    pub fn new(coeffs: &Coefficients) -> RatFunc {
        let p = [coeffs.a(), coeffs.b(), coeffs.c()];
        let q = [coeffs.d(), coeffs.e(), coeffs.f()];
        let inv_coefs = if poly_order(&p) == 1 && poly_order(&q) == 0 && q[2] != 0.0 {
            Some((q[2] / p[1], -(p[2] / p[1])))
        } else {
            None
        };
        RatFunc { p, q, inv_coefs }
    }

    pub fn value(&self, x: f64) -> f64 {
        horner(&self.p, x) / horner(&self.q, x)
    }

    pub fn value_all(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.value(x)).collect()
    }

    pub fn inv(&self, y: f64) -> Result<f64, ConversionError> {
        match self.inv_coefs {
            Some((slope, intercept)) => Ok(slope.mul_add(y, intercept)),
            None => {
                if poly_order(&self.p) == 0 && poly_order(&self.q) == 0 {
                    Err(ConversionError::CannotInvert)
                } else {
                    Err(ConversionError::InversionNotSupported)
                }
            }
        }
    }

    pub fn inv_all(&self, ys: &[f64]) -> Result<Vec<f64>, ConversionError> {
        ys.iter().map(|&y| self.inv(y)).collect()
    }
}
