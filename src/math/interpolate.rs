use crate::conversion::conversionerror::ConversionError;
use crate::math::curvepoint::{
    CurvePoint,
    strictly_increasing
};

/// 一維分段線性插值。
///
/// breakpoint x 座標必須嚴格遞增，xs 與 ys 長度一致。
///
/// 邊界模式：
/// - saturate = true：x ≤ min(xs) 回傳 ys 第一項，x ≥ max(xs) 回傳最後一項
///   （水平外插，不報錯）
/// - saturate = false：x 超出 [min, max] 回傳 out-of-bounds 錯誤
pub struct Interpolate1D {
    xs: Vec<f64>,
    ys: Vec<f64>,
    saturate: bool,
}

impl Interpolate1D {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>, saturate: bool) -> Result<Interpolate1D, ConversionError> {
        if xs.len() != ys.len() {
            return Err(ConversionError::LengthMismatch(xs.len(), ys.len()));
        }
        if xs.len() < 2 {
            return Err(ConversionError::TooFewBreakpoints(xs.len()));
        }
        if !strictly_increasing(&xs) {
            return Err(ConversionError::NotIncreasing);
        }
        Ok(Interpolate1D { xs, ys, saturate })
    }

    pub fn from_points(points: &[CurvePoint], saturate: bool) -> Result<Interpolate1D, ConversionError> {
        let xs = points.iter().map(|pt| pt.x()).collect();
        let ys = points.iter().map(|pt| pt.y()).collect();
        Interpolate1D::new(xs, ys, saturate)
    }

    pub fn value(&self, x: f64) -> Result<f64, ConversionError> {
        if x.is_nan() {
            return Err(ConversionError::OutOfBounds(x));
        }
        let last = self.xs.len() - 1;
        if x <= self.xs[0] {
            return if self.saturate || x == self.xs[0] {
                Ok(self.ys[0])
            } else {
                Err(ConversionError::OutOfBounds(x))
            };
        }
        if x >= self.xs[last] {
            return if self.saturate || x == self.xs[last] {
                Ok(self.ys[last])
            } else {
                Err(ConversionError::OutOfBounds(x))
            };
        }
        let i = self.xs.partition_point(|&x0| x0 <= x) - 1;
        let slope = (self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i]);
        Ok(slope.mul_add(x - self.xs[i], self.ys[i]))
    }
}
