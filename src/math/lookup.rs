use crate::conversion::conversionerror::ConversionError;
use crate::math::curvepoint::strictly_increasing;

/// 階梯函數查表：回傳最右側 breakpoint ≤ x 所對應的輸出值，不做插值。
///
/// 飽和模式下，x ≤ min(xs) 回傳 y_low（未指定則取第一項），
/// x ≥ max(xs) 回傳 y_high（未指定則取最後一項）。
/// 非飽和模式下，x 超出 [min, max] 回傳 out-of-bounds 錯誤。
pub struct Lookup {
    xs: Vec<f64>,
    ys: Vec<f64>,
    saturate: bool,
    y_low: Option<f64>,
    y_high: Option<f64>,
}

impl Lookup {
    pub fn new(
        xs: Vec<f64>,
        ys: Vec<f64>,
        saturate: bool,
        y_low: Option<f64>,
        y_high: Option<f64>,
    ) -> Result<Lookup, ConversionError> {
        if xs.len() != ys.len() {
            return Err(ConversionError::LengthMismatch(xs.len(), ys.len()));
        }
        if xs.is_empty() {
            return Err(ConversionError::TooFewBreakpoints(0));
        }
        if !strictly_increasing(&xs) {
            return Err(ConversionError::NotIncreasing);
        }
        Ok(Lookup { xs, ys, saturate, y_low, y_high })
    }

    pub fn value(&self, x: f64) -> Result<f64, ConversionError> {
        if x.is_nan() {
            return Err(ConversionError::OutOfBounds(x));
        }
        let last = self.xs.len() - 1;
        if self.saturate {
            if x <= self.xs[0] {
                return Ok(self.y_low.unwrap_or(self.ys[0]));
            }
            if x >= self.xs[last] {
                return Ok(self.y_high.unwrap_or(self.ys[last]));
            }
        } else if x < self.xs[0] || x > self.xs[last] {
            return Err(ConversionError::OutOfBounds(x));
        }
        let pos = self.xs.partition_point(|&x0| x0 <= x) - 1;
        Ok(self.ys[pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(saturate: bool, y_low: Option<f64>, y_high: Option<f64>) -> Lookup {
        Lookup::new(
            vec![0.0, 200.0, 400.0, 1000.0, 5700.0],
            vec![2.0, 2.7, 3.0, 4.2, 4.9],
            saturate,
            y_low,
            y_high,
        )
        .unwrap()
    }

    #[test]
    fn steps_to_rightmost_breakpoint() {
        let lookup = fixture(false, None, None);
        assert_eq!(lookup.value(0.0).unwrap(), 2.0);
        assert_eq!(lookup.value(199.0).unwrap(), 2.0);
        assert_eq!(lookup.value(200.0).unwrap(), 2.7);
        assert_eq!(lookup.value(850.0).unwrap(), 3.0);
        assert_eq!(lookup.value(5700.0).unwrap(), 4.9);
    }

    #[test]
    fn non_saturating_rejects_out_of_bounds() {
        let lookup = fixture(false, None, None);
        assert_eq!(lookup.value(-1.0), Err(ConversionError::OutOfBounds(-1.0)));
        assert_eq!(lookup.value(8000.0), Err(ConversionError::OutOfBounds(8000.0)));
    }

    #[test]
    fn saturating_falls_back_to_edge_outputs() {
        let lookup = fixture(true, None, None);
        assert_eq!(lookup.value(-1.0).unwrap(), 2.0);
        assert_eq!(lookup.value(8000.0).unwrap(), 4.9);
    }

    #[test]
    fn saturating_honors_explicit_fallbacks() {
        let lookup = fixture(true, Some(-7.5), Some(99.0));
        assert_eq!(lookup.value(-1.0).unwrap(), -7.5);
        assert_eq!(lookup.value(8000.0).unwrap(), 99.0);
    }

    #[test]
    fn explicit_zero_fallback_is_not_ignored() {
        let lookup = fixture(true, Some(0.0), Some(0.0));
        assert_eq!(lookup.value(-1.0).unwrap(), 0.0);
        assert_eq!(lookup.value(8000.0).unwrap(), 0.0);
    }

    #[test]
    fn single_breakpoint_table() {
        let lookup = Lookup::new(vec![10.0], vec![1.5], true, None, None).unwrap();
        assert_eq!(lookup.value(-100.0).unwrap(), 1.5);
        assert_eq!(lookup.value(10.0).unwrap(), 1.5);
        assert_eq!(lookup.value(100.0).unwrap(), 1.5);
    }

    #[test]
    fn construction_rejects_non_increasing() {
        let result = Lookup::new(vec![0.0, 0.0], vec![1.0, 2.0], false, None, None);
        assert_eq!(result.err(), Some(ConversionError::NotIncreasing));
    }

    #[test]
    fn construction_rejects_empty() {
        let result = Lookup::new(vec![], vec![], false, None, None);
        assert_eq!(result.err(), Some(ConversionError::TooFewBreakpoints(0)));
    }
}
