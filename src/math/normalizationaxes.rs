use crate::conversion::conversionerror::ConversionError;
use crate::math::curvepoint::CurvePoint;
use crate::math::interpolate::Interpolate1D;

// ─────────────────────────────────────────────────────────────────────────────
// Grid
// ─────────────────────────────────────────────────────────────────────────────

/// 二維校正面：以 (row, col) 整數索引定址的純量矩陣，row-major 儲存。
pub struct Grid {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Grid, ConversionError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(ConversionError::EmptyGrid);
        }
        let cols = rows[0].len();
        let mut values = Vec::with_capacity(rows.len() * cols);
        for row in &rows {
            if row.len() != cols {
                return Err(ConversionError::LengthMismatch(row.len(), cols));
            }
            values.extend_from_slice(row);
        }
        Ok(Grid { rows: rows.len(), cols, values })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    /// 雙線性插值：分數索引逐維夾擠到 [0, n-1] 後，於包圍的四格間線性內插。
    pub fn bilinear(&self, row: f64, col: f64) -> f64 {
        let (r0, r1, fr) = split_index(row, self.rows);
        let (c0, c1, fc) = split_index(col, self.cols);
        let top = fc.mul_add(self.value(r0, c1) - self.value(r0, c0), self.value(r0, c0));
        let bottom = fc.mul_add(self.value(r1, c1) - self.value(r1, c0), self.value(r1, c0));
        fr.mul_add(bottom - top, top)
    }
}

fn split_index(x: f64, n: usize) -> (usize, usize, f64) {
    let max = (n - 1) as f64;
    if !(x > 0.0) {
        return (0, 0, 0.0);
    }
    if x >= max {
        return (n - 1, n - 1, 0.0);
    }
    let i0 = x.floor() as usize;
    (i0, i0 + 1, x - x.floor())
}

// ─────────────────────────────────────────────────────────────────────────────
// NormalizationAxes
// ─────────────────────────────────────────────────────────────────────────────

/// 以參考曲線正規化座標軸的二維查表。
///
/// 兩條獨立的一維正規化曲線（皆為飽和插值）先把原始輸入 (x, y) 映射為
/// 校正面的分數欄/列索引，再對校正面做雙線性插值：
///
///   value(x, y) = bilinear(y_curve(y), x_curve(x))
pub struct NormalizationAxes {
    ip_x: Interpolate1D,
    ip_y: Interpolate1D,
    grid: Grid,
}

impl NormalizationAxes {
    pub fn new(
        x_norm: &[CurvePoint],
        y_norm: &[CurvePoint],
        grid: Grid,
    ) -> Result<NormalizationAxes, ConversionError> {
        let ip_x = Interpolate1D::from_points(x_norm, true)?;
        let ip_y = Interpolate1D::from_points(y_norm, true)?;
        Ok(NormalizationAxes { ip_x, ip_y, grid })
    }

    pub fn value(&self, x: f64, y: f64) -> Result<f64, ConversionError> {
        let col = self.ip_x.value(x)?;
        let row = self.ip_y.value(y)?;
        Ok(self.grid.bilinear(row, col))
    }
}
