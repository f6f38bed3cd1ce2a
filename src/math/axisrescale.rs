use crate::conversion::conversionerror::ConversionError;

/// 以參考曲線（virtual 軸）重建完整物理軸。
///
/// `no_rescale_x` 個 (物理, virtual) breakpoint 配對描述一條壓縮過的軸；
/// 以固定整數步長
///
///   d = (virtual[last] - virtual[0] + 1) / (no_axis_pts - 1)
///
/// 走訪 virtual 軸，在每個取樣點於相鄰兩個 breakpoint 之間線性插值出
/// 物理座標。`no_axis_pts` 必須是 2 的冪次加一（5、9、17、33...）。
/// 輸出以 axis[0] 開頭，並固定以最後一個物理 breakpoint 結尾。
pub fn axis_rescale(
    no_rescale_x: usize,
    no_axis_pts: usize,
    axis: &[f64],
    virtual_axis: &[i64],
) -> Result<Vec<f64>, ConversionError> {
    if no_rescale_x == 0 {
        return Err(ConversionError::TooFewBreakpoints(0));
    }
    if axis.len() < no_rescale_x {
        return Err(ConversionError::TooFewBreakpoints(axis.len()));
    }
    if virtual_axis.len() < no_rescale_x {
        return Err(ConversionError::TooFewBreakpoints(virtual_axis.len()));
    }
    if no_axis_pts < 2 || !(no_axis_pts - 1).is_power_of_two() {
        return Err(ConversionError::InvalidAxisPointCount(no_axis_pts));
    }
    if !virtual_axis[..no_rescale_x].windows(2).all(|pair| pair[1] > pair[0]) {
        return Err(ConversionError::NotIncreasing);
    }

    let span = virtual_axis[no_rescale_x - 1] - virtual_axis[0] + 1;
    let d = span / (no_axis_pts as i64 - 1);
    if d <= 0 {
        return Err(ConversionError::InvalidAxisPointCount(no_axis_pts));
    }

    let mut k: i64 = 1;
    let mut xs = vec![axis[0]];
    for idx in 0..no_rescale_x - 1 {
        loop {
            let kdv = k * d + virtual_axis[0];
            if kdv >= virtual_axis[idx + 1] {
                break;
            }
            k += 1;
            let x = axis[idx]
                + (((k - 1) * d - virtual_axis[idx]) as f64) * (axis[idx + 1] - axis[idx])
                    / ((virtual_axis[idx + 1] - virtual_axis[idx]) as f64);
            xs.push(x);
        }
    }
    xs.push(axis[no_rescale_x - 1]);
    Ok(xs)
}
