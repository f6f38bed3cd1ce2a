use crate::conversion::conversionerror::ConversionError;
use crate::descriptor::verbaltable::VerbalRangeTable;

/// 範圍式口語轉換：不重疊的整數區間 [lower, upper]（皆含）→ 標籤。
///
/// 查找以 lower 為鍵二分搜尋候選區間，再確認 x 未超過其上界；
/// 落在任何區間之外時回傳預設標籤（或 None）。
/// 反向查找回傳第一個標籤相符區間的下界。
pub struct TabVerbRange {
    lowers: Vec<i64>,
    uppers: Vec<i64>,
    labels: Vec<String>,
    default: Option<String>,
}

impl TabVerbRange {
    pub fn new(
        triples: &[(f64, f64, String)],
        default: Option<String>,
    ) -> Result<TabVerbRange, ConversionError> {
        let lowers: Vec<i64> = triples.iter().map(|(lower, _, _)| *lower as i64).collect();
        let uppers: Vec<i64> = triples.iter().map(|(_, upper, _)| *upper as i64).collect();
        let labels: Vec<String> = triples.iter().map(|(_, _, label)| label.clone()).collect();
        for i in 0..lowers.len() {
            if uppers[i] < lowers[i] {
                return Err(ConversionError::NotIncreasing);
            }
            if i > 0 && lowers[i] <= uppers[i - 1] {
                return Err(ConversionError::NotIncreasing);
            }
        }
        Ok(TabVerbRange { lowers, uppers, labels, default })
    }

    pub fn from_table(table: &VerbalRangeTable) -> Result<TabVerbRange, ConversionError> {
        TabVerbRange::new(table.triples(), table.default_value().cloned())
    }

    pub fn value(&self, x: f64) -> Option<&str> {
        let key = x as i64;
        let pos = self.lowers.partition_point(|&lower| lower <= key);
        if pos > 0 && key <= self.uppers[pos - 1] {
            Some(self.labels[pos - 1].as_str())
        } else {
            self.default.as_deref()
        }
    }

    pub fn inv(&self, label: &str) -> Option<i64> {
        self.labels
            .iter()
            .position(|candidate| candidate == label)
            .map(|i| self.lowers[i])
    }
}
