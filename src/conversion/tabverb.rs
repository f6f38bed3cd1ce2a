use std::collections::HashMap;

use crate::descriptor::verbaltable::VerbalTable;

/// 口語轉換：整數鍵 → 標籤字串。
///
/// 建構時鍵先整數化，並同步建好反向（標籤 → 鍵）映射；
/// 重複標籤依建構順序後者覆蓋前者。
/// 查無鍵時回傳預設標籤，未設定預設則回傳 None，不報錯。
pub struct TabVerb {
    mapping: HashMap<i64, String>,
    mapping_inv: HashMap<String, i64>,
    default: Option<String>,
}

impl TabVerb {
    pub fn new(pairs: &[(f64, String)], default: Option<String>) -> TabVerb {
        let mut mapping = HashMap::with_capacity(pairs.len());
        let mut mapping_inv = HashMap::with_capacity(pairs.len());
        for (key, label) in pairs {
            let key = *key as i64;
            mapping.insert(key, label.clone());
            mapping_inv.insert(label.clone(), key);
        }
        TabVerb { mapping, mapping_inv, default }
    }

    pub fn from_table(table: &VerbalTable) -> TabVerb {
        TabVerb::new(table.pairs(), table.default_value().cloned())
    }

    pub fn value(&self, x: f64) -> Option<&str> {
        let key = x as i64;
        self.mapping
            .get(&key)
            .or(self.default.as_ref())
            .map(|label| label.as_str())
    }

    pub fn inv(&self, label: &str) -> Option<i64> {
        self.mapping_inv.get(label).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal_types(default: Option<&str>) -> TabVerb {
        TabVerb::new(
            &[
                (1.0, "SawTooth".to_owned()),
                (2.0, "Square".to_owned()),
                (3.0, "Sinus".to_owned()),
            ],
            default.map(str::to_owned),
        )
    }

    #[test]
    fn looks_up_labels_with_default() {
        let tv = signal_types(Some("unknown signal type"));
        assert_eq!(tv.value(2.0), Some("Square"));
        assert_eq!(tv.value(5.0), Some("unknown signal type"));
    }

    #[test]
    fn missing_key_without_default_is_absent() {
        let tv = signal_types(None);
        assert_eq!(tv.value(1.0), Some("SawTooth"));
        assert_eq!(tv.value(10.0), None);
    }

    #[test]
    fn inverse_lookup() {
        let tv = signal_types(Some("unknown signal type"));
        assert_eq!(tv.inv("Square"), Some(2));
        assert_eq!(tv.inv("Sinus"), Some(3));
        assert_eq!(tv.inv("unknown signal type"), None);
    }

    #[test]
    fn keys_are_integer_coerced() {
        let tv = TabVerb::new(&[(1.0, "one".to_owned())], None);
        assert_eq!(tv.value(1.2), Some("one"));
        assert_eq!(tv.value(1.9), Some("one"));
    }

    #[test]
    fn duplicate_labels_last_write_wins() {
        let tv = TabVerb::new(
            &[(1.0, "same".to_owned()), (2.0, "same".to_owned())],
            None,
        );
        assert_eq!(tv.inv("same"), Some(2));
    }
}
