use serde::Deserialize;

/// 口語轉換表紀錄：(內部鍵, 標籤) 配對序列與選配的預設標籤。
/// 鍵在紀錄中保留原始數值型態，建構求值器時才做整數化。
#[derive(Debug, Clone, Deserialize)]
pub struct VerbalTable {
    name: String,
    pairs: Vec<(f64, String)>,
    #[serde(default)]
    default_value: Option<String>,
}

impl VerbalTable {
    pub fn new(name: String, pairs: Vec<(f64, String)>, default_value: Option<String>) -> VerbalTable {
        VerbalTable { name, pairs, default_value }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pairs(&self) -> &[(f64, String)] {
        &self.pairs
    }

    pub fn default_value(&self) -> Option<&String> {
        self.default_value.as_ref()
    }
}

/// 範圍式口語轉換表紀錄：(下界, 上界, 標籤) 三元組，上下界皆含。
#[derive(Debug, Clone, Deserialize)]
pub struct VerbalRangeTable {
    name: String,
    triples: Vec<(f64, f64, String)>,
    #[serde(default)]
    default_value: Option<String>,
}

impl VerbalRangeTable {
    pub fn new(
        name: String,
        triples: Vec<(f64, f64, String)>,
        default_value: Option<String>,
    ) -> VerbalRangeTable {
        VerbalRangeTable { name, triples, default_value }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn triples(&self) -> &[(f64, f64, String)] {
        &self.triples
    }

    pub fn default_value(&self) -> Option<&String> {
        self.default_value.as_ref()
    }
}
