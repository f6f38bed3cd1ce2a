use std::fmt;

/// 物理值：數值類轉換產出純量，口語表（verbal table）類轉換產出字串。
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicalValue {
    Scalar(f64),
    Text(String),
}

impl PhysicalValue {
    pub fn scalar(&self) -> Option<f64> {
        match self {
            PhysicalValue::Scalar(x) => Some(*x),
            PhysicalValue::Text(_) => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            PhysicalValue::Scalar(_) => None,
            PhysicalValue::Text(label) => Some(label.as_str()),
        }
    }
}

impl From<f64> for PhysicalValue {
    fn from(x: f64) -> PhysicalValue {
        PhysicalValue::Scalar(x)
    }
}

impl From<&str> for PhysicalValue {
    fn from(label: &str) -> PhysicalValue {
        PhysicalValue::Text(label.to_owned())
    }
}

impl fmt::Display for PhysicalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicalValue::Scalar(x) => write!(f, "{}", x),
            PhysicalValue::Text(label) => write!(f, "{}", label),
        }
    }
}
