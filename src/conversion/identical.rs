/// 恆等轉換：內部值與物理值相同。
pub struct Identical;

impl Identical {
    pub fn new() -> Identical {
        Identical
    }

    pub fn value(&self, x: f64) -> f64 {
        x
    }

    pub fn inv(&self, y: f64) -> f64 {
        y
    }
}

impl Default for Identical {
    fn default() -> Identical {
        Identical::new()
    }
}
