use serde::Deserialize;

/// 有理函數係數：f(x) = (a·x² + b·x + c) / (d·x² + e·x + f)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coefficients {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
}

impl Coefficients {
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Coefficients {
        Coefficients { a, b, c, d, e, f }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn d(&self) -> f64 {
        self.d
    }

    pub fn e(&self) -> f64 {
        self.e
    }

    pub fn f(&self) -> f64 {
        self.f
    }
}

/// 線性係數：f(x) = a·x + b
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CoefficientsLinear {
    a: f64,
    b: f64,
}

impl CoefficientsLinear {
    pub fn new(a: f64, b: f64) -> CoefficientsLinear {
        CoefficientsLinear { a, b }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }
}
