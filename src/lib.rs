pub mod conversion {
    pub mod compumethod;
    pub mod conversionerror;
    pub mod identical;
    pub mod linear;
    pub mod physicalvalue;
    pub mod ratfunc;
    pub mod tabverb;
    pub mod tabverbrange;
}

pub mod descriptor {
    pub mod coefficients;
    pub mod methoddescriptor;
    pub mod verbaltable;
}

pub mod math {
    pub mod axisrescale;
    pub mod curvepoint;
    pub mod interpolate;
    pub mod lookup;
    pub mod normalizationaxes;
}

pub mod store {
    pub mod calibrationstore;
    pub mod manager;
    pub mod storeerror;
}
