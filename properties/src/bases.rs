use serde::{Deserialize, Serialize};
use std::fmt;

/// The bases in which electronic integrals can be expressed.
///
/// `SO` is the spin-orbital basis into which MO integrals are mapped before
/// building second-quantized operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElectronicBasis {
    AO,
    MO,
    SO,
}

impl fmt::Display for ElectronicBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElectronicBasis::AO => "atomic",
            ElectronicBasis::MO => "molecular",
            ElectronicBasis::SO => "spin",
        };
        write!(f, "{}", name)
    }
}
