use crate::ansatz::Excitation;
use crate::error::InitialPointError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the spin-orbital indices of a double excitation map onto the
/// `(i, j, a, b)` axes of the T2 amplitudes.
///
/// Both conventions expect excitations over the `2 N` spin orbitals of a
/// block-ordered register (alpha `[0, N)`, beta `[N, 2N)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexConvention {
    /// Reduce every index modulo the number of occupied orbitals. Virtual
    /// indices then use `r - num_occ`, counted back from the end of the
    /// virtual axis. This addresses the right amplitude only when there are
    /// as many virtual as occupied orbitals.
    #[default]
    OccupiedModulo,
    /// Reduce every index modulo the number of spatial orbitals, which
    /// addresses the right amplitude for any occupation.
    SpatialModulo,
}

impl IndexConvention {
    /// T2 position `[i, j, a, b]` of a double excitation, `None` when the
    /// excitation does not reduce to a position inside the amplitudes or is
    /// not a double excitation.
    pub fn locate(
        self,
        excitation: &Excitation,
        num_occ: usize,
        num_vir: usize,
    ) -> Option<[usize; 4]> {
        if !excitation.is_double() {
            return None;
        }
        let occupied = &excitation.occupied;
        let unoccupied = &excitation.unoccupied;
        Some([
            self.occupied_index(occupied[0], num_occ, num_vir)?,
            self.occupied_index(occupied[1], num_occ, num_vir)?,
            self.virtual_index(unoccupied[0], num_occ, num_vir)?,
            self.virtual_index(unoccupied[1], num_occ, num_vir)?,
        ])
    }

    fn occupied_index(self, index: usize, num_occ: usize, num_vir: usize) -> Option<usize> {
        match self {
            IndexConvention::OccupiedModulo => index.checked_rem(num_occ),
            IndexConvention::SpatialModulo => {
                let spatial = index.checked_rem(num_occ + num_vir)?;
                (spatial < num_occ).then_some(spatial)
            }
        }
    }

    fn virtual_index(self, index: usize, num_occ: usize, num_vir: usize) -> Option<usize> {
        match self {
            IndexConvention::OccupiedModulo => {
                let reduced = index.checked_rem(num_occ)?;
                (num_vir + reduced).checked_sub(num_occ)
            }
            IndexConvention::SpatialModulo => {
                let spatial = index.checked_rem(num_occ + num_vir)?;
                spatial.checked_sub(num_occ)
            }
        }
    }
}

impl FromStr for IndexConvention {
    type Err = InitialPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "occupied_modulo" => Ok(IndexConvention::OccupiedModulo),
            "spatial_modulo" => Ok(IndexConvention::SpatialModulo),
            _ => Err(InitialPointError::InvalidIndexConvention(s.to_string())),
        }
    }
}

impl fmt::Display for IndexConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexConvention::OccupiedModulo => write!(f, "occupied_modulo"),
            IndexConvention::SpatialModulo => write!(f, "spatial_modulo"),
        }
    }
}
