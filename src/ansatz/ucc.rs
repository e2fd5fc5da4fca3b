use super::{generate_fermionic_excitations, Excitation, ExcitationAnsatz};
use crate::error::InitialPointError;
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Excitation orders requested from a UCC ansatz, parsed from strings such as
/// `"sd"` (singles and doubles).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcitationKinds(Vec<usize>);

impl ExcitationKinds {
    pub fn new(orders: impl IntoIterator<Item = usize>) -> Self {
        let mut kinds = Vec::new();
        for order in orders {
            if order > 0 && !kinds.contains(&order) {
                kinds.push(order);
            }
        }
        ExcitationKinds(kinds)
    }

    pub fn orders(&self) -> &[usize] {
        &self.0
    }
}

impl FromStr for ExcitationKinds {
    type Err = InitialPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let orders = s
            .trim()
            .chars()
            .map(|c| match c.to_ascii_lowercase() {
                's' => Ok(1),
                'd' => Ok(2),
                't' => Ok(3),
                'q' => Ok(4),
                _ => Err(InitialPointError::InvalidExcitationKind(s.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if orders.is_empty() {
            return Err(InitialPointError::InvalidExcitationKind(s.to_string()));
        }
        Ok(ExcitationKinds::new(orders))
    }
}

impl fmt::Display for ExcitationKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for order in &self.0 {
            let letter = match order {
                1 => "s",
                2 => "d",
                3 => "t",
                4 => "q",
                _ => "?",
            };
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

/// Unitary coupled-cluster excitation generator.
///
/// Only the excitation list is produced here; building the circuit from it is
/// up to the VQE driver.
#[derive(Debug, Clone)]
pub struct Ucc {
    num_spatial_orbitals: usize,
    num_particles: (usize, usize),
    excitations: ExcitationKinds,
    max_spin_excitation: Option<usize>,
    excitation_list: Option<Vec<Excitation>>,
}

impl Ucc {
    pub fn new(
        num_spatial_orbitals: usize,
        num_particles: (usize, usize),
        excitations: ExcitationKinds,
    ) -> Self {
        Ucc {
            num_spatial_orbitals,
            num_particles,
            excitations,
            max_spin_excitation: None,
            excitation_list: None,
        }
    }

    /// Singles and doubles.
    pub fn uccsd(num_spatial_orbitals: usize, num_particles: (usize, usize)) -> Self {
        Ucc::new(
            num_spatial_orbitals,
            num_particles,
            ExcitationKinds::new([1, 2]),
        )
    }

    pub fn with_max_spin_excitation(mut self, max_spin_excitation: Option<usize>) -> Self {
        self.max_spin_excitation = max_spin_excitation;
        self.excitation_list = None;
        self
    }

    pub fn num_spatial_orbitals(&self) -> usize {
        self.num_spatial_orbitals
    }

    pub fn num_particles(&self) -> (usize, usize) {
        self.num_particles
    }

    /// Changing the particle counts discards previously built excitations.
    pub fn set_num_particles(&mut self, num_particles: (usize, usize)) {
        self.num_particles = num_particles;
        self.excitation_list = None;
    }

    pub fn excitations(&self) -> &ExcitationKinds {
        &self.excitations
    }

    /// Number of variational parameters, known once the operators are built.
    pub fn num_parameters(&self) -> Option<usize> {
        self.excitation_list.as_ref().map(Vec::len)
    }
}

impl ExcitationAnsatz for Ucc {
    fn build_operators(&mut self) {
        if self.excitation_list.is_some() {
            return;
        }

        let excitation_list: Vec<Excitation> = self
            .excitations
            .orders()
            .iter()
            .flat_map(|&order| {
                generate_fermionic_excitations(
                    order,
                    self.num_spatial_orbitals,
                    self.num_particles,
                    self.max_spin_excitation,
                )
            })
            .collect();

        info!(
            "UCC ({}) over {} spatial orbitals with {:?} particles: {} excitations",
            self.excitations,
            self.num_spatial_orbitals,
            self.num_particles,
            excitation_list.len()
        );

        self.excitation_list = Some(excitation_list);
    }

    fn excitation_list(&self) -> Option<&[Excitation]> {
        self.excitation_list.as_deref()
    }
}
