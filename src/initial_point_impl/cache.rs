//! Cache slots and the input/invalidation transition table

/// Observable state of a [`CacheSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// Nothing has been computed yet.
    Absent,
    /// A value was computed but an input changed since.
    Stale,
    Valid,
}

/// A lazily (re)computed value.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheSlot<T> {
    Absent,
    Stale,
    Valid(T),
}

impl<T> Default for CacheSlot<T> {
    fn default() -> Self {
        CacheSlot::Absent
    }
}

impl<T> CacheSlot<T> {
    pub fn state(&self) -> SlotState {
        match self {
            CacheSlot::Absent => SlotState::Absent,
            CacheSlot::Stale => SlotState::Stale,
            CacheSlot::Valid(_) => SlotState::Valid,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, CacheSlot::Valid(_))
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            CacheSlot::Valid(value) => Some(value),
            _ => None,
        }
    }

    /// Mark a computed value as outdated. An absent slot stays absent.
    pub fn invalidate(&mut self) {
        if self.is_valid() {
            *self = CacheSlot::Stale;
        }
    }

    pub fn store(&mut self, value: T) {
        *self = CacheSlot::Valid(value);
    }

    /// The cached value, computing it first unless the slot is valid. A failed
    /// computation leaves the slot untouched.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        compute: impl FnOnce() -> Result<T, E>,
    ) -> Result<&T, E> {
        if !self.is_valid() {
            *self = CacheSlot::Valid(compute()?);
        }
        match self {
            CacheSlot::Valid(value) => Ok(value),
            CacheSlot::Absent | CacheSlot::Stale => unreachable!("slot was filled above"),
        }
    }
}

/// An input of an initial point calculation that can be replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputChange {
    Threshold,
    IndexConvention,
    ExcitationList,
    Ansatz,
    GroupedProperty,
}

/// Cached results that an [`InputChange`] makes outdated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invalidation {
    pub parameters: bool,
    /// T2 amplitudes and the energies derived from them.
    pub amplitudes: bool,
}

impl InputChange {
    pub const fn invalidates(self) -> Invalidation {
        match self {
            InputChange::Threshold
            | InputChange::IndexConvention
            | InputChange::ExcitationList
            | InputChange::Ansatz => Invalidation {
                parameters: true,
                amplitudes: false,
            },
            InputChange::GroupedProperty => Invalidation {
                parameters: true,
                amplitudes: true,
            },
        }
    }
}
