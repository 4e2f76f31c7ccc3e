//! # Duty codes and nurse classes
//!
//! A roster cell holds one [`Duty`]. Nurses belong to a [`NurseClass`] that is
//! fixed by their position in the nurse pool.

use std::fmt;

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use super::{CLASS_A_NURSES, CLASS_B_NURSES, NURSES};
use crate::error::{Result, RosterError};

/// The assignment of one nurse on one day.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Duty {
    /// 8:00 to 14:00.
    Morning,
    /// 14:00 to 20:00.
    Evening,
    /// 20:00 to 8:00 the next day.
    Night,
    Holiday,
}

impl Duty {
    /// Every duty code, in letter order `M`, `E`, `N`, `H`.
    pub const ALL: [Duty; 4] = [Duty::Morning, Duty::Evening, Duty::Night, Duty::Holiday];

    /// Returns the one-letter code of the duty.
    pub fn letter(self) -> char {
        match self {
            Duty::Morning => 'M',
            Duty::Evening => 'E',
            Duty::Night => 'N',
            Duty::Holiday => 'H',
        }
    }
}

impl TryFrom<char> for Duty {
    type Error = RosterError;

    fn try_from(letter: char) -> Result<Self> {
        match letter.to_ascii_uppercase() {
            'M' => Ok(Duty::Morning),
            'E' => Ok(Duty::Evening),
            'N' => Ok(Duty::Night),
            'H' => Ok(Duty::Holiday),
            other => Err(RosterError::InvalidDuty(other)),
        }
    }
}

impl fmt::Display for Duty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Uniform over the four duty codes.
impl Distribution<Duty> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duty {
        Duty::ALL[rng.gen_range(0..Duty::ALL.len())]
    }
}

/// Skill tier of a nurse. `A` is the most skilled.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NurseClass {
    A,
    B,
    C,
}

impl NurseClass {
    /// Returns the class of the nurse at `nurse` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `nurse` is not below [`NURSES`].
    pub fn of(nurse: usize) -> Self {
        assert!(nurse < NURSES, "nurse index {nurse} out of range");
        if nurse < CLASS_A_NURSES {
            NurseClass::A
        } else if nurse < CLASS_A_NURSES + CLASS_B_NURSES {
            NurseClass::B
        } else {
            NurseClass::C
        }
    }

    /// Returns the nurse indices belonging to this class.
    pub fn members(self) -> std::ops::Range<usize> {
        match self {
            NurseClass::A => 0..CLASS_A_NURSES,
            NurseClass::B => CLASS_A_NURSES..CLASS_A_NURSES + CLASS_B_NURSES,
            NurseClass::C => CLASS_A_NURSES + CLASS_B_NURSES..NURSES,
        }
    }
}
