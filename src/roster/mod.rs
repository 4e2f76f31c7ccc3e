//! # Roster domain
//!
//! Fixed parameters of the nurse pool and the candidate roster type.
//!
//! A roster covers [`DAYS`] days for [`NURSES`] nurses. The first
//! [`CLASS_A_NURSES`] indices are class A, the next [`CLASS_B_NURSES`] class B
//! and the rest class C. Indices are never reordered.

pub mod duty;
pub mod schedule;

pub use duty::{Duty, NurseClass};
pub use schedule::{Grid, Schedule};

/// Number of days in a roster week.
pub const DAYS: usize = 7;

/// Number of nurses in the pool.
pub const NURSES: usize = 10;

/// Number of class-A nurses, occupying indices `0..CLASS_A_NURSES`.
pub const CLASS_A_NURSES: usize = 5;

/// Number of class-B nurses, following the class-A block.
pub const CLASS_B_NURSES: usize = 3;
