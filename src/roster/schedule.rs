//! # Schedule
//!
//! A [`Schedule`] is one candidate roster: a grid of duties indexed by
//! `[nurse][day]` together with its fitness. The fitness is computed once when
//! the schedule is built and the grid cannot be changed afterwards, so the
//! stored value always matches [`fitness::evaluate`](crate::fitness::evaluate).
//!
//! ## Example
//!
//! ```rust
//! use rostergen::roster::{Duty, Schedule, DAYS, NURSES};
//!
//! let schedule = Schedule::new([[Duty::Holiday; DAYS]; NURSES]);
//! assert_eq!(schedule.fitness(), 24_600);
//!
//! let text = schedule.to_string();
//! let parsed: Schedule = text.parse().unwrap();
//! assert_eq!(parsed, schedule);
//! ```

use std::fmt;
use std::str::FromStr;

use super::{Duty, DAYS, NURSES};
use crate::error::{Result, RosterError};
use crate::fitness;

/// Duties indexed by `[nurse][day]`.
pub type Grid = [[Duty; DAYS]; NURSES];

/// A candidate roster and its penalty score. Lower is better; 0 satisfies
/// every constraint.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Grid", into = "Grid")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Schedule {
    grid: Grid,
    fitness: u32,
}

impl Schedule {
    /// Builds a schedule from a grid and scores it.
    pub fn new(grid: Grid) -> Self {
        Self {
            fitness: fitness::evaluate(&grid),
            grid,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn fitness(&self) -> u32 {
        self.fitness
    }

    /// Returns the duty of `nurse` on `day`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn duty(&self, nurse: usize, day: usize) -> Duty {
        self.grid[nurse][day]
    }

    /// Returns a new schedule that differs from this one in a single cell.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn with_duty(&self, nurse: usize, day: usize, duty: Duty) -> Self {
        let mut grid = self.grid;
        grid[nurse][day] = duty;
        Self::new(grid)
    }

    /// Whether the schedule satisfies every constraint.
    pub fn is_feasible(&self) -> bool {
        self.fitness == 0
    }
}

impl From<Grid> for Schedule {
    fn from(grid: Grid) -> Self {
        Self::new(grid)
    }
}

impl From<Schedule> for Grid {
    fn from(schedule: Schedule) -> Self {
        schedule.grid
    }
}

/// One nurse per line, duties separated by tabs.
impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            let line: Vec<String> = row.iter().map(Duty::to_string).collect();
            writeln!(f, "{}", line.join("\t"))?;
        }
        Ok(())
    }
}

/// Parses one row of duty letters per nurse. Rows are separated by newlines;
/// whitespace inside a row is ignored.
impl FromStr for Schedule {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s.lines().filter(|line| !line.trim().is_empty()).collect();
        if rows.len() != NURSES {
            return Err(shape_error(format!("found {} rows", rows.len())));
        }

        let mut grid = [[Duty::Holiday; DAYS]; NURSES];
        for (nurse, row) in rows.iter().enumerate() {
            let duties = row
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(Duty::try_from)
                .collect::<Result<Vec<Duty>>>()?;

            if duties.len() != DAYS {
                return Err(shape_error(format!(
                    "row {} has {} duties",
                    nurse,
                    duties.len()
                )));
            }
            grid[nurse].copy_from_slice(&duties);
        }

        Ok(Self::new(grid))
    }
}

fn shape_error(found: String) -> RosterError {
    RosterError::Shape {
        expected_nurses: NURSES,
        expected_days: DAYS,
        found,
    }
}
