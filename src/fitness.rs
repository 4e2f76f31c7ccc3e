//! # Fitness
//!
//! Scores a roster grid against the six scheduling constraints. Every
//! violation adds a weighted penalty; categories are scored independently and
//! summed, so one bad cell may be charged by several categories.
//!
//! | Constraint | Weight |
//! |---|---|
//! | exactly one holiday per nurse | 250 |
//! | no Morning or Evening right after Night | 200 |
//! | one or two nights per nurse | 50 |
//! | a class-A nurse on every Morning and Evening | 150 |
//! | exactly one class-A nurse on Night | 100 |
//! | every shift staffed every day | 300 |
//!
//! The evaluator is a pure function of the grid and can be called from any
//! number of threads at once.
//!
//! ## Example
//!
//! ```rust
//! use rostergen::fitness::{self, Constraint};
//! use rostergen::roster::{Duty, DAYS, NURSES};
//!
//! let grid = [[Duty::Holiday; DAYS]; NURSES];
//! let breakdown = fitness::breakdown(&grid);
//!
//! assert_eq!(breakdown.penalty(Constraint::Holiday), 15_000);
//! assert_eq!(breakdown.total(), fitness::evaluate(&grid));
//! ```

use crate::roster::{Duty, Grid, NurseClass, DAYS, NURSES};

/// The six constraint categories, in weight-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// Exactly one holiday per nurse per week.
    Holiday,
    /// Night must not be followed by Morning or Evening on the next day.
    ForbiddenPattern,
    /// At least one and at most two nights per nurse per week.
    NightCount,
    /// At least one class-A nurse on Morning and on Evening every day.
    ClassACoverage,
    /// Exactly one class-A nurse on Night every day.
    ClassANight,
    /// At least one nurse on every shift every day.
    Staffing,
}

impl Constraint {
    pub const ALL: [Constraint; 6] = [
        Constraint::Holiday,
        Constraint::ForbiddenPattern,
        Constraint::NightCount,
        Constraint::ClassACoverage,
        Constraint::ClassANight,
        Constraint::Staffing,
    ];

    /// Penalty charged per violation.
    pub const fn weight(self) -> u32 {
        match self {
            Constraint::Holiday => 250,
            Constraint::ForbiddenPattern => 200,
            Constraint::NightCount => 50,
            Constraint::ClassACoverage => 150,
            Constraint::ClassANight => 100,
            Constraint::Staffing => 300,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Penalty totals per constraint category for one grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstraintBreakdown {
    penalties: [u32; 6],
}

impl ConstraintBreakdown {
    /// Penalty charged by `constraint`.
    pub fn penalty(&self, constraint: Constraint) -> u32 {
        self.penalties[constraint.index()]
    }

    /// Sum over all categories. Equal to [`evaluate`] for the same grid.
    pub fn total(&self) -> u32 {
        self.penalties.iter().sum()
    }

    /// Categories with a non-zero penalty.
    pub fn violated(&self) -> impl Iterator<Item = Constraint> + '_ {
        Constraint::ALL
            .into_iter()
            .filter(move |&constraint| self.penalty(constraint) > 0)
    }

    fn charge(&mut self, constraint: Constraint, violations: usize) {
        // Violation counts are bounded by the grid size, so they fit in u32.
        self.penalties[constraint.index()] += violations as u32 * constraint.weight();
    }
}

/// Returns the penalty score of `grid`. 0 means every constraint holds.
pub fn evaluate(grid: &Grid) -> u32 {
    breakdown(grid).total()
}

/// Scores `grid` per constraint category.
pub fn breakdown(grid: &Grid) -> ConstraintBreakdown {
    let mut breakdown = ConstraintBreakdown::default();

    for row in grid {
        score_nurse(row, &mut breakdown);
    }

    for day in 0..DAYS {
        score_day(grid, day, &mut breakdown);
    }

    breakdown
}

fn score_nurse(row: &[Duty; DAYS], breakdown: &mut ConstraintBreakdown) {
    let mut holidays = 0usize;
    let mut nights = 0usize;
    let mut forbidden = 0usize;

    for (day, &duty) in row.iter().enumerate() {
        match duty {
            Duty::Holiday => holidays += 1,
            Duty::Night => {
                nights += 1;
                // The week wraps: the last night is followed by day 0.
                if matches!(row[(day + 1) % DAYS], Duty::Morning | Duty::Evening) {
                    forbidden += 1;
                }
            }
            _ => {}
        }
    }

    breakdown.charge(Constraint::Holiday, holidays.abs_diff(1));
    breakdown.charge(Constraint::ForbiddenPattern, forbidden);

    // No nights and too many nights are charged by separate rules.
    if nights == 0 {
        breakdown.charge(Constraint::NightCount, 1);
    } else if nights > 2 {
        breakdown.charge(Constraint::NightCount, nights - 2);
    }
}

fn score_day(grid: &Grid, day: usize, breakdown: &mut ConstraintBreakdown) {
    let mut staffed = [0usize; 3];
    let mut class_a = [0usize; 3];

    for nurse in 0..NURSES {
        let slot = match grid[nurse][day] {
            Duty::Morning => 0,
            Duty::Evening => 1,
            Duty::Night => 2,
            Duty::Holiday => continue,
        };
        staffed[slot] += 1;
        if NurseClass::of(nurse) == NurseClass::A {
            class_a[slot] += 1;
        }
    }

    let [class_a_morning, class_a_evening, class_a_night] = class_a;

    breakdown.charge(
        Constraint::Staffing,
        staffed.iter().filter(|&&count| count == 0).count(),
    );
    breakdown.charge(
        Constraint::ClassACoverage,
        usize::from(class_a_morning == 0) + usize::from(class_a_evening == 0),
    );
    breakdown.charge(Constraint::ClassANight, class_a_night.abs_diff(1));
}
