//! Link-time solver registration and lookup.
//!
//! Solution crates submit a [`Registration`] per day; [`SolverRegistry::discover`]
//! collects every submission into an immutable table keyed by (year, day).
//! The table is a `BTreeMap`, so year and day scans come out ordered without
//! any sorting at the call sites.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::RegistryError;
use crate::solver::Solver;

/// First Advent of Code event year.
pub const FIRST_YEAR: u16 = 2015;

/// Days per event.
pub const DAYS_PER_YEAR: u8 = 25;

/// Link-time registration of one solver.
///
/// Submitted from the solution crate next to the solver it registers:
///
/// ```ignore
/// aoc_runner::inventory::submit! {
///     Registration { solver: &Day01 }
/// }
/// ```
pub struct Registration {
    /// The registered solver; its own coordinates key the registry.
    pub solver: &'static dyn Solver,
}

inventory::collect!(Registration);

/// Immutable lookup table of every known solver.
pub struct SolverRegistry {
    solvers: BTreeMap<(u16, u8), &'static dyn Solver>,
}

impl SolverRegistry {
    /// Collect every link-time [`Registration`] into a registry.
    ///
    /// Fails on a duplicate (year, day) or a coordinate outside the event
    /// calendar, so a bad registration is a startup error rather than a
    /// silently shadowed day.
    pub fn discover() -> Result<Self, RegistryError> {
        Self::from_solvers(inventory::iter::<Registration>().map(|registration| registration.solver))
    }

    /// Build a registry from an explicit set of solvers.
    ///
    /// Same validation as [`discover`](Self::discover); the submission order
    /// does not matter.
    pub fn from_solvers<I>(solvers: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = &'static dyn Solver>,
    {
        let mut table: BTreeMap<(u16, u8), &'static dyn Solver> = BTreeMap::new();
        for solver in solvers {
            let (year, day) = (solver.year(), solver.day());
            if year < FIRST_YEAR || day == 0 || day > DAYS_PER_YEAR {
                return Err(RegistryError::OutOfRange { year, day });
            }
            if table.insert((year, day), solver).is_some() {
                return Err(RegistryError::Duplicate { year, day });
            }
        }
        Ok(Self { solvers: table })
    }

    /// Exact lookup; `None` when nothing is registered for the coordinate.
    pub fn get(&self, year: u16, day: u8) -> Option<&'static dyn Solver> {
        self.solvers.get(&(year, day)).copied()
    }

    /// Every solver for one year, ascending by day.
    pub fn for_year(&self, year: u16) -> Vec<&'static dyn Solver> {
        self.solvers
            .range((year, 1)..=(year, DAYS_PER_YEAR))
            .map(|(_, solver)| *solver)
            .collect()
    }

    /// Every known solver, ascending by year then day.
    pub fn all(&self) -> Vec<&'static dyn Solver> {
        self.solvers.values().copied().collect()
    }

    /// The solver with the highest (year, day), if any are registered.
    pub fn latest(&self) -> Option<&'static dyn Solver> {
        self.solvers.last_key_value().map(|(_, solver)| *solver)
    }

    /// Registered coordinates, ascending.
    pub fn coordinates(&self) -> impl Iterator<Item = (u16, u8)> + '_ {
        self.solvers.keys().copied()
    }

    /// Number of registered solvers.
    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    /// Whether the registry holds no solvers at all.
    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }
}

// `dyn Solver` is not `Debug`; render the table as coordinate -> name.
impl fmt::Debug for SolverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.solvers
                    .iter()
                    .map(|(coordinate, solver)| (coordinate, solver.name())),
            )
            .finish()
    }
}
