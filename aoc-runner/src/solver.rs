//! Solver contract and per-invocation context.
//!
//! A solver turns puzzle input into a lazy stream of part values. The runner
//! pulls parts one at a time and measures the wall-clock cost of each pull,
//! so a part's work (parsing included) belongs inside the stream rather than
//! up front. The [`parts!`] macro builds such a stream from one expression
//! per part.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::error::SolveError;

/// Lazy, finite, ordered stream of part values.
///
/// Each item is the stringified answer for the next part, or the error that
/// ends the attempt. Nothing is computed until the item is pulled.
pub type Parts<'a> = Box<dyn Iterator<Item = Result<String, SolveError>> + 'a>;

/// A registered puzzle solution.
///
/// One value exists per (year, day) coordinate; the registry keys itself on
/// the coordinates the solver reports. Implementations are unit structs
/// registered at link time, see [`Registration`](crate::Registration).
///
/// # Example
///
/// ```
/// use aoc_runner::{Parts, SolveContext, SolveError, Solver, parts};
///
/// struct Echo;
///
/// impl Solver for Echo {
///     fn year(&self) -> u16 { 2023 }
///     fn day(&self) -> u8 { 1 }
///     fn name(&self) -> &str { "Echo" }
///
///     fn solve<'a>(&'a self, input: &'a str, _ctx: &'a SolveContext) -> Parts<'a> {
///         parts![Ok::<_, SolveError>(input.len())]
///     }
/// }
///
/// let ctx = SolveContext::new();
/// let mut parts = Echo.solve("abc", &ctx);
/// assert_eq!(parts.next().unwrap().unwrap(), "3");
/// assert!(parts.next().is_none());
/// ```
pub trait Solver: Sync {
    /// Event year this solution belongs to.
    fn year(&self) -> u16;

    /// Day within the event, 1 to 25.
    fn day(&self) -> u8;

    /// Display title of the puzzle.
    fn name(&self) -> &str;

    /// Produce the lazy part stream for one input.
    ///
    /// Recoverable problems (malformed input, impossible states) surface as
    /// an `Err` item in the stream; the runner treats that as fatal for the
    /// current fixture and moves on to the next one.
    fn solve<'a>(&'a self, input: &'a str, ctx: &'a SolveContext) -> Parts<'a>;
}

/// Per-invocation context handed to [`Solver::solve`].
///
/// Holds one diagnostic buffer per part index. Requesting the same index
/// twice yields a sink backed by the same buffer, so a part may write in
/// several bursts. A context is never shared between fixture runs.
#[derive(Default)]
pub struct SolveContext {
    sinks: RefCell<BTreeMap<usize, Rc<RefCell<String>>>>,
}

impl SolveContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writable diagnostic sink for the given 1-based part index.
    pub fn diagnostics(&self, part: usize) -> DiagnosticSink {
        let buffer = Rc::clone(self.sinks.borrow_mut().entry(part).or_default());
        DiagnosticSink { buffer }
    }

    /// Everything the given part has written so far; empty if nothing.
    pub fn captured(&self, part: usize) -> String {
        self.sinks
            .borrow()
            .get(&part)
            .map(|buffer| buffer.borrow().clone())
            .unwrap_or_default()
    }
}

/// Diagnostic output handle for one part.
///
/// All sinks obtained for the same part index append to the same buffer.
pub struct DiagnosticSink {
    buffer: Rc<RefCell<String>>,
}

impl fmt::Write for DiagnosticSink {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.borrow_mut().push_str(s);
        Ok(())
    }
}

/// Stringify one part expression for the stream. Used by [`parts!`].
#[doc(hidden)]
pub fn part_value<T: fmt::Display>(value: Result<T, SolveError>) -> Result<String, SolveError> {
    value.map(|answer| answer.to_string())
}

/// Build a lazy [`Parts`] stream from one expression per part.
///
/// Expressions are evaluated one at a time, only when the runner pulls the
/// matching part, so per-part timing covers exactly that part's work. Each
/// expression must yield `Result<impl Display, SolveError>`.
#[macro_export]
macro_rules! parts {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        ::std::boxed::Box::new(
            ::std::iter::once_with(move || $crate::solver::part_value($first))
                $(.chain(::std::iter::once_with(move || $crate::solver::part_value($rest))))*
        )
    };
}
