//! One-dimensional cellular automata with Wolfram rule numbers.
//!
//! Rules below 256 look at 3 cells, and wider rules at up to 6 cells,
//! so that every bit of a 64-bit rule number addresses one neighborhood.
//!
//! # Example
//!
//! ```rust
//! use elementary::Automaton;
//!
//! let mut automaton = Automaton::new(5, 30).unwrap();
//! assert_eq!(automaton.cells(), &[0, 0, 1, 0, 0]);
//! automaton.step();
//! assert_eq!(automaton.cells(), &[0, 1, 1, 1, 0]);
//! ```

mod automaton;
mod config;
mod error;
mod evolve;
mod iter;
mod rule;
mod session;

pub use automaton::Automaton;
pub use config::Config;
pub use error::Error;
pub use iter::{neighborhoods, Neighborhoods};
pub use rule::RuleTable;
pub use session::{Rows, Session};
