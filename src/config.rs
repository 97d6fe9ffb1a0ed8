//! Run configuration.

use crate::{automaton::Automaton, error::Error, session::Session};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything needed to start a run.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Number of cells in a row.
    pub size: usize,
    /// Wolfram rule number.
    pub rule: i128,
    /// Number of rows in a run, the first row included.
    pub generations: usize,
    /// Whether a reset keeps the current automaton and carries on from its
    /// current row, instead of starting over from the single seed.
    pub scroll: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            size: 200,
            rule: 30,
            generations: 200,
            scroll: false,
        }
    }
}

impl Config {
    /// Sets up a new configuration with given size and rule.
    pub fn new(size: usize, rule: i128) -> Self {
        Config {
            size,
            rule,
            ..Config::default()
        }
    }

    /// Sets the size.
    pub fn set_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sets the rule number.
    pub fn set_rule(mut self, rule: i128) -> Self {
        self.rule = rule;
        self
    }

    /// Sets the number of rows in a run.
    pub fn set_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the scroll flag.
    pub fn set_scroll(mut self, scroll: bool) -> Self {
        self.scroll = scroll;
        self
    }

    /// Creates a new automaton from the configuration.
    pub fn automaton(&self) -> Result<Automaton, Error> {
        Automaton::new(self.size, self.rule)
    }

    /// Creates a new session from the configuration.
    pub fn session(self) -> Result<Session, Error> {
        Session::new(self)
    }
}
