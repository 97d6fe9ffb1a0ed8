//! Drives an automaton through a fixed number of rows.

use crate::{automaton::Automaton, config::Config, error::Error};
use log::debug;

/// An automaton together with the run it belongs to.
///
/// Rows are counted from 1, the first row being the generation the run
/// started from. The session keeps no history; callers draw or copy each
/// row as it comes.
#[derive(Clone, Debug)]
pub struct Session {
    config: Config,
    automaton: Automaton,
    row: usize,
}

impl Session {
    pub fn new(config: Config) -> Result<Self, Error> {
        let automaton = config.automaton()?;
        Ok(Session {
            config,
            automaton,
            row: 1,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    /// The row the current generation is drawn on.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Starts a new run with the given configuration.
    ///
    /// Unless `config.scroll` is set, the automaton is rebuilt from the
    /// configuration. With `scroll`, the current automaton is kept, and
    /// size and rule changes only apply to the next non-scrolling reset.
    pub fn reset(&mut self, config: Config) -> Result<(), Error> {
        if !config.scroll {
            self.automaton = config.automaton()?;
        }
        debug!("Reset to {:?}, scroll: {}", self.automaton, config.scroll);
        self.config = config;
        self.row = 1;
        Ok(())
    }

    fn restart(&mut self) {
        if !self.config.scroll {
            let rule = self.automaton.rule.clone();
            self.automaton = Automaton::seeded(self.automaton.size(), rule);
        }
        self.row = 1;
    }

    /// Advances one generation and returns it.
    pub fn step(&mut self) -> &[u8] {
        self.automaton.step();
        self.row += 1;
        self.automaton.cells()
    }

    /// Whether the run has produced all of its rows.
    pub fn is_finished(&self) -> bool {
        self.row >= self.config.generations
    }

    /// Restarts and yields every row of the run, starting with the first.
    ///
    /// At least one row is always produced.
    pub fn run(&mut self) -> Rows<'_> {
        self.restart();
        Rows {
            session: self,
            started: false,
        }
    }
}

/// Rows of a run, see [`Session::run`].
#[derive(Debug)]
pub struct Rows<'a> {
    session: &'a mut Session,
    started: bool,
}

impl<'a> Iterator for Rows<'a> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(self.session.automaton.cells().to_vec());
        }
        if self.session.is_finished() {
            None
        } else {
            Some(self.session.step().to_vec())
        }
    }
}
