use crate::{error::Error, rule::RuleTable};
use log::debug;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

/// A row of cells evolving under a Wolfram rule, with circular boundaries.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Automaton {
    pub(crate) rule: RuleTable,
    pub(crate) cells: Vec<u8>,
    pub(crate) generation: u64,
}

impl Debug for Automaton {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Automaton")
            .field("size", &self.size())
            .field("rule", &self.rule.rule_id())
            .field("generation", &self.generation)
            .finish()
    }
}

/// One line, `o` for live cells and `.` for dead ones.
impl Display for Automaton {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for &cell in &self.cells {
            f.write_str(if cell == 1 { "o" } else { "." })?;
        }
        Ok(())
    }
}

impl Automaton {
    /// A row of `size` dead cells with a single live cell at `size / 2`.
    pub fn new(size: usize, rule_id: i128) -> Result<Self, Error> {
        let rule = RuleTable::decode(rule_id)?;
        Self::with_rule(size, rule)
    }

    pub fn with_rule(size: usize, rule: RuleTable) -> Result<Self, Error> {
        if size == 0 {
            return Err(Error::InvalidSize);
        }
        Ok(Self::seeded(size, rule))
    }

    /// Starts from an arbitrary generation instead of the single seed.
    pub fn from_cells(cells: Vec<u8>, rule_id: i128) -> Result<Self, Error> {
        let rule = RuleTable::decode(rule_id)?;
        if cells.is_empty() {
            return Err(Error::InvalidSize);
        }
        if let Some((index, &value)) = cells.iter().enumerate().find(|&(_, &c)| c > 1) {
            return Err(Error::InvalidCell { index, value });
        }
        debug!("Created {}-cell automaton from cells, rule {}", cells.len(), rule);
        Ok(Automaton {
            rule,
            cells,
            generation: 0,
        })
    }

    /// `size` must be positive.
    pub(crate) fn seeded(size: usize, rule: RuleTable) -> Self {
        debug_assert!(size > 0, "Size must be positive");
        let mut cells = vec![0; size];
        cells[size / 2] = 1;
        debug!("Created {}-cell automaton, rule {}", size, rule);
        Automaton {
            rule,
            cells,
            generation: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn rule(&self) -> &RuleTable {
        &self.rule
    }

    pub fn rule_id(&self) -> u64 {
        self.rule.rule_id()
    }

    pub fn window_size(&self) -> usize {
        self.rule.window_size()
    }

    /// The current generation.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Number of steps taken since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == 1).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn single_seed() -> Result<(), Box<dyn StdError>> {
        assert_eq!(Automaton::new(5, 30)?.cells(), &[0, 0, 1, 0, 0]);
        assert_eq!(Automaton::new(4, 30)?.cells(), &[0, 0, 1, 0]);
        assert_eq!(Automaton::new(1, 30)?.cells(), &[1]);
        Ok(())
    }

    #[test]
    fn construction_errors() {
        assert_eq!(Automaton::new(0, 30), Err(Error::InvalidSize));
        assert_eq!(
            Automaton::new(5, -1),
            Err(Error::InvalidRule("-1".to_string()))
        );
        assert_eq!(
            Automaton::new(5, 1_i128 << 64),
            Err(Error::UnsupportedRule("18446744073709551616".to_string()))
        );
        assert_eq!(Automaton::from_cells(Vec::new(), 30), Err(Error::InvalidSize));
        assert_eq!(
            Automaton::from_cells(vec![0, 1, 2], 30),
            Err(Error::InvalidCell { index: 2, value: 2 })
        );
    }

    #[test]
    fn accessors() -> Result<(), Box<dyn StdError>> {
        let automaton = Automaton::new(9, 300)?;
        assert_eq!(automaton.size(), 9);
        assert_eq!(automaton.rule_id(), 300);
        assert_eq!(automaton.window_size(), 4);
        assert_eq!(automaton.generation(), 0);
        assert_eq!(automaton.population(), 1);
        assert_eq!(automaton.to_string(), "....o....");
        assert_eq!(
            format!("{:?}", automaton),
            "Automaton { size: 9, rule: 300, generation: 0 }"
        );
        Ok(())
    }

    #[test]
    fn repeated_reads() -> Result<(), Box<dyn StdError>> {
        let automaton = Automaton::from_cells(vec![1, 0, 1, 1, 0], 110)?;
        assert_eq!(automaton.cells(), automaton.cells());
        assert_eq!(automaton.cells(), &[1, 0, 1, 1, 0]);
        Ok(())
    }
}
