use crate::automaton::Automaton;
use log::trace;

impl Automaton {
    /// Replaces the current generation with the next one.
    ///
    /// Every new cell is computed from the previous generation only.
    pub fn step(&mut self) {
        let rule = &self.rule;
        let cells = self
            .neighborhoods()
            .map(|state| {
                rule.lookup(state)
                    .unwrap_or_else(|e| unreachable!("The rule table must be complete: {}", e))
            })
            .collect::<Vec<_>>();
        self.cells = cells;
        self.generation += 1;
        trace!("Generation {}: {}", self.generation, self);
    }
}
