use crate::automaton::Automaton;
use std::{
    iter::{Copied, FusedIterator},
    slice::Iter,
};

/// Neighborhood states of every cell, in index order.
///
/// A window of `window_size` cells starts `(window_size - 1) / 2` cells left of
/// the current one, so even windows lean to the right. Indices wrap around both
/// ends, and the leftmost cell is the most significant bit.
#[derive(Clone, Debug)]
pub struct Neighborhoods<'a> {
    cells: &'a [u8],
    window_size: usize,
    index: usize,
}

pub fn neighborhoods(cells: &[u8], window_size: usize) -> Neighborhoods<'_> {
    debug_assert!(
        (1..=64).contains(&window_size),
        "A neighborhood state must fit in 64 bits"
    );
    Neighborhoods {
        cells,
        window_size,
        index: 0,
    }
}

impl<'a> Iterator for Neighborhoods<'a> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let size = self.cells.len();
        if self.index >= size {
            return None;
        }
        let offset = (self.window_size - 1) / 2 % size;
        let start = self.index + size - offset;
        let state = (start..start + self.window_size)
            .fold(0_u64, |state, i| state << 1 | self.cells[i % size] as u64);
        self.index += 1;
        Some(state)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.cells.len().saturating_sub(self.index);
        (len, Some(len))
    }
}

impl<'a> ExactSizeIterator for Neighborhoods<'a> {}

impl<'a> FusedIterator for Neighborhoods<'a> {}

impl Automaton {
    /// Neighborhood states of the current generation under this automaton's rule.
    pub fn neighborhoods(&self) -> Neighborhoods<'_> {
        neighborhoods(&self.cells, self.window_size())
    }

    /// Cells of the current generation.
    ///
    /// The iterator borrows the automaton, so it cannot outlive the generation it reads.
    pub fn iter(&self) -> Copied<Iter<'_, u8>> {
        self.cells.iter().copied()
    }

    pub fn for_living_cells<F>(&self, f: F)
    where
        F: FnMut(usize),
    {
        let mut f = f;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == 1)
            .for_each(|(i, _)| f(i))
    }
}

impl<'a> IntoIterator for &'a Automaton {
    type Item = u8;
    type IntoIter = Copied<Iter<'a, u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
