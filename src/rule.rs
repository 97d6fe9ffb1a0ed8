use crate::error::Error;
use log::debug;
use std::{
    convert::TryFrom,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    num::IntErrorKind,
    str::FromStr,
};

pub(crate) const MAX_WINDOW_SIZE: usize = 6;

/// A Wolfram rule decoded into a lookup table.
///
/// Neighborhood state `s` maps to bit `s` of the rule number, so the
/// highest state corresponds to the most significant bit.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RuleTable {
    rule_id: u64,
    window_size: usize,
    rule_table: [u8; 1 << MAX_WINDOW_SIZE],
}

impl Debug for RuleTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("RuleTable")
            .field("rule_id", &self.rule_id)
            .field("window_size", &self.window_size)
            .finish()
    }
}

impl Display for RuleTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "W{}", self.rule_id)
    }
}

impl RuleTable {
    /// Decodes a rule number that is already known to fit in 64 bits.
    pub fn new(rule_id: u64) -> Self {
        let window_size = window_size_for(rule_id);
        let mut rule_table = [0; 1 << MAX_WINDOW_SIZE];
        rule_table
            .iter_mut()
            .take(1 << window_size)
            .enumerate()
            .for_each(|(state, bit)| *bit = (rule_id >> state & 1) as u8);
        debug!("Decoded rule {} with a window of {} cells", rule_id, window_size);
        RuleTable {
            rule_id,
            window_size,
            rule_table,
        }
    }

    /// Decodes any integer, rejecting negative rules and rules wider than 64 bits.
    pub fn decode(rule_id: i128) -> Result<Self, Error> {
        if rule_id < 0 {
            return Err(Error::InvalidRule(rule_id.to_string()));
        }
        let rule_id =
            u64::try_from(rule_id).map_err(|_| Error::UnsupportedRule(rule_id.to_string()))?;
        Ok(RuleTable::new(rule_id))
    }

    pub fn rule_id(&self) -> u64 {
        self.rule_id
    }

    /// Number of cells in a neighborhood.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Number of neighborhood states, `2^window_size`.
    pub fn len(&self) -> usize {
        1 << self.window_size
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, state: u64) -> Option<u8> {
        if state < self.len() as u64 {
            Some(self.rule_table[state as usize])
        } else {
            None
        }
    }

    pub fn lookup(&self, state: u64) -> Result<u8, Error> {
        self.get(state).ok_or(Error::MissingNeighborhoodState(state))
    }

    /// `(state, bit)` pairs, from the highest state down to 0.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u8)> + '_ {
        (0..self.len())
            .rev()
            .map(move |state| (state as u64, self.rule_table[state]))
    }
}

/// The smallest window whose `2^window_size` states can hold every bit of the rule.
fn window_size_for(rule_id: u64) -> usize {
    match 64 - rule_id.leading_zeros() {
        0..=8 => 3,
        9..=16 => 4,
        17..=32 => 5,
        _ => 6,
    }
}

impl FromStr for RuleTable {
    type Err = Error;

    /// Parses `30`, `W30` or `w30`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix(|c: char| c == 'W' || c == 'w').unwrap_or(s);
        match digits.parse::<i128>() {
            Ok(rule_id) => RuleTable::decode(rule_id),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Err(Error::UnsupportedRule(digits.to_string())),
                IntErrorKind::NegOverflow => Err(Error::InvalidRule(digits.to_string())),
                _ => Err(Error::ParseRule(s.to_string())),
            },
        }
    }
}
