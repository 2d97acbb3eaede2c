//! Player symbols and per-symbol data storage.
//!
//! ## Symbol
//!
//! Exactly two symbols exist: `First` (shown as X) and `Second` (shown as O).
//! `First` always opens a round.
//!
//! ## SymbolMap
//!
//! Per-symbol storage with O(1) access, indexed by `Symbol`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two marks a player can place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symbol {
    /// Opens every round. Displayed as `X`.
    #[serde(rename = "X")]
    First,
    /// Displayed as `O`.
    #[serde(rename = "O")]
    Second,
}

impl Symbol {
    /// Both symbols in turn order.
    pub const ALL: [Symbol; 2] = [Symbol::First, Symbol::Second];

    /// The opposing symbol.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Symbol::First => Symbol::Second,
            Symbol::Second => Symbol::First,
        }
    }

    /// Get the 0-based slot of this symbol.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Symbol::First => 0,
            Symbol::Second => 1,
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::First => write!(f, "X"),
            Symbol::Second => write!(f, "O"),
        }
    }
}

/// Per-symbol data storage.
///
/// Serializes as `{"X": .., "O": ..}` so persisted sessions stay readable.
///
/// ## Example
///
/// ```
/// use morpion::core::{Symbol, SymbolMap};
///
/// let mut wins: SymbolMap<u32> = SymbolMap::with_value(0);
/// wins[Symbol::Second] += 1;
/// assert_eq!(wins[Symbol::First], 0);
/// assert_eq!(wins[Symbol::Second], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolMap<T> {
    #[serde(rename = "X")]
    first: T,
    #[serde(rename = "O")]
    second: T,
}

impl<T> SymbolMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Symbol) -> T) -> Self {
        Self {
            first: factory(Symbol::First),
            second: factory(Symbol::Second),
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a symbol's data.
    #[must_use]
    pub fn get(&self, symbol: Symbol) -> &T {
        match symbol {
            Symbol::First => &self.first,
            Symbol::Second => &self.second,
        }
    }

    /// Get a mutable reference to a symbol's data.
    pub fn get_mut(&mut self, symbol: Symbol) -> &mut T {
        match symbol {
            Symbol::First => &mut self.first,
            Symbol::Second => &mut self.second,
        }
    }

    /// Iterate over (Symbol, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &T)> {
        Symbol::ALL.into_iter().map(move |s| (s, self.get(s)))
    }

    /// Find the first symbol whose entry satisfies `pred`.
    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<Symbol> {
        self.iter().find(|(_, v)| pred(v)).map(|(s, _)| s)
    }
}

impl<T> Index<Symbol> for SymbolMap<T> {
    type Output = T;

    fn index(&self, symbol: Symbol) -> &Self::Output {
        self.get(symbol)
    }
}

impl<T> IndexMut<Symbol> for SymbolMap<T> {
    fn index_mut(&mut self, symbol: Symbol) -> &mut Self::Output {
        self.get_mut(symbol)
    }
}
