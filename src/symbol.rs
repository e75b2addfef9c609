//! Symbol table for string interning - enables O(1) string comparison.
//!
//! Every distinct string is stored once and assigned a `Symbol`. Two calls to
//! [`SymbolTable::intern`] with equal content return the same `Symbol`, so
//! names can be compared by handle instead of by content.
//!
//! The table is an ordinary value owned by whoever drives the lexer, so
//! independent parses never share state.

use std::fmt;

use ahash::RandomState;
use indexmap::IndexSet;

/// A unique identifier for an interned string.
/// O(1) comparison and copying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

impl Symbol {
    /// Position of the string in its table.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Stores all interned strings. Symbols are indices into insertion order.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    strings: IndexSet<Box<str>, RandomState>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string and return its Symbol.
    /// If the string already exists, returns the existing Symbol.
    pub fn intern(&mut self, s: &str) -> Symbol {
        if let Some(index) = self.strings.get_index_of(s) {
            return Symbol(index as u32);
        }
        let (index, _) = self.strings.insert_full(s.into());
        Symbol(index as u32)
    }

    /// Get the string for a Symbol.
    /// Returns None if the symbol came from a different table.
    pub fn resolve(&self, symbol: Symbol) -> Option<&str> {
        self.strings.get_index(symbol.index()).map(|s| &**s)
    }

    /// Get the Symbol for a string, without interning.
    pub fn lookup(&self, s: &str) -> Option<Symbol> {
        self.strings.get_index_of(s).map(|i| Symbol(i as u32))
    }

    /// Number of distinct strings interned so far.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

/// The reserved words, interned up front.
///
/// The lexer still reports them as ordinary names; callers that care compare
/// a name token's symbol against these handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keywords {
    pub if_: Symbol,
    pub for_: Symbol,
    pub while_: Symbol,
}

impl Keywords {
    pub fn new(table: &mut SymbolTable) -> Self {
        Self {
            if_: table.intern("if"),
            for_: table.intern("for"),
            while_: table.intern("while"),
        }
    }

    pub fn is_keyword(&self, symbol: Symbol) -> bool {
        symbol == self.if_ || symbol == self.for_ || symbol == self.while_
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_interning() {
        let mut table = SymbolTable::new();

        let id1 = table.intern("hello");
        let id2 = table.intern("world");
        let id3 = table.intern("hello"); // Same string, should get same ID

        assert_eq!(id1, id3);
        assert_ne!(id1, id2);
        assert_eq!(table.resolve(id1), Some("hello"));
        assert_eq!(table.resolve(id2), Some("world"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_distinct_content_distinct_symbols() {
        let mut table = SymbolTable::new();
        let a = String::from("hello");
        let b = String::from("hello");

        assert_ne!(a.as_ptr(), b.as_ptr());
        assert_eq!(table.intern(&a), table.intern(&b));
        assert_ne!(table.intern(&a), table.intern("hello!"));
        assert_ne!(table.intern(&a), table.intern("hell"));
        assert_ne!(table.intern(""), table.intern(&a));
    }

    #[test]
    fn test_intern_is_idempotent() {
        let mut table = SymbolTable::new();
        let id = table.intern("hello");
        let text = table.resolve(id).unwrap().to_string();
        assert_eq!(table.intern(&text), id);
    }

    #[test]
    fn test_lookup_does_not_insert() {
        let mut table = SymbolTable::new();
        assert_eq!(table.lookup("missing"), None);
        assert!(table.is_empty());

        let id = table.intern("present");
        assert_eq!(table.lookup("present"), Some(id));
    }

    #[test]
    fn test_keywords() {
        let mut table = SymbolTable::new();
        let keywords = Keywords::new(&mut table);

        assert!(keywords.is_keyword(table.intern("while")));
        assert!(keywords.is_keyword(table.intern("if")));
        assert!(!keywords.is_keyword(table.intern("iff")));
        assert_eq!(keywords.for_, table.intern("for"));
    }
}
