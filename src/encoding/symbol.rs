//! Output symbols and the append-only stream that collects them.

use serde::{Deserialize, Serialize};

/// One symbol of a quadtree encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A uniform white region.
    White,
    /// A uniform black region.
    Black,
    /// A mixed region; its quadrants' encodings follow.
    Split,
}

impl Symbol {
    /// Character for this symbol in the default alphabet.
    #[inline]
    pub fn as_char(self) -> char {
        SymbolAlphabet::default().char_for(self)
    }
}

/// Character mapping used when a stream is rendered as text.
///
/// Defaults to `B` (branco, white), `P` (preto, black) and `X` (split).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolAlphabet {
    /// Character for uniform white regions.
    pub white: char,
    /// Character for uniform black regions.
    pub black: char,
    /// Character for split markers.
    pub split: char,
}

impl Default for SymbolAlphabet {
    fn default() -> Self {
        Self {
            white: 'B',
            black: 'P',
            split: 'X',
        }
    }
}

impl SymbolAlphabet {
    /// Returns the character for `symbol`.
    #[inline]
    pub fn char_for(&self, symbol: Symbol) -> char {
        match symbol {
            Symbol::White => self.white,
            Symbol::Black => self.black,
            Symbol::Split => self.split,
        }
    }

    /// Returns the first character used for more than one symbol, if any.
    pub fn duplicate(&self) -> Option<char> {
        if self.white == self.black || self.white == self.split {
            Some(self.white)
        } else if self.black == self.split {
            Some(self.black)
        } else {
            None
        }
    }
}

/// Number of each symbol in a stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SymbolCounts {
    /// `WHITE` leaves.
    pub white: usize,
    /// `BLACK` leaves.
    pub black: usize,
    /// `SPLIT` markers.
    pub split: usize,
}

/// Pre-order sequence of symbols describing a quadtree decomposition.
///
/// Symbols can only be appended, and only by the encoder; once handed
/// out the stream is read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolStream {
    symbols: Vec<Symbol>,
}

impl SymbolStream {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn push(&mut self, symbol: Symbol) {
        self.symbols.push(symbol);
    }

    /// Returns the symbols in emission order.
    #[inline]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Returns the number of symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if nothing has been emitted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterates over the symbols in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    /// Tallies the symbols by kind.
    pub fn counts(&self) -> SymbolCounts {
        self.symbols
            .iter()
            .fold(SymbolCounts::default(), |mut counts, symbol| {
                match symbol {
                    Symbol::White => counts.white += 1,
                    Symbol::Black => counts.black += 1,
                    Symbol::Split => counts.split += 1,
                }
                counts
            })
    }

    /// Renders the stream as text using `alphabet`, with no separators.
    pub fn render(&self, alphabet: &SymbolAlphabet) -> String {
        self.symbols.iter().map(|&s| alphabet.char_for(s)).collect()
    }
}

impl<'a> IntoIterator for &'a SymbolStream {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for SymbolStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(&SymbolAlphabet::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(symbols: &[Symbol]) -> SymbolStream {
        let mut stream = SymbolStream::new();
        for &s in symbols {
            stream.push(s);
        }
        stream
    }

    #[test]
    fn test_default_rendering() {
        let s = stream(&[Symbol::Split, Symbol::White, Symbol::Black]);
        assert_eq!(s.to_string(), "XBP");
        assert_eq!(Symbol::Black.as_char(), 'P');
    }

    #[test]
    fn test_custom_alphabet() {
        let alphabet = SymbolAlphabet {
            white: '0',
            black: '1',
            split: '*',
        };
        let s = stream(&[Symbol::Split, Symbol::Black, Symbol::White]);
        assert_eq!(s.render(&alphabet), "*10");
    }

    #[test]
    fn test_duplicate_detection() {
        assert_eq!(SymbolAlphabet::default().duplicate(), None);
        let alphabet = SymbolAlphabet {
            black: 'X',
            ..Default::default()
        };
        assert_eq!(alphabet.duplicate(), Some('X'));
    }

    #[test]
    fn test_counts() {
        let s = stream(&[Symbol::Split, Symbol::White, Symbol::Black, Symbol::Black]);
        assert_eq!(
            s.counts(),
            SymbolCounts {
                white: 1,
                black: 2,
                split: 1
            }
        );
        assert_eq!(s.len(), 4);
        assert!(!s.is_empty());
    }
}
