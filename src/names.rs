//! Positional name table: 0-based position → {cardinal, ordinal, symbol}.
//!
//! One indexed table of records rather than three parallel arrays, so a
//! range check on any accessor is a range check on all of them. Adding a
//! seventeenth arity means adding exactly one record here; nothing can
//! drift out of lockstep.

use thiserror::Error;

/// Capacity of the name table; the largest overload family we can emit.
pub const MAX_SUPPORTED_ARITY: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionName {
    /// Counting word for the arity ("one".."sixteen").
    pub cardinal: &'static str,
    /// Position word for documentation ("first".."sixteenth").
    pub ordinal: &'static str,
    /// Type-parameter symbol for this position.
    pub symbol: &'static str,
}

const POSITIONS: [PositionName; MAX_SUPPORTED_ARITY] = [
    PositionName { cardinal: "one",       ordinal: "first",       symbol: "T" },
    PositionName { cardinal: "two",       ordinal: "second",      symbol: "U" },
    PositionName { cardinal: "three",     ordinal: "third",       symbol: "V" },
    PositionName { cardinal: "four",      ordinal: "fourth",      symbol: "W" },
    PositionName { cardinal: "five",      ordinal: "fifth",       symbol: "X" },
    PositionName { cardinal: "six",       ordinal: "sixth",       symbol: "Y" },
    PositionName { cardinal: "seven",     ordinal: "seventh",     symbol: "Z" },
    PositionName { cardinal: "eight",     ordinal: "eighth",      symbol: "A" },
    PositionName { cardinal: "nine",      ordinal: "ninth",       symbol: "B" },
    PositionName { cardinal: "ten",       ordinal: "tenth",       symbol: "C" },
    PositionName { cardinal: "eleven",    ordinal: "eleventh",    symbol: "D" },
    PositionName { cardinal: "twelve",    ordinal: "twelfth",     symbol: "E" },
    PositionName { cardinal: "thirteen",  ordinal: "thirteenth",  symbol: "F" },
    PositionName { cardinal: "fourteen",  ordinal: "fourteenth",  symbol: "G" },
    PositionName { cardinal: "fifteen",   ordinal: "fifteenth",   symbol: "H" },
    PositionName { cardinal: "sixteen",   ordinal: "sixteenth",   symbol: "I" },
];

/// Look up the name record for a 0-based position.
///
/// Out-of-range positions are a configuration error: the generator refuses
/// to run rather than emit malformed text.
pub fn position(index: usize) -> Result<&'static PositionName, GenError> {
    POSITIONS.get(index).ok_or(GenError::PositionOutOfRange { index })
}

pub fn cardinal(index: usize) -> Result<&'static str, GenError> {
    position(index).map(|p| p.cardinal)
}

pub fn ordinal(index: usize) -> Result<&'static str, GenError> {
    position(index).map(|p| p.ordinal)
}

pub fn symbol(index: usize) -> Result<&'static str, GenError> {
    position(index).map(|p| p.symbol)
}

// ------------------------------- Errors ----------------------------------- //

/// Configuration errors: all fatal, all raised before anything is written.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenError {
    #[error("position {index} is outside the {MAX_SUPPORTED_ARITY}-entry name table")]
    PositionOutOfRange { index: usize },

    #[error("arity index {index} is outside the configured range 0..{max_arity}")]
    ArityOutOfRange { index: usize, max_arity: usize },

    #[error("max arity {requested} exceeds the {MAX_SUPPORTED_ARITY}-entry name table")]
    MaxArityTooLarge { requested: usize },

    #[error("max arity must be at least 1")]
    MaxArityZero,
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_accessors_defined_for_every_supported_position() {
        for i in 0..MAX_SUPPORTED_ARITY {
            assert!(cardinal(i).is_ok(), "cardinal({i})");
            assert!(ordinal(i).is_ok(), "ordinal({i})");
            assert!(symbol(i).is_ok(), "symbol({i})");
        }
    }

    #[test]
    fn all_accessors_fail_identically_past_the_table() {
        assert_eq!(cardinal(16), Err(GenError::PositionOutOfRange { index: 16 }));
        assert_eq!(ordinal(16), Err(GenError::PositionOutOfRange { index: 16 }));
        assert_eq!(symbol(16), Err(GenError::PositionOutOfRange { index: 16 }));
    }

    #[test]
    fn table_endpoints() {
        assert_eq!(position(0).unwrap().symbol, "T");
        assert_eq!(position(0).unwrap().ordinal, "first");
        assert_eq!(position(15).unwrap().symbol, "I");
        assert_eq!(position(15).unwrap().ordinal, "sixteenth");
        assert_eq!(position(15).unwrap().cardinal, "sixteen");
    }

    #[test]
    fn symbols_are_distinct() {
        for i in 0..MAX_SUPPORTED_ARITY {
            for j in (i + 1)..MAX_SUPPORTED_ARITY {
                assert_ne!(POSITIONS[i].symbol, POSITIONS[j].symbol, "{i} vs {j}");
            }
        }
    }
}
