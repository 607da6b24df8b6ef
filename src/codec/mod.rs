//! Base-62 codec for short-code generation.
//!
//! Translates between non-negative 63-bit integer keys and strings over a
//! fixed 62-symbol alphabet. The codec is pure and stateless: no I/O, no
//! randomness, O(log62 n) per call.
//!
//! The alphabet is an immutable configuration value. Both the symbol table
//! used for encoding and the reverse index used for decoding are derived
//! together when an [`Alphabet`] is constructed, so the two can never drift
//! apart. Construct it once at startup (see [`crate::config::Config`]) and
//! share it read-only.

use std::collections::HashMap;

/// Symbols of the default alphabet: digits, lowercase, uppercase.
pub const DEFAULT_ALPHABET: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of symbols in a valid alphabet.
pub const ALPHABET_LEN: usize = 62;

/// Errors produced by the codec.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("alphabet must contain exactly {ALPHABET_LEN} symbols, got {0}")]
    AlphabetLength(usize),

    #[error("alphabet contains duplicate symbol {0:?}")]
    DuplicateSymbol(char),

    #[error("number must be non-negative, got {0}")]
    NegativeNumber(i64),

    #[error("symbol {0:?} is not in the alphabet")]
    UnknownSymbol(char),

    #[error("encoded value exceeds the 63-bit key space")]
    Overflow,
}

/// An ordered set of 62 distinct symbols used for base-62 numerals.
///
/// Holds both the index→symbol table and the symbol→index map, built from
/// the same source string.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<char>,
    index: HashMap<char, u64>,
}

impl Alphabet {
    /// Builds an alphabet from exactly 62 distinct symbols.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::AlphabetLength`] if `symbols` does not contain
    /// exactly 62 characters, or [`CodecError::DuplicateSymbol`] if any
    /// character repeats.
    pub fn new(symbols: &str) -> Result<Self, CodecError> {
        let chars: Vec<char> = symbols.chars().collect();
        if chars.len() != ALPHABET_LEN {
            return Err(CodecError::AlphabetLength(chars.len()));
        }

        let mut index = HashMap::with_capacity(ALPHABET_LEN);
        for (i, &c) in chars.iter().enumerate() {
            if index.insert(c, i as u64).is_some() {
                return Err(CodecError::DuplicateSymbol(c));
            }
        }

        Ok(Self {
            symbols: chars,
            index,
        })
    }

    /// The symbol at index 0, used for left-padding.
    pub fn zero_symbol(&self) -> char {
        self.symbols[0]
    }

    /// Returns true if every character of `s` belongs to this alphabet.
    pub fn contains_all(&self, s: &str) -> bool {
        s.chars().all(|c| self.index.contains_key(&c))
    }

    fn symbol(&self, index: u64) -> char {
        self.symbols[index as usize]
    }

    fn index_of(&self, symbol: char) -> Result<u64, CodecError> {
        self.index
            .get(&symbol)
            .copied()
            .ok_or(CodecError::UnknownSymbol(symbol))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHABET).expect("default alphabet is valid")
    }
}

/// Bijective base-62 encoder/decoder over a fixed [`Alphabet`].
#[derive(Debug, Clone, Default)]
pub struct Codec {
    alphabet: Alphabet,
}

impl Codec {
    /// Creates a codec over the given alphabet.
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// The alphabet this codec encodes into.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Encodes a non-negative integer as a minimal-length base-62 numeral.
    ///
    /// `encode(0)` yields the single index-0 symbol.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::NegativeNumber`] for negative input. Negative
    /// keys are a programming error in the caller, not a runtime condition.
    pub fn encode(&self, number: i64) -> Result<String, CodecError> {
        if number < 0 {
            return Err(CodecError::NegativeNumber(number));
        }

        let mut n = number as u64;
        let base = ALPHABET_LEN as u64;
        let mut buf = Vec::new();
        loop {
            buf.push(self.alphabet.symbol(n % base));
            n /= base;
            if n == 0 {
                break;
            }
        }
        buf.reverse();

        Ok(buf.into_iter().collect())
    }

    /// Encodes `number` and left-pads it with the index-0 symbol until the
    /// result is at least `min_length` characters long.
    ///
    /// Zero is padded like any other value, so `encode_padded(0, 4)` yields
    /// four index-0 symbols rather than a single one.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::NegativeNumber`] for negative input.
    pub fn encode_padded(&self, number: i64, min_length: usize) -> Result<String, CodecError> {
        let encoded = self.encode(number)?;
        let missing = min_length.saturating_sub(encoded.chars().count());
        if missing == 0 {
            return Ok(encoded);
        }

        let mut padded = String::with_capacity(min_length);
        for _ in 0..missing {
            padded.push(self.alphabet.zero_symbol());
        }
        padded.push_str(&encoded);
        Ok(padded)
    }

    /// Decodes a base-62 numeral, most-significant symbol first.
    ///
    /// The empty string decodes to 0.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownSymbol`] if any character is outside the
    /// alphabet, or [`CodecError::Overflow`] if the value does not fit the
    /// 63-bit key space.
    pub fn decode(&self, s: &str) -> Result<i64, CodecError> {
        let base = ALPHABET_LEN as u64;
        let mut acc: u64 = 0;
        for c in s.chars() {
            let digit = self.alphabet.index_of(c)?;
            acc = acc
                .checked_mul(base)
                .and_then(|v| v.checked_add(digit))
                .ok_or(CodecError::Overflow)?;
        }

        i64::try_from(acc).map_err(|_| CodecError::Overflow)
    }

    /// Decodes a numeral produced by [`Self::encode_padded`], stripping a
    /// leading run of index-0 symbols first. An all-padding string decodes
    /// to 0.
    ///
    /// # Errors
    ///
    /// Same as [`Self::decode`].
    pub fn decode_padded(&self, s: &str) -> Result<i64, CodecError> {
        let trimmed = s.trim_start_matches(self.alphabet.zero_symbol());
        self.decode(trimmed)
    }
}
