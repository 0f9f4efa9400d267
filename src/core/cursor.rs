//! Positional token reader for data-file records
//!
//! Record fields are whitespace-separated and located purely by position, with
//! variable-length blocks whose sizes come from earlier hex or decimal count
//! fields. `TokenCursor` advances through the tokens by named fields so that
//! every bounds or number failure is reported as a [`MalformedReason`] naming
//! the field that broke.

use thiserror::Error;

/// Why a candidate data line could not be decoded into a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("expected at least {expected} header fields, found {found}")]
    TooFewFields { expected: usize, found: usize },

    #[error("record ends before the {field} field")]
    Truncated { field: &'static str },

    #[error("{field} field {value:?} is not a valid {radix} number")]
    InvalidNumber {
        field: &'static str,
        value: String,
        radix: Radix,
    },

    #[error("unknown part-of-speech tag {0:?}")]
    InvalidPartOfSpeech(String),

    #[error("record declares no lemmas")]
    EmptyLemmaBlock,

    #[error("lemma {0:?} appears more than once in the same synset")]
    DuplicateLemma(String),
}

/// Number encoding of a count or offset field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Decimal,
    Hexadecimal,
}

impl Radix {
    const fn base(self) -> u32 {
        match self {
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }
}

impl std::fmt::Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decimal => f.write_str("decimal"),
            Self::Hexadecimal => f.write_str("hexadecimal"),
        }
    }
}

/// Cursor over the whitespace-separated tokens of one record
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: Vec<&'a str>,
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    /// Tokenize `text` on whitespace
    ///
    /// # Examples
    /// ```
    /// use wordnet_relations::core::TokenCursor;
    ///
    /// let mut cursor = TokenCursor::new("00001740 41 v 02");
    /// assert_eq!(cursor.decimal("offset").unwrap(), 1740);
    /// cursor.skip(2, "lex_filenum").unwrap();
    /// assert_eq!(cursor.hex_count("w_cnt").unwrap(), 2);
    /// assert!(cursor.is_exhausted());
    /// ```
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            tokens: text.split_whitespace().collect(),
            pos: 0,
        }
    }

    /// Total number of tokens
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens not yet consumed
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }

    #[inline]
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Read the next raw token
    ///
    /// # Errors
    /// Returns [`MalformedReason::Truncated`] when no tokens remain.
    pub fn field(&mut self, name: &'static str) -> Result<&'a str, MalformedReason> {
        let token = self
            .tokens
            .get(self.pos)
            .copied()
            .ok_or(MalformedReason::Truncated { field: name })?;
        self.pos += 1;
        Ok(token)
    }

    /// Skip `count` tokens that carry nothing we keep
    ///
    /// # Errors
    /// Returns [`MalformedReason::Truncated`] if fewer than `count` tokens remain.
    pub fn skip(&mut self, count: usize, name: &'static str) -> Result<(), MalformedReason> {
        if self.remaining() < count {
            return Err(MalformedReason::Truncated { field: name });
        }
        self.pos += count;
        Ok(())
    }

    /// Check that `count` groups of `width` tokens are still available
    ///
    /// Counts come from the line itself, so this runs before anything is
    /// sized from them.
    ///
    /// # Errors
    /// Returns [`MalformedReason::Truncated`] if the groups cannot fit.
    pub fn expect_groups(
        &self,
        count: usize,
        width: usize,
        name: &'static str,
    ) -> Result<(), MalformedReason> {
        match count.checked_mul(width) {
            Some(needed) if needed <= self.remaining() => Ok(()),
            _ => Err(MalformedReason::Truncated { field: name }),
        }
    }

    /// Read a fixed-width group of tokens, all or nothing
    ///
    /// The cursor does not move when the group would run past the end.
    ///
    /// # Errors
    /// Returns [`MalformedReason::Truncated`] if fewer than `N` tokens remain.
    pub fn group<const N: usize>(
        &mut self,
        name: &'static str,
    ) -> Result<[&'a str; N], MalformedReason> {
        let truncated = MalformedReason::Truncated { field: name };
        let slice = self
            .tokens
            .get(self.pos..self.pos + N)
            .ok_or_else(|| truncated.clone())?;
        let group: [&'a str; N] = slice.try_into().map_err(|_| truncated)?;
        self.pos += N;
        Ok(group)
    }

    /// Read a decimal `u32` field
    ///
    /// # Errors
    /// Returns `Truncated` or `InvalidNumber`.
    pub fn decimal(&mut self, name: &'static str) -> Result<u32, MalformedReason> {
        let token = self.field(name)?;
        parse_number(token, name, Radix::Decimal)
    }

    /// Read a decimal count field
    ///
    /// # Errors
    /// Returns `Truncated` or `InvalidNumber`.
    pub fn decimal_count(&mut self, name: &'static str) -> Result<usize, MalformedReason> {
        self.decimal(name).map(|n| n as usize)
    }

    /// Read a hexadecimal count field
    ///
    /// # Errors
    /// Returns `Truncated` or `InvalidNumber`.
    pub fn hex_count(&mut self, name: &'static str) -> Result<usize, MalformedReason> {
        let token = self.field(name)?;
        parse_number(token, name, Radix::Hexadecimal).map(|n| n as usize)
    }
}

fn parse_number(token: &str, field: &'static str, radix: Radix) -> Result<u32, MalformedReason> {
    u32::from_str_radix(token, radix.base()).map_err(|_| MalformedReason::InvalidNumber {
        field,
        value: token.to_string(),
        radix,
    })
}
