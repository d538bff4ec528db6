use crate::error::{BabelError, Result};
use crate::params::MAX_RADIX;
use crate::pipeline::DigitCodec;
use num_bigint::BigUint;
use std::collections::HashMap;

/// Symbols of the reference library: 26 letters, comma, period, space
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz,. ";

/// Ordered set of symbols; a symbol's position is its digit value
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<char>,
    digits: HashMap<char, u16>,
}

impl Alphabet {
    pub fn new(symbols: &str) -> Result<Self> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.len() < 2 {
            return Err(BabelError::InvalidAlphabet(format!(
                "need at least 2 symbols, got {}",
                symbols.len()
            )));
        }
        if symbols.len() > MAX_RADIX as usize {
            return Err(BabelError::InvalidAlphabet(format!(
                "at most {} symbols supported, got {}",
                MAX_RADIX,
                symbols.len()
            )));
        }

        let mut digits = HashMap::with_capacity(symbols.len());
        for (index, &symbol) in symbols.iter().enumerate() {
            if digits.insert(symbol, index as u16).is_some() {
                return Err(BabelError::InvalidAlphabet(format!(
                    "duplicate symbol {:?}",
                    symbol
                )));
            }
        }

        Ok(Self { symbols, digits })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Radix implied by the alphabet size
    pub fn radix(&self) -> u32 {
        self.symbols.len() as u32
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.digits.contains_key(&symbol)
    }

    pub fn digit_of(&self, symbol: char) -> Option<u16> {
        self.digits.get(&symbol).copied()
    }

    pub fn symbol(&self, digit: u16) -> Option<char> {
        self.symbols.get(usize::from(digit)).copied()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Reject the first character that is not part of the alphabet
    pub fn validate(&self, text: &str) -> Result<()> {
        match text.chars().find(|c| !self.contains(*c)) {
            Some(c) => Err(BabelError::InvalidText(c)),
            None => Ok(()),
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        let symbols: Vec<char> = DEFAULT_ALPHABET.chars().collect();
        let digits = symbols
            .iter()
            .enumerate()
            .map(|(index, &symbol)| (symbol, index as u16))
            .collect();
        Self { symbols, digits }
    }
}

/// Bijection between texts of `D` symbols and integers in `[0, N^D)`
///
/// The first character is the most significant digit, the mirror image of
/// [`DigitCodec`]'s ordering, so digits are reversed at the boundary.
#[derive(Debug, Clone)]
pub struct TextCodec {
    alphabet: Alphabet,
    filler: char,
    codec: DigitCodec,
}

impl TextCodec {
    pub fn new(alphabet: Alphabet, length: usize, filler: char) -> Result<Self> {
        if !alphabet.contains(filler) {
            return Err(BabelError::InvalidAlphabet(format!(
                "filler {:?} is not in the alphabet",
                filler
            )));
        }
        let codec = DigitCodec::new(alphabet.radix(), length);
        Ok(Self {
            alphabet,
            filler,
            codec,
        })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn filler(&self) -> char {
        self.filler
    }

    /// Text length `D`
    pub fn length(&self) -> usize {
        self.codec.length()
    }

    /// Right-pad `text` with the filler up to `D` symbols
    pub fn pad(&self, text: &str) -> String {
        let count = text.chars().count();
        let mut padded = String::from(text);
        padded.extend(std::iter::repeat(self.filler).take(self.length().saturating_sub(count)));
        padded
    }

    /// Encode a text of at most `D` symbols; shorter texts are padded first
    pub fn encode(&self, text: &str) -> Result<BigUint> {
        let count = text.chars().count();
        if count > self.length() {
            return Err(BabelError::TextTooLong {
                length: count,
                max: self.length(),
            });
        }

        let mut digits = Vec::with_capacity(self.length());
        for symbol in self.pad(text).chars() {
            let digit = self
                .alphabet
                .digit_of(symbol)
                .ok_or(BabelError::InvalidText(symbol))?;
            digits.push(digit);
        }
        digits.reverse();

        self.codec.compose(&digits)
    }

    /// Decode a value into exactly `D` symbols
    pub fn decode(&self, value: &BigUint) -> Result<String> {
        let digits = self.codec.decompose(value)?;
        digits
            .iter()
            .rev()
            .map(|&digit| {
                self.alphabet.symbol(digit).ok_or(BabelError::InvalidDigit {
                    digit: u32::from(digit),
                    radix: self.alphabet.radix(),
                })
            })
            .collect()
    }
}
