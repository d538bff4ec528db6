use crate::error::{BabelError, Result};
use num_bigint::BigUint;
use num_integer::Integer;

/// Converts between integers in `[0, N^D)` and fixed-length base-N digit vectors
///
/// Digit `i` carries weight `N^i` (least significant first).
#[derive(Debug, Clone)]
pub struct DigitCodec {
    radix: u32,
    length: usize,
    modulus: BigUint,
}

impl DigitCodec {
    pub fn new(radix: u32, length: usize) -> Self {
        let exponent = u32::try_from(length).unwrap_or(u32::MAX);
        let modulus = BigUint::from(radix).pow(exponent);
        Self {
            radix,
            length,
            modulus,
        }
    }

    pub fn radix(&self) -> u32 {
        self.radix
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Size of the domain, `N^D`
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Split `value` into exactly `D` digits
    pub fn decompose(&self, value: &BigUint) -> Result<Vec<u16>> {
        if value >= &self.modulus {
            return Err(BabelError::Domain {
                radix: self.radix,
                length: self.length,
            });
        }

        let radix = BigUint::from(self.radix);
        let mut rest = value.clone();
        let mut digits = Vec::with_capacity(self.length);
        for _ in 0..self.length {
            let (quotient, remainder) = rest.div_rem(&radix);
            // remainder < N <= 2^16, so it lives in the lowest limb
            let digit = remainder.iter_u32_digits().next().unwrap_or(0);
            digits.push(digit as u16);
            rest = quotient;
        }

        Ok(digits)
    }

    /// Rebuild the integer from `D` digits
    pub fn compose(&self, digits: &[u16]) -> Result<BigUint> {
        if digits.len() != self.length {
            return Err(BabelError::InvalidLength {
                expected: self.length,
                actual: digits.len(),
            });
        }

        let mut value = BigUint::ZERO;
        for &digit in digits.iter().rev() {
            let digit = u32::from(digit);
            if digit >= self.radix {
                return Err(BabelError::InvalidDigit {
                    digit,
                    radix: self.radix,
                });
            }
            value *= self.radix;
            value += digit;
        }

        Ok(value)
    }
}
