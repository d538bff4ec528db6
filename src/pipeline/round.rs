use crate::params::DomainParameters;
use crate::pipeline::expand::KeyedStreamExpander;

/// Keyed round function `F(round, half) -> half`
///
/// The seed is `le_u64(round) || key || pack16(half)`. Its expanded stream is
/// read as 16-bit little-endian words, each reduced modulo `N`.
#[derive(Debug, Clone)]
pub struct RoundFunction {
    key: Vec<u8>,
    radix: u32,
    half: usize,
    expander: KeyedStreamExpander,
}

impl RoundFunction {
    pub fn new(params: &DomainParameters) -> Self {
        Self {
            key: params.key().to_vec(),
            radix: params.radix(),
            half: params.half(),
            expander: KeyedStreamExpander::new(params.hash()),
        }
    }

    /// Compute the round output for one half of the digit vector
    pub fn apply(&self, round: u64, half_digits: &[u16]) -> Vec<u16> {
        let seed = self.seed(round, half_digits);
        let stream = self.expander.expand(&seed, self.half * 2);
        stream_to_digits(&stream, self.radix, self.half)
    }

    fn seed(&self, round: u64, half_digits: &[u16]) -> Vec<u8> {
        let mut seed = Vec::with_capacity(8 + self.key.len() + half_digits.len() * 2);
        seed.extend_from_slice(&round.to_le_bytes());
        seed.extend_from_slice(&self.key);
        for digit in half_digits {
            seed.extend_from_slice(&digit.to_le_bytes());
        }
        seed
    }
}

/// Read `count` digits from a byte stream, two bytes per digit
///
/// Digits without two full bytes behind them are 0.
pub fn stream_to_digits(stream: &[u8], radix: u32, count: usize) -> Vec<u16> {
    let mut digits = vec![0u16; count];
    for (digit, word) in digits.iter_mut().zip(stream.chunks_exact(2)) {
        let value = u32::from(u16::from_le_bytes([word[0], word[1]]));
        *digit = (value % radix) as u16;
    }
    digits
}
