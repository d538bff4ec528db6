use crate::error::{BabelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest radix whose digits still fit the 16-bit seed packing
pub const MAX_RADIX: u32 = 1 << 16;

/// Hash primitive underneath the keyed stream expander
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    Sha3,
    Blake3,
}

impl std::str::FromStr for HashAlgorithm {
    type Err = BabelError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "sha256" | "sha2" => Ok(Self::Sha256),
            "sha3" => Ok(Self::Sha3),
            "blake3" => Ok(Self::Blake3),
            _ => Err(BabelError::UnsupportedAlgorithm(format!("hash: {}", s))),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sha256 => "sha256",
            Self::Sha3 => "sha3",
            Self::Blake3 => "blake3",
        };
        f.write_str(name)
    }
}

/// Immutable parameters of the permutation domain `[0, N^D)`
///
/// Built once through [`DomainParameters::new`], which enforces
/// `2 <= N <= 65536` and an even, non-zero `D`. Every later operation
/// reads these values and never changes them.
#[derive(Clone, PartialEq, Eq)]
pub struct DomainParameters {
    radix: u32,
    length: usize,
    rounds: usize,
    key: Vec<u8>,
    hash: HashAlgorithm,
}

impl DomainParameters {
    /// Validate and build parameters using the default hash (SHA-256)
    pub fn new(radix: u32, length: usize, rounds: usize, key: impl Into<Vec<u8>>) -> Result<Self> {
        if radix < 2 {
            return Err(BabelError::InvalidConstruction(format!(
                "radix must be at least 2, got {}",
                radix
            )));
        }
        if radix > MAX_RADIX {
            return Err(BabelError::InvalidConstruction(format!(
                "radix must be at most {}, got {}",
                MAX_RADIX, radix
            )));
        }
        if length == 0 || length % 2 != 0 {
            return Err(BabelError::InvalidConstruction(format!(
                "length must be even and at least 2, got {}",
                length
            )));
        }

        Ok(Self {
            radix,
            length,
            rounds,
            key: key.into(),
            hash: HashAlgorithm::default(),
        })
    }

    /// Swap the hash primitive used by the round function
    pub fn with_hash(mut self, hash: HashAlgorithm) -> Self {
        self.hash = hash;
        self
    }

    /// Radix `N`
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Digit vector length `D`
    pub fn length(&self) -> usize {
        self.length
    }

    /// Half length `D / 2`
    pub fn half(&self) -> usize {
        self.length / 2
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn hash(&self) -> HashAlgorithm {
        self.hash
    }
}

// Keeps the key out of logs and panic messages
impl fmt::Debug for DomainParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainParameters")
            .field("radix", &self.radix)
            .field("length", &self.length)
            .field("rounds", &self.rounds)
            .field("key", &format_args!("<{} bytes>", self.key.len()))
            .field("hash", &self.hash)
            .finish()
    }
}
