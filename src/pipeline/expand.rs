use crate::params::HashAlgorithm;
use digest::Digest;
use sha2::Sha256;
use sha3::Sha3_256;

/// Output size of every supported hash, in bytes
pub const BLOCK_SIZE: usize = 32;

/// Counter-mode byte stream derived from a seed
///
/// Block `i` is `Hash(seed || le_u64(i))`; blocks are concatenated and
/// truncated to the requested length. No state survives between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyedStreamExpander {
    algorithm: HashAlgorithm,
}

impl KeyedStreamExpander {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Produce exactly `length` pseudorandom bytes from `seed`
    pub fn expand(&self, seed: &[u8], length: usize) -> Vec<u8> {
        let mut stream = Vec::with_capacity(length);
        let mut counter = 0u64;

        while stream.len() < length {
            let block = self.block(seed, counter);
            let take = BLOCK_SIZE.min(length - stream.len());
            stream.extend_from_slice(&block[..take]);
            counter += 1;
        }

        stream
    }

    fn block(&self, seed: &[u8], counter: u64) -> [u8; BLOCK_SIZE] {
        match self.algorithm {
            HashAlgorithm::Sha256 => digest_block::<Sha256>(seed, counter),
            HashAlgorithm::Sha3 => digest_block::<Sha3_256>(seed, counter),
            HashAlgorithm::Blake3 => {
                let mut hasher = blake3::Hasher::new();
                hasher.update(seed);
                hasher.update(&counter.to_le_bytes());
                *hasher.finalize().as_bytes()
            }
        }
    }
}

fn digest_block<D: Digest>(seed: &[u8], counter: u64) -> [u8; BLOCK_SIZE] {
    let hash = D::new()
        .chain_update(seed)
        .chain_update(counter.to_le_bytes())
        .finalize();
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(&hash[..BLOCK_SIZE]);
    block
}
