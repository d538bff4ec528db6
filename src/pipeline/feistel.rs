//! Balanced Feistel network over base-N digit vectors.
//!
//! A value is split into `L = digits[0..D/2)` and `R = digits[D/2..D)`.
//! Each forward round computes `T = (L + F(r, R)) mod N`, then `L <- R`,
//! `R <- T`. The inverse walks the rounds backwards, feeds `L` to the round
//! function and subtracts: `T = (R - F(r, L)) mod N`, then `R <- L`, `L <- T`.
//! Any `F` gives a bijection on `[0, N^D)`.

use crate::error::Result;
use crate::params::DomainParameters;
use crate::pipeline::digits::DigitCodec;
use crate::pipeline::round::RoundFunction;
use num_bigint::BigUint;
use std::sync::Arc;
use tracing::instrument;

/// Keyed pseudorandom permutation of `[0, N^D)`
///
/// Holds only immutable state, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct FeistelNetwork {
    params: Arc<DomainParameters>,
    codec: DigitCodec,
    round_fn: RoundFunction,
}

impl FeistelNetwork {
    pub fn new(params: DomainParameters) -> Self {
        Self::from_shared(Arc::new(params))
    }

    pub fn from_shared(params: Arc<DomainParameters>) -> Self {
        let codec = DigitCodec::new(params.radix(), params.length());
        let round_fn = RoundFunction::new(&params);
        Self {
            params,
            codec,
            round_fn,
        }
    }

    pub fn params(&self) -> &DomainParameters {
        &self.params
    }

    pub fn codec(&self) -> &DigitCodec {
        &self.codec
    }

    /// Number of elements in the domain, `N^D`
    pub fn domain_size(&self) -> &BigUint {
        self.codec.modulus()
    }

    /// Forward permutation
    #[instrument(level = "debug", skip_all, fields(rounds = self.params.rounds()))]
    pub fn permute(&self, value: &BigUint) -> Result<BigUint> {
        let digits = self.codec.decompose(value)?;
        let (mut left, mut right) = split(digits, self.params.half());
        let radix = self.params.radix();

        for round in 0..self.params.rounds() {
            let mask = self.round_fn.apply(round as u64, &right);
            let mixed: Vec<u16> = left
                .iter()
                .zip(&mask)
                .map(|(&l, &f)| add_mod(l, f, radix))
                .collect();
            left = std::mem::replace(&mut right, mixed);
        }

        self.codec.compose(&join(left, right))
    }

    /// Inverse permutation: `invert(permute(x)) == x`
    #[instrument(level = "debug", skip_all, fields(rounds = self.params.rounds()))]
    pub fn invert(&self, value: &BigUint) -> Result<BigUint> {
        let digits = self.codec.decompose(value)?;
        let (mut left, mut right) = split(digits, self.params.half());
        let radix = self.params.radix();

        for round in (0..self.params.rounds()).rev() {
            let mask = self.round_fn.apply(round as u64, &left);
            let restored: Vec<u16> = right
                .iter()
                .zip(&mask)
                .map(|(&r, &f)| sub_mod(r, f, radix))
                .collect();
            right = std::mem::replace(&mut left, restored);
        }

        self.codec.compose(&join(left, right))
    }
}

fn split(mut digits: Vec<u16>, half: usize) -> (Vec<u16>, Vec<u16>) {
    let right = digits.split_off(half);
    (digits, right)
}

fn join(mut left: Vec<u16>, right: Vec<u16>) -> Vec<u16> {
    left.extend(right);
    left
}

fn add_mod(a: u16, b: u16, radix: u32) -> u16 {
    ((u32::from(a) + u32::from(b)) % radix) as u16
}

fn sub_mod(a: u16, b: u16, radix: u32) -> u16 {
    ((u32::from(a) + radix - u32::from(b)) % radix) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BabelError;
    use std::collections::HashSet;

    fn network(radix: u32, length: usize, rounds: usize) -> FeistelNetwork {
        FeistelNetwork::new(DomainParameters::new(radix, length, rounds, "feistel-test").unwrap())
    }

    #[test]
    fn test_modular_combiners() {
        assert_eq!(add_mod(28, 5, 30), 3);
        assert_eq!(sub_mod(3, 5, 30), 28);
        assert_eq!(sub_mod(add_mod(17, 29, 30), 29, 30), 17);
        assert_eq!(add_mod(u16::MAX, u16::MAX, 1 << 16), u16::MAX - 1);
        assert_eq!(sub_mod(0, u16::MAX, 1 << 16), 1);
    }

    #[test]
    fn test_small_domain_is_a_bijection() {
        let net = network(10, 4, 5);
        let mut seen = HashSet::new();
        for x in 0u32..10_000 {
            let value = BigUint::from(x);
            let image = net.permute(&value).unwrap();
            assert!(&image < net.domain_size());
            assert_eq!(net.invert(&image).unwrap(), value);
            assert!(seen.insert(image), "collision at {}", x);
        }
        assert_eq!(seen.len(), 10_000);
    }

    #[test]
    fn test_binary_radix_bijection() {
        let net = network(2, 8, 4);
        let images: HashSet<BigUint> = (0u32..256)
            .map(|x| net.permute(&BigUint::from(x)).unwrap())
            .collect();
        assert_eq!(images.len(), 256);
    }

    #[test]
    fn test_permutation_is_not_identity() {
        let net = network(10, 4, 3);
        let moved = (0u32..10_000)
            .filter(|&x| net.permute(&BigUint::from(x)).unwrap() != BigUint::from(x))
            .count();
        assert!(moved > 9_000);
    }

    #[test]
    fn test_single_round_swaps_halves() {
        // After one round the old right half becomes the left half
        let net = network(10, 4, 1);
        let value = BigUint::from(4_321u32); // digits [1, 2, 3, 4]
        let image = net.permute(&value).unwrap();
        let digits = net.codec().decompose(&image).unwrap();
        assert_eq!(&digits[..2], &[3, 4]);
    }

    #[test]
    fn test_zero_rounds_is_identity_without_swap() {
        // No round body runs, so the halves are never exchanged
        let net = network(10, 4, 0);
        for x in [0u32, 1, 1_234, 4_321, 9_999] {
            let value = BigUint::from(x);
            assert_eq!(net.permute(&value).unwrap(), value);
            assert_eq!(net.invert(&value).unwrap(), value);
        }
    }

    #[test]
    fn test_out_of_domain_values_fail() {
        let net = network(10, 4, 3);
        for x in [10_000u32, 10_001, 123_456] {
            let value = BigUint::from(x);
            assert!(matches!(net.permute(&value), Err(BabelError::Domain { .. })));
            assert!(matches!(net.invert(&value), Err(BabelError::Domain { .. })));
        }
    }

    #[test]
    fn test_key_changes_permutation() {
        let a = network(10, 4, 6);
        let b = FeistelNetwork::new(DomainParameters::new(10, 4, 6, "another-key").unwrap());
        let differing = (0u32..100)
            .filter(|&x| {
                let v = BigUint::from(x);
                a.permute(&v).unwrap() != b.permute(&v).unwrap()
            })
            .count();
        assert!(differing > 90);
    }

    #[test]
    fn test_shared_parameters() {
        let params = Arc::new(DomainParameters::new(10, 4, 3, "shared").unwrap());
        let a = FeistelNetwork::from_shared(Arc::clone(&params));
        let b = FeistelNetwork::from_shared(params);
        let v = BigUint::from(77u32);
        assert_eq!(a.permute(&v).unwrap(), b.permute(&v).unwrap());
    }
}
