//! Babel - a keyed, invertible page permutation for a Library of Babel
//!
//! Every string of `D` symbols over an `N`-symbol alphabet appears on exactly
//! one page, and every page number in `[1, N^D]` names exactly one string.
//! Pages are shuffled by a keyed format-preserving permutation, so neighbouring
//! page numbers hold unrelated text while lookups stay exact in both directions.
//!
//! ## Permutation Pipeline
//!
//! ```text
//! value → DigitCodec → FeistelNetwork ⟲ RoundFunction → KeyedStreamExpander → Hash
//! ```
//!
//! - **DigitCodec**: integer ↔ `D` base-`N` digits, least significant first
//! - **KeyedStreamExpander**: counter-mode hash stream, `Hash(seed || le_u64(i))`
//! - **RoundFunction**: keyed map from a half vector to a half vector
//! - **FeistelNetwork**: balanced Feistel rounds with modular addition
//!
//! ## Example
//!
//! ```
//! use babel::{DomainParameters, FeistelNetwork};
//! use num_bigint::BigUint;
//!
//! let params = DomainParameters::new(30, 256, 12, "your-secret-key").unwrap();
//! let network = FeistelNetwork::new(params);
//!
//! let value = BigUint::from(42u32);
//! let image = network.permute(&value).unwrap();
//! assert_eq!(network.invert(&image).unwrap(), value);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod library;
pub mod page;
pub mod params;
pub mod pipeline;
pub mod text;

pub use config::LibraryConfig;
pub use error::{BabelError, Result};
pub use library::{Library, Page, SearchResult};
pub use params::{DomainParameters, HashAlgorithm};
pub use pipeline::{DigitCodec, FeistelNetwork, KeyedStreamExpander, RoundFunction};
pub use text::{Alphabet, TextCodec};
