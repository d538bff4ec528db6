use crate::error::{BabelError, Result};
use crate::page::PageLayout;
use crate::params::{DomainParameters, HashAlgorithm};
use crate::text::{Alphabet, DEFAULT_ALPHABET};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub const DEFAULT_KEY: &str = "your-secret-key";
pub const DEFAULT_ROUNDS: usize = 12;
pub const DEFAULT_PAGE_LENGTH: usize = 256;

/// Library settings, loadable from a JSON file
///
/// Every field has a default matching the reference library, so a config
/// file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LibraryConfig {
    /// Ordered symbols; the alphabet size is the radix `N`
    pub alphabet: String,
    /// Symbol used to pad short search texts
    pub filler: char,
    /// Symbols per page, `D`
    pub page_length: usize,
    pub rounds: usize,
    /// Secret as UTF-8 text
    pub key: String,
    /// Secret as hex; takes precedence over `key`
    pub key_hex: Option<String>,
    pub hash: HashAlgorithm,
    pub rows: usize,
    pub columns: usize,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        let layout = PageLayout::default();
        Self {
            alphabet: DEFAULT_ALPHABET.to_string(),
            filler: ' ',
            page_length: DEFAULT_PAGE_LENGTH,
            rounds: DEFAULT_ROUNDS,
            key: DEFAULT_KEY.to_string(),
            key_hex: None,
            hash: HashAlgorithm::default(),
            rows: layout.rows,
            columns: layout.columns,
        }
    }
}

impl LibraryConfig {
    /// Read a config file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded library config");
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<()> {
        let alphabet = self.alphabet()?;
        if !alphabet.contains(self.filler) {
            return Err(BabelError::InvalidConfig(format!(
                "filler {:?} is not in the alphabet",
                self.filler
            )));
        }
        let layout = self.layout()?;
        if layout.capacity() != self.page_length {
            return Err(BabelError::InvalidConfig(format!(
                "page grid {}x{} holds {} symbols, page length is {}",
                self.rows,
                self.columns,
                layout.capacity(),
                self.page_length
            )));
        }
        self.key_bytes()?;
        self.domain_parameters()?;
        Ok(())
    }

    pub fn alphabet(&self) -> Result<Alphabet> {
        Alphabet::new(&self.alphabet)
    }

    pub fn layout(&self) -> Result<PageLayout> {
        PageLayout::new(self.rows, self.columns)
    }

    /// Raw secret bytes, decoded from `key_hex` when present
    pub fn key_bytes(&self) -> Result<Vec<u8>> {
        match &self.key_hex {
            Some(encoded) => {
                hex::decode(encoded.trim()).map_err(|e| BabelError::InvalidKey(e.to_string()))
            }
            None => Ok(self.key.as_bytes().to_vec()),
        }
    }

    pub fn domain_parameters(&self) -> Result<DomainParameters> {
        let radix = self.alphabet()?.radix();
        Ok(DomainParameters::new(radix, self.page_length, self.rounds, self.key_bytes()?)?
            .with_hash(self.hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let config = LibraryConfig::default();
        config.validate().unwrap();

        let params = config.domain_parameters().unwrap();
        assert_eq!(params.radix(), 29);
        assert_eq!(params.length(), 256);
        assert_eq!(params.rounds(), 12);
        assert_eq!(params.key(), b"your-secret-key");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("babel.json");
        std::fs::write(&path, r#"{ "rounds": 4, "hash": "blake3" }"#).unwrap();

        let config = LibraryConfig::load(&path).unwrap();
        assert_eq!(config.rounds, 4);
        assert_eq!(config.hash, HashAlgorithm::Blake3);
        assert_eq!(config.page_length, 256);
        assert_eq!(config.key, DEFAULT_KEY);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("babel.json");
        std::fs::write(&path, r#"{ "round": 4 }"#).unwrap();
        assert!(matches!(LibraryConfig::load(&path), Err(BabelError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let result = LibraryConfig::load(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(BabelError::Io(_))));
    }

    #[test]
    fn test_grid_must_match_page_length() {
        let config = LibraryConfig {
            rows: 4,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(BabelError::InvalidConfig(_))));
    }

    #[test]
    fn test_filler_must_be_in_alphabet() {
        let config = LibraryConfig {
            filler: '#',
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(BabelError::InvalidConfig(_))));
    }

    #[test]
    fn test_odd_page_length_rejected() {
        let config = LibraryConfig {
            page_length: 9,
            rows: 3,
            columns: 3,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BabelError::InvalidConstruction(_))
        ));
    }

    #[test]
    fn test_hex_key_takes_precedence() {
        let config = LibraryConfig {
            key_hex: Some("deadbeef".into()),
            ..Default::default()
        };
        assert_eq!(config.key_bytes().unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);

        let bad = LibraryConfig {
            key_hex: Some("xyz".into()),
            ..Default::default()
        };
        assert!(matches!(bad.validate(), Err(BabelError::InvalidKey(_))));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = LibraryConfig {
            rounds: 7,
            hash: HashAlgorithm::Sha3,
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        let restored: LibraryConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }
}
