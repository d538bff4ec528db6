//! Page lookup on top of the Feistel permutation.
//!
//! Page `p` (1-based) holds the text `decode(permute(p - 1))`. Searching runs
//! the other way: the text is encoded and inverted to recover its page.

use crate::config::LibraryConfig;
use crate::error::{BabelError, Result};
use crate::page::PageLayout;
use crate::pipeline::FeistelNetwork;
use crate::text::TextCodec;
use num_bigint::BigUint;
use rand::Rng;

/// A page number together with its text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub number: BigUint,
    pub content: String,
}

/// Both matches produced by a search
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The text embedded in an otherwise random page
    pub random: Page,
    /// The text padded with filler symbols
    pub exact: Page,
}

#[derive(Debug, Clone)]
pub struct Library {
    network: FeistelNetwork,
    text: TextCodec,
    layout: PageLayout,
}

impl Library {
    pub fn new(config: &LibraryConfig) -> Result<Self> {
        config.validate()?;
        let network = FeistelNetwork::new(config.domain_parameters()?);
        let text = TextCodec::new(config.alphabet()?, config.page_length, config.filler)?;
        let layout = config.layout()?;
        tracing::debug!(params = ?network.params(), "library ready");
        Ok(Self {
            network,
            text,
            layout,
        })
    }

    pub fn network(&self) -> &FeistelNetwork {
        &self.network
    }

    pub fn text_codec(&self) -> &TextCodec {
        &self.text
    }

    pub fn layout(&self) -> PageLayout {
        self.layout
    }

    /// Number of pages, `N^D`
    pub fn page_count(&self) -> &BigUint {
        self.network.domain_size()
    }

    /// Fetch page `number`, counting from 1
    pub fn page(&self, number: &BigUint) -> Result<Page> {
        let index = self.page_index(number)?;
        let value = self.network.permute(&index)?;
        let content = self.text.decode(&value)?;
        tracing::debug!(page = %number, "opened page");
        Ok(Page {
            number: number.clone(),
            content,
        })
    }

    pub fn next(&self, page: &Page) -> Result<Page> {
        self.page(&(&page.number + 1u32))
    }

    pub fn previous(&self, page: &Page) -> Result<Page> {
        if page.number <= BigUint::from(1u32) {
            return Err(BabelError::InvalidPageNumber(
                "there is no page before page 1".into(),
            ));
        }
        self.page(&(&page.number - 1u32))
    }

    /// Find the page whose text is `text` followed by filler symbols
    ///
    /// Text beyond one page is cut off.
    pub fn locate(&self, text: &str) -> Result<Page> {
        self.text.alphabet().validate(text)?;
        let content = self.text.pad(&self.truncate(text));
        self.page_of(content)
    }

    /// Find a page that contains `text` centered among random symbols
    pub fn random_match<R: Rng>(&self, text: &str, rng: &mut R) -> Result<Page> {
        self.text.alphabet().validate(text)?;
        let text: Vec<char> = self.truncate(text).chars().collect();
        let symbols = self.text.alphabet().symbols();
        let length = self.text.length();

        let mut content: Vec<char> = (0..length)
            .map(|_| symbols[rng.gen_range(0..symbols.len())])
            .collect();
        let offset = (length - text.len()) / 2;
        content[offset..offset + text.len()].copy_from_slice(&text);

        self.page_of(content.into_iter().collect())
    }

    pub fn search<R: Rng>(&self, text: &str, rng: &mut R) -> Result<SearchResult> {
        let random = self.random_match(text, rng)?;
        let exact = self.locate(text)?;
        tracing::debug!(exact = %exact.number, random = %random.number, "search complete");
        Ok(SearchResult { random, exact })
    }

    /// Lay out a page's text on the configured grid
    pub fn render(&self, page: &Page) -> String {
        self.layout.render(&page.content)
    }

    fn page_of(&self, content: String) -> Result<Page> {
        let value = self.text.encode(&content)?;
        let number = self.network.invert(&value)? + 1u32;
        Ok(Page { number, content })
    }

    fn page_index(&self, number: &BigUint) -> Result<BigUint> {
        if *number == BigUint::ZERO || number > self.page_count() {
            return Err(BabelError::InvalidPageNumber(format!(
                "{} is outside 1..={}^{}",
                number,
                self.network.params().radix(),
                self.network.params().length()
            )));
        }
        Ok(number - 1u32)
    }

    fn truncate(&self, text: &str) -> String {
        text.chars().take(self.text.length()).collect()
    }
}
