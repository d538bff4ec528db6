use crate::cli::page::format_page;
use crate::error::Result;
use crate::library::{Library, SearchResult};
use rand::Rng;

/// Search for `text` and describe both matches
pub fn search_text<R: Rng>(library: &Library, text: &str, rng: &mut R) -> Result<String> {
    let result = library.search(text, rng)?;
    Ok(format_search(library, &result))
}

pub fn format_search(library: &Library, result: &SearchResult) -> String {
    let mut output = String::new();
    output.push_str("Random match found on ");
    output.push_str(&format_page(library, &result.random));
    output.push('\n');
    output.push_str("Exact match found on ");
    output.push_str(&format_page(library, &result.exact));
    output
}
