use crate::error::Result;
use crate::library::{Library, Page};
use num_bigint::BigUint;

/// Format a page with its number above the grid
pub fn format_page(library: &Library, page: &Page) -> String {
    format!("Page {}:\n\n{}", page.number, library.render(page))
}

/// Open page `number` and format it for display
pub fn show_page(library: &Library, number: &BigUint) -> Result<String> {
    let page = library.page(number)?;
    Ok(format_page(library, &page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LibraryConfig;

    #[test]
    fn test_show_page() {
        let library = Library::new(&LibraryConfig::default()).unwrap();
        let output = show_page(&library, &BigUint::from(1u32)).unwrap();

        assert!(output.starts_with("Page 1:\n\n"));
        let grid: Vec<&str> = output.lines().skip(2).collect();
        assert_eq!(grid.len(), 8);
        assert!(grid.iter().all(|line| line.chars().count() == 32));
    }

    #[test]
    fn test_show_missing_page() {
        let library = Library::new(&LibraryConfig::default()).unwrap();
        assert!(show_page(&library, &BigUint::ZERO).is_err());
    }
}
