//! Interactive console: search for text or flip to a page, then browse.

use crate::cli::page::format_page;
use crate::cli::parse::parse_page_number;
use crate::cli::search::format_search;
use crate::error::{BabelError, Result};
use crate::library::{Library, Page};
use rand::Rng;
use std::io::{BufRead, Write};

enum Flow {
    Continue,
    Quit,
}

/// Console session reading commands from `input` and writing to `output`
pub struct Shell<'a, I, O, R> {
    library: &'a Library,
    input: I,
    output: O,
    rng: R,
}

impl<'a, I: BufRead, O: Write, R: Rng> Shell<'a, I, O, R> {
    pub fn new(library: &'a Library, input: I, output: O, rng: R) -> Self {
        Self {
            library,
            input,
            output,
            rng,
        }
    }

    /// Run until the user quits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(
                self.output,
                "Welcome to the library of babel. [s]earch for text, [f]lip to a page, or [q]uit?"
            )?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            let flow = match line.trim() {
                "s" => self.search()?,
                "f" => self.flip()?,
                "q" => Flow::Quit,
                _ => Flow::Continue,
            };
            if let Flow::Quit = flow {
                return Ok(());
            }
        }
    }

    fn flip(&mut self) -> Result<Flow> {
        let params = self.library.network().params();
        let (radix, length) = (params.radix(), params.length());
        loop {
            writeln!(self.output, "What page? (1 -> {}^{})", radix, length)?;
            let Some(line) = self.read_line()? else {
                return Ok(Flow::Quit);
            };
            let page = parse_page_number(&line).and_then(|number| self.library.page(&number));
            match page {
                Ok(page) => {
                    writeln!(self.output, "\n{}", format_page(self.library, &page))?;
                    return self.browse(page);
                }
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn search(&mut self) -> Result<Flow> {
        let length = self.library.text_codec().length();
        loop {
            writeln!(self.output, "Enter some text (up to {} characters)", length)?;
            let Some(text) = self.read_line()? else {
                return Ok(Flow::Quit);
            };
            match self.library.search(&text, &mut self.rng) {
                Ok(result) => {
                    writeln!(self.output, "\n{}", format_search(self.library, &result))?;
                    return self.browse(result.exact);
                }
                Err(BabelError::InvalidText(c)) => {
                    writeln!(self.output, "{:?} is not in the alphabet", c)?
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn browse(&mut self, mut page: Page) -> Result<Flow> {
        loop {
            writeln!(self.output, "[n]ext page, [p]revious page, or [b]ack to search?")?;
            let Some(line) = self.read_line()? else {
                return Ok(Flow::Quit);
            };
            let moved = match line.trim() {
                "n" => self.library.next(&page),
                "p" => self.library.previous(&page),
                "b" => return Ok(Flow::Continue),
                _ => continue,
            };
            match moved {
                Ok(next) => {
                    page = next;
                    writeln!(self.output, "On {}", format_page(self.library, &page))?;
                }
                Err(BabelError::InvalidPageNumber(reason)) => writeln!(self.output, "{}", reason)?,
                Err(e) => return Err(e),
            }
        }
    }

    /// Next input line without its line terminator; `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}
