// std imports
use std::io::Write;

// third-party imports
use wildmask::Pattern;

// local imports
use crate::error::*;

// ---

pub struct Options {
    pub pattern: Pattern,
    pub quiet: bool,
}

pub struct App {
    options: Options,
}

impl App {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Checks each text against the pattern and writes a `Yes` or `No` verdict
    /// line per text, unless quiet mode is on.
    ///
    /// Returns `true` if every text matched the pattern.
    pub fn run<I, S>(&self, texts: I, output: &mut impl Write) -> Result<bool>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut all = true;
        for text in texts {
            let text = text.as_ref();
            let matched = self.options.pattern.matches(text);
            log::debug!("pattern {} vs text {:?}: {}", self.options.pattern, text, matched);
            all = all && matched;
            if !self.options.quiet {
                writeln!(output, "{}", if matched { "Yes" } else { "No" })?;
            }
        }

        Ok(all)
    }
}

#[cfg(test)]
mod tests;
