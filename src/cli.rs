// third-party imports
use clap::Parser;

// ---

/// Wildcard text matcher.
///
/// Checks texts against a pattern where `*` matches any run of characters and
/// `?` matches exactly one character, printing a Yes/No verdict per text.
/// Exits with status 0 if every text matched, 1 if any text did not, 2 on failure.
#[derive(Parser)]
#[clap(version)]
pub struct Opt {
    /// Pattern to match against, with `*` and `?` wildcards.
    pub pattern: String,

    /// Texts to check, read line by line from standard input if not specified.
    pub texts: Vec<String>,

    /// Suppress verdict output and report the result with the exit status only.
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests;
