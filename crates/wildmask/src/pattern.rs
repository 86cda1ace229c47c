use std::fmt;
use std::mem::swap;

/// A wildcard pattern for matching text strings.
///
/// Patterns are created from strings containing wildcard characters:
/// - `*` matches zero or more characters
/// - `?` matches exactly one character
///
/// Any other character matches itself. There is no escape syntax, so the
/// wildcard characters cannot be matched literally.
///
/// A pattern matches only when it covers the entire text; this is not a
/// substring search.
///
/// # Examples
///
/// ```
/// use wildmask::Pattern;
///
/// let pattern = Pattern::new("c*e");
/// assert!(pattern.matches("cdsadjfke"));
/// assert!(!pattern.matches("cdsadjfkz"));
///
/// let pattern = Pattern::new("test?.log");
/// assert!(pattern.matches("test1.log"));
/// assert!(!pattern.matches("test.log"));
/// ```
///
/// - Patterns can be displayed back to strings via the `Display` trait
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Pattern {
    symbols: Vec<Symbol>,
}

impl Pattern {
    /// Creates a new pattern from a string.
    ///
    /// This function is infallible; all input strings are valid patterns.
    /// Runs of consecutive `*` collapse into a single wildcard, which never
    /// changes the match results.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildmask::Pattern;
    ///
    /// let pattern = Pattern::new("hello*");
    /// assert!(pattern.matches("hello world"));
    ///
    /// // Consecutive `*` are equivalent to one
    /// assert_eq!(Pattern::new("a**b"), Pattern::new("a*b"));
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Self {
        let mut symbols = Vec::new();
        for ch in raw.as_ref().chars() {
            match ch {
                '*' => {
                    if symbols.last() != Some(&Symbol::Many) {
                        symbols.push(Symbol::Many);
                    }
                }
                '?' => symbols.push(Symbol::One),
                _ => symbols.push(Symbol::Literal(ch)),
            }
        }

        Self { symbols }
    }

    /// Tests whether the pattern matches the given text.
    ///
    /// Returns `true` if the entire text matches the pattern, `false` otherwise.
    ///
    /// The verdict is computed with a table-filling recurrence over two rolling
    /// rows, so a call takes O(n·m) time and O(m) auxiliary space no matter how
    /// the wildcards are placed. Bounding the input lengths is up to the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildmask::Pattern;
    ///
    /// let pattern = Pattern::new("*.rs");
    /// assert!(pattern.matches("main.rs"));
    /// assert!(pattern.matches("lib.rs"));
    /// assert!(!pattern.matches("main.txt"));
    ///
    /// // UTF-8 character matching
    /// let pattern = Pattern::new("??");
    /// assert!(pattern.matches("ab"));
    /// assert!(pattern.matches("🦀🎉"));
    /// assert!(!pattern.matches("a"));
    /// ```
    pub fn matches(&self, text: &str) -> bool {
        let m = self.symbols.len();
        let mut prev = vec![false; m + 1];
        let mut curr = vec![false; m + 1];

        // Row for zero consumed characters: only a leading run of `*`
        // can match the empty text prefix.
        prev[0] = true;
        for (j, symbol) in self.symbols.iter().enumerate() {
            if let Symbol::Many = symbol {
                prev[j + 1] = prev[j];
            }
        }

        for ch in text.chars() {
            // A non-empty text prefix never matches the empty pattern.
            curr[0] = false;
            for (j, symbol) in self.symbols.iter().enumerate() {
                curr[j + 1] = match symbol {
                    Symbol::Literal(c) => *c == ch && prev[j],
                    Symbol::One => prev[j],
                    // The wildcard either stops right before this character
                    // or extends to cover it as well.
                    Symbol::Many => curr[j] || prev[j + 1],
                };
            }
            swap(&mut prev, &mut curr);
        }

        prev[m]
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            match symbol {
                Symbol::Literal(ch) => write!(f, "{}", ch)?,
                Symbol::One => write!(f, "?")?,
                Symbol::Many => write!(f, "*")?,
            }
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
enum Symbol {
    Literal(char),
    One,
    Many,
}
