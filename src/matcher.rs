//! Wildcard name matching
//!
//! Masks use a reduced glob syntax:
//! - `*` matches any run of zero or more characters
//! - `?` matches exactly one character
//! - everything else matches literally, ignoring case
//!
//! A mask is translated once into an anchored, case-insensitive regex.
//! Regex metacharacters in the mask are escaped, so `a+b.txt` only matches
//! the literal name. If the translated pattern cannot be compiled the
//! matcher degrades to case-insensitive substring containment.

use regex::{Regex, RegexBuilder};
use tracing::debug;

/// Mask that matches every name
pub const MATCH_ALL: &str = "*";

/// Compiled size limit for translated masks
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Compiled form of a file mask
#[derive(Debug, Clone)]
pub struct NameMatcher {
    mask: String,
    rule: Rule,
}

#[derive(Debug, Clone)]
enum Rule {
    Any,
    Pattern(Regex),
    /// Lowercased mask, matched by containment
    Substring(String),
}

impl NameMatcher {
    /// Compile `mask` into a matcher
    pub fn new(mask: &str) -> Self {
        Self::with_size_limit(mask, PATTERN_SIZE_LIMIT)
    }

    fn with_size_limit(mask: &str, size_limit: usize) -> Self {
        let rule = if mask == MATCH_ALL {
            Rule::Any
        } else {
            match RegexBuilder::new(&glob_to_regex(mask))
                .case_insensitive(true)
                .dot_matches_new_line(true)
                .size_limit(size_limit)
                .build()
            {
                Ok(re) => Rule::Pattern(re),
                Err(e) => {
                    debug!(mask, error = %e, "Mask did not compile, using substring match");
                    Rule::Substring(mask.to_lowercase())
                }
            }
        };

        Self {
            mask: mask.to_string(),
            rule,
        }
    }

    /// The mask this matcher was built from
    pub fn mask(&self) -> &str {
        &self.mask
    }

    /// True if this matcher fell back to substring containment
    pub fn is_degraded(&self) -> bool {
        matches!(self.rule, Rule::Substring(_))
    }

    /// Check a file name against the mask
    pub fn is_match(&self, name: &str) -> bool {
        match &self.rule {
            Rule::Any => true,
            Rule::Pattern(re) => re.is_match(name),
            Rule::Substring(needle) => name.to_lowercase().contains(needle.as_str()),
        }
    }
}

impl Default for NameMatcher {
    fn default() -> Self {
        Self::new(MATCH_ALL)
    }
}

/// One-shot form of [`NameMatcher::is_match`]
pub fn matches(name: &str, mask: &str) -> bool {
    NameMatcher::new(mask).is_match(name)
}

/// Translate a glob mask into an anchored regex source string
fn glob_to_regex(mask: &str) -> String {
    let mut pattern = String::with_capacity(mask.len() * 2 + 2);
    let mut buf = [0u8; 4];

    pattern.push('^');
    for c in mask.chars() {
        match c {
            '*' => pattern.push_str(".*"),
            '?' => pattern.push('.'),
            _ => pattern.push_str(&regex::escape(c.encode_utf8(&mut buf))),
        }
    }
    pattern.push('$');

    pattern
}
