//! # Response Rules
//!
//! Typed form of the response-rule grammar matched against student input:
//!
//! ```text
//! input = {4}       equality rule
//! input like {.*}   pattern rule (".*" is the conventional catch-all)
//! ```
//!
//! Rules are evaluated in order, first match wins. The catch-all must
//! therefore be the last response in a part; [`crate::validation`] enforces
//! this rather than relying on array position by convention.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The conventional catch-all pattern.
pub const CATCH_ALL_PATTERN: &str = ".*";

/// The parsed kind of a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKind {
    /// `input = {answer}`: exact match against the braced text.
    Equals(String),
    /// `input like {pattern}`: anchored regex match against the braced text.
    Like(String),
}

/// A matching rule against student input.
///
/// Serialized in the string grammar so the wire shape stays compatible
/// with the host's JSON model attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    kind: RuleKind,
}

impl Rule {
    /// An equality rule against the given answer.
    #[must_use]
    pub fn equals(answer: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::Equals(answer.into()),
        }
    }

    /// The wildcard catch-all rule that matches any input.
    #[must_use]
    pub fn catch_all() -> Self {
        Self {
            kind: RuleKind::Like(CATCH_ALL_PATTERN.to_string()),
        }
    }

    /// Parse a rule from its string form.
    ///
    /// # Errors
    ///
    /// Returns the offending string when it matches neither grammar form.
    pub fn parse(raw: &str) -> Result<Self, RuleParseError> {
        let braced = |rest: &str| -> Option<String> {
            let start = rest.find('{')?;
            let end = rest.rfind('}')?;
            if end <= start {
                return None;
            }
            Some(rest[start + 1..end].to_string())
        };

        let raw = raw.trim();
        if let Some(rest) = raw.strip_prefix("input like ") {
            let pattern = braced(rest).ok_or_else(|| RuleParseError::new(raw))?;
            return Ok(Self {
                kind: RuleKind::Like(pattern),
            });
        }
        if let Some(rest) = raw.strip_prefix("input = ") {
            let answer = braced(rest).ok_or_else(|| RuleParseError::new(raw))?;
            return Ok(Self {
                kind: RuleKind::Equals(answer),
            });
        }
        Err(RuleParseError::new(raw))
    }

    /// The parsed kind.
    #[must_use]
    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// Whether this rule matches the given student input.
    ///
    /// Equality rules compare the trimmed input exactly; `like` rules match
    /// the pattern anchored over the whole input. A pattern that fails to
    /// compile matches nothing.
    #[must_use]
    pub fn matches(&self, input: &str) -> bool {
        match &self.kind {
            RuleKind::Equals(answer) => input.trim() == answer,
            RuleKind::Like(pattern) => regex::Regex::new(&format!("^(?:{pattern})$"))
                .map(|re| re.is_match(input))
                .unwrap_or(false),
        }
    }

    /// Whether this is the wildcard catch-all.
    #[must_use]
    pub fn is_catch_all(&self) -> bool {
        matches!(&self.kind, RuleKind::Like(p) if p == CATCH_ALL_PATTERN)
    }

    /// The braced text of the rule.
    ///
    /// The authoring surface uses this to populate its "correct answer"
    /// field from the first response's rule.
    #[must_use]
    pub fn answer(&self) -> &str {
        match &self.kind {
            RuleKind::Equals(answer) => answer,
            RuleKind::Like(pattern) => pattern,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RuleKind::Equals(answer) => write!(f, "input = {{{answer}}}"),
            RuleKind::Like(pattern) => write!(f, "input like {{{pattern}}}"),
        }
    }
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(DeError::custom)
    }
}

/// A rule string that matches neither grammar form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unparseable rule: {raw:?} (expected \"input = {{...}}\" or \"input like {{...}}\")")]
pub struct RuleParseError {
    /// The offending rule string.
    pub raw: String,
}

impl RuleParseError {
    fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
        }
    }
}
