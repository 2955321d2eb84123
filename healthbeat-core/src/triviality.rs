//! Stub and placeholder detection for source files.
//!
//! The classifier is context free: it sees only the text, never the path, so
//! identical contents always get identical verdicts.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Version of [`STUB_PATTERNS`]. Bump whenever an entry changes.
pub const STUB_PATTERN_TABLE_VERSION: u32 = 1;
/// Trimmed texts shorter than this many characters are trivial.
pub const MIN_SUBSTANTIVE_CHARS: usize = 50;
/// Files need at least this many meaningful lines to be substantive.
pub const MIN_MEANINGFUL_LINES: usize = 3;

/// A named whole-text pattern describing a stub file shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StubPattern {
    /// Stable name reported in diagnostics.
    pub name: &'static str,
    /// Regular expression matched against the entire text.
    pub source: &'static str,
}

impl StubPattern {
    /// Compile the pattern.
    ///
    /// # Panics
    ///
    /// Panics when the table entry is not a valid regular expression.
    pub fn compile(&self) -> Regex {
        Regex::new(self.source)
            .unwrap_or_else(|err| panic!("stub pattern `{}` is malformed: {err}", self.name))
    }
}

/// Stub shapes, checked in order.
pub const STUB_PATTERNS: &[StubPattern] = &[
    StubPattern {
        name: "empty-export",
        source: r"^\s*export\s*\{\s*\}\s*;?\s*$",
    },
    StubPattern {
        name: "lone-todo",
        source: r"^\s*//\s*TODO\b[^\n]*\s*$",
    },
    StubPattern {
        name: "comment-block-only",
        source: r"^\s*/\*(?:[^*]|\*+[^*/])*\*+/\s*$",
    },
    StubPattern {
        name: "empty-default-export",
        source: r"^\s*export\s+default\s*\{\s*\}\s*;?\s*$",
    },
    StubPattern {
        name: "empty-object-export",
        source: r"^\s*(?:const|let|var)\s+[A-Za-z_$][\w$]*\s*=\s*\{\s*\}\s*;?\s*export\s+default\s+[A-Za-z_$][\w$]*\s*;?\s*$",
    },
];

static COMPILED_STUB_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    STUB_PATTERNS
        .iter()
        .map(|pattern| (pattern.name, pattern.compile()))
        .collect()
});

/// Why a file was classified trivial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrivialityReason {
    /// Nothing but whitespace.
    Empty,
    /// Fewer than [`MIN_SUBSTANTIVE_CHARS`] characters after trimming.
    TooShort,
    /// Matched the named stub pattern.
    StubPattern(&'static str),
    /// Only this many meaningful lines.
    FewMeaningfulLines(usize),
}

impl fmt::Display for TrivialityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty"),
            Self::TooShort => f.write_str("too short"),
            Self::StubPattern(name) => write!(f, "stub pattern: {name}"),
            Self::FewMeaningfulLines(count) => {
                write!(f, "fewer than {MIN_MEANINGFUL_LINES} meaningful lines ({count})")
            }
        }
    }
}

/// Classification outcome. The reason is diagnostic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrivialityVerdict {
    /// Whether the text is a stub or placeholder.
    pub trivial: bool,
    /// Why it was considered trivial, if it was.
    pub reason: Option<TrivialityReason>,
}

impl TrivialityVerdict {
    fn substantive() -> Self {
        Self {
            trivial: false,
            reason: None,
        }
    }

    fn trivial(reason: TrivialityReason) -> Self {
        Self {
            trivial: true,
            reason: Some(reason),
        }
    }
}

/// Classify a file's text. The first matching rule wins.
pub fn classify(text: &str) -> TrivialityVerdict {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return TrivialityVerdict::trivial(TrivialityReason::Empty);
    }
    if trimmed.chars().count() < MIN_SUBSTANTIVE_CHARS {
        return TrivialityVerdict::trivial(TrivialityReason::TooShort);
    }
    if let Some(name) = matching_stub_pattern(text) {
        return TrivialityVerdict::trivial(TrivialityReason::StubPattern(name));
    }
    let meaningful = count_meaningful_lines(text);
    if meaningful < MIN_MEANINGFUL_LINES {
        return TrivialityVerdict::trivial(TrivialityReason::FewMeaningfulLines(meaningful));
    }
    TrivialityVerdict::substantive()
}

/// Whether a file's text is a stub or placeholder.
pub fn classify_triviality(text: &str) -> bool {
    classify(text).trivial
}

/// Name of the first stub pattern matching the whole text.
pub fn matching_stub_pattern(text: &str) -> Option<&'static str> {
    COMPILED_STUB_PATTERNS
        .iter()
        .find(|(_, regex)| regex.is_match(text))
        .map(|(name, _)| *name)
}

/// Lines that are not blank, not comments and not a lone brace or semicolon.
///
/// Every line inside a `/* ... */` block counts as comment, whatever it
/// starts with. Code following a closing `*/` on the same line is counted.
pub fn count_meaningful_lines(text: &str) -> usize {
    let mut in_block = false;
    let mut count = 0;

    for line in text.lines() {
        let mut rest = line.trim();
        if in_block {
            let Some(end) = rest.find("*/") else {
                continue;
            };
            in_block = false;
            rest = rest[end + 2..].trim_start();
        }
        while let Some(body) = rest.strip_prefix("/*") {
            match body.find("*/") {
                Some(end) => rest = body[end + 2..].trim_start(),
                None => {
                    in_block = true;
                    rest = "";
                }
            }
        }
        if is_meaningful_line(rest) {
            count += 1;
        }
    }

    count
}

fn is_meaningful_line(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return false;
    }
    if trimmed.starts_with("//") || trimmed.starts_with('*') {
        return false;
    }
    !trimmed
        .chars()
        .all(|c| matches!(c, '{' | '}' | '(' | ')' | ';'))
}
