//! Per-file signal extraction.
//!
//! Every detector looks at one file in isolation, so extraction can run in
//! any order (or concurrently) without changing the aggregate.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tokei::LanguageType;

use crate::domain::FileSignal;

static COMPONENT_RETURN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"return\s*\(?\s*<[A-Za-z>]").expect("component return pattern compiles")
});

static STATE_HOOK_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\buse(?:State|Effect|Reducer|LayoutEffect)\s*\(")
        .expect("state hook pattern compiles")
});

static CLASS_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bclass(?:Name)?\s*=").expect("class attribute pattern compiles")
});

static UTILITY_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:bg|text|font|flex|grid|gap|p[xytrbl]?|m[xytrbl]?|w|h|rounded|border|shadow|space-[xy])-[\w\[]",
    )
    .expect("utility class pattern compiles")
});

/// Extract the structural signals of one file.
pub fn extract_signals(path: &Path, contents: &str) -> FileSignal {
    FileSignal {
        path: path.to_path_buf(),
        is_component_like: is_component_like(contents),
        uses_state_hooks: uses_state_hooks(contents),
        is_typed_source: is_typed_source(path),
        uses_utility_styling: uses_utility_styling(contents),
        is_test_file: is_test_file(path),
    }
}

fn is_component_like(contents: &str) -> bool {
    COMPONENT_RETURN.is_match(contents)
}

fn uses_state_hooks(contents: &str) -> bool {
    STATE_HOOK_CALL.is_match(contents)
}

fn uses_utility_styling(contents: &str) -> bool {
    CLASS_ATTRIBUTE.is_match(contents) && UTILITY_CLASS.is_match(contents)
}

/// Typed-ness is decided by extension only; contents are never sniffed.
fn is_typed_source(path: &Path) -> bool {
    let Some(ext) = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
    else {
        return false;
    };
    // JSX-flavoured TypeScript is not a separate language in every tokei release.
    if ext == "tsx" {
        return true;
    }
    matches!(
        LanguageType::from_file_extension(&ext),
        Some(
            LanguageType::TypeScript
                | LanguageType::Rust
                | LanguageType::Go
                | LanguageType::Java
                | LanguageType::Kotlin
                | LanguageType::Swift
                | LanguageType::CSharp
                | LanguageType::Cpp
                | LanguageType::C
                | LanguageType::Dart
                | LanguageType::Scala
        )
    )
}

fn is_test_file(path: &Path) -> bool {
    let path = path.to_string_lossy().to_lowercase();
    path.contains(".test.") || path.contains(".spec.")
}
