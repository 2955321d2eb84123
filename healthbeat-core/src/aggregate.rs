//! Project-level pattern aggregation.
//!
//! The thresholds below are calibration constants carried over from the
//! product's heuristics. Do not retune them without product guidance: rule
//! output and scores are expected to stay reproducible across releases.

use std::collections::BTreeSet;

use crate::domain::{ComplexityTier, FileSignal, Pattern, ProjectProfile, Trend};

/// Component-like files needed before the functional idiom counts.
pub const FUNCTIONAL_COMPONENT_MIN: usize = 5;
/// Share of typed files for strong typed-source adoption.
pub const STRONG_TYPED_RATIO: f64 = 0.7;
/// Utility-styled files relative to component-like files.
pub const UTILITY_STYLING_RATIO: f64 = 0.5;
/// Hook-to-component ratio that signals increasing modularity.
pub const MODULARITY_RATIO: f64 = 1.5;
/// Share of typed files for the excellent typed-source trend.
pub const EXCELLENT_TYPED_RATIO: f64 = 0.8;
/// Share of test files below which coverage is considered low.
pub const LOW_TEST_RATIO: f64 = 0.3;
/// Largest file count still considered low complexity.
pub const LOW_COMPLEXITY_MAX: usize = 20;
/// Largest file count still considered medium complexity.
pub const MEDIUM_COMPLEXITY_MAX: usize = 50;

/// Per-signal tallies across a file set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SignalCounts {
    /// Files with the component idiom.
    pub component_like: usize,
    /// Files calling state or effect hooks.
    pub state_hooks: usize,
    /// Statically typed files.
    pub typed_source: usize,
    /// Files using utility styling.
    pub utility_styling: usize,
    /// Test or spec files.
    pub test_files: usize,
}

impl SignalCounts {
    /// Count every signal across the given records.
    pub fn tally<'a, I>(signals: I) -> Self
    where
        I: IntoIterator<Item = &'a FileSignal>,
    {
        signals.into_iter().fold(Self::default(), |mut counts, signal| {
            counts.component_like += usize::from(signal.is_component_like);
            counts.state_hooks += usize::from(signal.uses_state_hooks);
            counts.typed_source += usize::from(signal.is_typed_source);
            counts.utility_styling += usize::from(signal.uses_utility_styling);
            counts.test_files += usize::from(signal.is_test_file);
            counts
        })
    }
}

/// Tier for a scanned file count.
pub fn complexity_for(file_count: usize) -> ComplexityTier {
    if file_count > MEDIUM_COMPLEXITY_MAX {
        ComplexityTier::High
    } else if file_count > LOW_COMPLEXITY_MAX {
        ComplexityTier::Medium
    } else {
        ComplexityTier::Low
    }
}

/// Reduce per-file signals into a project profile.
pub fn aggregate(signals: &[FileSignal], file_count: usize) -> ProjectProfile {
    profile_from_counts(&SignalCounts::tally(signals), file_count)
}

/// Derive patterns, trends and complexity from pre-computed tallies.
pub fn profile_from_counts(counts: &SignalCounts, file_count: usize) -> ProjectProfile {
    ProjectProfile {
        file_count,
        patterns: derive_patterns(counts, file_count),
        trends: derive_trends(counts, file_count),
        complexity: complexity_for(file_count),
    }
}

fn derive_patterns(counts: &SignalCounts, file_count: usize) -> BTreeSet<Pattern> {
    let total = file_count as f64;
    let components = counts.component_like as f64;
    let mut patterns = BTreeSet::new();

    if counts.component_like > FUNCTIONAL_COMPONENT_MIN {
        patterns.insert(Pattern::FunctionalComponents);
    }
    if counts.typed_source as f64 > STRONG_TYPED_RATIO * total {
        patterns.insert(Pattern::StrongTypedSource);
    }
    if counts.utility_styling as f64 > UTILITY_STYLING_RATIO * components {
        patterns.insert(Pattern::UtilityStyling);
    }
    if counts.state_hooks > counts.component_like {
        patterns.insert(Pattern::ModernStateManagement);
    }

    patterns
}

fn derive_trends(counts: &SignalCounts, file_count: usize) -> Vec<Trend> {
    let total = file_count as f64;
    let mut trends = Vec::new();

    let hook_ratio = counts.state_hooks as f64 / counts.component_like.max(1) as f64;
    if hook_ratio > MODULARITY_RATIO {
        trends.push(Trend::IncreasingModularity);
    }
    if counts.typed_source as f64 > EXCELLENT_TYPED_RATIO * total {
        trends.push(Trend::ExcellentTypedSource);
    }
    if (counts.test_files as f64) < LOW_TEST_RATIO * total {
        trends.push(Trend::LowTestCoverage);
    }

    trends
}
