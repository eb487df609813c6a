//! Rule Content Types
//!
//! The value types handed to a rendering surface: one [`RuleEntry`] per rule
//! card, with ordered detail pairs and classified example lines. Everything
//! here is plain owned data; the generator builds it, the renderer reads it.

use serde::Serialize;

/// Program progression phase a rule set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Evaluation,
    PerformanceAccount,
    Live,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Evaluation => "Phase 1: Evaluation Account",
            Phase::PerformanceAccount => "Phase 2: Performance Account (PA)",
            Phase::Live => "Phase 3: Live Prop Account",
        }
    }
}

/// Presentational hue for a rule card. Display hint only; carries no meaning
/// beyond visual grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CardColor {
    Blue,
    Indigo,
    Red,
    Purple,
    Green,
    Yellow,
    Cyan,
    Orange,
    Emerald,
    Pink,
}

/// Outcome class of an example statement, used purely for display grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExampleKind {
    /// Allowed behavior or satisfied condition.
    Pass,
    /// Violation or failed condition.
    Fail,
    /// Neutral explanation or calculation.
    Info,
    /// Caution about an easy mistake.
    Warn,
}

impl ExampleKind {
    /// Marker prefix a text renderer puts before the statement.
    pub fn marker(&self) -> &'static str {
        match self {
            ExampleKind::Pass => "[ok]",
            ExampleKind::Fail => "[x]",
            ExampleKind::Info => "[i]",
            ExampleKind::Warn => "[!]",
        }
    }
}

/// One classified example statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Example {
    pub kind: ExampleKind,
    pub text: String,
}

impl Example {
    pub fn pass(text: impl Into<String>) -> Self {
        Self { kind: ExampleKind::Pass, text: text.into() }
    }

    pub fn fail(text: impl Into<String>) -> Self {
        Self { kind: ExampleKind::Fail, text: text.into() }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: ExampleKind::Info, text: text.into() }
    }

    pub fn warn(text: impl Into<String>) -> Self {
        Self { kind: ExampleKind::Warn, text: text.into() }
    }
}

/// One labelled detail line within a rule card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detail {
    pub label: &'static str,
    pub text: String,
}

impl Detail {
    pub fn new(label: &'static str, text: impl Into<String>) -> Self {
        Self { label, text: text.into() }
    }
}

/// One generated rule card. `id` is stable and unique within its phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleEntry {
    pub id: &'static str,
    pub title: String,
    pub color: CardColor,
    pub summary: String,
    pub details: Vec<Detail>,
    pub examples: Vec<Example>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_constructors() {
        assert_eq!(Example::pass("a").kind, ExampleKind::Pass);
        assert_eq!(Example::fail("b").kind, ExampleKind::Fail);
        assert_eq!(Example::info("c").kind, ExampleKind::Info);
        assert_eq!(Example::warn("d").kind, ExampleKind::Warn);
    }

    #[test]
    fn test_markers_are_distinct() {
        let markers = [
            ExampleKind::Pass.marker(),
            ExampleKind::Fail.marker(),
            ExampleKind::Info.marker(),
            ExampleKind::Warn.marker(),
        ];
        for (i, a) in markers.iter().enumerate() {
            for b in markers.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_phase_labels() {
        assert!(Phase::Evaluation.label().starts_with("Phase 1"));
        assert!(Phase::PerformanceAccount.label().starts_with("Phase 2"));
        assert!(Phase::Live.label().starts_with("Phase 3"));
    }
}
