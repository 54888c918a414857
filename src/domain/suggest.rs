//! Curated offset suggestions
//!
//! The editing UI offers these next to free-text offset fields. The list is
//! fixed and ordered shortest to longest; every expression parses to exactly
//! its listed day count.

use serde::Serialize;

/// A suggested offset expression with its resolved day count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Display label shown in pickers
    pub label: &'static str,
    /// The expression exactly as the parser accepts it
    pub expression: &'static str,
    /// Total days the expression resolves to
    pub total_days: i64,
}

const SUGGESTIONS: &[Suggestion] = &[
    Suggestion {
        label: "Same Day",
        expression: "same day",
        total_days: 0,
    },
    Suggestion {
        label: "Next Day",
        expression: "next day",
        total_days: 1,
    },
    Suggestion {
        label: "3 Days",
        expression: "3 days",
        total_days: 3,
    },
    Suggestion {
        label: "1 Week",
        expression: "1 week",
        total_days: 7,
    },
    Suggestion {
        label: "2 Weeks",
        expression: "2 weeks",
        total_days: 14,
    },
    Suggestion {
        label: "1 Month",
        expression: "1 month",
        total_days: 30,
    },
    Suggestion {
        label: "2 Months",
        expression: "2 months",
        total_days: 60,
    },
    Suggestion {
        label: "3 Months",
        expression: "3 months",
        total_days: 90,
    },
];

/// Returns the curated suggestion list in display order
pub fn suggestions() -> &'static [Suggestion] {
    SUGGESTIONS
}
