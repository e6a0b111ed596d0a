use serde::Serialize;

/// Result of evaluating a recurrence rule against one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Occurrence {
    pub occurs: bool,
    /// Numbered visit of the cycle, only computed for weekly and monthly rules.
    pub visit_ordinal: Option<u32>,
}

impl Occurrence {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn at(visit_ordinal: Option<u32>) -> Self {
        Self {
            occurs: true,
            visit_ordinal,
        }
    }
}
