use serde::{Deserialize, Serialize};

/// The raw generated plan for a goal. Opaque until run through a step extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPath {
    pub goal: String,
    pub document: String,
}

/// One stage of a learning path, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub name: String,
}

impl Step {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Bullet points describing what to learn in a step.
/// Blank fragments are kept; every fragment renders as one bullet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSummary {
    pub bullets: Vec<String>,
}

/// A step paired with its summary. `position` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDetail {
    pub position: usize,
    pub name: String,
    pub summary: StepSummary,
}
