//! Step Extractor — turns a generated career-path document into ordered step names.
//!
//! Default strategy: bold `**Step N: Name**` markers. Callers depend on the
//! `StepExtractor` trait so the strategy can change (e.g. to a structured-output
//! request) without touching the pipeline.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::AppError;
use crate::models::career::Step;

static STEP_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*(Step \d+:.*?)\*\*").expect("step marker regex is valid")
});

/// Lazy, single-pass sequence of steps in document order.
pub type StepIter<'a> = Box<dyn Iterator<Item = Step> + 'a>;

pub trait StepExtractor: Send + Sync {
    fn extract<'a>(&self, document: &'a str) -> StepIter<'a>;
}

/// Matches `**Step <number>: <name>**` and keeps the text after the first colon.
/// Markers with nothing after the colon (`**Step 1:** Name`) carry no name and are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerStepExtractor;

impl StepExtractor for MarkerStepExtractor {
    fn extract<'a>(&self, document: &'a str) -> StepIter<'a> {
        Box::new(extract_steps(document))
    }
}

pub fn extract_steps(document: &str) -> impl Iterator<Item = Step> + '_ {
    STEP_MARKER.captures_iter(document).filter_map(|caps| {
        let marker = caps.get(1)?.as_str();
        let (_, name) = marker.split_once(':')?;
        let name = name.trim();
        (!name.is_empty()).then(|| Step::new(name))
    })
}

/// Drains the extractor. Zero steps means extraction failed, not an empty plan.
pub fn collect_steps(extractor: &dyn StepExtractor, document: &str) -> Result<Vec<Step>, AppError> {
    let steps: Vec<Step> = extractor.extract(document).collect();
    if steps.is_empty() {
        return Err(AppError::ExtractionEmpty);
    }
    Ok(steps)
}
