use crate::models::Category;

pub const SUMMARY_LABEL: &str = "AI Summary: ";
pub const SUMMARY_PREFIX_CHARS: usize = 30;
pub const TRUNCATION_MARKER: &str = "...";

const WORK_MARKER: &str = "work";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Enrichment {
    pub summary: String,
    pub category: Category,
}

/// Label + first 30 characters of the content + truncation marker.
/// The marker is appended even when the content is shorter than the prefix.
pub fn summarize(content: &str) -> String {
    let prefix: String = content.chars().take(SUMMARY_PREFIX_CHARS).collect();
    format!("{SUMMARY_LABEL}{prefix}{TRUNCATION_MARKER}")
}

pub fn categorize(content: &str) -> Category {
    if content.to_lowercase().contains(WORK_MARKER) {
        Category::Work
    } else {
        Category::Personal
    }
}

pub fn enrich(content: &str) -> Enrichment {
    Enrichment {
        summary: summarize(content),
        category: categorize(content),
    }
}
