use taskpad_core::enrichment::{
    SUMMARY_LABEL, SUMMARY_PREFIX_CHARS, TRUNCATION_MARKER, categorize, enrich, summarize,
};
use taskpad_core::models::Category;

#[test]
fn content_without_the_marker_is_personal() {
    assert_eq!(
        categorize("Remember to buy milk and eggs"),
        Category::Personal
    );
}

#[test]
fn content_mentioning_work_is_work() {
    assert_eq!(
        categorize("Discuss work priorities for the sprint"),
        Category::Work
    );
}

#[test]
fn categorization_is_case_insensitive() {
    assert_eq!(categorize("WORK in progress"), Category::Work);
    assert_eq!(categorize("Working late tonight"), Category::Work);
}

#[test]
fn summary_carries_label_prefix_and_marker() {
    let summary = summarize("Remember to buy milk and eggs");
    assert!(summary.starts_with(SUMMARY_LABEL));
    assert!(summary.ends_with(TRUNCATION_MARKER));
    assert_eq!(summary, "AI Summary: Remember to buy milk and eggs...");
}

#[test]
fn summary_truncates_long_content_to_the_fixed_prefix() {
    let content = "Discuss work priorities for the sprint";
    let summary = summarize(content);

    let prefix: String = content.chars().take(SUMMARY_PREFIX_CHARS).collect();
    assert_eq!(prefix, "Discuss work priorities for th");
    assert_eq!(summary, format!("{SUMMARY_LABEL}{prefix}{TRUNCATION_MARKER}"));
}

#[test]
fn enrich_bundles_summary_and_category() {
    let enrichment = enrich("Discuss work priorities for the sprint");
    assert_eq!(enrichment.category, Category::Work);
    assert_eq!(
        enrichment.summary,
        "AI Summary: Discuss work priorities for th..."
    );

    let personal = enrich("Remember to buy milk and eggs");
    assert_eq!(personal.category, Category::Personal);
    assert!(personal.summary.contains("Remember to buy milk and eggs"));
}

#[test]
fn enrichment_is_deterministic() {
    let content = "Plan the weekend hike";
    assert_eq!(enrich(content), enrich(content));
}
