// Host-side tests for the page wiring constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_constants_are_within_reasonable_bounds() {
    // Long enough to coalesce a drag-resize, short enough to feel immediate
    assert!(RESIZE_DEBOUNCE_MS >= 50 && RESIZE_DEBOUNCE_MS <= 1000);
    assert!(STATS_INTERVAL_SEC > 0.0);
}

#[test]
fn element_ids_are_plain_ids() {
    for id in [
        HERO_CANVAS_ID,
        BACKDROP_CANVAS_ID,
        LOAN_AMOUNT_ID,
        LOAN_SLIDER_ID,
        LOAN_RESULT_ID,
        LOAN_MONTHLY_ID,
        LOAN_PRINCIPAL_ID,
        LOAN_INTEREST_ID,
        LOAN_TOTAL_ID,
    ] {
        assert!(!id.is_empty());
        assert!(
            !id.starts_with('#') && !id.contains(char::is_whitespace),
            "{id:?} should be a bare element id"
        );
    }
}

#[test]
fn selectors_are_class_selectors() {
    assert!(HERO_SECTION_SELECTOR.starts_with('.'));
    assert!(DURATION_BUTTON_SELECTOR.starts_with('.'));
    assert!(SCENE_ATTR.starts_with("data-"));
    assert!(DURATION_MONTHS_ATTR.starts_with("data-"));
}

#[test]
fn backdrop_canvas_stays_behind_content_and_ignores_input() {
    assert!(BACKDROP_STYLE.contains("position:fixed"));
    assert!(BACKDROP_STYLE.contains("pointer-events:none"));
    assert!(BACKDROP_STYLE.contains("width:100%"));
    assert!(BACKDROP_STYLE.contains("height:100%"));
}

#[test]
fn currency_suffixes_are_separated_from_the_amount() {
    assert!(CURRENCY_SUFFIX.starts_with(' '));
    assert!(PER_MONTH_SUFFIX.starts_with(CURRENCY_SUFFIX));
    assert!(PER_MONTH_SUFFIX.ends_with("/lună"));
}
