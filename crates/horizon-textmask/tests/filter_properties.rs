//! Property-based tests for the mask filter and overlay.
//!
//! Masks are generated as pattern strings over the built-in classes, case
//! switches and a few separators; inputs are printable ASCII.

use horizon_textmask::prelude::*;
use horizon_textmask::placeholder::concat_runs;
use proptest::prelude::*;

fn pattern_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[AaNnXx90DdHhBb#><!() ./:-]{1,16}").expect("valid regex")
}

fn input_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~]{0,24}").expect("valid regex")
}

fn parse(pattern: &str) -> Option<Mask> {
    Mask::parse(pattern).ok()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_filter_is_idempotent(pattern in pattern_strategy(), raw in input_strategy()) {
        let Some(mask) = parse(&pattern) else { return Ok(()); };
        let once = mask.filter(&raw);
        prop_assert_eq!(mask.filter(&once), once);
    }

    #[test]
    fn prop_filter_respects_mask_length(pattern in pattern_strategy(), raw in input_strategy()) {
        let Some(mask) = parse(&pattern) else { return Ok(()); };
        prop_assert!(mask.filter(&raw).chars().count() <= mask.len());
    }

    #[test]
    fn prop_filtered_value_is_never_invalid(pattern in pattern_strategy(), raw in input_strategy()) {
        let Some(mask) = parse(&pattern) else { return Ok(()); };
        let validator = MaskValidator::new(mask.clone());
        let value = mask.filter(&raw);
        prop_assert_ne!(validator.validate(&value), ValidationState::Invalid);
    }

    #[test]
    fn prop_overlay_spans_display(pattern in pattern_strategy(), raw in input_strategy()) {
        let Some(mask) = parse(&pattern) else { return Ok(()); };
        let display_len = mask.display_text().chars().count();
        let placeholder = Placeholder::mask(mask);
        let value = placeholder.filter_input(&raw);

        for direction in [TextDirection::LeftToRight, TextDirection::RightToLeft] {
            let runs = placeholder.render_overlay(&value, direction);
            prop_assert_eq!(concat_runs(&runs).chars().count(), display_len);
        }
    }
}
