//! End-to-end behavior of masked inputs: keystrokes in, committed values and
//! overlays out.

use std::sync::Arc;

use horizon_textmask::mask::{CharPattern, PatternItem};
use horizon_textmask::placeholder::{concat_runs, visible_text};
use horizon_textmask::prelude::*;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn digit() -> MaskItem {
    MaskItem::pattern(CharClass::Digit, '_')
}

fn phone_mask() -> Mask {
    Mask::new([
        MaskItem::literal('('),
        digit(),
        digit(),
        digit(),
        MaskItem::literal(')'),
        MaskItem::literal(' '),
        digit(),
        digit(),
        digit(),
    ])
}

#[test]
fn test_phone_number_scenario() {
    let placeholder = Placeholder::mask(phone_mask());
    assert_eq!(placeholder.filter_input("5551234"), "(555) 123");
}

#[test]
fn test_digits_skip_letters() {
    let placeholder = Placeholder::mask(Mask::new([digit(), digit()]));
    assert_eq!(placeholder.filter_input("a1b2"), "12");
}

#[test]
fn test_uppercase_letters() {
    let letter = || MaskItem::from(PatternItem::new(CharClass::Letter, '_').uppercase());
    let placeholder = Placeholder::mask(Mask::new([letter(), letter()]));
    assert_eq!(placeholder.filter_input("ab"), "AB");
}

#[test]
fn test_empty_input_with_leading_slot() {
    let placeholder = Placeholder::mask(Mask::new([digit(), MaskItem::literal('-')]));
    assert_eq!(placeholder.filter_input(""), "");
}

#[test]
fn test_empty_input_policies_with_leading_literal() {
    let emit = Placeholder::mask(phone_mask());
    assert_eq!(emit.filter_input(""), "(");

    let clear = Placeholder::mask(phone_mask().with_empty_input(EmptyInputPolicy::Clear));
    assert_eq!(clear.filter_input(""), "");
    assert_eq!(clear.filter_input("5"), "(5");
}

#[test]
fn test_overlay_single_character() {
    let placeholder = Placeholder::mask(Mask::new([digit(), digit(), digit()]));

    let rtl = placeholder.render_overlay("5", TextDirection::RightToLeft);
    assert_eq!(rtl, vec![OverlayRun::hidden("___")]);

    let ltr = placeholder.render_overlay("5", TextDirection::LeftToRight);
    assert_eq!(ltr.len(), 2);
    assert_eq!(ltr[0], OverlayRun::hidden("5"));
    assert_eq!(ltr[0].char_len(), 1);
    assert_eq!(ltr[1], OverlayRun::visible("__"));
    assert_eq!(concat_runs(&ltr).chars().count(), 3);
}

#[test]
fn test_regex_and_custom_slots() {
    let vowel = CharPattern::regex("[aeiou]").unwrap();
    let odd = CharPattern::custom(|c| c.to_digit(10).is_some_and(|d| d % 2 == 1));
    let mask = Mask::builder()
        .slot(vowel)
        .literal(':')
        .slot(odd)
        .build();

    assert_eq!(mask.filter("xyzo248 7"), "o:7");
    assert!(CharPattern::regex("[unclosed").is_err());
}

#[test]
fn test_typing_session_with_signals() {
    init_tracing();
    let edit = MaskedLineEdit::new(Placeholder::mask_pattern(">AA-9999").unwrap());
    let committed = Arc::new(parking_lot::Mutex::new(Vec::new()));
    let committed_clone = committed.clone();
    edit.text_changed.connect(move |value: &String| {
        committed_clone.lock().push(value.clone());
    });

    for ch in "ab1234".chars() {
        edit.insert_char(ch);
    }
    assert_eq!(edit.text(), "AB-1234");
    assert!(edit.is_acceptable());
    assert_eq!(committed.lock().len(), 6);

    edit.backspace();
    assert_eq!(edit.text(), "AB-123");
    assert_eq!(edit.validation_state(), ValidationState::Intermediate);
    assert_eq!(visible_text(&edit.overlay()), "_");
}

#[test]
fn test_typing_digits_after_matching_literals() {
    init_tracing();
    let edit = MaskedLineEdit::new(Placeholder::mask(Mask::parse("+1 999").unwrap()));
    for ch in "12".chars() {
        edit.insert_char(ch);
    }
    assert_eq!(edit.text(), "+1 12");
    assert_eq!(
        edit.overlay(),
        vec![OverlayRun::hidden("+1 12"), OverlayRun::visible("_")]
    );
}

#[test]
fn test_localized_caption_follows_locale() {
    init_tracing();
    let catalog = Arc::new(StaticCatalog::new("en-US"));
    catalog.insert("en-US", "date.hint", "Date");
    catalog.insert("he-IL", "date.hint", "תאריך");

    let edit = MaskedLineEdit::new(Placeholder::localized("date.hint", catalog.clone()));
    assert_eq!(edit.overlay(), vec![OverlayRun::visible("Date")]);

    let edit = Arc::new(edit);
    let edit_clone = Arc::clone(&edit);
    catalog.locale_changed.connect(move |locale: &String| {
        edit_clone.set_direction(TextDirection::for_locale(locale));
    });

    catalog.set_locale("he-IL");
    assert_eq!(edit.direction(), TextDirection::RightToLeft);
    assert_eq!(edit.overlay(), vec![OverlayRun::visible("תאריך")]);
    assert_eq!(catalog.direction(), TextDirection::RightToLeft);
}

#[test]
fn test_config_driven_input() {
    init_tracing();
    let config = TextMaskConfig::from_json_str(
        r#"{
            "direction": "auto",
            "placeholder": { "kind": "mask", "pattern": "HH:HH:HH;0", "empty_input": "clear" }
        }"#,
    )
    .unwrap();

    let edit = config.build_edit().unwrap();
    assert_eq!(edit.overlay(), vec![OverlayRun::hidden(""), OverlayRun::visible("00:00:00")]);

    edit.insert_str("fFzz0a");
    assert_eq!(edit.text(), "fF:0a:");
    assert_eq!(
        edit.overlay(),
        vec![OverlayRun::hidden("fF:0a:"), OverlayRun::visible("00")]
    );
    assert!(!edit.set_text(Some("fF:0a:")));
}
