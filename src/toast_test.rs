use super::*;

// --- Parsing ---

#[test]
fn known_kinds_parse() {
    assert_eq!(ToastKind::parse("success"), ToastKind::Success);
    assert_eq!(ToastKind::parse("danger"), ToastKind::Danger);
    assert_eq!(ToastKind::parse("warning"), ToastKind::Warning);
    assert_eq!(ToastKind::parse("info"), ToastKind::Info);
}

#[test]
fn error_is_an_alias_for_danger() {
    assert_eq!(ToastKind::parse("error"), ToastKind::Danger);
}

#[test]
fn unknown_kinds_fall_back_to_info() {
    assert_eq!(ToastKind::parse(""), ToastKind::Info);
    assert_eq!(ToastKind::parse("primary"), ToastKind::Info);
    assert_eq!(ToastKind::parse("SUCCESS"), ToastKind::Info);
}

#[test]
fn default_kind_is_info() {
    assert_eq!(ToastKind::default(), ToastKind::Info);
}

// --- Class suffixes ---

#[test]
fn suffixes_are_bootstrap_contextual_names() {
    assert_eq!(ToastKind::Success.suffix(), "success");
    assert_eq!(ToastKind::Danger.suffix(), "danger");
    assert_eq!(ToastKind::Warning.suffix(), "warning");
    assert_eq!(ToastKind::Info.suffix(), "info");
}
