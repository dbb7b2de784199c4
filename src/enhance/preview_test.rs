use super::*;

// --- Media type check ---

#[test]
fn common_image_types_match() {
    assert!(is_image("image/png"));
    assert!(is_image("image/jpeg"));
    assert!(is_image("image/webp"));
    assert!(is_image("image/svg+xml"));
}

#[test]
fn non_image_types_do_not_match() {
    assert!(!is_image("application/pdf"));
    assert!(!is_image("text/plain"));
    assert!(!is_image("video/mp4"));
}

#[test]
fn empty_or_undeclared_type_does_not_match() {
    assert!(!is_image(""));
}

#[test]
fn prefix_match_is_exact() {
    // Browsers report lowercase media types; no case folding happens here.
    assert!(!is_image("IMAGE/PNG"));
    assert!(!is_image("imagery/none"));
}

// --- Container id ---

#[test]
fn container_id_prefixes_the_input_id() {
    assert_eq!(container_id("weaver-photo"), "preview-weaver-photo");
}

#[test]
fn container_id_for_unnamed_input() {
    assert_eq!(container_id(""), "preview-");
}
