use super::default_directive;

#[test]
fn info_is_the_default_level() {
    assert_eq!(default_directive(0), "info");
}

#[test]
fn verbosity_deepens_the_level() {
    assert_eq!(default_directive(1), "debug");
    assert_eq!(default_directive(2), "trace");
    assert_eq!(default_directive(7), "trace");
}
