use proppanel::validation::{TextValidator, all, max_length, merge_errors, min_length, pattern, required};

#[test]
fn test_length_rules() {
    let min = min_length(2, "Too short");
    let max = max_length(4, "Too long");

    assert_eq!(min(Some("a")).as_deref(), Some("Too short"));
    assert_eq!(min(Some("ab")), None);
    assert_eq!(min(None), None);

    assert_eq!(max(Some("abcde")).as_deref(), Some("Too long"));
    // Characters, not bytes
    assert_eq!(max(Some("äöüß")), None);
}

#[test]
fn test_pattern() {
    let id = pattern(r"^[A-Za-z_][\w-]*$", "Must be a valid id").unwrap();
    assert_eq!(id(Some("Task_1")), None);
    assert_eq!(id(Some("1task")).as_deref(), Some("Must be a valid id"));
    assert_eq!(id(None), None);

    assert!(pattern("(unclosed", "never").is_err());
}

#[test]
fn test_all_reports_first_error() {
    let rules: Vec<TextValidator> = vec![
        Box::new(required("Required")),
        Box::new(min_length(3, "Too short")),
        Box::new(max_length(5, "Too long")),
    ];
    let validate = all(rules);

    assert_eq!(validate(None).as_deref(), Some("Required"));
    assert_eq!(validate(Some("ab")).as_deref(), Some("Too short"));
    assert_eq!(validate(Some("abcdef")).as_deref(), Some("Too long"));
    assert_eq!(validate(Some("abcd")), None);
}

#[test]
fn test_merge_errors() {
    assert_eq!(merge_errors(Some("global"), None).as_deref(), Some("global"));
    assert_eq!(merge_errors(Some("global"), Some("local")).as_deref(), Some("global"));
    assert_eq!(merge_errors(None, Some("local")).as_deref(), Some("local"));
}
