use std::path::Path;

use pathspect::{assert_that, CheckError, PathMatcher};

use crate::integration::support::Fixture;

fn is_txt(path: &Path) -> bool {
    path.extension().map_or(false, |e| e == "txt")
}

fn is_java(path: &Path) -> bool {
    path.extension().map_or(false, |e| e == "java")
}

#[test]
fn templates_directory_contents() -> Result<(), CheckError> {
    let fixture = Fixture::new();
    assert_that(fixture.path("templates"))
        .is_directory()?
        .is_not_empty_directory()?
        .is_directory_containing("glob:**.txt")?
        .is_directory_containing("regex:.*txt")?
        .is_directory_containing("glob:**my*")?
        .is_directory_containing_where(is_txt)?
        .is_directory_not_containing("glob:**.java")?
        .is_directory_not_containing("regex:.*java")?
        .is_directory_not_containing_where(is_java)?;
    assert_that(fixture.path("empty-dir")).is_empty_directory()?;
    Ok(())
}

#[test]
fn containing_and_not_containing_are_complementary() {
    let fixture = Fixture::new();
    let templates = fixture.path("templates");
    std::fs::write(templates.join("Main.java"), "class Main {}").unwrap();

    for pattern in ["glob:**.txt", "glob:**.java", "glob:**.rs", "regex:.*md"] {
        let matcher = PathMatcher::parse(pattern).unwrap();
        let contains = assert_that(&templates)
            .is_directory_containing_matcher(&matcher)
            .is_ok();
        let not_contains = assert_that(&templates)
            .is_directory_not_containing_matcher(&matcher)
            .is_ok();
        assert!(contains != not_contains, "pattern {pattern}");
    }
}

#[test]
fn recursive_containment_sees_nested_entries() {
    let fixture = Fixture::new();
    let templates = fixture.path("templates");
    assert!(assert_that(&templates)
        .is_directory_containing("glob:**deep.txt")
        .is_err());
    assert!(assert_that(&templates)
        .is_directory_recursively_containing("glob:**/nested/deep.txt")
        .is_ok());
    assert!(assert_that(&templates)
        .is_directory_recursively_containing_where(|p| p.ends_with("deep.txt"))
        .is_ok());
}

#[test]
fn failure_lists_directory_entries() {
    let fixture = Fixture::new();
    let err = assert_that(fixture.path("templates"))
        .is_directory_containing("glob:**.java")
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Entries:"));
    assert!(message.contains("my_template.txt"));
    assert!(message.contains("nested"));

    let err = assert_that(fixture.path("templates"))
        .is_empty_directory()
        .unwrap_err();
    assert!(err.to_string().contains("it contains 4 entries"));
}

#[test]
fn non_directory_subject_is_failure() {
    let fixture = Fixture::new();
    for subject in [fixture.path("xfile.txt"), fixture.path("missing")] {
        let err = assert_that(&subject)
            .is_directory_containing("glob:*")
            .unwrap_err();
        assert!(err.is_failure());
        assert!(err.to_string().contains("to be a directory"));
    }
}

#[test]
fn malformed_pattern_is_evaluation_error() {
    let fixture = Fixture::new();
    let err = assert_that(fixture.path("templates"))
        .is_directory_containing("glob:{a,b")
        .unwrap_err();
    assert!(err.is_evaluation_error());
}
