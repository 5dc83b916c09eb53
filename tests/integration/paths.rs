use std::path::Path;

use pathspect::{assert_that, CheckError};

use crate::integration::support::Fixture;

#[test]
fn missing_path_does_not_exist() {
    let fixture = Fixture::new();
    let missing = fixture.path("nope.txt");

    assert!(assert_that(&missing).does_not_exist().is_ok());
    let err = assert_that(&missing).exists().unwrap_err();
    assert!(err.is_failure());
    assert!(err.to_string().contains("to exist"));
}

#[test]
fn existing_file_chain() -> Result<(), CheckError> {
    let fixture = Fixture::new();
    assert_that(fixture.path("xfile.txt"))
        .exists()?
        .exists_no_follow_links()?
        .is_regular_file()?
        .is_absolute()?
        .has_file_name("xfile.txt")?
        .has_extension("txt")?
        .has_parent(&fixture.root)?
        .starts_with(&fixture.root)?
        .ends_with("xfile.txt")?;
    Ok(())
}

#[test]
fn kind_mismatch_reports_actual_kind() {
    let fixture = Fixture::new();
    let err = assert_that(&fixture.root).is_regular_file().unwrap_err();
    assert!(err.to_string().contains("but it is a directory"));
    let err = assert_that(fixture.path("xfile.txt")).is_directory().unwrap_err();
    assert!(err.to_string().contains("but it is a regular file"));
    let err = assert_that(fixture.path("xfile.txt")).is_symbolic_link().unwrap_err();
    assert!(err.is_failure());
}

#[cfg(unix)]
#[test]
fn dangling_link_exists_only_without_following() {
    let fixture = Fixture::new();
    let link = fixture.path("dangling");
    std::os::unix::fs::symlink(fixture.path("nowhere"), &link).unwrap();

    let handle = assert_that(&link);
    assert!(handle.exists().is_err());
    assert!(handle.exists_no_follow_links().is_ok());
    assert!(handle.does_not_exist().is_err());
    assert!(handle.is_symbolic_link().is_ok());
}

#[cfg(unix)]
#[test]
fn link_to_file_is_both_link_and_file() {
    let fixture = Fixture::new();
    let link = fixture.path("xfile-link");
    std::os::unix::fs::symlink(fixture.path("xfile.txt"), &link).unwrap();

    assert!(assert_that(&link)
        .is_symbolic_link()
        .and_then(|a| a.is_regular_file())
        .and_then(|a| a.has_content(crate::integration::support::TRUTH))
        .is_ok());
    assert!(assert_that(&link).is_canonical().is_err());
}

#[cfg(unix)]
#[test]
fn link_to_directory_is_both_link_and_directory() {
    let fixture = Fixture::new();
    let link = fixture.path("templates-link");
    std::os::unix::fs::symlink(fixture.path("templates"), &link).unwrap();

    assert!(assert_that(&link)
        .is_directory()
        .and_then(|a| a.is_symbolic_link())
        .and_then(|a| a.is_directory_containing("glob:**my*"))
        .is_ok());
    assert!(assert_that(&link).is_regular_file().is_err());
}

#[test]
fn parent_is_normalization_insensitive() {
    let dir = Path::new("target/dir");
    assert!(assert_that(dir).has_parent("target/dir/..").is_ok());
    assert!(assert_that(dir).has_parent("target").is_ok());
    assert!(assert_that(dir).has_parent_raw("target").is_ok());

    let err = assert_that(dir).has_parent_raw("target/dir/..").unwrap_err();
    assert!(err.is_failure());
    assert!(err.to_string().contains("its parent is:\n  target"));
}

#[cfg(unix)]
#[test]
fn no_parent() {
    assert!(assert_that("/").has_no_parent().is_ok());
    assert!(assert_that("file.txt").has_no_parent_raw().is_ok());
    assert!(assert_that("a/..").has_no_parent().is_ok());
    assert!(assert_that("a/..").has_no_parent_raw().is_err());
    assert!(assert_that("a/b").has_no_parent().is_err());
}

#[cfg(unix)]
#[test]
fn prefixes_and_suffixes() {
    let lib = Path::new("/usr/lib");
    assert!(assert_that(lib).starts_with("/usr/lib/..").is_ok());
    assert!(assert_that(lib).starts_with_raw("/usr/lib/..").is_err());
    assert!(assert_that(lib).ends_with("lib/../lib").is_ok());
    assert!(assert_that(lib).ends_with_raw("lib/../lib").is_err());
    assert!(assert_that(lib).starts_with_raw("/usr").is_ok());
    assert!(assert_that(lib).ends_with_raw("lib").is_ok());
    assert!(assert_that(lib).starts_with("/us").is_err());
}

#[test]
fn normalized_and_relative() {
    assert!(assert_that("a/b").is_normalized().is_ok());
    assert!(assert_that("../a").is_normalized().is_ok());
    let err = assert_that("a/./b/../c").is_normalized().unwrap_err();
    assert!(err.to_string().contains("its normalized form is:\n  a/c"));

    assert!(assert_that("a/b").is_relative().is_ok());
    assert!(assert_that("a/b").is_absolute().is_err());
}

#[test]
fn canonical_requires_resolution() {
    let fixture = Fixture::new();
    let canonical = dunce::canonicalize(fixture.path("xfile.txt")).unwrap();
    assert!(assert_that(&canonical).is_canonical().is_ok());

    let dotted = canonical.parent().unwrap().join(".").join("xfile.txt");
    assert!(assert_that(&dotted).is_canonical().unwrap_err().is_failure());

    let err = assert_that(fixture.path("missing")).is_canonical().unwrap_err();
    assert!(err.is_evaluation_error());
}

#[test]
fn ordering_of_paths() {
    assert!(assert_that("abc.txt").is_less_than("xyz.txt").is_ok());
    assert!(assert_that("xyz.txt").is_less_than("abc.txt").is_err());
    assert!(assert_that("xyz.txt").is_greater_than("abc.txt").is_ok());
}
