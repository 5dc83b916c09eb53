use std::fs;

use pathspect::{assert_that, assert_that_with, AssertConfig, Charset, CheckError};
use proptest::prelude::*;
use tempfile::TempDir;

use crate::integration::support::{turkish, Fixture, FRENCH_TRUTH, TRUTH, TURKISH_TRUTH};

#[test]
fn content_of_text_file() -> Result<(), CheckError> {
    let fixture = Fixture::new();
    assert_that(fixture.path("xfile.txt"))
        .is_not_empty_file()?
        .has_size(TRUTH.len() as u64)?
        .has_content(TRUTH)?
        .has_binary_content(TRUTH.as_bytes())?;
    assert_that(fixture.path("empty.txt")).is_empty_file()?;
    Ok(())
}

#[test]
fn accented_content_round_trips_in_utf8() {
    let fixture = Fixture::new();
    let french = fixture.path("xfile-french.txt");
    assert!(assert_that(&french).has_content(FRENCH_TRUTH).is_ok());
    assert!(assert_that(&french)
        .using_charset(Charset::for_label("latin1").unwrap())
        .has_content(FRENCH_TRUTH)
        .is_err());
}

#[test]
fn turkish_content_needs_its_charset() {
    let fixture = Fixture::new();
    let file = fixture.path("xfile.turkish");

    assert!(assert_that(&file)
        .using_charset(turkish())
        .has_content(TURKISH_TRUTH)
        .is_ok());
    assert!(assert_that(&file)
        .using_charset_label("windows-1254")
        .unwrap()
        .has_content(TURKISH_TRUTH)
        .is_ok());

    let err = assert_that(&file).has_content(TURKISH_TRUTH).unwrap_err();
    assert!(err.is_failure());

    assert!(assert_that(&file)
        .has_binary_content(turkish().encode(TURKISH_TRUTH))
        .is_ok());
    assert!(assert_that(&file)
        .has_binary_content(TURKISH_TRUTH.as_bytes())
        .is_err());
}

#[test]
fn configured_charset_applies_to_new_handles() {
    let fixture = Fixture::new();
    let config = AssertConfig {
        default_charset: "windows-1254".to_string(),
        ..AssertConfig::default()
    };
    assert!(assert_that_with(fixture.path("xfile.turkish"), &config)
        .has_content(TURKISH_TRUTH)
        .is_ok());
}

#[test]
fn same_content_is_symmetric() {
    let fixture = Fixture::new();
    let a = fixture.path("xfile.txt");
    let b = fixture.path("xfile-clone.txt");
    for (left, right) in [(&a, &b), (&b, &a)] {
        assert!(assert_that(left)
            .has_same_textual_content_as(right)
            .and_then(|h| h.has_same_binary_content_as(right))
            .is_ok());
    }
}

#[test]
fn different_content_reports_first_difference() {
    let fixture = Fixture::new();
    let truth = fixture.path("xfile.txt");
    let french = fixture.path("xfile-french.txt");

    for (left, right) in [(&truth, &french), (&french, &truth)] {
        let err = assert_that(left).has_same_binary_content_as(right).unwrap_err();
        assert!(err.to_string().contains("at byte offset 0"));
        let err = assert_that(left).has_same_textual_content_as(right).unwrap_err();
        assert!(err.to_string().contains("line 1:"));
    }
}

#[test]
fn content_is_read_at_call_time() {
    let fixture = Fixture::new();
    let file = fixture.path("mutable.txt");
    fs::write(&file, "a").unwrap();

    let handle = assert_that(&file);
    assert!(handle.has_content("a").is_ok());
    fs::write(&file, "b").unwrap();
    assert!(handle.has_content("b").is_ok());
    assert!(handle.has_content("a").is_err());
}

#[test]
fn unreadable_other_is_evaluation_error() {
    let fixture = Fixture::new();
    let err = assert_that(fixture.path("xfile.txt"))
        .has_same_textual_content_as(fixture.path("missing.txt"))
        .unwrap_err();
    assert!(err.is_evaluation_error());
    assert!(err.failure().is_none());
}

#[test]
fn failing_check_stops_the_chain() {
    let fixture = Fixture::new();
    let outcome: Result<(), CheckError> = (|| {
        assert_that(fixture.path("empty.txt"))
            .is_not_empty_file()?
            .has_content("never evaluated")?;
        Ok(())
    })();
    let err = outcome.unwrap_err();
    assert!(err.to_string().contains("not be an empty file"));
}

proptest! {
    #[test]
    fn binary_content_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("blob");
        fs::write(&file, &bytes).unwrap();
        prop_assert!(assert_that(&file).has_binary_content(&bytes).is_ok());
    }

    #[test]
    fn text_content_round_trip(text in "[a-zA-Z0-9çşğüöıİ \n]{0,64}") {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("text");
        fs::write(&file, turkish().encode(&text)).unwrap();
        prop_assert!(assert_that(&file).using_charset(turkish()).has_content(&text).is_ok());
    }
}
