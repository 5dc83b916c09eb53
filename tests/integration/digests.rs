use std::fs;

use pathspect::{assert_that, DigestAlgorithm, EvaluationError};

use crate::integration::support::Fixture;

const MD5: &str = "900150983cd24fb0d6963f7d28e17f72";
const SHA1: &str = "a9993e364706816aba3e25717850c26c9cd0d89d";
const SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

fn abc(fixture: &Fixture) -> std::path::PathBuf {
    let file = fixture.path("abc.bin");
    fs::write(&file, b"abc").unwrap();
    file
}

#[test]
fn known_digests_match_in_any_form() {
    let fixture = Fixture::new();
    let file = abc(&fixture);
    let md5_bytes = hex::decode(MD5).unwrap();
    let sha1_bytes = hex::decode(SHA1).unwrap();

    assert!(assert_that(&file)
        .has_digest("SHA1", SHA1)
        .and_then(|a| a.has_digest(DigestAlgorithm::Sha1, SHA1))
        .and_then(|a| a.has_digest("SHA-1", sha1_bytes.as_slice()))
        .and_then(|a| a.has_digest(DigestAlgorithm::Sha1, sha1_bytes.clone()))
        .and_then(|a| a.has_digest("MD5", MD5))
        .and_then(|a| a.has_digest(DigestAlgorithm::Md5, MD5.to_uppercase()))
        .and_then(|a| a.has_digest("md5", md5_bytes))
        .and_then(|a| a.has_digest("SHA-256", SHA256))
        .is_ok());
}

#[test]
fn digests_are_stable_across_calls() {
    let fixture = Fixture::new();
    let file = abc(&fixture);
    let handle = assert_that(&file);
    for _ in 0..3 {
        assert!(handle.has_digest("MD5", MD5).is_ok());
    }
}

#[test]
fn small_read_buffer_gives_same_digest() {
    let fixture = Fixture::new();
    let file = fixture.path("large.bin");
    let content: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
    fs::write(&file, &content).unwrap();
    let expected = DigestAlgorithm::Sha256.digest(&content);

    let config = pathspect::AssertConfig {
        read_buffer_size: 7,
        ..pathspect::AssertConfig::default()
    };
    assert!(pathspect::assert_that_with(&file, &config)
        .has_digest(DigestAlgorithm::Sha256, expected)
        .is_ok());
}

#[test]
fn wrong_digest_is_failure_and_bad_input_is_evaluation_error() {
    let fixture = Fixture::new();
    let file = abc(&fixture);

    let err = assert_that(&file).has_digest("SHA1", MD5).unwrap_err();
    assert!(err.is_failure());
    assert!(err.to_string().contains(SHA1));

    let err = assert_that(&file).has_digest("WHIRLPOOL", MD5).unwrap_err();
    assert!(matches!(
        err.evaluation_error(),
        Some(EvaluationError::UnsupportedAlgorithm(_))
    ));

    let err = assert_that(&file).has_digest("MD5", "zz").unwrap_err();
    assert!(matches!(
        err.evaluation_error(),
        Some(EvaluationError::InvalidDigest(_))
    ));
}

#[test]
fn digest_of_missing_file_is_failure() {
    let fixture = Fixture::new();
    let err = assert_that(fixture.path("missing.bin"))
        .has_digest("MD5", MD5)
        .unwrap_err();
    assert!(err.is_failure());
    assert!(err.to_string().contains("it does not exist"));
}
