//! Digest computation over file content
//!
//! Content is streamed through the hasher in fixed-size chunks so large fixtures
//! are never held in memory.

use crate::error::EvaluationError;
use sha1::Digest as _;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
    Blake3,
}

impl DigestAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "MD5",
            DigestAlgorithm::Sha1 => "SHA-1",
            DigestAlgorithm::Sha256 => "SHA-256",
            DigestAlgorithm::Sha512 => "SHA-512",
            DigestAlgorithm::Blake3 => "BLAKE3",
        }
    }

    /// Digest length in bytes.
    pub fn output_len(&self) -> usize {
        match self {
            DigestAlgorithm::Md5 => 16,
            DigestAlgorithm::Sha1 => 20,
            DigestAlgorithm::Sha256 => 32,
            DigestAlgorithm::Sha512 => 64,
            DigestAlgorithm::Blake3 => 32,
        }
    }

    fn hasher(&self) -> Hasher {
        match self {
            DigestAlgorithm::Md5 => Hasher::Md5(md5::Context::new()),
            DigestAlgorithm::Sha1 => Hasher::Sha1(sha1::Sha1::new()),
            DigestAlgorithm::Sha256 => Hasher::Sha256(sha2::Sha256::new()),
            DigestAlgorithm::Sha512 => Hasher::Sha512(sha2::Sha512::new()),
            DigestAlgorithm::Blake3 => Hasher::Blake3(Box::new(blake3::Hasher::new())),
        }
    }

    /// Digest of an in-memory buffer.
    pub fn digest(&self, bytes: &[u8]) -> Vec<u8> {
        let mut hasher = self.hasher();
        hasher.update(bytes);
        hasher.finish()
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = EvaluationError;

    /// Accepts the usual spellings, ignoring case: `MD5`, `SHA1`, `SHA-1`, `SHA256`,
    /// `SHA-256`, `SHA512`, `SHA-512`, `BLAKE3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_uppercase();
        match key.as_str() {
            "MD5" => Ok(DigestAlgorithm::Md5),
            "SHA1" | "SHA" => Ok(DigestAlgorithm::Sha1),
            "SHA256" => Ok(DigestAlgorithm::Sha256),
            "SHA512" => Ok(DigestAlgorithm::Sha512),
            "BLAKE3" => Ok(DigestAlgorithm::Blake3),
            _ => Err(EvaluationError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// Anything that names a digest algorithm: a `DigestAlgorithm` or its name.
pub trait AlgorithmSpec {
    fn resolve(self) -> Result<DigestAlgorithm, EvaluationError>;
}

impl AlgorithmSpec for DigestAlgorithm {
    fn resolve(self) -> Result<DigestAlgorithm, EvaluationError> {
        Ok(self)
    }
}

impl AlgorithmSpec for &str {
    fn resolve(self) -> Result<DigestAlgorithm, EvaluationError> {
        self.parse()
    }
}

impl AlgorithmSpec for String {
    fn resolve(self) -> Result<DigestAlgorithm, EvaluationError> {
        self.parse()
    }
}

enum Hasher {
    Md5(md5::Context),
    Sha1(sha1::Sha1),
    Sha256(sha2::Sha256),
    Sha512(sha2::Sha512),
    Blake3(Box<blake3::Hasher>),
}

impl Hasher {
    fn update(&mut self, chunk: &[u8]) {
        match self {
            Hasher::Md5(ctx) => ctx.consume(chunk),
            Hasher::Sha1(h) => h.update(chunk),
            Hasher::Sha256(h) => h.update(chunk),
            Hasher::Sha512(h) => h.update(chunk),
            Hasher::Blake3(h) => {
                h.update(chunk);
            }
        }
    }

    fn finish(self) -> Vec<u8> {
        match self {
            Hasher::Md5(ctx) => ctx.compute().0.to_vec(),
            Hasher::Sha1(h) => h.finalize().to_vec(),
            Hasher::Sha256(h) => h.finalize().to_vec(),
            Hasher::Sha512(h) => h.finalize().to_vec(),
            Hasher::Blake3(h) => h.finalize().as_bytes().to_vec(),
        }
    }
}

/// Stream a file through the given algorithm.
pub fn digest_file(
    path: &Path,
    algorithm: DigestAlgorithm,
    buffer_size: usize,
) -> Result<Vec<u8>, EvaluationError> {
    let mut file = File::open(path).map_err(|e| EvaluationError::io(path, e))?;
    let mut hasher = algorithm.hasher();
    let mut buffer = vec![0u8; buffer_size.max(1)];
    loop {
        let read = match file.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(EvaluationError::io(path, e)),
        };
        hasher.update(&buffer[..read]);
    }
    Ok(hasher.finish())
}

/// Expected digest, either as raw bytes or as a hex string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpectedDigest {
    Bytes(Vec<u8>),
    Hex(String),
}

impl ExpectedDigest {
    /// Resolve to raw bytes. Hex is decoded case-insensitively.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EvaluationError> {
        match self {
            ExpectedDigest::Bytes(bytes) => Ok(bytes.clone()),
            ExpectedDigest::Hex(text) => hex::decode(text.trim())
                .map_err(|e| EvaluationError::InvalidDigest(format!("'{}': {}", text, e))),
        }
    }
}

impl From<&str> for ExpectedDigest {
    fn from(hex: &str) -> Self {
        ExpectedDigest::Hex(hex.to_string())
    }
}

impl From<String> for ExpectedDigest {
    fn from(hex: String) -> Self {
        ExpectedDigest::Hex(hex)
    }
}

impl From<&[u8]> for ExpectedDigest {
    fn from(bytes: &[u8]) -> Self {
        ExpectedDigest::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for ExpectedDigest {
    fn from(bytes: Vec<u8>) -> Self {
        ExpectedDigest::Bytes(bytes)
    }
}

impl<const N: usize> From<[u8; N]> for ExpectedDigest {
    fn from(bytes: [u8; N]) -> Self {
        ExpectedDigest::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for ExpectedDigest {
    fn from(bytes: &[u8; N]) -> Self {
        ExpectedDigest::Bytes(bytes.to_vec())
    }
}
