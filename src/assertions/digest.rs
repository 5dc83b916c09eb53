use super::PathAssert;
use crate::digest::{self, AlgorithmSpec, ExpectedDigest};
use crate::error::CheckError;

impl PathAssert {
    /// The digest of the file content under `algorithm` equals `expected`.
    ///
    /// `algorithm` is a [`DigestAlgorithm`](crate::DigestAlgorithm) or a name such as
    /// `"SHA-256"`. `expected` is either raw bytes or a hex string (any case). An
    /// unknown algorithm or a malformed hex string is an evaluation error, not a
    /// failure.
    pub fn has_digest<A, D>(&self, algorithm: A, expected: D) -> Result<&Self, CheckError>
    where
        A: AlgorithmSpec,
        D: Into<ExpectedDigest>,
    {
        let algorithm = algorithm.resolve();
        let expected = expected.into();
        self.check("has_digest", || {
            let algorithm = algorithm?;
            let expected = expected.to_bytes()?;
            self.require_regular_file()?;
            let actual =
                digest::digest_file(&self.subject, algorithm, self.config.read_buffer_size)?;
            self.ensure(
                actual == expected,
                format!("have {} digest {}", algorithm, hex::encode(&expected)),
                || format!("its {} digest is {}", algorithm, hex::encode(&actual)),
            )
        })
    }
}
