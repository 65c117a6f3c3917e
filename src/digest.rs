//! Content digests for files and byte streams.
//!
//! Input is streamed through the hash state in bounded chunks, so the size of
//! the file never affects memory use. The result is lowercase hex.

use crate::config::DigestConfig;
use crate::error::{CraftboxError, Result};
use sha2::Digest as _;
use std::fmt;
use std::fs::File;
use std::io::{ErrorKind as IoErrorKind, Read};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Default read chunk size in bytes
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Supported hash algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha512_224,
    Sha512_256,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Blake3,
}

impl DigestAlgorithm {
    pub const ALL: [DigestAlgorithm; 13] = [
        DigestAlgorithm::Md5,
        DigestAlgorithm::Sha1,
        DigestAlgorithm::Sha224,
        DigestAlgorithm::Sha256,
        DigestAlgorithm::Sha384,
        DigestAlgorithm::Sha512,
        DigestAlgorithm::Sha512_224,
        DigestAlgorithm::Sha512_256,
        DigestAlgorithm::Sha3_224,
        DigestAlgorithm::Sha3_256,
        DigestAlgorithm::Sha3_384,
        DigestAlgorithm::Sha3_512,
        DigestAlgorithm::Blake3,
    ];

    /// Canonical algorithm name
    pub fn name(self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "MD5",
            DigestAlgorithm::Sha1 => "SHA-1",
            DigestAlgorithm::Sha224 => "SHA-224",
            DigestAlgorithm::Sha256 => "SHA-256",
            DigestAlgorithm::Sha384 => "SHA-384",
            DigestAlgorithm::Sha512 => "SHA-512",
            DigestAlgorithm::Sha512_224 => "SHA-512/224",
            DigestAlgorithm::Sha512_256 => "SHA-512/256",
            DigestAlgorithm::Sha3_224 => "SHA3-224",
            DigestAlgorithm::Sha3_256 => "SHA3-256",
            DigestAlgorithm::Sha3_384 => "SHA3-384",
            DigestAlgorithm::Sha3_512 => "SHA3-512",
            DigestAlgorithm::Blake3 => "BLAKE3",
        }
    }

    /// Digest length in bytes; the hex form is twice as long
    pub fn output_len(self) -> usize {
        match self {
            DigestAlgorithm::Md5 => 16,
            DigestAlgorithm::Sha1 => 20,
            DigestAlgorithm::Sha224 | DigestAlgorithm::Sha512_224 | DigestAlgorithm::Sha3_224 => 28,
            DigestAlgorithm::Sha256
            | DigestAlgorithm::Sha512_256
            | DigestAlgorithm::Sha3_256
            | DigestAlgorithm::Blake3 => 32,
            DigestAlgorithm::Sha384 | DigestAlgorithm::Sha3_384 => 48,
            DigestAlgorithm::Sha512 | DigestAlgorithm::Sha3_512 => 64,
        }
    }

    fn hasher(self) -> Hasher {
        match self {
            DigestAlgorithm::Md5 => Hasher::Md5(md5::Context::new()),
            DigestAlgorithm::Sha1 => Hasher::Sha1(sha1::Sha1::new()),
            DigestAlgorithm::Sha224 => Hasher::Sha224(sha2::Sha224::new()),
            DigestAlgorithm::Sha256 => Hasher::Sha256(sha2::Sha256::new()),
            DigestAlgorithm::Sha384 => Hasher::Sha384(sha2::Sha384::new()),
            DigestAlgorithm::Sha512 => Hasher::Sha512(sha2::Sha512::new()),
            DigestAlgorithm::Sha512_224 => Hasher::Sha512_224(sha2::Sha512_224::new()),
            DigestAlgorithm::Sha512_256 => Hasher::Sha512_256(sha2::Sha512_256::new()),
            DigestAlgorithm::Sha3_224 => Hasher::Sha3_224(sha3::Sha3_224::new()),
            DigestAlgorithm::Sha3_256 => Hasher::Sha3_256(sha3::Sha3_256::new()),
            DigestAlgorithm::Sha3_384 => Hasher::Sha3_384(sha3::Sha3_384::new()),
            DigestAlgorithm::Sha3_512 => Hasher::Sha3_512(sha3::Sha3_512::new()),
            DigestAlgorithm::Blake3 => Hasher::Blake3(Box::new(blake3::Hasher::new())),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = CraftboxError;

    /// Case-insensitive; the dash in SHA names is optional (`sha256`, `SHA-256`,
    /// `sha3-256`). Plain `SHA` means SHA-1.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "");
        let algorithm = match normalized.as_str() {
            "MD5" => DigestAlgorithm::Md5,
            "SHA" | "SHA1" => DigestAlgorithm::Sha1,
            "SHA224" => DigestAlgorithm::Sha224,
            "SHA256" => DigestAlgorithm::Sha256,
            "SHA384" => DigestAlgorithm::Sha384,
            "SHA512" => DigestAlgorithm::Sha512,
            "SHA512/224" => DigestAlgorithm::Sha512_224,
            "SHA512/256" => DigestAlgorithm::Sha512_256,
            "SHA3224" => DigestAlgorithm::Sha3_224,
            "SHA3256" => DigestAlgorithm::Sha3_256,
            "SHA3384" => DigestAlgorithm::Sha3_384,
            "SHA3512" => DigestAlgorithm::Sha3_512,
            "BLAKE3" => DigestAlgorithm::Blake3,
            _ => return Err(CraftboxError::UnsupportedAlgorithm(s.to_string())),
        };
        Ok(algorithm)
    }
}

/// Incremental hash state for one digest computation
enum Hasher {
    Md5(md5::Context),
    Sha1(sha1::Sha1),
    Sha224(sha2::Sha224),
    Sha256(sha2::Sha256),
    Sha384(sha2::Sha384),
    Sha512(sha2::Sha512),
    Sha512_224(sha2::Sha512_224),
    Sha512_256(sha2::Sha512_256),
    Sha3_224(sha3::Sha3_224),
    Sha3_256(sha3::Sha3_256),
    Sha3_384(sha3::Sha3_384),
    Sha3_512(sha3::Sha3_512),
    Blake3(Box<blake3::Hasher>),
}

impl Hasher {
    fn update(&mut self, data: &[u8]) {
        match self {
            Hasher::Md5(ctx) => ctx.consume(data),
            Hasher::Sha1(h) => h.update(data),
            Hasher::Sha224(h) => h.update(data),
            Hasher::Sha256(h) => h.update(data),
            Hasher::Sha384(h) => h.update(data),
            Hasher::Sha512(h) => h.update(data),
            Hasher::Sha512_224(h) => h.update(data),
            Hasher::Sha512_256(h) => h.update(data),
            Hasher::Sha3_224(h) => h.update(data),
            Hasher::Sha3_256(h) => h.update(data),
            Hasher::Sha3_384(h) => h.update(data),
            Hasher::Sha3_512(h) => h.update(data),
            Hasher::Blake3(h) => {
                h.update(data);
            }
        }
    }

    fn finalize_hex(self) -> String {
        match self {
            Hasher::Md5(ctx) => hex::encode(ctx.compute().0),
            Hasher::Sha1(h) => hex::encode(h.finalize()),
            Hasher::Sha224(h) => hex::encode(h.finalize()),
            Hasher::Sha256(h) => hex::encode(h.finalize()),
            Hasher::Sha384(h) => hex::encode(h.finalize()),
            Hasher::Sha512(h) => hex::encode(h.finalize()),
            Hasher::Sha512_224(h) => hex::encode(h.finalize()),
            Hasher::Sha512_256(h) => hex::encode(h.finalize()),
            Hasher::Sha3_224(h) => hex::encode(h.finalize()),
            Hasher::Sha3_256(h) => hex::encode(h.finalize()),
            Hasher::Sha3_384(h) => hex::encode(h.finalize()),
            Hasher::Sha3_512(h) => hex::encode(h.finalize()),
            Hasher::Blake3(h) => hex::encode(h.finalize().as_bytes()),
        }
    }
}

/// Streams content through a [`DigestAlgorithm`] in fixed-size chunks
#[derive(Debug, Clone)]
pub struct Digester {
    algorithm: DigestAlgorithm,
    buffer_size: usize,
}

impl Digester {
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        Self {
            algorithm,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Use a different read chunk size. Zero is rejected.
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Result<Self> {
        if buffer_size == 0 {
            return Err(CraftboxError::InvalidArgument(
                "digest buffer size must be greater than zero".to_string(),
            ));
        }
        self.buffer_size = buffer_size;
        Ok(self)
    }

    pub fn from_config(config: &DigestConfig) -> Result<Self> {
        let algorithm = config.algorithm.parse::<DigestAlgorithm>()?;
        Self::new(algorithm).with_buffer_size(config.buffer_size)
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Digest everything `reader` yields until EOF.
    pub fn digest_reader<R: Read>(&self, mut reader: R) -> std::io::Result<String> {
        let mut hasher = self.algorithm.hasher();
        let mut buffer = vec![0u8; self.buffer_size];
        loop {
            match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => hasher.update(&buffer[..n]),
                Err(e) if e.kind() == IoErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(hasher.finalize_hex())
    }

    /// Digest the full content of the file at `path`.
    pub fn digest_file(&self, path: &Path) -> Result<String> {
        debug!(path = %path.display(), algorithm = %self.algorithm, "Computing file digest");
        let file = File::open(path).map_err(|e| CraftboxError::io(path, e))?;
        let digest = self
            .digest_reader(file)
            .map_err(|e| CraftboxError::io(path, e))?;
        debug!(path = %path.display(), digest = %digest, "File digest computed");
        Ok(digest)
    }
}

/// Hex digest of the file at `path` under the algorithm named `algorithm`.
///
/// The name is resolved before the file is opened, so an unknown algorithm
/// never touches the filesystem.
pub fn calculate_digest(path: impl AsRef<Path>, algorithm: &str) -> Result<String> {
    let algorithm = algorithm.parse::<DigestAlgorithm>()?;
    Digester::new(algorithm).digest_file(path.as_ref())
}

/// Hex digest of an in-memory byte slice.
pub fn digest_bytes(bytes: &[u8], algorithm: DigestAlgorithm) -> String {
    let mut hasher = algorithm.hasher();
    hasher.update(bytes);
    hasher.finalize_hex()
}
