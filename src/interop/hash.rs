//! Stable hashing for Java package names.
//!
//! Third-party assemblies cannot be trusted to produce unique, stable Java packages, so
//! their types are placed into a pseudo-package derived from a hash of
//! `namespace:assembly`. The same pair must hash to the same package on every build and
//! every machine, which rules out seeded or platform-dependent hashers.
//!
//! # Hash Design
//!
//! [`Crc64`] is CRC-64 with the Jones polynomial, processed LSB-first:
//! - **Polynomial**: `0xAD93D23594C935A9` (`0x95AC9329AC4BC9B5` reflected)
//! - **Initial value**: all bits set
//! - **Finalisation**: the number of bytes hashed is XOR-ed into the register
//! - **Digest**: the register as little-endian bytes, rendered as lowercase hex
//!
//! # Example Usage
//!
//! ```rust
//! use jnitypemap::interop::hash::{crc64_hex, Crc64};
//!
//! let digest = Crc64::new().update(b"Acme.Widgets:MyLib").finalize();
//! assert_eq!(crc64_hex(b"Acme.Widgets:MyLib"), "bdbdd3d6ba7be90b");
//! assert_eq!(digest.len(), 8);
//! ```

use std::fmt::Write as _;

/// Jones polynomial, bit-reflected for LSB-first processing
pub const CRC64_POLY_REFLECTED: u64 = 0x95ac_9329_ac4b_c9b5;

/// Prefix of hashed package names
pub const CRC64_PREFIX: &str = "crc64";

/// Prefix of MD5 hashed package names
pub const MD5_PREFIX: &str = "md5";

const CRC64_TABLE: [u64; 256] = build_table();

const fn build_table() -> [u64; 256] {
    let mut table = [0u64; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u64;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 == 1 {
                (crc >> 1) ^ CRC64_POLY_REFLECTED
            } else {
                crc >> 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Raw table-driven CRC-64 update, without initial value or finalisation
fn crc64_update(mut crc: u64, data: &[u8]) -> u64 {
    for &byte in data {
        crc = CRC64_TABLE[((crc ^ u64::from(byte)) & 0xff) as usize] ^ (crc >> 8);
    }
    crc
}

/// Incremental CRC-64 hasher producing package-name digests
#[derive(Debug, Clone, Copy)]
pub struct Crc64 {
    state: u64,
    length: u64,
}

impl Crc64 {
    /// Create a new hasher
    #[must_use]
    pub fn new() -> Self {
        Crc64 {
            state: u64::MAX,
            length: 0,
        }
    }

    /// Mix bytes into the hash state
    ///
    /// ## Arguments
    /// * `data` - The bytes to hash
    #[must_use]
    pub fn update(mut self, data: &[u8]) -> Self {
        self.state = crc64_update(self.state, data);
        self.length = self.length.wrapping_add(data.len() as u64);
        self
    }

    /// Finalize the hash and return the 8 digest bytes
    #[must_use]
    pub fn finalize(self) -> [u8; 8] {
        (self.state ^ self.length).to_le_bytes()
    }
}

impl Default for Crc64 {
    fn default() -> Self {
        Self::new()
    }
}

/// Render bytes as lowercase hex, two characters per byte
#[must_use]
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// CRC-64 digest of `data`
#[must_use]
pub fn crc64(data: &[u8]) -> [u8; 8] {
    Crc64::new().update(data).finalize()
}

/// CRC-64 digest of `data` as 16 lowercase hex characters
#[must_use]
pub fn crc64_hex(data: &[u8]) -> String {
    to_hex(&crc64(data))
}

/// MD5 digest of `data` as 32 lowercase hex characters
#[must_use]
pub fn md5_hex(data: &[u8]) -> String {
    use md5::{Digest, Md5};

    to_hex(&Md5::digest(data))
}
