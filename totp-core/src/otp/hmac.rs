//! HMAC (RFC 2104) over the SHA family
//!
//! One generic routine implements the two-pass construction for any
//! hash primitive exposing its block size; [`HashAlgorithm`] picks the
//! primitive. Output must match any conformant HMAC byte for byte,
//! since third-party verifiers compute the same thing.
//!
//! Reference: https://www.ietf.org/rfc/rfc2104.txt
//! Inner pad (ipad): 0x36
//! Outer pad (opad): 0x5C

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::digest::core_api::BlockSizeUser;
use sha2::digest::Digest;
use sha2::{Sha256, Sha512};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5C;

/// Hash primitive used for the keyed hash
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HashAlgorithm {
    #[default]
    Sha1,
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    /// All supported algorithms, in selector order
    pub const ALL: [HashAlgorithm; 3] = [
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha512,
    ];

    /// Digest length in bytes
    pub fn digest_len(self) -> usize {
        match self {
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha512 => 64,
        }
    }

    /// Canonical upper-case name
    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "SHA1",
            HashAlgorithm::Sha256 => "SHA256",
            HashAlgorithm::Sha512 => "SHA512",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "").as_str() {
            "SHA1" => Ok(HashAlgorithm::Sha1),
            "SHA256" => Ok(HashAlgorithm::Sha256),
            "SHA512" => Ok(HashAlgorithm::Sha512),
            _ => Err(format!(
                "unknown hash algorithm '{}' (expected SHA1, SHA256 or SHA512)",
                s
            )),
        }
    }
}

/// Compute HMAC with the selected hash primitive
pub fn hmac(algorithm: HashAlgorithm, key: &[u8], message: &[u8]) -> Vec<u8> {
    match algorithm {
        HashAlgorithm::Sha1 => hmac_with::<Sha1>(key, message),
        HashAlgorithm::Sha256 => hmac_with::<Sha256>(key, message),
        HashAlgorithm::Sha512 => hmac_with::<Sha512>(key, message),
    }
}

/// RFC 2104 construction, generic over the hash
///
/// 1. Hash key if longer than block size
/// 2. Pad key to block size with zeros
/// 3. XOR key with ipad and opad
/// 4. Compute inner and outer hashes
fn hmac_with<D: Digest + BlockSizeUser>(key: &[u8], message: &[u8]) -> Vec<u8> {
    let block_size = D::block_size();

    let mut key_block = vec![0u8; block_size];
    if key.len() > block_size {
        let hashed = D::digest(key);
        key_block[..hashed.len()].copy_from_slice(&hashed);
    } else {
        key_block[..key.len()].copy_from_slice(key);
    }

    let ipad_key: Vec<u8> = key_block.iter().map(|b| b ^ IPAD).collect();
    let opad_key: Vec<u8> = key_block.iter().map(|b| b ^ OPAD).collect();

    let mut inner = D::new();
    inner.update(&ipad_key);
    inner.update(message);
    let inner_hash = inner.finalize();

    let mut outer = D::new();
    outer.update(&opad_key);
    outer.update(&inner_hash);
    outer.finalize().to_vec()
}
