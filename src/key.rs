// Copyright 2024 RISC Zero, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::env;

use alloy_primitives::Address;
use k256::ecdsa::SigningKey;
use log::debug;
use thiserror::Error as ThisError;

use crate::signature::public_key_to_address;

/// Environment variable naming the validator's hex-encoded private key.
pub const PRIVATE_KEY_ENV: &str = "ETHEREUM_PRIVATE_KEY";

/// Errors raised while loading the validator key. All of these are fatal at
/// startup: the embedding relayer exits with the diagnostic rather than run
/// without a signing key.
#[derive(Debug, ThisError)]
pub enum KeyError {
    #[error("ETHEREUM_PRIVATE_KEY is not set or empty")]
    Missing,
    #[error("private key is not valid hex")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("private key must decode to 32 bytes, got {0}")]
    InvalidLength(usize),
    #[error("private key scalar is zero or not below the curve order")]
    OutOfRange,
}

/// Loads the validator's private key from the environment.
///
/// A `.env` file in the working directory is folded into the environment
/// first; variables that are already set take precedence, and a missing file
/// is tolerated. The key itself comes from [`PRIVATE_KEY_ENV`].
pub fn load_private_key() -> Result<SigningKey, KeyError> {
    if let Ok(path) = dotenv::dotenv() {
        debug!("loaded environment from {}", path.display());
    }
    let raw = env::var(PRIVATE_KEY_ENV).unwrap_or_default();
    parse_private_key(&raw)
}

/// Parses a hex-encoded secp256k1 private key, with or without a `0x`
/// prefix. Surrounding whitespace is ignored.
pub fn parse_private_key(raw: &str) -> Result<SigningKey, KeyError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(KeyError::Missing);
    }
    let bytes = hex::decode(raw.strip_prefix("0x").unwrap_or(raw))?;
    if bytes.len() != 32 {
        return Err(KeyError::InvalidLength(bytes.len()));
    }
    // from_slice rejects exactly the scalars outside [1, n-1]
    SigningKey::from_slice(&bytes).map_err(|_| KeyError::OutOfRange)
}

/// Loads the private key and derives the validator's address from it.
pub fn load_sender_address() -> Result<Address, KeyError> {
    let key = load_private_key()?;
    let address = public_key_to_address(key.verifying_key());
    debug!("validator address {address}");
    Ok(address)
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;

    const KEY_HEX: &str = "0000000000000000000000000000000000000000000000000000000000000001";
    // order of the secp256k1 group
    const CURVE_ORDER: &str = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";

    #[test]
    fn parses_with_and_without_prefix() {
        let bare = parse_private_key(KEY_HEX).unwrap();
        let prefixed = parse_private_key(&format!("0x{KEY_HEX}")).unwrap();
        assert_eq!(bare.to_bytes(), prefixed.to_bytes());

        let padded = parse_private_key(&format!("  {KEY_HEX}\n")).unwrap();
        assert_eq!(bare.to_bytes(), padded.to_bytes());
    }

    #[test]
    fn derives_known_address() {
        let key = parse_private_key(KEY_HEX).unwrap();
        assert_eq!(
            public_key_to_address(key.verifying_key()),
            address!("7E5F4552091A69125d5DfCb7b8C2659029395Bdf")
        );
    }

    #[test]
    fn rejects_blank_key() {
        assert!(matches!(parse_private_key(""), Err(KeyError::Missing)));
        assert!(matches!(parse_private_key(" \t\n"), Err(KeyError::Missing)));
    }

    #[test]
    fn rejects_malformed_key() {
        let not_hex = "zz".repeat(32);
        assert!(matches!(
            parse_private_key(&not_hex),
            Err(KeyError::InvalidHex(_))
        ));
        assert!(matches!(
            parse_private_key("abcd"),
            Err(KeyError::InvalidLength(2))
        ));
    }

    #[test]
    fn rejects_out_of_range_scalar() {
        let zero = "00".repeat(32);
        assert!(matches!(
            parse_private_key(&zero),
            Err(KeyError::OutOfRange)
        ));
        assert!(matches!(
            parse_private_key(CURVE_ORDER),
            Err(KeyError::OutOfRange)
        ));
    }

    #[test]
    fn loads_from_environment() {
        env::set_var(PRIVATE_KEY_ENV, format!("0x{KEY_HEX}"));
        assert_eq!(
            load_sender_address().unwrap(),
            address!("7E5F4552091A69125d5DfCb7b8C2659029395Bdf")
        );
        env::remove_var(PRIVATE_KEY_ENV);
    }
}
