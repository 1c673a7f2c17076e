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

use alloy_primitives::{Address, B256, U256};
use k256::{
    ecdsa::{RecoveryId, Signature as EcdsaSignature, SigningKey, VerifyingKey},
    elliptic_curve::sec1::ToEncodedPoint,
};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

use crate::keccak::keccak;

/// Byte length of the wire-format signature: r (32) || s (32) || v (1).
pub const SIGNATURE_LENGTH: usize = 65;

/// Errors raised by the curve operations. Reported to the caller, never
/// panicked.
#[derive(Debug, ThisError)]
pub enum SignError {
    #[error("secp256k1 operation failed: {0}")]
    Signature(#[from] k256::ecdsa::Error),
}

/// A recoverable secp256k1 signature over a prophecy-claim digest.
///
/// `v` is the low recovery id (0 or 1); consumers expecting the historical
/// 27/28 encoding add 27 themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSignature {
    pub r: U256,
    pub s: U256,
    pub v: u64,
}

impl ClaimSignature {
    /// Serializes the signature into its r || s || v wire layout.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut out = [0u8; SIGNATURE_LENGTH];
        out[..32].copy_from_slice(&self.r.to_be_bytes::<32>());
        out[32..64].copy_from_slice(&self.s.to_be_bytes::<32>());
        out[64] = self.v as u8;
        out
    }
}

/// Signs a prepared 32-byte digest with the validator key.
///
/// The nonce is derived per RFC 6979, so the output for a given (key,
/// digest) pair is byte-identical across runs. The signature is low-s
/// normalized, flipping the recovery id whenever normalization negates s.
pub fn sign_claim(digest: B256, key: &SigningKey) -> Result<ClaimSignature, SignError> {
    let (signature, recovery_id) = key.sign_prehash_recoverable(digest.as_slice())?;
    let (signature, recovery_id) = match signature.normalize_s() {
        Some(normalized) => (
            normalized,
            RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced()),
        ),
        None => (signature, recovery_id),
    };

    let compact = signature.to_bytes();
    Ok(ClaimSignature {
        r: U256::try_from_be_slice(&compact[..32]).expect("r is 32 bytes"),
        s: U256::try_from_be_slice(&compact[32..]).expect("s is 32 bytes"),
        v: recovery_id.is_y_odd() as u64,
    })
}

/// Recovers the signing address from a claim signature and the digest it
/// covers.
pub fn recover_signer(digest: B256, signature: &ClaimSignature) -> Result<Address, SignError> {
    let sig = EcdsaSignature::from_scalars(
        signature.r.to_be_bytes::<32>(),
        signature.s.to_be_bytes::<32>(),
    )?;
    let key = VerifyingKey::recover_from_prehash(
        digest.as_slice(),
        &sig,
        RecoveryId::new(signature.v != 0, false),
    )?;
    Ok(public_key_to_address(&key))
}

/// Converts a public key into an ethereum address by hashing the
/// uncompressed SEC1 encoding with keccak-256.
pub fn public_key_to_address(key: &VerifyingKey) -> Address {
    // strip the SEC1 uncompressed tag byte before hashing
    let point = key.to_encoded_point(false);
    debug_assert_eq!(point.as_bytes()[0], 0x04);
    let hash = keccak(&point.as_bytes()[1..]);
    Address::from_slice(&hash[12..])
}
