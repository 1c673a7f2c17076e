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
use serde::{Deserialize, Serialize};

use crate::encode::{digest, EncodeError, Value};

/// Prefix mirroring the `eth_sign` envelope. The trailing "32" is the byte
/// length of the wrapped digest and must appear literally.
pub const ETH_SIGNED_MESSAGE_PREFIX: &str = "\x19Ethereum Signed Message:\n32";

/// An observed ERC20 transfer, to be attested as a prophecy claim.
///
/// Field order matches the tuple the destination contract hashes during
/// verification; it is part of the wire contract and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Erc20ProphecyClaim {
    pub prophecy_id: U256,
    /// Name of the source chain the transfer was observed on.
    pub chain_name: String,
    pub claim_type: u8,
    /// Source-chain sender of the transfer.
    pub sender: Address,
    /// Recipient on the destination chain.
    pub recipient: Address,
    /// Address of the validator attesting the claim.
    pub validator: Address,
    /// Token contract the transfer touched.
    pub token: Address,
    pub symbol: String,
    pub amount: U256,
    /// Source-chain transaction hash, as a hex string.
    pub tx_hash: String,
}

/// An observed ERC721 transfer, to be attested as a prophecy claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Erc721ProphecyClaim {
    pub prophecy_id: U256,
    pub chain_name: String,
    pub claim_type: u8,
    pub sender: Address,
    pub recipient: Address,
    pub validator: Address,
    pub token: Address,
    pub symbol: String,
    pub token_id: U256,
    pub token_uri: String,
    pub tx_hash: String,
}

/// Computes the canonical digest of an ERC20 prophecy claim.
///
/// Addresses enter the hash as their EIP-55 checksummed hex strings,
/// including the `0x` prefix; the checksum casing is significant to the
/// digest.
pub fn encode_erc20_claim(event: &Erc20ProphecyClaim) -> Result<B256, EncodeError> {
    let sender = event.sender.to_checksum(None);
    let recipient = event.recipient.to_checksum(None);
    let validator = event.validator.to_checksum(None);
    let token = event.token.to_checksum(None);

    Ok(digest(&[
        Value::int256(event.prophecy_id)?,
        Value::Str(&event.chain_name),
        Value::Uint8(event.claim_type),
        Value::Str(&sender),
        Value::Str(&recipient),
        Value::Str(&validator),
        Value::Str(&token),
        Value::Str(&event.symbol),
        Value::int256(event.amount)?,
        Value::Str(&event.tx_hash),
    ]))
}

/// Computes the canonical digest of an ERC721 prophecy claim.
pub fn encode_erc721_claim(event: &Erc721ProphecyClaim) -> Result<B256, EncodeError> {
    let sender = event.sender.to_checksum(None);
    let recipient = event.recipient.to_checksum(None);
    let validator = event.validator.to_checksum(None);
    let token = event.token.to_checksum(None);

    Ok(digest(&[
        Value::int256(event.prophecy_id)?,
        Value::Str(&event.chain_name),
        Value::Uint8(event.claim_type),
        Value::Str(&sender),
        Value::Str(&recipient),
        Value::Str(&validator),
        Value::Str(&token),
        Value::Str(&event.symbol),
        Value::int256(event.token_id)?,
        Value::Str(&event.token_uri),
        Value::Str(&event.tx_hash),
    ]))
}

/// Wraps a claim digest in the `personal_sign` envelope, binding signatures
/// to the same `ecrecover` path the destination contract verifies against.
pub fn personal_envelope(inner: B256) -> B256 {
    digest(&[
        Value::Str(ETH_SIGNED_MESSAGE_PREFIX),
        Value::Bytes(inner.as_slice()),
    ])
}
