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

use alloy_primitives::{B256, I256, U256};
use thiserror::Error as ThisError;

use crate::keccak::keccak;

/// Errors produced while packing values.
#[derive(Debug, ThisError)]
pub enum EncodeError {
    /// The unsigned input has no signed 256-bit representation.
    #[error("integer does not fit int256: {0}")]
    IntOutOfRange(U256),
}

/// A single value of the tightly-packed encoding.
///
/// The packed form carries no length prefixes and no alignment padding,
/// matching the on-chain `abi.encodePacked` semantics. The concatenation is
/// not injective across schemas; it is only unambiguous because the claim
/// schema is fixed and known to the verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    /// A single byte.
    Uint8(u8),
    /// Exactly 32 bytes, big-endian, two's complement.
    Int256(I256),
    /// The UTF-8 bytes of the string, unprefixed and unpadded.
    Str(&'a str),
    /// Raw bytes, verbatim.
    Bytes(&'a [u8]),
}

impl Value<'_> {
    /// Narrows an unsigned 256-bit integer to a packed int256.
    ///
    /// Values of 2^255 and above have no int256 representation and are
    /// rejected.
    pub fn int256(value: U256) -> Result<Self, EncodeError> {
        if value.bit(255) {
            return Err(EncodeError::IntOutOfRange(value));
        }
        Ok(Value::Int256(I256::from_raw(value)))
    }

    fn encode_into(&self, buf: &mut Vec<u8>) {
        match self {
            Value::Uint8(byte) => buf.push(*byte),
            Value::Int256(int) => buf.extend_from_slice(&int.to_be_bytes::<32>()),
            Value::Str(text) => buf.extend_from_slice(text.as_bytes()),
            Value::Bytes(bytes) => buf.extend_from_slice(bytes),
        }
    }
}

/// Concatenates the packed encodings of `values` in input order.
pub fn encode_packed(values: &[Value<'_>]) -> Vec<u8> {
    let mut buf = Vec::new();
    for value in values {
        value.encode_into(&mut buf);
    }
    buf
}

/// Computes the Keccak-256 digest of the packed encoding of `values`.
#[inline]
pub fn digest(values: &[Value<'_>]) -> B256 {
    keccak(encode_packed(values))
}

#[cfg(test)]
mod tests {
    use alloy_primitives::b256;

    use super::*;
    use crate::keccak::KECCAK_EMPTY;

    #[test]
    fn uint8_digest() {
        assert_eq!(
            digest(&[Value::Uint8(1)]),
            b256!("5fe7f977e71dba2ea1a68e21057beebb9be2ac30c6410aa38d4f3fbe41dcffd2")
        );
    }

    #[test]
    fn empty_string_contributes_nothing() {
        assert_eq!(digest(&[Value::Str("")]), KECCAK_EMPTY);
        assert_eq!(digest(&[Value::Str(""), Value::Bytes(&[])]), digest(&[]));
    }

    #[test]
    fn values_pack_in_input_order() {
        let packed = encode_packed(&[
            Value::Uint8(0xab),
            Value::Str("hi"),
            Value::Bytes(&[0x01, 0x02]),
        ]);
        assert_eq!(packed, vec![0xab, b'h', b'i', 0x01, 0x02]);
    }

    #[test]
    fn int256_is_two_complement() {
        assert_eq!(
            encode_packed(&[Value::Int256(I256::MINUS_ONE)]),
            vec![0xff; 32]
        );
        let zero = Value::int256(U256::ZERO).unwrap();
        assert_eq!(encode_packed(&[zero]), vec![0x00; 32]);
        let thousand = Value::int256(U256::from(1000u64)).unwrap();
        let mut expected = vec![0u8; 32];
        expected[30] = 0x03;
        expected[31] = 0xe8;
        assert_eq!(encode_packed(&[thousand]), expected);
    }

    #[test]
    fn int256_range_boundary() {
        // 2^255 - 1 is the largest representable int256
        let max = U256::MAX >> 1;
        assert!(Value::int256(max).is_ok());

        let over = U256::from(1u64) << 255;
        assert!(matches!(
            Value::int256(over),
            Err(EncodeError::IntOutOfRange(_))
        ));
    }
}
