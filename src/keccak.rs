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

use alloy_primitives::{b256, B256};
use sha3::{Digest, Keccak256};

/// Keccak hash of an empty slice.
pub const KECCAK_EMPTY: B256 =
    b256!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470");

/// Computes the Keccak-256 hash.
///
/// This is the original Keccak padding rule as used by the EVM, not NIST
/// SHA3-256.
#[inline]
pub fn keccak(data: impl AsRef<[u8]>) -> B256 {
    B256::from_slice(&Keccak256::digest(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert_eq!(keccak([]), KECCAK_EMPTY);
    }

    #[test]
    fn single_byte() {
        assert_eq!(
            keccak([0x01]),
            b256!("5fe7f977e71dba2ea1a68e21057beebb9be2ac30c6410aa38d4f3fbe41dcffd2")
        );
    }
}
