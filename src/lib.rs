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

//! Validator-side signing for cross-chain prophecy claims.
//!
//! An observed ERC20 or ERC721 transfer is hashed into a canonical digest
//! ([`claim`]), wrapped in the `personal_sign` envelope, and signed with the
//! validator's secp256k1 key ([`key`], [`signature`]). The resulting 65-byte
//! recoverable signature is what the relayer submits alongside the claim.

pub mod claim;
pub mod encode;
pub mod keccak;
pub mod key;
pub mod signature;

pub use alloy_primitives::{Address, B256, I256, U256};
