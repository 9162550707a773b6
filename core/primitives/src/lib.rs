// chainchat-core/core/primitives/src/lib.rs

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Native token symbol
pub const TOKEN_SYMBOL: &str = "CCT";

/// Native token name
pub const TOKEN_NAME: &str = "Chainchat Token";

/// Smallest-unit decimals (18, Ethereum-compatible)
pub const DECIMALS: u32 = 18;

/// Account address (20 bytes, similar to Ethereum)
#[derive(
    Debug, Clone, Copy, Default, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize,
)]
pub struct Address(pub [u8; 20]);

impl Address {
    pub fn zero() -> Self {
        Address([0u8; 20])
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, AddressError> {
        if bytes.len() != 20 {
            return Err(AddressError::InvalidLength(bytes.len()));
        }
        let mut addr = [0u8; 20];
        addr.copy_from_slice(bytes);
        Ok(Address(addr))
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl std::str::FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped)?;
        Self::from_slice(&bytes)
    }
}

#[derive(Error, Debug)]
pub enum AddressError {
    #[error("Invalid address length: {0} bytes, expected 20")]
    InvalidLength(usize),

    #[error("Invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Convert CCT amount to wei (smallest unit)
pub fn cct_to_wei(cct: u64) -> U256 {
    U256::from(cct) * U256::from(10).pow(U256::from(DECIMALS))
}

/// Convert wei to whole CCT (truncating)
pub fn wei_to_cct(wei: U256) -> u64 {
    (wei / U256::from(10).pow(U256::from(DECIMALS))).as_u64()
}
