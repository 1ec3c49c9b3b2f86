use crate::evm::general::ProviderError;
use std::str::FromStr;
use web3::{signing::keccak256, types::Address};

/// Parses a raw address string into its canonical form.
///
/// The `0x` prefix is optional. The hex part must be exactly 40 hex
/// characters, and mixed-case input must carry a valid EIP-55 checksum.
/// All-lowercase and all-uppercase input is accepted without a checksum.
pub fn parse_address(raw: &str) -> Result<Address, ProviderError> {
    let hex_part = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw);

    if hex_part.len() != 40 || !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ProviderError::InvalidAddress(raw.to_string()));
    }

    let address = Address::from_str(hex_part)
        .map_err(|_| ProviderError::InvalidAddress(raw.to_string()))?;

    let has_lower = hex_part.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = hex_part.chars().any(|c| c.is_ascii_uppercase());

    if has_lower && has_upper && to_checksum(&address) != format!("0x{hex_part}") {
        return Err(ProviderError::InvalidAddress(raw.to_string()));
    }

    Ok(address)
}

/// EIP-55 mixed-case checksum encoding: a hex character is uppercased iff
/// the corresponding nibble of `keccak256(lowercase_hex_address)` is >= 8.
pub fn to_checksum(address: &Address) -> String {
    let hex_part = format!("{address:x}");
    let hash = keccak256(hex_part.as_bytes());

    let mut checksummed = String::with_capacity(42);
    checksummed.push_str("0x");

    for (i, c) in hex_part.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            hash[i / 2] >> 4
        } else {
            hash[i / 2] & 0x0f
        };

        if nibble >= 8 {
            checksummed.push(c.to_ascii_uppercase());
        } else {
            checksummed.push(c);
        }
    }

    checksummed
}
