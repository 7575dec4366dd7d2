use crate::types::identifiers::{DayKey, Seed};

/// Namespace prepended to every day key before hashing.
pub const DEFAULT_SEED_NAMESPACE: &str = "quote-board:";

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// 32-bit FNV-1a over raw bytes.
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(*byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Seed for `day_key` under the default `quote-board:` namespace.
pub fn seed_from_key(day_key: &DayKey) -> Seed {
    seed_from_namespaced(DEFAULT_SEED_NAMESPACE, day_key)
}

pub fn seed_from_namespaced(namespace: &str, day_key: &DayKey) -> Seed {
    let input = format!("{namespace}{}", day_key.as_str());
    Seed::new(fnv1a_32(input.as_bytes()))
}
