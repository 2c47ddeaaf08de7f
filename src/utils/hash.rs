use xxhash_rust::xxh3::xxh3_128;

/// Hash arbitrary bytes into a 32-character lowercase hex string.
pub fn hash_bytes(data: &[u8]) -> String {
    let hash = xxh3_128(data);
    format!("{:032x}", hash)
}

/// Hash a string; equal strings always produce equal keys.
pub fn hash_str(data: &str) -> String {
    hash_bytes(data.as_bytes())
}
