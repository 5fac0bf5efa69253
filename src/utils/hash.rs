// Stable hashing for identifiers and seeds derived from catalog IDs

use xxhash_rust::xxh3::Xxh3;

// Separates parts so ("ab", "c") and ("a", "bc") hash differently
const PART_SEPARATOR: [u8; 1] = [0x1f];

/// XXH3 hash of the given parts with a fixed seed.
///
/// The value only depends on the input bytes, so it is the same across
/// builds, platforms and compiler versions.
pub fn stable_hash<'a, I>(seed: u64, parts: I) -> u64
where
    I: IntoIterator<Item = &'a str>,
{
    let mut hasher = Xxh3::with_seed(seed);
    for part in parts {
        hasher.update(part.as_bytes());
        hasher.update(&PART_SEPARATOR);
    }
    hasher.digest()
}
