/// 64-bit FNV-1a, used for cheap stable fingerprints of item lists.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    /// Hash a string followed by a NUL separator so `["ab", "c"]` and `["a", "bc"]` differ.
    pub(crate) fn write_str(&mut self, s: &str) {
        self.write_bytes(s.as_bytes());
        self.write_u8(0);
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Order-sensitive fingerprint of a sequence of ids.
pub(crate) fn fingerprint_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> u64 {
    let mut h = Fnv1a64::new();
    let mut n = 0u64;
    for id in ids {
        h.write_str(id);
        n += 1;
    }
    h.write_bytes(&n.to_le_bytes());
    h.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
