use md5::{Digest as _, Md5};

/// Length of an MD5 digest in bytes.
pub const DIGEST_LEN: usize = 16;

/// A 128-bit MD5 digest of the input bytes.
///
/// The array type pins the length, so every later stage can rely on
/// exactly 16 bytes being present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Digest(pub [u8; DIGEST_LEN]);

impl Digest {
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex encoding, as printed by `md5sum`.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

/// Hash the raw input bytes.
///
/// Any byte sequence is accepted, including the empty one. The input is not
/// trimmed, case-folded or checked for valid UTF-8.
pub fn digest(input: &[u8]) -> Digest {
    let bytes: [u8; DIGEST_LEN] = Md5::digest(input).into();
    let digest = Digest(bytes);
    log::trace!("md5 of {} input bytes: {}", input.len(), digest.to_hex());
    digest
}
