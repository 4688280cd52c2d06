use crate::digest::Digest;

/// Fill color of the painted cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Take the first three digest bytes as red, green and blue.
    pub fn from_digest(digest: &Digest) -> Self {
        let [r, g, b, ..] = digest.0;
        Self { r, g, b }
    }

    /// Opaque RGBA bytes for this color.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}
