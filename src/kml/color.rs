//! KML color values.
//!
//! KML writes colors as `aabbggrr`: alpha first, then the RGB channels in
//! reverse. Callers supply the conventional `rrggbb` string and a separate
//! two-digit alpha; [`Color`]'s `Display` impl performs the reordering.

use std::fmt;

use crate::error::{Error, Result};

/// An RGB color with alpha, held as the caller's hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    rgb: [u8; 6],
    alpha: [u8; 2],
}

impl Color {
    /// Build a color from a `rrggbb` string and an `aa` alpha string.
    ///
    /// Digit case is preserved in the output.
    pub fn new(rgb: &str, alpha: &str) -> Result<Self> {
        Ok(Self {
            rgb: hex_digits(rgb)?,
            alpha: hex_digits(alpha)?,
        })
    }

    /// Fully opaque color (`ff` alpha).
    pub fn opaque(rgb: &str) -> Result<Self> {
        Self::new(rgb, "ff")
    }
}

fn hex_digits<const N: usize>(s: &str) -> Result<[u8; N]> {
    let bytes: [u8; N] = s
        .as_bytes()
        .try_into()
        .map_err(|_| Error::InvalidColor(format!("expected {N} hex digits, got {s:?}")))?;

    if !bytes.iter().all(u8::is_ascii_hexdigit) {
        return Err(Error::InvalidColor(format!("not hexadecimal: {s:?}")));
    }

    Ok(bytes)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r0, r1, g0, g1, b0, b1] = self.rgb;
        let ordered = [self.alpha[0], self.alpha[1], b0, b1, g0, g1, r0, r1];
        // Validated as ASCII hex digits on construction.
        for byte in ordered {
            write!(f, "{}", byte as char)?;
        }
        Ok(())
    }
}
