use crate::error::{MenuError, MenuResult};

/// Straight (non-premultiplied) RGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` color string (leading `#` optional).
    pub fn from_hex(s: &str) -> MenuResult<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(MenuError::validation(format!(
                "malformed hex color '{s}' (expected #rrggbb)"
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| MenuError::validation(format!("malformed hex color '{s}': {e}")))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Per-channel linear interpolation toward `other`, truncating to integers.
    ///
    /// Truncation (not rounding) is load-bearing: the gradient rows of the
    /// generated assets are defined by this exact formula.
    pub fn lerp(self, other: Rgb8, ratio: f64) -> Rgb8 {
        let mix =
            |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * ratio) as u8;
        Rgb8 {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}
