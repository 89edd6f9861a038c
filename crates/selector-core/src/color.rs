use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::SelectorError;

/// sRGB color with straight alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const TRANSPARENT: Color = Color(0, 0, 0, 0);
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);

    /// Lenient parse used for built-in palettes: malformed input yields black.
    pub fn from_hex(hex: &str) -> Self {
        Self::try_from_hex(hex).unwrap_or_else(|e| {
            log::warn!("{e}, falling back to black");
            Color::BLACK
        })
    }

    /// Strict parse of `#RRGGBB` / `#RRGGBBAA` (leading `#` optional).
    pub fn try_from_hex(hex: &str) -> Result<Self, SelectorError> {
        let s = hex.trim().trim_start_matches('#');
        let invalid = || SelectorError::InvalidColor(hex.to_string());
        if !(s.len() == 6 || s.len() == 8) || !s.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).map_err(|_| invalid());
        let a = if s.len() == 8 { channel(6)? } else { 255 };
        Ok(Color(channel(0)?, channel(2)?, channel(4)?, a))
    }

    pub fn to_hex(self) -> String {
        if self.3 == 255 {
            format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.0, self.1, self.2, self.3)
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::try_from_hex(&s).map_err(de::Error::custom)
    }
}
