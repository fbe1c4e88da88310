//! RGB color model: hex parsing/formatting, brightness scaling, and
//! per-channel adjustment.
//!
//! All arithmetic clamps to the 0..=255 channel range; nothing here can
//! produce an out-of-gamut value.

use crate::error::ColorError;

/// One of the three RGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Single-letter label used in the edit bars.
    pub fn label(self) -> &'static str {
        match self {
            Self::Red => "R",
            Self::Green => "G",
            Self::Blue => "B",
        }
    }

    /// Next channel, wrapping B back to R.
    pub fn next(self) -> Channel {
        match self {
            Self::Red => Self::Green,
            Self::Green => Self::Blue,
            Self::Blue => Self::Red,
        }
    }

    /// Previous channel, wrapping R back to B.
    pub fn prev(self) -> Channel {
        match self {
            Self::Red => Self::Blue,
            Self::Green => Self::Red,
            Self::Blue => Self::Green,
        }
    }
}

/// An RGB triple. Canonical text form is six uppercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse exactly six hex digits (case-insensitive, no `#` prefix).
    pub fn parse_hex(input: &str) -> Result<Self, ColorError> {
        let malformed = || ColorError::MalformedHex(input.to_string());
        if input.len() != 6 || !input.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(malformed());
        }
        let r = u8::from_str_radix(&input[0..2], 16).map_err(|_| malformed())?;
        let g = u8::from_str_radix(&input[2..4], 16).map_err(|_| malformed())?;
        let b = u8::from_str_radix(&input[4..6], 16).map_err(|_| malformed())?;
        Ok(Self { r, g, b })
    }

    /// Canonical `RRGGBB` form: uppercase, zero-padded.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Read one channel's value.
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }
}

/// Scale every channel by `factor`, clamping each independently to 0..=255.
///
/// Factor range validation (0.1..=2.0 for brightness) is the caller's
/// responsibility; this function accepts any finite factor.
pub fn scale(color: Color, factor: f32) -> Color {
    let apply = |value: u8| (f32::from(value) * factor).clamp(0.0, 255.0) as u8;
    Color {
        r: apply(color.r),
        g: apply(color.g),
        b: apply(color.b),
    }
}

/// Add `delta` to one channel, saturating at the 0..=255 bounds.
///
/// Saturation is silent: holding an arrow key past the end of the range
/// simply stops moving rather than reporting an error.
pub fn adjust_channel(color: Color, channel: Channel, delta: i32) -> Color {
    let adjusted = |value: u8| i32::from(value).saturating_add(delta).clamp(0, 255) as u8;
    match channel {
        Channel::Red => Color { r: adjusted(color.r), ..color },
        Channel::Green => Color { g: adjusted(color.g), ..color },
        Channel::Blue => Color { b: adjusted(color.b), ..color },
    }
}
