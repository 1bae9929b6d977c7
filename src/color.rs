//! Embed color encoding.
//!
//! The platform stores embed colors as a single 24-bit integer with red in
//! the highest byte and blue in the lowest. This module packs RGB triples into
//! that format and provides a set of named colors.

/// Black (`#000000`).
pub const BLACK: u32 = 0;
/// Blue (`#0000ff`).
pub const BLUE: u32 = 255;
/// Green (`#00ff00`).
pub const GREEN: u32 = 65_280;
/// Red (`#ff0000`).
pub const RED: u32 = 16_711_680;
/// Magenta (`#ff00ff`).
pub const MAGENTA: u32 = 16_711_935;
/// Brown (`#ff5500`).
pub const BROWN: u32 = 16_733_440;
/// Light gray (`#aaaaaa`).
pub const LIGHT_GRAY: u32 = 11_184_810;
/// Dark gray (`#555555`).
pub const DARK_GRAY: u32 = 5_592_405;
/// Light blue (`#5555ff`).
pub const LIGHT_BLUE: u32 = 5_592_575;
/// Light green (`#55ff55`).
pub const LIGHT_GREEN: u32 = 5_635_925;
/// Light red (`#ff5555`).
pub const LIGHT_RED: u32 = 16_733_525;
/// Light magenta (`#ff55ff`).
pub const LIGHT_MAGENTA: u32 = 16_733_695;
/// Yellow (`#ffff55`).
pub const YELLOW: u32 = 16_777_045;
/// White (`#ffffff`).
pub const WHITE: u32 = 16_777_215;

/// Mask selecting the 24 bits the platform reads from a color value.
pub const COLOR_MASK: u32 = 0x00FF_FFFF;

/// A typed RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its three channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for u32 {
    fn from(color: Rgb) -> Self {
        encode_rgb(color)
    }
}

/// Packs an RGB triple into the platform's 24-bit color integer.
///
/// Each channel is masked to its low 8 bits, so out-of-range values wrap
/// instead of being rejected.
///
/// # Example
///
/// ```
/// use webhook_builder::color;
///
/// assert_eq!(color::encode(255, 0, 0), color::RED);
/// assert_eq!(color::encode(256, 0, 1), 1);
/// ```
#[must_use]
#[allow(clippy::cast_sign_loss)] // masking keeps only the low byte
pub const fn encode(r: i32, g: i32, b: i32) -> u32 {
    (((r & 0xFF) as u32) << 16) | (((g & 0xFF) as u32) << 8) | ((b & 0xFF) as u32)
}

/// Packs a typed [`Rgb`] color.
#[must_use]
pub const fn encode_rgb(color: Rgb) -> u32 {
    encode(color.r as i32, color.g as i32, color.b as i32)
}

/// Splits a packed color back into its channels.
///
/// Bits above the low 24 are ignored.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn decode(packed: u32) -> Rgb {
    Rgb {
        r: (packed >> 16) as u8,
        g: (packed >> 8) as u8,
        b: packed as u8,
    }
}

/// Parses a `#rrggbb` (or `rrggbb`) hex string into a packed color.
///
/// Returns `None` for anything that is not exactly six hex digits.
#[must_use]
pub fn parse_hex(value: &str) -> Option<u32> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_packs_red_highest() {
        assert_eq!(encode(255, 0, 0), 16_711_680);
        assert_eq!(encode(0, 255, 0), 65_280);
        assert_eq!(encode(0, 0, 255), 255);
    }

    #[test]
    fn encode_masks_out_of_range_channels() {
        assert_eq!(encode(256, 257, -1), encode(0, 1, 255));
        assert_eq!(encode(0x1FF, 0, 0), RED);
    }

    #[test]
    fn decode_recovers_masked_channels_for_every_byte() {
        for value in 0..=255 {
            let packed = encode(value, 255 - value, value / 2);
            assert_eq!(packed >> 16, u32::try_from(value & 0xFF).unwrap());
            assert_eq!((packed >> 8) & 0xFF, u32::try_from((255 - value) & 0xFF).unwrap());
            assert_eq!(packed & 0xFF, u32::try_from((value / 2) & 0xFF).unwrap());
        }
    }

    #[test]
    fn typed_color_delegates_to_triple() {
        let color = Rgb::new(0x55, 0x55, 0xFF);
        assert_eq!(encode_rgb(color), LIGHT_BLUE);
        assert_eq!(u32::from(color), LIGHT_BLUE);
        assert_eq!(decode(LIGHT_BLUE), color);
    }

    #[test]
    fn tuple_converts_into_rgb() {
        let color: Rgb = (255, 85, 0).into();
        assert_eq!(encode_rgb(color), BROWN);
    }

    #[test]
    fn named_colors_match_their_channels() {
        let table = [
            (BLACK, (0, 0, 0)),
            (MAGENTA, (255, 0, 255)),
            (LIGHT_GRAY, (170, 170, 170)),
            (DARK_GRAY, (85, 85, 85)),
            (LIGHT_GREEN, (85, 255, 85)),
            (LIGHT_RED, (255, 85, 85)),
            (LIGHT_MAGENTA, (255, 85, 255)),
            (YELLOW, (255, 255, 85)),
            (WHITE, (255, 255, 255)),
        ];

        for (packed, (r, g, b)) in table {
            assert_eq!(encode(r, g, b), packed, "channels {r},{g},{b}");
        }
    }

    #[test]
    fn parse_hex_accepts_optional_hash() {
        assert_eq!(parse_hex("#ff0000"), Some(RED));
        assert_eq!(parse_hex("00FF00"), Some(GREEN));
    }

    #[test]
    fn parse_hex_rejects_malformed_input() {
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#gg0000"), None);
        assert_eq!(parse_hex("+f0000"), None);
        assert_eq!(parse_hex(""), None);
    }
}
