use serde::Serialize;

/// Maximum length (exclusive) of a percentage-style setting such as `"100%"`.
pub const PERCENT_MAX_CHARS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }
}

/// Serialized as `rrggbbaa`, the same form the config file accepts.
impl Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!(
            "{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        ))
    }
}

#[cfg(feature = "sdl2")]
impl From<Color> for sdl2::pixels::Color {
    fn from(c: Color) -> Self {
        sdl2::pixels::Color::RGBA(c.r, c.g, c.b, c.a)
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BackgroundMode {
    #[default]
    Color,
    Image,
    Slideshow,
}

/// What to do with an entry title wider than its button.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextOversizeMode {
    #[default]
    Truncate,
    Shrink,
    None,
}

/// Window behaviour while a launched command runs.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OnLaunch {
    #[default]
    Hide,
    Blank,
    None,
}

/// Gap between icons, either relative to the screen width or in pixels.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum Spacing {
    Percent(String),
    Pixels(u32),
}

/// Parses `RRGGBB` or `RRGGBBAA`. Six digits leave the color fully opaque.
pub fn hex_to_color(text: &str) -> Option<Color> {
    if text.len() != 6 && text.len() != 8 {
        return None;
    }
    // from_str_radix alone would accept a leading '+'
    if !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let hex = u32::from_str_radix(text, 16).ok()?;
    let color = if text.len() == 8 {
        Color::rgba(
            (hex >> 24) as u8,
            (hex >> 16) as u8,
            (hex >> 8) as u8,
            hex as u8,
        )
    } else {
        Color::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    };
    Some(color)
}

pub fn convert_bool(value: &str, default: bool) -> bool {
    match value {
        "true" => true,
        "false" => false,
        _ => default,
    }
}

/// True for strings of the form `<digits>%` shorter than [`PERCENT_MAX_CHARS`].
pub fn is_percent(value: &str) -> bool {
    if value.len() >= PERCENT_MAX_CHARS {
        return false;
    }
    match value.strip_suffix('%') {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// Scales `max_value` by a percentage string such as `"25%"`.
///
/// Returns `None` when the number can't be read or lies outside 0..=100.
pub fn convert_percent(value: &str, max_value: i32) -> Option<i32> {
    let number = value.split('%').next().unwrap_or("").trim();
    let percent: f32 = number.parse().ok()?;
    if !(0.0..=100.0).contains(&percent) {
        return None;
    }
    Some((max_value as f32 * percent * 0.01) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_digit_hex_is_opaque() {
        assert_eq!(hex_to_color("ff8000"), Some(Color::rgba(0xff, 0x80, 0x00, 0xff)));
        assert_eq!(hex_to_color("1A2b3C"), Some(Color::rgb(0x1a, 0x2b, 0x3c)));
    }

    #[test]
    fn eight_digit_hex_sets_alpha() {
        assert_eq!(hex_to_color("11223344"), Some(Color::rgba(0x11, 0x22, 0x33, 0x44)));
    }

    #[test]
    fn zero_colors_are_valid() {
        assert_eq!(hex_to_color("000000"), Some(Color::BLACK));
        assert_eq!(hex_to_color("00000000"), Some(Color::rgba(0, 0, 0, 0)));
    }

    #[test]
    fn bad_hex_is_rejected() {
        for text in ["", "fff", "fffff", "fffffff", "fffffffff", "gg0000", "+fffff", "0x1234"] {
            assert_eq!(hex_to_color(text), None, "{text:?}");
        }
    }

    #[test]
    fn bools() {
        assert!(convert_bool("true", false));
        assert!(!convert_bool("false", true));
        assert!(convert_bool("yes", true));
        assert!(!convert_bool("True", false));
    }

    #[test]
    fn percent_pattern() {
        assert!(is_percent("50%"));
        assert!(is_percent("100%"));
        assert!(!is_percent("50"));
        assert!(!is_percent("5.5%"));
        assert!(!is_percent("%"));
        assert!(!is_percent("a%"));
        assert!(!is_percent("1234567%"));
    }

    #[test]
    fn percent_conversion() {
        assert_eq!(convert_percent("50%", 200), Some(100));
        assert_eq!(convert_percent("0%", 200), Some(0));
        assert_eq!(convert_percent("100%", 37), Some(37));
        assert_eq!(convert_percent("150%", 200), None);
        assert_eq!(convert_percent("-1%", 200), None);
        assert_eq!(convert_percent("abc%", 200), None);
    }

    #[cfg(feature = "sdl2")]
    #[test]
    fn into_sdl_color() {
        let color: sdl2::pixels::Color = Color::rgba(1, 2, 3, 4).into();
        assert_eq!(color, sdl2::pixels::Color::RGBA(1, 2, 3, 4));
    }
}
