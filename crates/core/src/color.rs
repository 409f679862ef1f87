//! # Colors
//!
//! [`Color`] is an immutable value holding either a 3-channel (`0xRRGGBB`) or a
//! 4-channel (`0xAARRGGBB`) packed integer. HSL components are derived once at
//! construction. Grayscale and blend operations return new colors.
//!
//! Colors can be built from hex, channel components, HSL/AHSL, a
//! [`NamedColor`] or [`ColorShade`], or parsed from a string:
//!
//! ```
//! use espresso_core::color::{Color, NamedColor};
//!
//! let slate = Color::named(NamedColor::SlateBlue);
//! assert_eq!(Color::parse("#6A5ACD"), Some(slate));
//! assert_eq!(Color::parse("slateblue"), Some(slate));
//! ```

use palette::{FromColor, Hsl as PaletteHsl, Srgb};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

/// Hue in degrees `[0, 360]`, saturation and lightness in percent `[0, 100]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

/// How [`Color::grayscale`] collapses the three channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize)]
pub enum GrayscaleMethod {
    Average,
    Lighten,
    #[default]
    Luminance,
}

/// Separable blend modes applied per channel by [`Color::blend`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize)]
pub enum BlendMode {
    ColorBurn,
    ColorDodge,
    Darken,
    Difference,
    Exclusion,
    HardLight,
    Lighten,
    Multiply,
    #[default]
    Normal,
    Overlay,
    Screen,
    SoftLight,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    hex: u32,
    has_alpha: bool,
    hsl: Hsl,
}

impl Color {
    pub const MAX_RGB: u32 = 0xFF_FF_FF;

    /// A 3-channel color. Values above `0xFFFFFF` are clamped.
    pub fn from_hex(hex: u32) -> Self {
        Self::build(hex.min(Self::MAX_RGB), false)
    }

    /// A 4-channel color from a packed `0xAARRGGBB` value.
    pub fn from_hex_argb(hex: u32) -> Self {
        Self::build(hex, true)
    }

    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::from_hex(pack(0, red, green, blue))
    }

    pub fn argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self::from_hex_argb(pack(alpha, red, green, blue))
    }

    /// A 3-channel color from HSL. Hue is clamped to `[0, 360]`, saturation
    /// and lightness to `[0, 100]`.
    pub fn hsl(hue: u16, saturation: u8, lightness: u8) -> Self {
        let (red, green, blue) = hsl_to_rgb(hue, saturation, lightness);
        Self::rgb(red, green, blue)
    }

    /// A 4-channel color from HSL plus an alpha percentage in `[0, 100]`.
    pub fn ahsl(alpha: u8, hue: u16, saturation: u8, lightness: u8) -> Self {
        let (red, green, blue) = hsl_to_rgb(hue, saturation, lightness);
        let alpha = (f32::from(alpha.min(100)) / 100.0 * 255.0).round() as u8;
        Self::argb(alpha, red, green, blue)
    }

    pub fn named(color: NamedColor) -> Self {
        Self::from_hex(color.hex())
    }

    pub fn shade(shade: ColorShade) -> Self {
        Self::from_hex(shade.hex())
    }

    pub fn transparent() -> Self {
        Self::from_hex_argb(0)
    }

    pub fn white() -> Self {
        Self::named(NamedColor::White)
    }

    pub fn black() -> Self {
        Self::named(NamedColor::Black)
    }

    fn build(hex: u32, has_alpha: bool) -> Self {
        let (_, red, green, blue) = unpack(hex);
        Self {
            hex,
            has_alpha,
            hsl: rgb_to_hsl(red, green, blue),
        }
    }

    /// The packed value, `0xRRGGBB` or `0xAARRGGBB` depending on [`Self::has_alpha`].
    pub fn hex(&self) -> u32 {
        self.hex
    }

    pub fn has_alpha(&self) -> bool {
        self.has_alpha
    }

    pub fn red(&self) -> u8 {
        unpack(self.hex).1
    }

    pub fn green(&self) -> u8 {
        unpack(self.hex).2
    }

    pub fn blue(&self) -> u8 {
        unpack(self.hex).3
    }

    /// Alpha channel; 3-channel colors are fully opaque.
    pub fn alpha(&self) -> u8 {
        if self.has_alpha {
            unpack(self.hex).0
        } else {
            u8::MAX
        }
    }

    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (self.red(), self.green(), self.blue())
    }

    pub fn to_argb(&self) -> (u8, u8, u8, u8) {
        (self.alpha(), self.red(), self.green(), self.blue())
    }

    /// The color as a packed ARGB8888 pixel, alpha included for 3-channel colors.
    pub fn to_argb8888(&self) -> u32 {
        pack(self.alpha(), self.red(), self.green(), self.blue())
    }

    pub fn to_hsl(&self) -> Hsl {
        self.hsl
    }

    /// Alpha as a percentage in `[0, 100]`.
    pub fn alpha_percent(&self) -> u8 {
        (f32::from(self.alpha()) / 255.0 * 100.0).round() as u8
    }

    pub fn with_alpha(&self, alpha: u8) -> Self {
        Self::argb(alpha, self.red(), self.green(), self.blue())
    }

    /// Multiplies alpha by `opacity` (clamped to `[0, 1]`). Fully opaque
    /// results keep the original channel count.
    pub fn with_opacity(&self, opacity: f32) -> Self {
        let opacity = if opacity.is_nan() { 0.0 } else { opacity.clamp(0.0, 1.0) };
        if opacity >= 1.0 {
            return *self;
        }
        let alpha = (f32::from(self.alpha()) * opacity).round() as u8;
        self.with_alpha(alpha)
    }

    pub fn grayscale(&self, method: GrayscaleMethod) -> Self {
        let (red, green, blue) = self.to_rgb();
        let gray = match method {
            GrayscaleMethod::Average => {
                ((u16::from(red) + u16::from(green) + u16::from(blue)) / 3) as u8
            }
            GrayscaleMethod::Lighten => {
                let max = red.max(green).max(blue);
                let min = red.min(green).min(blue);
                ((u16::from(max) + u16::from(min)) / 2) as u8
            }
            GrayscaleMethod::Luminance => (0.2126 * f64::from(red)
                + 0.7152 * f64::from(green)
                + 0.0722 * f64::from(blue))
                .round() as u8,
        };
        self.with_channels(self.alpha(), gray, gray, gray)
    }

    /// Blends `source` over `self` (the backdrop).
    ///
    /// 3-channel colors blend channels directly. When either color carries
    /// alpha the blended channels are composited source-over and the result
    /// is a 4-channel color.
    pub fn blend(&self, source: &Color, mode: BlendMode) -> Self {
        let backdrop = channels(self);
        let src = channels(source);
        let blended = [
            blend_channel(backdrop[1], src[1], mode),
            blend_channel(backdrop[2], src[2], mode),
            blend_channel(backdrop[3], src[3], mode),
        ];

        if !self.has_alpha && !source.has_alpha {
            return Self::rgb(
                to_byte(blended[0]),
                to_byte(blended[1]),
                to_byte(blended[2]),
            );
        }

        let (backdrop_alpha, source_alpha) = (backdrop[0], src[0]);
        let alpha = source_alpha + backdrop_alpha * (1.0 - source_alpha);
        if alpha < 1e-6 {
            return Self::transparent();
        }
        let composite = |index: usize| {
            (blended[index] * source_alpha
                + backdrop[index + 1] * backdrop_alpha * (1.0 - source_alpha))
                / alpha
        };
        Self::argb(
            to_byte(alpha),
            to_byte(composite(0)),
            to_byte(composite(1)),
            to_byte(composite(2)),
        )
    }

    fn with_channels(&self, alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        if self.has_alpha {
            Self::argb(alpha, red, green, blue)
        } else {
            Self::rgb(red, green, blue)
        }
    }

    /// Parses `#RRGGBB`, `#AARRGGBB`, `transparent`, or a case-insensitive
    /// CSS color name such as `slateblue`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();

        if value.eq_ignore_ascii_case("transparent") {
            return Some(Self::transparent());
        }

        if let Some(hex) = value.strip_prefix('#') {
            if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return None;
            }
            let packed = u32::from_str_radix(hex, 16).ok()?;
            return match hex.len() {
                6 => Some(Self::from_hex(packed)),
                8 => Some(Self::from_hex_argb(packed)),
                _ => None,
            };
        }

        value
            .parse::<NamedColor>()
            .map(Self::named)
            .or_else(|_| value.parse::<ColorShade>().map(Self::shade))
            .ok()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_alpha {
            write!(f, "#{:08X}", self.hex)
        } else {
            write!(f, "#{:06X}", self.hex)
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({self})")
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid color: {value:?}"))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

fn pack(alpha: u8, red: u8, green: u8, blue: u8) -> u32 {
    (u32::from(alpha) << 24) | (u32::from(red) << 16) | (u32::from(green) << 8) | u32::from(blue)
}

fn unpack(hex: u32) -> (u8, u8, u8, u8) {
    (
        ((hex >> 24) & 0xFF) as u8,
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Normalized `[a, r, g, b]`.
fn channels(color: &Color) -> [f32; 4] {
    let (a, r, g, b) = color.to_argb();
    [a, r, g, b].map(|c| f32::from(c) / 255.0)
}

fn to_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn blend_channel(backdrop: f32, source: f32, mode: BlendMode) -> f32 {
    let (b, s) = (backdrop, source);
    let result = match mode {
        BlendMode::ColorBurn => {
            if s == 0.0 {
                0.0
            } else {
                1.0 - ((1.0 - b) / s).min(1.0)
            }
        }
        BlendMode::ColorDodge => {
            if s == 1.0 {
                1.0
            } else {
                (b / (1.0 - s)).min(1.0)
            }
        }
        BlendMode::Darken => b.min(s),
        BlendMode::Difference => (b - s).abs(),
        BlendMode::Exclusion => b + s - 2.0 * b * s,
        BlendMode::HardLight => hard_light(b, s),
        BlendMode::Lighten => b.max(s),
        BlendMode::Multiply => b * s,
        BlendMode::Normal => s,
        BlendMode::Overlay => hard_light(s, b),
        BlendMode::Screen => 1.0 - (1.0 - b) * (1.0 - s),
        BlendMode::SoftLight => {
            if s <= 0.5 {
                b - (1.0 - 2.0 * s) * b * (1.0 - b)
            } else {
                let d = if b <= 0.25 {
                    ((16.0 * b - 12.0) * b + 4.0) * b
                } else {
                    b.sqrt()
                };
                b + (2.0 * s - 1.0) * (d - b)
            }
        }
    };
    result.clamp(0.0, 1.0)
}

fn hard_light(b: f32, s: f32) -> f32 {
    if s < 0.5 {
        2.0 * b * s
    } else {
        1.0 - 2.0 * (1.0 - b) * (1.0 - s)
    }
}

fn rgb_to_hsl(red: u8, green: u8, blue: u8) -> Hsl {
    let rgb: Srgb<f32> = Srgb::<u8>::new(red, green, blue).into_format();
    let hsl: PaletteHsl = PaletteHsl::from_color(rgb);
    let hue = hsl.hue.into_positive_degrees().round() as u16;
    Hsl {
        // 360 and 0 are the same hue
        hue: hue % 360,
        saturation: (hsl.saturation * 100.0).round() as u8,
        lightness: (hsl.lightness * 100.0).round() as u8,
    }
}

fn hsl_to_rgb(hue: u16, saturation: u8, lightness: u8) -> (u8, u8, u8) {
    let hsl = PaletteHsl::new_srgb(
        f32::from(hue.min(360)),
        f32::from(saturation.min(100)) / 100.0,
        f32::from(lightness.min(100)) / 100.0,
    );
    let rgb: Srgb<u8> = Srgb::<f32>::from_color(hsl).into_format();
    (rgb.red, rgb.green, rgb.blue)
}

// Declares a color enum and its hex table from one list.
macro_rules! named_colors {
    ($(#[$meta:meta])* $color:ident { $($name:ident = $hex:literal),* $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize,
            Deserialize,
        )]
        #[strum(ascii_case_insensitive)]
        pub enum $color {
            $($name),*
        }

        impl $color {
            pub fn hex(self) -> u32 {
                match self {
                    $($color::$name => $hex),*
                }
            }
        }

        impl From<$color> for Color {
            fn from(color: $color) -> Self {
                Self::from_hex(color.hex())
            }
        }
    };
}

named_colors! {
    /// The CSS named colors, parsed case-insensitively by name.
    NamedColor {
        AliceBlue = 0xF0F8FF,
        AntiqueWhite = 0xFAEBD7,
        Aqua = 0x00FFFF,
        Aquamarine = 0x7FFFD4,
        Azure = 0xF0FFFF,
        Beige = 0xF5F5DC,
        Bisque = 0xFFE4C4,
        Black = 0x000000,
        BlanchedAlmond = 0xFFEBCD,
        Blue = 0x0000FF,
        BlueViolet = 0x8A2BE2,
        Brown = 0xA52A2A,
        BurlyWood = 0xDEB887,
        CadetBlue = 0x5F9EA0,
        Chartreuse = 0x7FFF00,
        Chocolate = 0xD2691E,
        Coral = 0xFF7F50,
        CornflowerBlue = 0x6495ED,
        Cornsilk = 0xFFF8DC,
        Crimson = 0xDC143C,
        Cyan = 0x00FFFF,
        DarkBlue = 0x00008B,
        DarkCyan = 0x008B8B,
        DarkGoldenRod = 0xB8860B,
        DarkGray = 0xA9A9A9,
        DarkGreen = 0x006400,
        DarkKhaki = 0xBDB76B,
        DarkMagenta = 0x8B008B,
        DarkOliveGreen = 0x556B2F,
        DarkOrange = 0xFF8C00,
        DarkOrchid = 0x9932CC,
        DarkRed = 0x8B0000,
        DarkSalmon = 0xE9967A,
        DarkSeaGreen = 0x8FBC8F,
        DarkSlateBlue = 0x483D8B,
        DarkSlateGray = 0x2F4F4F,
        DarkTurquoise = 0x00CED1,
        DarkViolet = 0x9400D3,
        DeepPink = 0xFF1493,
        DeepSkyBlue = 0x00BFFF,
        DimGray = 0x696969,
        DodgerBlue = 0x1E90FF,
        FireBrick = 0xB22222,
        FloralWhite = 0xFFFAF0,
        ForestGreen = 0x228B22,
        Fuchsia = 0xFF00FF,
        Gainsboro = 0xDCDCDC,
        GhostWhite = 0xF8F8FF,
        Gold = 0xFFD700,
        GoldenRod = 0xDAA520,
        Gray = 0x808080,
        Green = 0x008000,
        GreenYellow = 0xADFF2F,
        HoneyDew = 0xF0FFF0,
        HotPink = 0xFF69B4,
        IndianRed = 0xCD5C5C,
        Indigo = 0x4B0082,
        Ivory = 0xFFFFF0,
        Khaki = 0xF0E68C,
        Lavender = 0xE6E6FA,
        LavenderBlush = 0xFFF0F5,
        LawnGreen = 0x7CFC00,
        LemonChiffon = 0xFFFACD,
        LightBlue = 0xADD8E6,
        LightCoral = 0xF08080,
        LightCyan = 0xE0FFFF,
        LightGoldenRodYellow = 0xFAFAD2,
        LightGray = 0xD3D3D3,
        LightGreen = 0x90EE90,
        LightPink = 0xFFB6C1,
        LightSalmon = 0xFFA07A,
        LightSeaGreen = 0x20B2AA,
        LightSkyBlue = 0x87CEFA,
        LightSlateGray = 0x778899,
        LightSteelBlue = 0xB0C4DE,
        LightYellow = 0xFFFFE0,
        Lime = 0x00FF00,
        LimeGreen = 0x32CD32,
        Linen = 0xFAF0E6,
        Magenta = 0xFF00FF,
        Maroon = 0x800000,
        MediumAquaMarine = 0x66CDAA,
        MediumBlue = 0x0000CD,
        MediumOrchid = 0xBA55D3,
        MediumPurple = 0x9370DB,
        MediumSeaGreen = 0x3CB371,
        MediumSlateBlue = 0x7B68EE,
        MediumSpringGreen = 0x00FA9A,
        MediumTurquoise = 0x48D1CC,
        MediumVioletRed = 0xC71585,
        MidnightBlue = 0x191970,
        MintCream = 0xF5FFFA,
        MistyRose = 0xFFE4E1,
        Moccasin = 0xFFE4B5,
        NavajoWhite = 0xFFDEAD,
        Navy = 0x000080,
        OldLace = 0xFDF5E6,
        Olive = 0x808000,
        OliveDrab = 0x6B8E23,
        Orange = 0xFFA500,
        OrangeRed = 0xFF4500,
        Orchid = 0xDA70D6,
        PaleGoldenRod = 0xEEE8AA,
        PaleGreen = 0x98FB98,
        PaleTurquoise = 0xAFEEEE,
        PaleVioletRed = 0xDB7093,
        PapayaWhip = 0xFFEFD5,
        PeachPuff = 0xFFDAB9,
        Peru = 0xCD853F,
        Pink = 0xFFC0CB,
        Plum = 0xDDA0DD,
        PowderBlue = 0xB0E0E6,
        Purple = 0x800080,
        RebeccaPurple = 0x663399,
        Red = 0xFF0000,
        RosyBrown = 0xBC8F8F,
        RoyalBlue = 0x4169E1,
        SaddleBrown = 0x8B4513,
        Salmon = 0xFA8072,
        SandyBrown = 0xF4A460,
        SeaGreen = 0x2E8B57,
        SeaShell = 0xFFF5EE,
        Sienna = 0xA0522D,
        Silver = 0xC0C0C0,
        SkyBlue = 0x87CEEB,
        SlateBlue = 0x6A5ACD,
        SlateGray = 0x708090,
        Snow = 0xFFFAFA,
        SpringGreen = 0x00FF7F,
        SteelBlue = 0x4682B4,
        Tan = 0xD2B48C,
        Teal = 0x008080,
        Thistle = 0xD8BFD8,
        Tomato = 0xFF6347,
        Turquoise = 0x40E0D0,
        Violet = 0xEE82EE,
        Wheat = 0xF5DEB3,
        White = 0xFFFFFF,
        WhiteSmoke = 0xF5F5F5,
        Yellow = 0xFFFF00,
        YellowGreen = 0x9ACD32,
    }
}

named_colors! {
    /// A tonal palette: up to nine shades per hue from light (`100`) to dark (`900`),
    /// plus a few whites and near-blacks.
    ColorShade {
        Red100 = 0xFFEBEE,
        Red200 = 0xFFCDD2,
        Red300 = 0xEF9A9A,
        Red400 = 0xE57373,
        Red500 = 0xF44336,
        Red600 = 0xE53935,
        Red700 = 0xD32F2F,
        Red800 = 0xC62828,
        Red900 = 0xB71C1C,
        Orange100 = 0xFFE0B2,
        Orange200 = 0xFFCC80,
        Orange300 = 0xFFB347,
        Orange400 = 0xFFA726,
        Orange500 = 0xFF9800,
        Orange600 = 0xFB8C00,
        Orange700 = 0xF57C00,
        Orange800 = 0xEF6C00,
        Orange900 = 0xE65100,
        Yellow100 = 0xFFF9C4,
        Yellow200 = 0xFFF59D,
        Yellow300 = 0xFFF176,
        Yellow400 = 0xFFEE58,
        Yellow500 = 0xFFEB3B,
        Yellow600 = 0xFDD835,
        Yellow700 = 0xFBC02D,
        Yellow800 = 0xF9A825,
        Yellow900 = 0xF57F17,
        Green100 = 0xE8F5E9,
        Green200 = 0xC8E6C9,
        Green300 = 0xA5D6A7,
        Green400 = 0x81C784,
        Green500 = 0x66BB6A,
        Green600 = 0x558B2F,
        Green700 = 0x388E3C,
        Green800 = 0x33691E,
        Green900 = 0x1B5E20,
        Cyan100 = 0xE0F7FA,
        Cyan200 = 0xB2EBF2,
        Cyan300 = 0x80DEEA,
        Cyan400 = 0x4DD0E1,
        Cyan500 = 0x00BCD4,
        Cyan600 = 0x00ACC1,
        Cyan700 = 0x0097A7,
        Cyan800 = 0x00838F,
        Cyan900 = 0x006064,
        Blue100 = 0xBBDEFB,
        Blue200 = 0x90CAF9,
        Blue300 = 0x64B5F6,
        Blue400 = 0x42A5F5,
        Blue500 = 0x2196F3,
        Blue600 = 0x1E88E5,
        Blue700 = 0x1976D2,
        Blue800 = 0x1565C0,
        Blue900 = 0x0D47A1,
        Purple100 = 0xE1BEE7,
        Purple200 = 0xCE93D8,
        Purple300 = 0xBA68C8,
        Purple400 = 0xAB47BC,
        Purple500 = 0x9C27B0,
        Purple600 = 0x8E24AA,
        Purple700 = 0x7B1FA2,
        Purple800 = 0x6A1B9A,
        Purple900 = 0x4A148C,
        Pink100 = 0xFCE4EC,
        Pink200 = 0xF8BBD0,
        Pink300 = 0xF48FB1,
        Pink400 = 0xF06292,
        Pink500 = 0xE91E63,
        Pink600 = 0xD81B60,
        Pink700 = 0xC2185B,
        Pink800 = 0xAD1457,
        Gray100 = 0xF5F5F5,
        Gray200 = 0xEEEEEE,
        Gray300 = 0xE0E0E0,
        Gray400 = 0xBDBDBD,
        Gray500 = 0x9E9E9E,
        Gray600 = 0x757575,
        Gray700 = 0x616161,
        Gray800 = 0x424242,
        Gray900 = 0x212121,
        White100 = 0xFFFFFF,
        White200 = 0xFAFAFA,
        White300 = 0xF5F5F5,
        Black100 = 0x1A1A1A,
        Black200 = 0x0D0D0D,
        Black300 = 0x000000,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_hex_is_clamped() {
        let color = Color::from_hex(0x1_00_00_00);
        assert_eq!(color.hex(), 0xFFFFFF);
        assert!(!color.has_alpha());
        assert_eq!(color.alpha(), 255);
    }

    #[test]
    fn test_components() {
        let color = Color::argb(0x80, 0x12, 0x34, 0x56);
        assert_eq!(color.hex(), 0x80123456);
        assert_eq!(color.to_argb(), (0x80, 0x12, 0x34, 0x56));
        assert_eq!(Color::rgb(1, 2, 3).to_argb8888(), 0xFF010203);
    }

    #[test]
    fn test_derived_hsl() {
        assert_eq!(
            Color::named(NamedColor::Red).to_hsl(),
            Hsl { hue: 0, saturation: 100, lightness: 50 }
        );
        assert_eq!(
            Color::named(NamedColor::Blue).to_hsl(),
            Hsl { hue: 240, saturation: 100, lightness: 50 }
        );
        assert_eq!(Color::white().to_hsl().lightness, 100);
    }

    #[test]
    fn test_from_hsl() {
        assert_eq!(Color::hsl(120, 100, 50), Color::named(NamedColor::Lime));
        assert_eq!(Color::hsl(0, 0, 0), Color::black());
        let translucent = Color::ahsl(50, 240, 100, 50);
        assert!(translucent.has_alpha());
        assert_eq!(translucent.alpha(), 128);
        assert_eq!(translucent.to_rgb(), (0, 0, 255));
    }

    #[test]
    fn test_grayscale() {
        let color = Color::rgb(30, 60, 90);
        assert_eq!(color.grayscale(GrayscaleMethod::Average), Color::rgb(60, 60, 60));
        assert_eq!(color.grayscale(GrayscaleMethod::Lighten), Color::rgb(60, 60, 60));
        assert_eq!(
            Color::white().grayscale(GrayscaleMethod::Luminance),
            Color::white()
        );
        // Original is untouched
        assert_eq!(color.to_rgb(), (30, 60, 90));
    }

    #[test]
    fn test_blend_opaque() {
        let backdrop = Color::rgb(255, 0, 128);
        let source = Color::rgb(0, 255, 128);

        assert_eq!(backdrop.blend(&source, BlendMode::Normal), source);
        assert_eq!(backdrop.blend(&source, BlendMode::Darken), Color::rgb(0, 0, 128));
        assert_eq!(backdrop.blend(&source, BlendMode::Lighten), Color::rgb(255, 255, 128));
        assert_eq!(
            backdrop.blend(&Color::white(), BlendMode::Multiply),
            backdrop
        );
        assert_eq!(
            backdrop.blend(&Color::black(), BlendMode::Screen),
            backdrop
        );
        assert_eq!(backdrop.blend(&backdrop, BlendMode::Difference), Color::black());
    }

    #[test]
    fn test_blend_alpha_composites_source_over() {
        let backdrop = Color::argb(255, 0, 0, 0);
        let source = Color::argb(0, 255, 255, 255);
        assert_eq!(backdrop.blend(&source, BlendMode::Normal), backdrop);

        let half = Color::argb(128, 255, 255, 255);
        let result = backdrop.blend(&half, BlendMode::Normal);
        assert_eq!(result.alpha(), 255);
        assert_eq!(result.red(), 128);

        let empty = Color::transparent().blend(&Color::transparent(), BlendMode::Screen);
        assert_eq!(empty, Color::transparent());
    }

    #[test]
    fn test_with_opacity() {
        let white = Color::white();
        assert_eq!(white.with_opacity(1.0), white);
        assert_eq!(white.with_opacity(0.5).alpha(), 128);
        assert_eq!(white.with_opacity(-3.0).alpha(), 0);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Color::parse("#483D8B"), Some(Color::named(NamedColor::DarkSlateBlue)));
        assert_eq!(Color::parse("#80FF0000"), Some(Color::argb(0x80, 255, 0, 0)));
        assert_eq!(Color::parse("  MediumSlateBlue "), Some(Color::from_hex(0x7B68EE)));
        assert_eq!(Color::parse("transparent"), Some(Color::transparent()));
        assert_eq!(Color::parse("#12345"), None);
        assert_eq!(Color::parse("#+12345"), None);
        assert_eq!(Color::parse("not-a-color"), None);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for color in [Color::rgb(1, 2, 3), Color::argb(4, 5, 6, 7)] {
            assert_eq!(Color::parse(&color.to_string()), Some(color));
        }
        assert_eq!(Color::rgb(0xAB, 0, 0x0C).to_string(), "#AB000C");
    }

    #[test]
    fn test_named_colors_parse_by_name() {
        for named in NamedColor::iter() {
            assert_eq!(Color::parse(&named.to_string()), Some(Color::named(named)));
        }
        assert_eq!(NamedColor::Cyan.hex(), NamedColor::Aqua.hex());
        assert_eq!(NamedColor::Fuchsia.hex(), NamedColor::Magenta.hex());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Color::named(NamedColor::SlateBlue)).unwrap();
        assert_eq!(json, "\"#6A5ACD\"");
        let parsed: Color = serde_json::from_str("\"darkslateblue\"").unwrap();
        assert_eq!(parsed, Color::from_hex(0x483D8B));
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }

    #[test]
    fn test_shades_parse_by_name() {
        for shade in ColorShade::iter() {
            assert_eq!(Color::parse(&shade.to_string()), Some(Color::shade(shade)));
        }
        assert_eq!(Color::parse("blue500"), Some(Color::from_hex(0x2196F3)));
        assert_eq!(Color::from(ColorShade::Gray900), Color::rgb(0x21, 0x21, 0x21));
        assert_eq!(ColorShade::Black300.hex(), NamedColor::Black.hex());
    }

    #[test]
    fn test_shades_darken_within_a_hue() {
        let reds: Vec<u8> = [ColorShade::Red100, ColorShade::Red500, ColorShade::Red900]
            .into_iter()
            .map(|shade| Color::shade(shade).to_hsl().lightness)
            .collect();
        assert!(reds.windows(2).all(|pair| pair[0] > pair[1]), "{reds:?}");
    }
}
