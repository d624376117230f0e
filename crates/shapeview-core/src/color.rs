//! Color values and the rainbow hue ramp.

/// RGB color with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Parse `#rrggbb` or `#rgb` (leading `#` optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::from_rgb8(r, g, b))
            }
            3 => {
                let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
                let (r, g, b) = (digit(0)?, digit(1)?, digit(2)?);
                Some(Self::from_rgb8(r * 17, g * 17, b * 17))
            }
            _ => None,
        }
    }

    pub fn to_rgb8(self) -> [u8; 3] {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b)]
    }

    /// HSL to RGB. `hue` in degrees (wrapped), `saturation` and `lightness`
    /// in `[0, 1]`.
    pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = lightness - c / 2.0;
        Self::new(r + m, g + m, b + m)
    }
}

/// Hue-wheel color at `cycle` in `[0, 1)`: full saturation, half lightness.
pub fn rainbow(cycle: f32) -> Color {
    Color::hsl(cycle * 360.0, 1.0, 0.5)
}

/// Fixed color or time-driven rainbow cycling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorMode {
    Rainbow,
    Fixed(Color),
}

impl ColorMode {
    /// Parse a host color-selector value. The literal `"rainbow"` selects
    /// cycling; anything else is read as a hex color. Unparsable colors
    /// fall back to fixed red (the selector's initial fixed entry), never
    /// an error.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("rainbow") {
            ColorMode::Rainbow
        } else {
            ColorMode::Fixed(Color::from_hex(value).unwrap_or(Color::RED))
        }
    }
}
