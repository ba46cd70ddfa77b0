use coolor::{Hsl, Rgb};
use ratatui::style::Color;

/// Converts between ratatui colours and HSL for deriving tints.
pub struct ColorConverter;

impl ColorConverter {
    #[must_use]
    pub fn to_hsl(color: Color) -> Hsl {
        let (r, g, b) = rgb_of(color);
        Rgb::new(r, g, b).to_hsl()
    }

    #[must_use]
    pub fn to_ratatui(hsl: Hsl) -> Color {
        let rgb: Rgb = hsl.to_rgb();
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }

    /// Returns `color` with its saturation and lightness replaced.
    #[must_use]
    pub fn tint(color: Color, saturation: f32, lightness: f32) -> Color {
        let mut hsl = Self::to_hsl(color);
        hsl.s = saturation.clamp(0.0, 1.0);
        hsl.l = lightness.clamp(0.0, 1.0);
        Self::to_ratatui(hsl)
    }

    /// Returns `color` with its lightness clamped into `[min, max]`.
    #[must_use]
    pub fn clamp_lightness(color: Color, min: f32, max: f32) -> Color {
        let mut hsl = Self::to_hsl(color);
        hsl.l = hsl.l.clamp(min, max);
        Self::to_ratatui(hsl)
    }
}

fn rgb_of(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black => (0, 0, 0),
        Color::Red => (170, 0, 0),
        Color::Green => (0, 170, 0),
        Color::Yellow => (170, 85, 0),
        Color::Blue => (0, 0, 170),
        Color::Magenta => (170, 0, 170),
        Color::Cyan => (0, 170, 170),
        Color::Gray => (170, 170, 170),
        Color::DarkGray => (85, 85, 85),
        Color::LightRed => (255, 85, 85),
        Color::LightGreen => (85, 255, 85),
        Color::LightYellow => (255, 255, 85),
        Color::LightBlue => (85, 85, 255),
        Color::LightMagenta => (255, 85, 255),
        Color::LightCyan => (85, 255, 255),
        Color::Indexed(i) => indexed_to_rgb(i),
        _ => (255, 255, 255),
    }
}

fn indexed_to_rgb(i: u8) -> (u8, u8, u8) {
    match i {
        0..=15 => {
            const BASE: [(u8, u8, u8); 16] = [
                (0, 0, 0),
                (170, 0, 0),
                (0, 170, 0),
                (170, 85, 0),
                (0, 0, 170),
                (170, 0, 170),
                (0, 170, 170),
                (170, 170, 170),
                (85, 85, 85),
                (255, 85, 85),
                (85, 255, 85),
                (255, 255, 85),
                (85, 85, 255),
                (255, 85, 255),
                (85, 255, 255),
                (255, 255, 255),
            ];
            BASE[usize::from(i)]
        }
        16..=231 => {
            let i = i - 16;
            let step = |c: u8| if c == 0 { 0 } else { c * 40 + 55 };
            (step(i / 36), step((i / 6) % 6), step(i % 6))
        }
        _ => {
            let v = (i - 232) * 10 + 8;
            (v, v, v)
        }
    }
}
