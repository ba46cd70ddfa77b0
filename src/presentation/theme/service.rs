use super::adapter::ColorConverter;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

use crate::infrastructure::ThemeMode;

const DETECT_TIMEOUT: Duration = Duration::from_millis(100);

/// One colour per seat, cycled by player index.
pub const PLAYER_PALETTE: [Color; 10] = [
    Color::Rgb(0xFF, 0x6B, 0x6B),
    Color::Rgb(0x4D, 0x96, 0xFF),
    Color::Rgb(0xFF, 0xD1, 0x66),
    Color::Rgb(0x6B, 0xCB, 0x77),
    Color::Rgb(0x9B, 0x5D, 0xE5),
    Color::Rgb(0xFF, 0x8A, 0xB8),
    Color::Rgb(0x00, 0xC2, 0xA8),
    Color::Rgb(0xFF, 0xB8, 0x6B),
    Color::Rgb(0x6A, 0x5A, 0xCD),
    Color::Rgb(0x2E, 0xCC, 0x71),
];

/// Light or dark rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

impl ThemeVariant {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Indicator shown next to the theme toggle: the mode you would switch to.
    #[must_use]
    pub const fn toggle_hint(self) -> &'static str {
        match self {
            Self::Dark => "☀ light",
            Self::Light => "☾ dark",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

/// Resolves the configured mode, asking the terminal when set to auto.
#[must_use]
pub fn detect_variant(mode: ThemeMode) -> ThemeVariant {
    match mode {
        ThemeMode::Dark => ThemeVariant::Dark,
        ThemeMode::Light => ThemeVariant::Light,
        ThemeMode::Auto => match termbg::theme(DETECT_TIMEOUT) {
            Ok(termbg::Theme::Light) => ThemeVariant::Light,
            Ok(termbg::Theme::Dark) => ThemeVariant::Dark,
            Err(e) => {
                debug!(error = %e, "Terminal background unknown, using dark theme");
                ThemeVariant::Dark
            }
        },
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub variant: ThemeVariant,
    pub accent: Color,
    /// Page colours, foreground and background.
    pub base_style: Style,
    /// Foreground only, for text drawn over tinted panels.
    pub text_style: Style,
    pub title_style: Style,
    pub dimmed_style: Style,
    pub border_style: Style,
    pub warning_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("#9B5DE5", ThemeVariant::Dark)
    }
}

impl Theme {
    pub fn new(accent_color_str: &str, variant: ThemeVariant) -> Self {
        Self::from_color(parse_color(accent_color_str), variant)
    }

    #[must_use]
    pub fn from_color(accent: Color, variant: ThemeVariant) -> Self {
        let (fg, bg, muted) = match variant {
            ThemeVariant::Dark => (
                Color::Rgb(0xEE, 0xEE, 0xF2),
                Color::Rgb(0x16, 0x16, 0x1E),
                Color::Rgb(0x80, 0x80, 0x8C),
            ),
            ThemeVariant::Light => (
                Color::Rgb(0x1F, 0x1F, 0x28),
                Color::Rgb(0xF7, 0xF7, 0xFA),
                Color::Rgb(0x70, 0x70, 0x7C),
            ),
        };
        let accent = match variant {
            ThemeVariant::Dark => accent,
            ThemeVariant::Light => ColorConverter::clamp_lightness(accent, 0.0, 0.45),
        };

        Self {
            variant,
            accent,
            base_style: Style::default().fg(fg).bg(bg),
            text_style: Style::default().fg(fg),
            title_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            dimmed_style: Style::default().fg(muted),
            border_style: Style::default().fg(accent),
            warning_style: Style::default().fg(Color::Rgb(0xFF, 0x6B, 0x6B)),
        }
    }

    /// Same accent, other variant.
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self::from_color(self.accent, self.variant.toggled())
    }

    /// Colour of the player in seat `index`, readable on this variant.
    #[must_use]
    pub fn player_color(&self, index: usize) -> Color {
        let base = PLAYER_PALETTE[index % PLAYER_PALETTE.len()];
        match self.variant {
            ThemeVariant::Dark => base,
            ThemeVariant::Light => ColorConverter::clamp_lightness(base, 0.0, 0.42),
        }
    }

    /// Faint background wash in the player's colour.
    #[must_use]
    pub fn player_wash(&self, index: usize) -> Color {
        let base = PLAYER_PALETTE[index % PLAYER_PALETTE.len()];
        match self.variant {
            ThemeVariant::Dark => ColorConverter::tint(base, 0.45, 0.1),
            ThemeVariant::Light => ColorConverter::tint(base, 0.6, 0.93),
        }
    }

    #[must_use]
    pub fn player_style(&self, index: usize) -> Style {
        Style::default()
            .fg(self.player_color(index))
            .add_modifier(Modifier::BOLD)
    }
}

fn parse_color(s: &str) -> Color {
    if s.starts_with('#')
        && let Some((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        "purple" => PLAYER_PALETTE[4],
        _ => PLAYER_PALETTE[4],
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.trim_start_matches('#');
    if !s.is_ascii() {
        return None;
    }

    let channel = |hex: &str| u8::from_str_radix(hex, 16).ok();
    match s.len() {
        6 => Some((channel(&s[0..2])?, channel(&s[2..4])?, channel(&s[4..6])?)),
        3 => {
            let double = |i: usize| channel(&s[i..=i].repeat(2));
            Some((double(0)?, double(1)?, double(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("#FF0000"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("Orange"), Color::Indexed(208));
        assert_eq!(parse_color("Invalid"), PLAYER_PALETTE[4]);
    }

    #[test]
    fn test_palette_cycles() {
        let theme = Theme::from_color(Color::Cyan, ThemeVariant::Dark);
        assert_eq!(theme.player_color(0), Color::Rgb(0xFF, 0x6B, 0x6B));
        assert_eq!(theme.player_color(10), theme.player_color(0));
        assert_eq!(theme.player_color(9), Color::Rgb(0x2E, 0xCC, 0x71));
    }

    #[test]
    fn test_toggle_keeps_accent_on_dark_round_trip() {
        let dark = Theme::new("#4D96FF", ThemeVariant::Dark);
        let light = dark.toggled();
        assert_eq!(light.variant, ThemeVariant::Light);
        assert_eq!(light.toggled().variant, ThemeVariant::Dark);
    }

    #[test]
    fn test_fixed_modes_skip_detection() {
        assert_eq!(detect_variant(ThemeMode::Light), ThemeVariant::Light);
        assert_eq!(detect_variant(ThemeMode::Dark), ThemeVariant::Dark);
    }
}
