use crate::sort::Role;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub pivot: Color, // Red
    pub scan: Color,  // Green
    pub probe: Color, // Yellow
    pub swap: Color,  // Light blue
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for the status bar
    pivot: Color::Rgb(255, 80, 80),
    scan: Color::Rgb(80, 220, 120),
    probe: Color::Rgb(255, 220, 100),
    swap: Color::Rgb(150, 200, 255),
};

impl Theme {
    pub fn role_color(&self, role: Role) -> Color {
        match role {
            Role::Pivot => self.pivot,
            Role::Scan => self.scan,
            Role::Probe => self.probe,
            Role::Swap => self.swap,
        }
    }
}

/// Rainbow gradient by value, so a sorted array reads as a smooth hue ramp
pub fn value_color(value: u32, max: u32) -> Color {
    let hue = if max == 0 {
        0.0
    } else {
        f64::from(value) / f64::from(max)
    };
    hsv_to_rgb(hue, 1.0, 1.0)
}

/// HSV (all components in `0.0..=1.0`, hue wrapping) to an RGB color
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Color {
    let h = h.rem_euclid(1.0) * 6.0;
    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    let channel = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;
    Color::Rgb(channel(r), channel(g), channel(b))
}
