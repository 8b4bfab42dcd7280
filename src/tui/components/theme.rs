use ratatui::style::Color;

pub const THEME_BG: Color = Color::Rgb(20, 20, 25); // Dark slate/blue
pub const THEME_FG: Color = Color::Rgb(220, 220, 240); // Soft white
pub const THEME_ACCENT: Color = Color::Rgb(213, 58, 49); // Player red
pub const THEME_HIGHLIGHT: Color = Color::Rgb(100, 200, 255); // Cyan-ish
pub const THEME_BORDER: Color = Color::Rgb(80, 80, 120); // Muted blue-purple
