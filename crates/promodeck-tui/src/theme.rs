use ratatui::style::Color;

/// Runtime color palette (Gruvbox Material dark)
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey: Color,

    // Palette colors
    pub yellow: Color,
    pub green: Color,
    pub blue: Color,
    pub orange: Color,

    // Semantic colors
    /// Still-hidden blocks waiting for their reveal
    pub concealed: Color,
    /// Counter values and section headings
    pub value: Color,
    /// Selected nav link and other highlights
    pub accent: Color,
    /// Hover highlight on tooltip regions
    pub hover: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
            grey: Color::Rgb(0x92, 0x83, 0x74),
            yellow: Color::Rgb(0xd8, 0xa6, 0x57),
            green: Color::Rgb(0xa9, 0xb6, 0x65),
            blue: Color::Rgb(0x7d, 0xae, 0xa3),
            orange: Color::Rgb(0xe7, 0x8a, 0x4e),
            concealed: Color::Rgb(0x5a, 0x52, 0x4c),
            value: Color::Rgb(0xd8, 0xa6, 0x57),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            hover: Color::Rgb(0xdd, 0xc7, 0xa1),
        }
    }
}
