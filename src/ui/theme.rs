use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub bar: Color,
    pub compared: Color,
    pub swapped: Color,
    pub settled: Color,
    pub chosen: Color,
    pub solution: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),        // Blue for keywords
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    bar: Color::Rgb(116, 199, 236),            // Sapphire for untouched bars
    compared: Color::Rgb(250, 179, 135),       // Orange for compared/highlighted
    swapped: Color::Rgb(243, 139, 168),        // Red for exchanged positions
    settled: Color::Rgb(166, 227, 161),        // Green for the rest after a swap
    chosen: Color::Rgb(148, 226, 213),         // Teal for included elements
    solution: Color::Rgb(249, 226, 175),       // Gold for a matching subset
};
