use ratatui::style::Color;

/// Nord palette with the roles the chip picker needs.
pub struct NordTheme {
    // Polar Night
    pub nord0: Color, // #2E3440 - background, status bar
    pub nord1: Color, // #3B4252 - chips, dropdown background
    pub nord2: Color, // #434C5E - borders
    pub nord3: Color, // #4C566A - placeholder, inactive text

    // Snow Storm
    pub nord4: Color, // #D8DEE9 - main text
    pub nord6: Color, // #ECEFF4 - highlighted text

    // Frost
    pub nord8: Color,  // #88C0D0 - focused border
    pub nord9: Color,  // #81A1C1 - chip labels
    pub nord10: Color, // #5E81AC - title

    // Aurora
    pub nord11: Color, // #BF616A - chip remove control
    pub nord13: Color, // #EBCB8B - loading indicator
    pub nord14: Color, // #A3BE8C - counts
}

impl Default for NordTheme {
    fn default() -> Self {
        Self {
            nord0: Color::Rgb(46, 52, 64),
            nord1: Color::Rgb(59, 66, 82),
            nord2: Color::Rgb(67, 76, 94),
            nord3: Color::Rgb(76, 86, 106),
            nord4: Color::Rgb(216, 222, 233),
            nord6: Color::Rgb(236, 239, 244),
            nord8: Color::Rgb(136, 192, 208),
            nord9: Color::Rgb(129, 161, 193),
            nord10: Color::Rgb(94, 129, 172),
            nord11: Color::Rgb(191, 97, 106),
            nord13: Color::Rgb(235, 203, 139),
            nord14: Color::Rgb(163, 190, 140),
        }
    }
}

impl NordTheme {
    pub fn bg(&self) -> Color {
        self.nord0
    }
    pub fn bg_secondary(&self) -> Color {
        self.nord1
    }
    pub fn border(&self) -> Color {
        self.nord2
    }
    pub fn muted(&self) -> Color {
        self.nord3
    }
    pub fn fg(&self) -> Color {
        self.nord4
    }
    pub fn fg_white(&self) -> Color {
        self.nord6
    }

    // Roles
    pub fn focused_border(&self) -> Color {
        self.nord8
    }
    pub fn title(&self) -> Color {
        self.nord10
    }
    pub fn chip_bg(&self) -> Color {
        self.bg_secondary()
    }
    pub fn chip_fg(&self) -> Color {
        self.nord9
    }
    pub fn chip_close(&self) -> Color {
        self.nord11
    }
    pub fn placeholder(&self) -> Color {
        self.muted()
    }
    pub fn loading(&self) -> Color {
        self.nord13
    }
    pub fn counts(&self) -> Color {
        self.nord14
    }
}
