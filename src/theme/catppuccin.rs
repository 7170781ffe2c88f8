use super::palette::Palette;
use ratatui::style::Color;

pub const CATPPUCCIN_MOCHA: Palette = Palette {
    base: Color::Rgb(30, 30, 46),
    mantle: Color::Rgb(24, 24, 37),
    crust: Color::Rgb(17, 17, 27),
    text: Color::Rgb(205, 214, 244),
    subtext0: Color::Rgb(166, 173, 200),
    surface0: Color::Rgb(49, 50, 68),
    surface2: Color::Rgb(88, 91, 112),
    overlay0: Color::Rgb(108, 112, 134),
    overlay1: Color::Rgb(127, 132, 156),
    blue: Color::Rgb(137, 180, 250),
    teal: Color::Rgb(148, 226, 213),
    green: Color::Rgb(166, 227, 161),
    yellow: Color::Rgb(249, 226, 175),
    peach: Color::Rgb(250, 179, 135),
    red: Color::Rgb(243, 139, 168),
    mauve: Color::Rgb(203, 166, 247),
};

// Light counterpart. Accents are darker so they hold up on the pale base.
pub const CATPPUCCIN_LATTE: Palette = Palette {
    base: Color::Rgb(239, 241, 245),
    mantle: Color::Rgb(230, 233, 239),
    crust: Color::Rgb(220, 224, 232),
    text: Color::Rgb(76, 79, 105),
    subtext0: Color::Rgb(108, 111, 133),
    surface0: Color::Rgb(204, 208, 218),
    surface2: Color::Rgb(172, 176, 190),
    overlay0: Color::Rgb(156, 160, 176),
    overlay1: Color::Rgb(140, 143, 161),
    blue: Color::Rgb(30, 102, 245),
    teal: Color::Rgb(23, 146, 153),
    green: Color::Rgb(64, 160, 43),
    yellow: Color::Rgb(223, 142, 29),
    peach: Color::Rgb(254, 100, 11),
    red: Color::Rgb(210, 15, 57),
    mauve: Color::Rgb(136, 57, 239),
};
