use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub title: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub today: Color,
    pub booking_marker: Color,
    pub weekday_header: Color,
    pub inactive_day: Color,
    pub range_bg: Color,
    pub move_preview: Color,
    pub status_bar: Color,
    pub help_title: Color,
    pub help_section: Color,
    pub error: Color,
    pub notice: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            title: Color::Cyan,
            selected_bg: Color::Blue,
            selected_fg: Color::White,
            today: Color::Green,
            booking_marker: Color::Cyan,
            weekday_header: Color::Yellow,
            inactive_day: Color::DarkGray,
            range_bg: Color::DarkGray,
            move_preview: Color::Magenta,
            status_bar: Color::White,
            help_title: Color::Cyan,
            help_section: Color::Yellow,
            error: Color::Red,
            notice: Color::Green,
        }
    }

    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            title: Color::Rgb(251, 184, 108),
            selected_bg: Color::Rgb(60, 56, 54),
            selected_fg: Color::Rgb(235, 219, 178),
            today: Color::Rgb(184, 187, 38),
            booking_marker: Color::Rgb(142, 192, 124),
            weekday_header: Color::Rgb(254, 128, 25),
            inactive_day: Color::Rgb(146, 131, 116),
            range_bg: Color::Rgb(80, 73, 69),
            move_preview: Color::Rgb(211, 134, 155),
            status_bar: Color::Rgb(235, 219, 178),
            help_title: Color::Rgb(251, 184, 108),
            help_section: Color::Rgb(254, 128, 25),
            error: Color::Rgb(251, 73, 52),
            notice: Color::Rgb(184, 187, 38),
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            title: Color::Rgb(136, 192, 208),
            selected_bg: Color::Rgb(59, 66, 82),
            selected_fg: Color::Rgb(236, 239, 244),
            today: Color::Rgb(163, 190, 140),
            booking_marker: Color::Rgb(129, 161, 193),
            weekday_header: Color::Rgb(235, 203, 139),
            inactive_day: Color::Rgb(76, 86, 106),
            range_bg: Color::Rgb(67, 76, 94),
            move_preview: Color::Rgb(180, 142, 173),
            status_bar: Color::Rgb(216, 222, 233),
            help_title: Color::Rgb(136, 192, 208),
            help_section: Color::Rgb(235, 203, 139),
            error: Color::Rgb(191, 97, 106),
            notice: Color::Rgb(163, 190, 140),
        }
    }

    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            title: Color::Rgb(139, 233, 253),
            selected_bg: Color::Rgb(68, 71, 90),
            selected_fg: Color::Rgb(248, 248, 242),
            today: Color::Rgb(80, 250, 123),
            booking_marker: Color::Rgb(255, 121, 198),
            weekday_header: Color::Rgb(241, 250, 140),
            inactive_day: Color::Rgb(98, 114, 164),
            range_bg: Color::Rgb(98, 114, 164),
            move_preview: Color::Rgb(189, 147, 249),
            status_bar: Color::Rgb(248, 248, 242),
            help_title: Color::Rgb(139, 233, 253),
            help_section: Color::Rgb(241, 250, 140),
            error: Color::Rgb(255, 85, 85),
            notice: Color::Rgb(80, 250, 123),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark".to_string(),
            title: Color::Rgb(38, 139, 210),
            selected_bg: Color::Rgb(7, 54, 66),
            selected_fg: Color::Rgb(147, 161, 161),
            today: Color::Rgb(133, 153, 0),
            booking_marker: Color::Rgb(42, 161, 152),
            weekday_header: Color::Rgb(181, 137, 0),
            inactive_day: Color::Rgb(88, 110, 117),
            range_bg: Color::Rgb(88, 110, 117),
            move_preview: Color::Rgb(211, 54, 130),
            status_bar: Color::Rgb(147, 161, 161),
            help_title: Color::Rgb(38, 139, 210),
            help_section: Color::Rgb(181, 137, 0),
            error: Color::Rgb(220, 50, 47),
            notice: Color::Rgb(133, 153, 0),
        }
    }

    pub fn monokai() -> Self {
        Self {
            name: "monokai".to_string(),
            title: Color::Rgb(102, 217, 239),
            selected_bg: Color::Rgb(73, 72, 62),
            selected_fg: Color::Rgb(248, 248, 240),
            today: Color::Rgb(166, 226, 46),
            booking_marker: Color::Rgb(249, 38, 114),
            weekday_header: Color::Rgb(230, 219, 116),
            inactive_day: Color::Rgb(117, 113, 94),
            range_bg: Color::Rgb(117, 113, 94),
            move_preview: Color::Rgb(174, 129, 255),
            status_bar: Color::Rgb(248, 248, 240),
            help_title: Color::Rgb(102, 217, 239),
            help_section: Color::Rgb(230, 219, 116),
            error: Color::Rgb(249, 38, 114),
            notice: Color::Rgb(166, 226, 46),
        }
    }

    pub fn get_by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "gruvbox" => Self::gruvbox(),
            "nord" => Self::nord(),
            "dracula" => Self::dracula(),
            "solarized-dark" | "solarized" => Self::solarized_dark(),
            "monokai" => Self::monokai(),
            _ => Self::default_theme(),
        }
    }

    pub fn available_themes() -> Vec<&'static str> {
        vec!["default", "gruvbox", "nord", "dracula", "solarized-dark", "monokai"]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

/// Parses a booking colour: anything `Color` parses, plus `#rgb` and `purple`.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        if hex.len() == 3 {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
            return Some(Color::Rgb(digit(0)?, digit(1)?, digit(2)?));
        }
    }

    if value.eq_ignore_ascii_case("purple") {
        return Some(Color::Magenta);
    }

    value.parse::<Color>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_falls_back_to_default() {
        assert_eq!(Theme::get_by_name("sepia"), Theme::default_theme());
    }

    #[test]
    fn theme_lookup_ignores_case() {
        assert_eq!(Theme::get_by_name("Nord").name, "nord");
        assert_eq!(Theme::get_by_name("solarized").name, "solarized-dark");
    }

    #[test]
    fn every_listed_theme_resolves_to_itself() {
        for name in Theme::available_themes() {
            assert_eq!(Theme::get_by_name(name).name, name);
        }
    }

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(parse_color("#1a73e8"), Some(Color::Rgb(0x1a, 0x73, 0xe8)));
        assert_eq!(parse_color("#fff"), Some(Color::Rgb(255, 255, 255)));
    }

    #[test]
    fn parses_named_colors() {
        assert_eq!(parse_color("Purple"), Some(Color::Magenta));
        assert_eq!(parse_color("green"), Some(Color::Green));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert_eq!(parse_color("#12"), None);
        assert_eq!(parse_color("#zzzzzz"), None);
        assert_eq!(parse_color("chartreuse-ish"), None);
    }

    #[test]
    fn rejects_signed_hex_digits() {
        assert_eq!(parse_color("#+f+f+f"), None);
        assert_eq!(parse_color("#+fffff"), None);
        assert_eq!(parse_color("#-1a2b3"), None);
    }
}
