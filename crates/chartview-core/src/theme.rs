// File: crates/chartview-core/src/theme.rs
// Summary: Light/Dark theming for chart colors.

use crate::types::Color;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid_line: Color,
    pub label_text: Color,
    pub series_line: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            grid_line: Color::from_argb(255, 40, 40, 45),
            label_text: Color::from_argb(255, 235, 235, 245),
            series_line: Color::from_argb(255, 64, 160, 255),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 250, 250, 252),
            grid_line: Color::from_argb(255, 230, 230, 235),
            label_text: Color::from_argb(255, 20, 20, 30),
            series_line: Color::from_argb(255, 32, 120, 200),
        }
    }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}
