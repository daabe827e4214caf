use catppuccin::PALETTE;
use ratatui::style::Color;

/// Convert a catppuccin color to a ratatui color.
const fn catppuccin_to_color(c: &catppuccin::Color) -> Color {
    Color::Rgb(c.rgb.r, c.rgb.g, c.rgb.b)
}

/// Application colors.
///
/// Field names follow the Catppuccin palette, since every built-in theme
/// is derived from one of its flavors. Widgets should prefer the semantic
/// accessors (`primary()`, `border_focused()`, ...) over raw palette slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub base: Color,
    pub surface1: Color,
    pub surface2: Color,

    pub overlay0: Color,
    pub overlay1: Color,

    pub text: Color,
    pub subtext0: Color,

    pub mauve: Color,
    pub red: Color,
    pub peach: Color,
    pub blue: Color,
    pub lavender: Color,
}

impl Theme {
    const fn from_catppuccin(flavor: &catppuccin::Flavor) -> Self {
        let c = &flavor.colors;
        Self {
            base: catppuccin_to_color(&c.base),
            surface1: catppuccin_to_color(&c.surface1),
            surface2: catppuccin_to_color(&c.surface2),
            overlay0: catppuccin_to_color(&c.overlay0),
            overlay1: catppuccin_to_color(&c.overlay1),
            text: catppuccin_to_color(&c.text),
            subtext0: catppuccin_to_color(&c.subtext0),
            mauve: catppuccin_to_color(&c.mauve),
            red: catppuccin_to_color(&c.red),
            peach: catppuccin_to_color(&c.peach),
            blue: catppuccin_to_color(&c.blue),
            lavender: catppuccin_to_color(&c.lavender),
        }
    }

    /// Catppuccin Mocha theme (dark).
    #[must_use]
    pub fn catppuccin_mocha() -> Self {
        Self::from_catppuccin(&PALETTE.mocha)
    }

    /// Catppuccin Latte theme (light).
    #[must_use]
    pub fn catppuccin_latte() -> Self {
        Self::from_catppuccin(&PALETTE.latte)
    }

    /// Catppuccin Frappé theme (dark).
    #[must_use]
    pub fn catppuccin_frappe() -> Self {
        Self::from_catppuccin(&PALETTE.frappe)
    }

    /// Catppuccin Macchiato theme (dark).
    #[must_use]
    pub fn catppuccin_macchiato() -> Self {
        Self::from_catppuccin(&PALETTE.macchiato)
    }

    /// Light theme with Material blue and pink accents.
    #[must_use]
    pub fn material() -> Self {
        const PRIMARY: Color = Color::Rgb(0x19, 0x76, 0xd2);
        const SECONDARY: Color = Color::Rgb(0xdc, 0x00, 0x4e);
        Self {
            blue: PRIMARY,
            lavender: PRIMARY,
            mauve: SECONDARY,
            ..Self::catppuccin_latte()
        }
    }

    #[must_use]
    pub const fn base(&self) -> Color {
        self.base
    }



    #[must_use]
    pub const fn surface2(&self) -> Color {
        self.surface2
    }

    #[must_use]
    pub const fn overlay0(&self) -> Color {
        self.overlay0
    }

    #[must_use]
    pub const fn overlay1(&self) -> Color {
        self.overlay1
    }

    #[must_use]
    pub const fn text(&self) -> Color {
        self.text
    }

    #[must_use]
    pub const fn subtext0(&self) -> Color {
        self.subtext0
    }


    #[must_use]
    pub const fn mauve(&self) -> Color {
        self.mauve
    }


    #[must_use]
    pub const fn peach(&self) -> Color {
        self.peach
    }


    #[must_use]
    pub const fn lavender(&self) -> Color {
        self.lavender
    }

    // Semantic colors
    #[must_use]
    pub const fn primary(&self) -> Color {
        self.blue
    }

    #[must_use]
    pub const fn secondary(&self) -> Color {
        self.mauve
    }

    #[must_use]
    pub const fn error(&self) -> Color {
        self.red
    }

    // UI element colors
    #[must_use]
    pub const fn border(&self) -> Color {
        self.surface1
    }

    #[must_use]
    pub const fn border_focused(&self) -> Color {
        self.lavender
    }

    #[must_use]
    pub const fn selection_bg(&self) -> Color {
        self.surface1
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::catppuccin_mocha()
    }
}

/// Information about a theme for display in selectors.
#[derive(Debug, Clone)]
pub struct ThemeInfo {
    pub name: &'static str,
    pub theme: Theme,
}

impl ThemeInfo {
    const fn new(name: &'static str, theme: Theme) -> Self {
        Self { name, theme }
    }
}

impl std::fmt::Display for ThemeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Returns a list of all available built-in themes.
pub fn available_themes() -> Vec<ThemeInfo> {
    vec![
        ThemeInfo::new("Catppuccin Mocha", Theme::catppuccin_mocha()),
        ThemeInfo::new("Catppuccin Macchiato", Theme::catppuccin_macchiato()),
        ThemeInfo::new("Catppuccin Frappé", Theme::catppuccin_frappe()),
        ThemeInfo::new("Catppuccin Latte", Theme::catppuccin_latte()),
        ThemeInfo::new("Material", Theme::material()),
    ]
}

/// Look up a theme by name.
pub fn find_theme(name: &str) -> Option<ThemeInfo> {
    available_themes().into_iter().find(|t| t.name == name)
}

/// Look up a theme by name. Returns the default theme if not found.
pub fn theme_from_name(name: &str) -> Theme {
    find_theme(name).map(|t| t.theme).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_name() {
        assert_eq!(theme_from_name("Catppuccin Latte"), Theme::catppuccin_latte());
        assert_eq!(theme_from_name("Material"), Theme::material());
        assert_eq!(theme_from_name("does not exist"), Theme::default());
    }

    #[test]
    fn test_material_accents() {
        let theme = Theme::material();
        assert_eq!(theme.primary(), Color::Rgb(0x19, 0x76, 0xd2));
        assert_eq!(theme.secondary(), Color::Rgb(0xdc, 0x00, 0x4e));
        assert_eq!(theme.base(), Theme::catppuccin_latte().base());
    }

    #[test]
    fn test_theme_names_are_unique() {
        let themes = available_themes();
        for (i, a) in themes.iter().enumerate() {
            assert!(themes[i + 1..].iter().all(|b| b.name != a.name));
        }
    }
}
