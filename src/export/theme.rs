/// Colour palette applied to exported drawings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub line: &'static str,
    pub box_fill: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Terminal,
    Light,
    Dark,
    Blueprint,
}

impl Theme {
    /// Parse a theme name; unknown names fall back to the light palette
    pub fn parse(name: &str) -> Self {
        let key = name.trim().to_lowercase();
        let key = key.strip_prefix("theme-").unwrap_or(&key);
        match key {
            "terminal" => Theme::Terminal,
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            "blueprint" => Theme::Blueprint,
            _ => {
                tracing::warn!(theme = name, "unknown theme, using light");
                Theme::Light
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Terminal => "terminal",
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Blueprint => "blueprint",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Terminal => Palette {
                background: "#000000",
                text: "#00FF00",
                line: "#22c55e",
                box_fill: "#000000",
            },
            Theme::Light => Palette {
                background: "#ffffff",
                text: "#000000",
                line: "#000000",
                box_fill: "#ffffff",
            },
            Theme::Dark => Palette {
                background: "#1a1a1a",
                text: "#ffffff",
                line: "#ffffff",
                box_fill: "#18181b",
            },
            Theme::Blueprint => Palette {
                background: "#002b36",
                text: "#93a1a1",
                line: "#22d3ee",
                box_fill: "#073642",
            },
        }
    }
}
