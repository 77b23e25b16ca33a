use clap::ValueEnum;

/// Glyph family used by every view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Charset {
    /// Box-drawing characters
    #[default]
    Unicode,
    /// Plain 7-bit ASCII
    Ascii,
}

impl Charset {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "unicode" | "utf8" | "utf-8" => Some(Charset::Unicode),
            "ascii" => Some(Charset::Ascii),
            _ => None,
        }
    }

    pub fn tree_chars(self) -> TreeChars {
        match self {
            Charset::Unicode => TreeChars::unicode(),
            Charset::Ascii => TreeChars::ascii(),
        }
    }

    pub fn box_chars(self) -> BoxChars {
        match self {
            Charset::Unicode => BoxChars::unicode(),
            Charset::Ascii => BoxChars::ascii(),
        }
    }

    pub fn markers(self) -> Markers {
        match self {
            Charset::Unicode => Markers {
                expanded: "▾ ",
                collapsed: "▸ ",
                file: "· ",
            },
            Charset::Ascii => Markers {
                expanded: "v ",
                collapsed: "> ",
                file: "- ",
            },
        }
    }
}

/// Connector prefixes for the ASCII-art view
#[derive(Debug, Clone)]
pub struct TreeChars {
    pub branch: &'static str,
    pub last_branch: &'static str,
    pub vertical: &'static str,
    pub empty: &'static str,
}

impl TreeChars {
    pub fn unicode() -> Self {
        Self {
            branch: "├── ",
            last_branch: "└── ",
            vertical: "│   ",
            empty: "    ",
        }
    }

    pub fn ascii() -> Self {
        Self {
            branch: "|-- ",
            last_branch: "`-- ",
            vertical: "|   ",
            empty: "    ",
        }
    }
}

/// Glyphs for stems and branch lines of the box diagram
#[derive(Debug, Clone)]
pub struct BoxChars {
    pub vertical: char,
    pub horizontal: char,
    pub down_right: char,
    pub down_left: char,
    pub up_right: char,
    pub up_left: char,
    pub tee_down: char,
    pub tee_up: char,
    pub tee_right: char,
    pub tee_left: char,
    pub cross: char,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            vertical: '│',
            horizontal: '─',
            down_right: '┌',
            down_left: '┐',
            up_right: '└',
            up_left: '┘',
            tee_down: '┬',
            tee_up: '┴',
            tee_right: '├',
            tee_left: '┤',
            cross: '┼',
        }
    }

    pub fn ascii() -> Self {
        Self {
            vertical: '|',
            horizontal: '-',
            down_right: '+',
            down_left: '+',
            up_right: '+',
            up_left: '+',
            tee_down: '+',
            tee_up: '+',
            tee_right: '+',
            tee_left: '+',
            cross: '+',
        }
    }

    /// Glyph for a branch-line cell given which directions it connects
    pub fn junction(&self, up: bool, down: bool, left: bool, right: bool) -> char {
        match (up, down, left, right) {
            (_, _, false, false) => self.vertical,
            (false, false, _, _) => self.horizontal,
            (true, true, true, true) => self.cross,
            (true, true, false, true) => self.tee_right,
            (true, true, true, false) => self.tee_left,
            (false, true, true, true) => self.tee_down,
            (false, true, false, true) => self.down_right,
            (false, true, true, false) => self.down_left,
            (true, false, true, true) => self.tee_up,
            (true, false, false, true) => self.up_right,
            (true, false, true, false) => self.up_left,
        }
    }
}

/// Line markers of the indented list view
#[derive(Debug, Clone)]
pub struct Markers {
    pub expanded: &'static str,
    pub collapsed: &'static str,
    pub file: &'static str,
}
