use tabula_lib::model::{Alignment, StyleHints};

use crate::color::Color;

/// Visual style of an element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub align: Alignment,
    pub width: Option<u16>,
    pub class: Option<String>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Applies a column's style hints.
    pub fn hints(mut self, hints: &StyleHints) -> Self {
        self.align = hints.align;
        self.width = hints.width;
        self.class = hints.class.clone();
        self
    }
}
