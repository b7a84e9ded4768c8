#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub color: Option<Color>,
    pub inverted: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn inverted(mut self) -> Self {
        self.inverted = true;
        self
    }

    /// Layers `other` on top of `self`: its color wins when set, inversion
    /// is kept if either side asks for it.
    pub fn merge(self, other: Self) -> Self {
        Self {
            color: other.color.or(self.color),
            inverted: self.inverted || other.inverted,
        }
    }
}
