//! Lexer configuration.

/// What the number reader does with a `.` that is not followed by a digit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TrailingDot {
    /// `3.` lexes as `Number("3")` and the `.` is dispatched on its own.
    #[default]
    Exclude,
    /// `3.` lexes as `Number("3.")`.
    Include,
}

impl TrailingDot {
    /// Parse the CLI spelling (`include` / `exclude`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "exclude" => Some(TrailingDot::Exclude),
            "include" => Some(TrailingDot::Include),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LexConfig {
    pub trailing_dot: TrailingDot,
}

impl LexConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_trailing_dot(mut self, trailing_dot: TrailingDot) -> Self {
        self.trailing_dot = trailing_dot;
        self
    }
}
