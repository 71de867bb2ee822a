use std::fmt;

/// Element types a menu user can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `i32`
    Int,
    /// `i64`
    Long,
    /// `f32`
    Float,
    /// `f64`
    Double,
    /// `char`
    Char,
    /// `String`
    Text,
}

impl ElementKind {
    /// In menu order, choice `1` first.
    pub const ALL: [Self; 6] = [
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Char,
        Self::Text,
    ];

    /// Maps a 1-based menu choice to a kind.
    pub fn from_choice(choice: usize) -> Option<Self> {
        Self::ALL.get(choice.checked_sub(1)?).copied()
    }

    pub fn choice(&self) -> usize {
        *self as usize + 1
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Char => "char",
            Self::Text => "string",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
