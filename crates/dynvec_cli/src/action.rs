use std::str::FromStr;

use crate::Error;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    PushBack,
    PushFront,
    Insert,
    Erase,
    Display,
    Add,
    Multiply,
    Compare,
    List,
    Select,
    Delete,
    Exit,
}

impl Action {
    /// In menu order. `Exit` is listed last but selected with `0`.
    pub const MENU: [Self; 13] = [
        Self::Create,
        Self::PushBack,
        Self::PushFront,
        Self::Insert,
        Self::Erase,
        Self::Display,
        Self::Add,
        Self::Multiply,
        Self::Compare,
        Self::List,
        Self::Select,
        Self::Delete,
        Self::Exit,
    ];

    pub fn from_choice(choice: usize) -> Option<Self> {
        match choice {
            0 => Some(Self::Exit),
            n => Self::MENU[..Self::MENU.len() - 1].get(n - 1).copied(),
        }
    }

    pub fn choice(&self) -> usize {
        match self {
            Self::Exit => 0,
            action => *action as usize + 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Create => "Create array",
            Self::PushBack => "Push back",
            Self::PushFront => "Push front",
            Self::Insert => "Insert at position",
            Self::Erase => "Erase at position",
            Self::Display => "Display current array",
            Self::Add => "Add two arrays",
            Self::Multiply => "Multiply two arrays",
            Self::Compare => "Compare two arrays",
            Self::List => "List all arrays",
            Self::Select => "Select current array",
            Self::Delete => "Delete array",
            Self::Exit => "Exit",
        }
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .ok()
            .and_then(Self::from_choice)
            .ok_or_else(|| Error::InvalidChoice(s.to_string()))
    }
}
