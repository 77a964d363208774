//! Menu Errors
//!
//! Rejection reasons for menu operations. The view only ever sees the
//! boolean result of an add, but every reason stays distinguishable here.

/// Common result type for menu operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Menu-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum MenuError {
    /// A pizza with this exact name is already on the menu
    DuplicateName(String),
    EmptyName,
    /// Heat must be within 1..=3
    HeatOutOfRange(i32),
    /// At least two toppings are required
    TooFewToppings(usize),
    InvalidPrice(String),
    /// The session store rejected a write (quota, missing window)
    Storage(String),
}

impl MenuError {
    /// Whether the entry itself was rejected, as opposed to the menu state
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            MenuError::EmptyName
                | MenuError::HeatOutOfRange(_)
                | MenuError::TooFewToppings(_)
                | MenuError::InvalidPrice(_)
        )
    }

    /// Rejected input is routine; anything else is worth a warning
    pub fn log_level(&self) -> log::Level {
        if self.is_validation() {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

impl std::fmt::Display for MenuError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuError::DuplicateName(name) => write!(f, "A pizza named \"{}\" is already on the menu", name),
            MenuError::EmptyName => write!(f, "Name must not be empty"),
            MenuError::HeatOutOfRange(heat) => write!(f, "Heat must be between 1 and 3 (got {})", heat),
            MenuError::TooFewToppings(count) => write!(f, "Pick at least 2 toppings (got {})", count),
            MenuError::InvalidPrice(raw) => write!(f, "Price is not a number: \"{}\"", raw),
            MenuError::Storage(msg) => write!(f, "Session storage error: {}", msg),
        }
    }
}

impl std::error::Error for MenuError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_kinds() {
        assert!(MenuError::HeatOutOfRange(0).is_validation());
        assert!(MenuError::TooFewToppings(1).is_validation());
        assert!(!MenuError::DuplicateName("Diablo".to_string()).is_validation());
        assert!(!MenuError::Storage("quota".to_string()).is_validation());
    }

    #[test]
    fn test_log_level_by_kind() {
        assert_eq!(MenuError::TooFewToppings(0).log_level(), log::Level::Debug);
        assert_eq!(MenuError::InvalidPrice("x".to_string()).log_level(), log::Level::Debug);
        assert_eq!(MenuError::DuplicateName("Diablo".to_string()).log_level(), log::Level::Warn);
        assert_eq!(MenuError::Storage("quota".to_string()).log_level(), log::Level::Warn);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            MenuError::HeatOutOfRange(5).to_string(),
            "Heat must be between 1 and 3 (got 5)"
        );
    }
}
