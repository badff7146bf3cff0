//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: Permission errors
/// - 3xxx: Menu errors
/// - 4xxx: Series errors
/// - 5xxx: Episode errors
/// - 6xxx: Tag errors
/// - 7xxx: Task errors
/// - 8xxx: Reward errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Menu errors (3xxx)
    Menu,
    /// Series errors (4xxx)
    Series,
    /// Episode errors (5xxx)
    Episode,
    /// Tag errors (6xxx)
    Tag,
    /// Task errors (7xxx)
    Task,
    /// Reward errors (8xxx)
    Reward,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Menu,
            4000..5000 => Self::Series,
            5000..6000 => Self::Episode,
            6000..7000 => Self::Tag,
            7000..8000 => Self::Task,
            8000..9000 => Self::Reward,
            _ => Self::System,
        }
    }

    /// Determine category from an [`ErrorCode`]
    pub fn of(code: ErrorCode) -> Self {
        Self::from_code(code.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_bands() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1002), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Permission);
        assert_eq!(ErrorCategory::from_code(3005), ErrorCategory::Menu);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Series);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Episode);
        assert_eq!(ErrorCategory::from_code(6003), ErrorCategory::Tag);
        assert_eq!(ErrorCategory::from_code(7004), ErrorCategory::Task);
        assert_eq!(ErrorCategory::from_code(8002), ErrorCategory::Reward);
        assert_eq!(ErrorCategory::from_code(9999), ErrorCategory::System);
    }

    #[test]
    fn test_of_matches_code_category() {
        assert_eq!(ErrorCategory::of(ErrorCode::MenuCycle), ErrorCategory::Menu);
        assert_eq!(
            ErrorCategory::of(ErrorCode::MenuCycle),
            ErrorCode::MenuCycle.category()
        );
    }
}
