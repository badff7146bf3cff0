//! Unified error codes for the Slate console
//!
//! Error codes are shared between the admin backend and this console.
//! They are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Menu errors
//! - 4xxx: Series errors
//! - 5xxx: Episode errors
//! - 6xxx: Tag errors
//! - 7xxx: Task errors
//! - 8xxx: Reward errors
//! - 9xxx: System errors

use super::category::ErrorCategory;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility with the backend and the web frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// One-time password rejected
    OtpInvalid = 1005,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,
    /// Admin role required
    AdminRequired = 2003,

    // ==================== 3xxx: Menu ====================
    /// Menu entry not found
    MenuNotFound = 3001,
    /// Declared parent menu does not exist
    MenuParentNotFound = 3002,
    /// Reparenting would create a cycle
    MenuCycle = 3003,
    /// Menu still has children
    MenuHasChildren = 3004,
    /// Drop target disappeared between hover and drop
    MenuTargetVanished = 3005,

    // ==================== 4xxx: Series ====================
    /// Series not found
    SeriesNotFound = 4001,
    /// Series title already exists
    SeriesTitleExists = 4002,
    /// Tag already attached to series
    SeriesTagExists = 4003,
    /// Tag mapping not found on series
    SeriesTagNotFound = 4004,

    // ==================== 5xxx: Episode ====================
    /// Episode not found
    EpisodeNotFound = 5001,
    /// Episode number already used in series
    EpisodeNumberExists = 5002,
    /// Episode has no uploaded video
    EpisodeNoVideo = 5003,

    // ==================== 6xxx: Tag ====================
    /// Tag not found
    TagNotFound = 6001,
    /// Tag name already exists
    TagNameExists = 6002,
    /// System tags cannot be renamed or deleted
    TagSystemImmutable = 6003,

    // ==================== 7xxx: Task ====================
    /// Task not found
    TaskNotFound = 7001,
    /// Task is not active
    TaskInactive = 7002,
    /// Task group not found
    TaskGroupNotFound = 7003,
    /// Task type not found
    TaskTypeNotFound = 7004,

    // ==================== 8xxx: Reward ====================
    /// Reward type not found
    RewardNotFound = 8001,
    /// Task reward binding not found
    TaskRewardNotFound = 8002,
    /// Reward value out of range
    RewardValueInvalid = 8003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Upstream network error
    NetworkError = 9003,
    /// Configuration error
    ConfigError = 9004,
    /// Request timed out
    Timeout = 9005,
}

impl ErrorCode {
    /// Numeric value of this error code
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Category this code belongs to
    pub fn category(self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }

    /// Default human-readable message for this code
    pub fn message(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::InvalidFormat => "Invalid format",
            Self::RequiredField => "Required field missing",
            Self::ValueOutOfRange => "Value out of range",

            Self::NotAuthenticated => "Not authenticated",
            Self::InvalidCredentials => "Invalid username or password",
            Self::TokenExpired => "Token has expired",
            Self::TokenInvalid => "Token is invalid",
            Self::OtpInvalid => "One-time password rejected",

            Self::PermissionDenied => "Permission denied",
            Self::RoleRequired => "Role required",
            Self::AdminRequired => "Admin role required",

            Self::MenuNotFound => "Menu entry not found",
            Self::MenuParentNotFound => "Parent menu not found",
            Self::MenuCycle => "Menu move would create a cycle",
            Self::MenuHasChildren => "Menu still has children",
            Self::MenuTargetVanished => "Drop target no longer exists",

            Self::SeriesNotFound => "Series not found",
            Self::SeriesTitleExists => "Series title already exists",
            Self::SeriesTagExists => "Tag already attached to series",
            Self::SeriesTagNotFound => "Tag mapping not found",

            Self::EpisodeNotFound => "Episode not found",
            Self::EpisodeNumberExists => "Episode number already used",
            Self::EpisodeNoVideo => "Episode has no video",

            Self::TagNotFound => "Tag not found",
            Self::TagNameExists => "Tag name already exists",
            Self::TagSystemImmutable => "System tags cannot be modified",

            Self::TaskNotFound => "Task not found",
            Self::TaskInactive => "Task is not active",
            Self::TaskGroupNotFound => "Task group not found",
            Self::TaskTypeNotFound => "Task type not found",

            Self::RewardNotFound => "Reward type not found",
            Self::TaskRewardNotFound => "Task reward not found",
            Self::RewardValueInvalid => "Reward value out of range",

            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
            Self::NetworkError => "Upstream network error",
            Self::ConfigError => "Configuration error",
            Self::Timeout => "Request timed out",
        }
    }

    /// HTTP status code this error maps to
    pub fn http_status(self) -> StatusCode {
        match self.category() {
            ErrorCategory::General => match self {
                Self::Success => StatusCode::OK,
                Self::NotFound => StatusCode::NOT_FOUND,
                Self::AlreadyExists => StatusCode::CONFLICT,
                _ => StatusCode::BAD_REQUEST,
            },
            ErrorCategory::Auth => StatusCode::UNAUTHORIZED,
            ErrorCategory::Permission => StatusCode::FORBIDDEN,
            ErrorCategory::Menu
            | ErrorCategory::Series
            | ErrorCategory::Episode
            | ErrorCategory::Tag
            | ErrorCategory::Task
            | ErrorCategory::Reward => match self {
                Self::MenuNotFound
                | Self::SeriesNotFound
                | Self::SeriesTagNotFound
                | Self::EpisodeNotFound
                | Self::TagNotFound
                | Self::TaskNotFound
                | Self::TaskGroupNotFound
                | Self::TaskTypeNotFound
                | Self::RewardNotFound
                | Self::TaskRewardNotFound => StatusCode::NOT_FOUND,
                Self::SeriesTitleExists
                | Self::SeriesTagExists
                | Self::EpisodeNumberExists
                | Self::TagNameExists => StatusCode::CONFLICT,
                _ => StatusCode::BAD_REQUEST,
            },
            ErrorCategory::System => match self {
                Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = u16;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            6 => Self::InvalidFormat,
            7 => Self::RequiredField,
            8 => Self::ValueOutOfRange,

            1001 => Self::NotAuthenticated,
            1002 => Self::InvalidCredentials,
            1003 => Self::TokenExpired,
            1004 => Self::TokenInvalid,
            1005 => Self::OtpInvalid,

            2001 => Self::PermissionDenied,
            2002 => Self::RoleRequired,
            2003 => Self::AdminRequired,

            3001 => Self::MenuNotFound,
            3002 => Self::MenuParentNotFound,
            3003 => Self::MenuCycle,
            3004 => Self::MenuHasChildren,
            3005 => Self::MenuTargetVanished,

            4001 => Self::SeriesNotFound,
            4002 => Self::SeriesTitleExists,
            4003 => Self::SeriesTagExists,
            4004 => Self::SeriesTagNotFound,

            5001 => Self::EpisodeNotFound,
            5002 => Self::EpisodeNumberExists,
            5003 => Self::EpisodeNoVideo,

            6001 => Self::TagNotFound,
            6002 => Self::TagNameExists,
            6003 => Self::TagSystemImmutable,

            7001 => Self::TaskNotFound,
            7002 => Self::TaskInactive,
            7003 => Self::TaskGroupNotFound,
            7004 => Self::TaskTypeNotFound,

            8001 => Self::RewardNotFound,
            8002 => Self::TaskRewardNotFound,
            8003 => Self::RewardValueInvalid,

            9001 => Self::InternalError,
            9002 => Self::DatabaseError,
            9003 => Self::NetworkError,
            9004 => Self::ConfigError,
            9005 => Self::Timeout,

            other => return Err(other),
        };
        Ok(code)
    }
}
