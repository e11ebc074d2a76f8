//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// SCORING & RANKING
// =============================================================================

/// Highest rank value that gets published as a winner.
///
/// Tie groups are never split: a group straddling this limit is either
/// published whole or not at all, so the published list can hold more
/// than three records.
pub const PUBLISHED_RANK_LIMIT: i32 = 3;

// =============================================================================
// API VERSIONING
// =============================================================================

/// Current API version
pub const API_VERSION: &str = "v1";

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum event name length accepted in a path parameter
pub const MAX_EVENT_NAME_LENGTH: usize = 256;

/// Maximum length of a raw score value as typed by a judge
pub const MAX_RAW_SCORE_LENGTH: u64 = 64;
