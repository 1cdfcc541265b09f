//! Constants for the interactive TUI module
//!
//! Timing defaults, layout sizes and glyphs used by the command bars and
//! pages live here so the rest of the code can refer to them by name.

// Timing constants
/// Spinner frame interval in milliseconds
pub const SPINNER_TICK_MS: u64 = 100;

/// Delay before a success notification hides itself, in milliseconds
pub const NOTIFICATION_DISMISS_MS: u64 = 2000;

/// Simulated latency of registry operations in milliseconds
pub const REGISTRY_LATENCY_MS: u64 = 600;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

// UI Layout constants
/// Height of a command bar drawn inside its rounded border
pub const BORDERED_BAR_HEIGHT: u16 = 3;

/// Horizontal space taken by the command bar border and padding
pub const BORDERED_PADDING: u16 = 2;

/// Height of the shortcut status line
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of a single form field (border + one line)
pub const FORM_FIELD_HEIGHT: u16 = 3;

// Glyphs
/// Spinner animation frames shown in front of a loading label
pub const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

pub const LOADING_GLYPH: &str = "⏳";
pub const SUCCESS_GLYPH: &str = "✅";
pub const ERROR_GLYPH: &str = "❌";

// Command bar tags
pub const SUBJECTS_BAR_TAG: &str = "subjects";
pub const DELETE_BAR_TAG: &str = "delete";
pub const SEARCH_BAR_TAG: &str = "search";
pub const CREATE_BAR_TAG: &str = "create";
pub const SCHEMA_BAR_TAG: &str = "schema";

/// Placeholder shown by the search prompt before anything is typed
pub const SEARCH_PLACEHOLDER: &str = "Search subject by name";
