//! Numeric error codes shown on the message line.
//!
//! Thousands group the codes by [`ErrorSource`](super::error::ErrorSource).

// User
pub const AT_LINE_START: u32 = 1001;
pub const AT_LINE_END: u32 = 1002;
pub const AT_FIRST_LINE: u32 = 1003;
pub const AT_LAST_LINE: u32 = 1004;
pub const AT_DOCUMENT_START: u32 = 1005;
pub const AT_DOCUMENT_END: u32 = 1006;
pub const FIELD_FULL: u32 = 1007;
pub const AT_FIRST_FIELD: u32 = 1008;
pub const AT_LAST_FIELD: u32 = 1009;
pub const NO_MORE_MISSPELLINGS: u32 = 1010;
pub const NO_SUCH_SUGGESTION: u32 = 1011;
pub const NO_WORD_SELECTED: u32 = 1012;

// Param
pub const UNKNOWN_MODE: u32 = 2001;
pub const LAYOUT_OUT_OF_BOUNDS: u32 = 2002;
pub const WINDOW_TOO_SMALL: u32 = 2003;
pub const INVALID_CURSOR: u32 = 2004;

// Program
pub const MODEL_NOT_READY: u32 = 3001;
pub const OUTSIDE_VIEWPORT: u32 = 3002;
pub const OUTSIDE_REGION: u32 = 3003;
pub const SUBSCRIBERS_REMAIN: u32 = 3004;
pub const UNSUBSCRIBE_FAILED: u32 = 3005;
pub const NO_OPEN_SESSION: u32 = 3006;
pub const SESSION_ALREADY_OPEN: u32 = 3007;
pub const VIEW_NOT_SET_UP: u32 = 3008;

// Data
pub const SAVE_FAILED: u32 = 4001;
pub const LOAD_FAILED: u32 = 4002;

// Exception
pub const CONSOLE_FAILED: u32 = 5001;
pub const PANIC: u32 = 5002;
