//! Structured logging facility for PaddleX
//!
//! One initialization point (`init(profile)`) and three macros that every
//! storage and HTTP operation uses to bracket its work:
//!
//! - `log_op_start!(op, ...)` - operation start
//! - `log_op_end!(op, duration_ms = ...)` - successful end
//! - `log_op_error!(op, err, duration_ms = ...)` - failed end, with the
//!   stable error code of `err`
//!
//! ```rust
//! use paddlex_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
