//! Fixed-width console formatting following the engine style guide.
//!
//! Every renderer is a pure function from text to a decorated `String`.
//! Nothing here writes to a terminal; callers decide where output goes.
//!
//! ```
//! let out = stylish::header("i am a header");
//! assert!(out.contains(" I AM A HEADER "));
//! ```

pub mod config;
pub mod error;
pub mod formatter;
pub mod layout;
pub mod wrap;

mod bullets;
mod headers;
mod process;
mod status;

pub use config::{ProcessEndBudget, StyleConfig, TARGET_WIDTH};
pub use error::{Error, Result};
pub use formatter::{
    bullet, bullet_list, error, header, process_end, process_start, sub_task, sub_task_fail,
    sub_task_success, warning, Formatter,
};
