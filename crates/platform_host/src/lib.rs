//! Host-neutral helpers shared by the desktop runtime and its browser entry point.
//!
//! Everything here reads the host environment (wall clock, calendar) behind a `wasm32`/native
//! split so the runtime crate stays testable off the browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod clock;
pub mod time;

pub use clock::{ClockFormat, ClockSnapshot};
pub use time::unix_time_ms_now;
