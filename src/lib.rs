//! Print a greeting obtained from a C function.
//!
//! The C side lives in `src/hello.c` and exposes a single routine,
//! `Hello_GetMessage`, which hands back either a pointer to a NUL-terminated
//! string or null. This crate links that routine, copies the string out into
//! a [`Greeting`], and writes it to standard output followed by a fixed line
//! and the program's own invocation path.
//!
//! ```text
//! $ run-hello
//! Rust gets: Hello from C!
//! Hello World from Rust!
//! Usage: run-hello
//! ```
//!
//! If the C routine returns null, only the diagnostic line is written:
//!
//! ```text
//! Error: C-function gave back null!
//! ```
//!
//! The native call sits behind the [`GreetingSource`] trait so the printing
//! logic can be driven by any source, including a plain closure:
//!
//! ```
//! use greeter_bridge::{Greeter, Greeting, Outcome};
//!
//! let greeter = Greeter::new(|| Some(Greeting::from("Hi there")));
//! let mut out = Vec::new();
//! let outcome = greeter.run_greeting(&["prog"], &mut out).unwrap();
//!
//! assert_eq!(outcome, Outcome::PrintedSuccess);
//! assert_eq!(
//!     out,
//!     b"Rust gets: Hi there\nHello World from Rust!\nUsage: prog\n",
//! );
//! ```

#![deny(improper_ctypes)]

mod bridge;
mod error;
mod greeting;
pub mod logging;
mod native;
mod source;

pub use crate::bridge::{run, Greeter, Outcome};
pub use crate::error::GreetingError;
pub use crate::greeting::Greeting;
pub use crate::native::{greeting_from_ptr, NativeGreeter};
pub use crate::source::GreetingSource;
