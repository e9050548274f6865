//! Short-circuit error propagation for straight-line fallible code.
//!
//! A function installs a *boundary* once, on entry, and then calls the raise
//! primitives ([`check`], [`must`], [`attempt`], [`ensure`], ...) on each
//! fallible result without an explicit branch after every call. The first
//! failure unwinds directly to the nearest boundary, which hands it back as
//! the function's own `Err`:
//!
//! ```
//! use shortcircuit::{Result, attempt, catch, ensure, must};
//!
//! fn port(config: &str) -> Result<u16> {
//!     catch(|| {
//!         let line = attempt(config.lines().next().ok_or_else(|| {
//!             shortcircuit::Error::msg("empty config")
//!         }))
//!         .or("reading first line");
//!         let (key, value) = must(line.split_once('=').ok_or_else(|| {
//!             shortcircuit::Error::msg("expected `key=value`")
//!         }));
//!         ensure(key.trim() == "port", "first key must be `port`");
//!         Ok(must(value.trim().parse::<u16>()))
//!     })
//! }
//!
//! assert_eq!(port("port = 8080").unwrap(), 8080);
//! assert_eq!(
//!     port("").unwrap_err().to_string(),
//!     "reading first line: empty config",
//! );
//! assert_eq!(
//!     port("host = x").unwrap_err().to_string(),
//!     "first key must be `port`",
//! );
//! ```
//!
//! The signal travels through Rust's unwinding machinery but is raised with
//! [`std::panic::resume_unwind`], so the panic hook never runs for it.
//! Boundaries only ever catch their own signal: any other panic passes
//! through untouched.
//!
//! With the default `macros` feature the boundary can also be installed with
//! an attribute:
//!
//! ```
//! # #[cfg(feature = "macros")] {
//! use shortcircuit::{Result, boundary, check};
//!
//! #[boundary]
//! fn create(path: &std::path::Path) -> Result<()> {
//!     check!(std::fs::create_dir(path), "create", path.display());
//!     Ok(())
//! }
//!
//! let dir = std::env::temp_dir().join("shortcircuit-doc-create");
//! let _ = std::fs::remove_dir(&dir);
//! create(&dir).unwrap();
//! assert!(create(&dir).unwrap_err().to_string().starts_with("create "));
//! std::fs::remove_dir(&dir).unwrap();
//! # }
//! ```

#![deny(missing_docs)]

#[cfg(not(panic = "unwind"))]
compile_error!("shortcircuit transfers control by unwinding and requires `panic = \"unwind\"`");

mod attempt;
mod boundary;
mod fallible;
mod raise;

#[doc(hidden)]
pub mod macros;

pub use anyhow::{Error, Result};
pub use attempt::{Attempt, attempt, must};
pub use boundary::{catch, in_boundary, pass_to};
pub use fallible::Fallible;
pub use raise::{check, check_with, ensure, raise};

#[cfg(feature = "macros")]
pub use shortcircuit_macro::boundary;
