//! curlify library interface
//!
//! This crate converts an in-memory HTTP request into a curl command that
//! replays it from a terminal. The whole surface is one transformation:
//! build a [`Request`], call [`generate_curl_command`], and either display
//! the resulting [`CurlCommand`] or hand its tokens to a process spawner.
//!
//! ```
//! use curlify::{generate_curl_command, Request};
//!
//! let req = Request::new("PUT", "https://example.com/x?y=1")
//!     .unwrap()
//!     .header("Content-Type", "application/json");
//! let cmd = generate_curl_command(req).unwrap();
//! assert_eq!(
//!     cmd.to_string(),
//!     "curl -k -X 'PUT' -H 'Content-Type: application/json' 'https://example.com/x?y=1'",
//! );
//! ```
//!
//! Https URLs get a `-k` token so the replayed command skips certificate
//! verification; see [`generate_curl_command`] for why and what that costs.
//!
//! # Module Organization
//!
//! - [`errors`] - Error types (CurlifyError, Result)
//! - [`request`] - Input model (Request, single-use Body)
//! - [`escape`] - POSIX shell escaping
//! - [`command`] - Command generation (CurlCommand, generate_curl_command)

pub mod command;
pub mod errors;
pub mod escape;
pub mod request;

pub use command::{generate_curl_command, CurlCommand};
pub use errors::{CurlifyError, Result};
pub use request::{Body, Request};
