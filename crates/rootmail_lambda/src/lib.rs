//! AWS-oriented adapters and handlers for the rootmail workflow.
//!
//! Handlers are synchronous and talk to the outside world only through the
//! traits in [`adapters`]; [`aws`] implements those traits on top of the AWS
//! SDK and `reqwest`, and the binaries under `src/bin` wire both into
//! `lambda_runtime`.

pub mod adapters;
pub mod aws;
pub mod cleanup;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
