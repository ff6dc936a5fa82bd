//! AWS SDK and HTTP implementations of the adapter traits.
//!
//! The SDK is async while handlers are not, so every call is driven to
//! completion with [`block_on`]. This needs the multi-threaded tokio runtime.

use std::future::Future;

pub mod http;
pub mod logs;
pub mod s3;
pub mod ses;
pub mod ssm;

pub(crate) fn block_on<F: Future>(future: F) -> F::Output {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
