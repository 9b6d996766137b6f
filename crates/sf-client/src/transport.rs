//! The transport capability higher-level clients are written against.

use std::future::Future;
use std::sync::Arc;

use crate::error::Result;
use crate::request::RequestBuilder;
use crate::response::RawResponse;

/// Sends a prepared request and returns the buffered response.
///
/// Implementations own connection pooling, TLS and authentication headers.
/// They must return `Ok` for every response the server produced, whatever
/// its status; `Err` is reserved for requests that never got an answer.
pub trait Transport: Send + Sync {
    /// Perform one request/response round-trip.
    fn send(&self, request: RequestBuilder) -> impl Future<Output = Result<RawResponse>> + Send;
}

/// Lets several clients share one transport.
impl<T: Transport> Transport for Arc<T> {
    fn send(&self, request: RequestBuilder) -> impl Future<Output = Result<RawResponse>> + Send {
        (**self).send(request)
    }
}
