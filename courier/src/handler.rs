//! Handler capability traits.
//!
//! A handler is the unique component registered to process a specific
//! request type. Handlers take `&self` because they are shared,
//! container-owned services; a single instance may serve any number of
//! concurrent dispatch calls.

use crate::error::HandlerError;
use crate::request::{Notification, Request};
use async_trait::async_trait;

/// Processes requests of type `R`, producing `R::Response`.
///
/// Exactly one handler per concrete request type should be resolvable; the
/// mediator asks the single-instance resolver for `dyn RequestHandler<R>`
/// and invokes it without the caller ever naming the handler.
///
/// # Example
///
/// ```rust,ignore
/// struct PingHandler;
///
/// #[async_trait]
/// impl RequestHandler<Ping> for PingHandler {
///     async fn handle(&self, request: Ping) -> Result<Pong, HandlerError> {
///         Ok(Pong {
///             message: format!("{} Pong", request.message),
///         })
///     }
/// }
/// ```
///
/// # Error Handling
///
/// Errors returned here reach the caller of `send` untouched, wrapped only
/// in the `DispatchError::Handler` variant whose display and source chain
/// delegate to the original error.
#[async_trait]
pub trait RequestHandler<R: Request>: Send + Sync {
    /// Handle a request and produce its response.
    ///
    /// Suspension (I/O, timers) belongs here; the mediator is a transparent
    /// pass-through and imposes no timeout or cancellation of its own.
    async fn handle(&self, request: R) -> Result<R::Response, HandlerError>;
}

/// Processes notifications of type `N`.
///
/// Any number of handlers may subscribe to the same notification type; the
/// mediator fans a published notification out to all of them through the
/// multi-instance resolver.
#[async_trait]
pub trait NotificationHandler<N: Notification>: Send + Sync {
    /// Handle one published notification.
    ///
    /// The notification is shared across subscribers, hence the reference.
    /// A returned error aborts the remainder of the fan-out.
    async fn handle(&self, notification: &N) -> Result<(), HandlerError>;
}
