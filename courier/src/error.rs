//! Error types for the courier mediator.

use std::any::TypeId;
use thiserror::Error;

/// Failure raised by a handler during invocation.
///
/// Handlers return whatever domain error they like, boxed. The mediator
/// passes it through to the caller untouched (no wrapping, no suppression).
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced by a single dispatch call.
///
/// A call either fully classifies, resolves, and invokes, or fails at the
/// first stage that cannot proceed. None of these are retried.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The type-erased dispatch path received a value whose type was never
    /// declared as a request. Surfaced before any resolver call.
    #[error("request type {0:?} is not dispatchable")]
    UnknownRequestType(TypeId),

    /// The single-instance resolver returned no handler for the request's
    /// handler contract.
    #[error("no handler registered for request type {request}")]
    HandlerNotFound {
        /// Type name of the request that could not be dispatched.
        request: &'static str,
    },

    /// The resolver returned an instance that does not satisfy the requested
    /// handler contract. This is a container misconfiguration; the resolver
    /// contract requires the instance to be registered under the fully
    /// parameterized contract key.
    #[error("resolved instance does not satisfy handler contract {contract}")]
    ContractViolation {
        /// Name of the violated handler contract.
        contract: &'static str,
    },

    /// The resolved handler failed. Displayed and chained verbatim.
    #[error("{0}")]
    Handler(#[source] HandlerError),
}

/// Errors raised while building a [`Mediator`](crate::Mediator).
#[derive(Debug, Error)]
pub enum BuildError {
    /// No single-instance resolver was supplied.
    #[error("mediator requires a single-instance resolver")]
    MissingSingleResolver,

    /// No multi-instance resolver was supplied.
    #[error("mediator requires a multi-instance resolver")]
    MissingMultiResolver,
}
