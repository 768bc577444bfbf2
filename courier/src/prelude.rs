//! Common imports for the courier mediator.
//!
//! This module provides a convenient prelude for importing commonly used
//! types and traits.

pub use crate::error::{BuildError, DispatchError, HandlerError};
pub use crate::handler::{NotificationHandler, RequestHandler};
pub use crate::mediator::{ErasedRequest, ErasedResponse, Mediator, MediatorBuilder};
pub use crate::registry::Registry;
pub use crate::request::{Notification, Request, RequestKind, TypeKey, classify};
pub use crate::resolver::{ContractKey, Instance, MultiResolver, SingleResolver};

// Re-export commonly used external types
pub use async_trait::async_trait;
pub use std::sync::Arc;

/// Result type for dispatch calls; the error parameter can be overridden,
/// which handler implementations use for [`HandlerError`].
pub type Result<T, E = DispatchError> = std::result::Result<T, E>;
