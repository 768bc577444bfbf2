//! # Courier
//!
//! An in-process request/notification mediator for Rust.
//!
//! Callers construct a typed request and hand it to a central [`Mediator`];
//! the mediator determines from the request's declared type whether a typed
//! response or only completion is expected, resolves the single handler
//! registered for that exact request type, invokes it, and returns the
//! result. Callers depend only on a request's shape, never on a handler
//! reference.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        Mediator                          │
//! │   classify → resolve → invoke, one synchronous pass      │
//! ├───────────────────────────┬──────────────────────────────┤
//! │  SingleResolver           │  MultiResolver               │
//! │  • one handler per        │  • all subscribers of a      │
//! │    request contract       │    notification contract     │
//! ├───────────────────────────┴──────────────────────────────┤
//! │            Registry (reference container)                │
//! │  or any container implementing the resolver traits       │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use courier::prelude::*;
//!
//! struct Ping { message: String }
//! struct Pong { message: String }
//!
//! impl Request for Ping {
//!     type Response = Pong;
//! }
//!
//! struct PingHandler;
//!
//! #[async_trait]
//! impl RequestHandler<Ping> for PingHandler {
//!     async fn handle(&self, request: Ping) -> Result<Pong, HandlerError> {
//!         Ok(Pong { message: format!("{} Pong", request.message) })
//!     }
//! }
//!
//! let mut registry = Registry::new();
//! registry.register::<Ping, _>(PingHandler);
//!
//! let mediator = Mediator::builder()
//!     .container(Arc::new(registry))
//!     .build()?;
//!
//! let pong = mediator.send(Ping { message: "Ping".into() }).await?;
//! assert_eq!(pong.message, "Ping Pong");
//! ```
//!
//! ## Modules
//!
//! - [`request`] - Request/notification capabilities and classification
//! - [`handler`] - Handler capability traits
//! - [`resolver`] - Resolver capabilities consumed from the container
//! - [`registry`] - Reference container
//! - [`mediator`] - The dispatch engine
//! - [`error`] - Error taxonomy

#![deny(missing_docs)]

pub mod error;
pub mod handler;
pub mod mediator;
pub mod prelude;
pub mod registry;
pub mod request;
pub mod resolver;

pub use error::{BuildError, DispatchError, HandlerError};
pub use handler::{NotificationHandler, RequestHandler};
pub use mediator::{ErasedRequest, ErasedResponse, Mediator, MediatorBuilder};
pub use registry::Registry;
pub use request::{Notification, Request, RequestKind, TypeKey, classify};
pub use resolver::{ContractKey, Instance, MultiResolver, SingleResolver};
