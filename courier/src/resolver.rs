//! Resolver capabilities consumed from the surrounding container.
//!
//! The mediator never constructs handlers. It asks an injected
//! [`SingleResolver`] for the one instance satisfying a handler contract, or
//! an injected [`MultiResolver`] for every subscribed instance. Both are
//! narrow lookup interfaces so the engine stays fully unit-testable with
//! stub resolvers; [`Registry`](crate::Registry) is the in-crate reference
//! implementation.

use crate::handler::{NotificationHandler, RequestHandler};
use crate::request::{Notification, Request};
use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::sync::Arc;

/// A type-erased handler instance produced by a resolver.
///
/// By convention the erased value is the `Arc`'d trait object of the
/// requested contract: `Arc<dyn RequestHandler<R>>` for
/// [`ContractKey::request_handler`], `Arc<dyn NotificationHandler<N>>` for
/// [`ContractKey::notification_handler`]. The mediator downcasts to that
/// shape and treats anything else as a contract violation.
pub type Instance = Arc<dyn Any + Send + Sync>;

/// Identity of a fully parameterized handler contract.
///
/// Resolution is keyed by the contract type itself (for example
/// `dyn RequestHandler<Ping>`, "handler of Ping producing Pong"), not by the
/// request type, so a container can hold request and notification handlers
/// for the same message type side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContractKey {
    id: TypeId,
    name: &'static str,
}

impl ContractKey {
    /// Contract key for the unique request handler of `R`.
    pub fn request_handler<R: Request>() -> Self {
        Self {
            id: TypeId::of::<dyn RequestHandler<R>>(),
            name: type_name::<dyn RequestHandler<R>>(),
        }
    }

    /// Contract key for the notification handlers of `N`.
    pub fn notification_handler<N: Notification>() -> Self {
        Self {
            id: TypeId::of::<dyn NotificationHandler<N>>(),
            name: type_name::<dyn NotificationHandler<N>>(),
        }
    }

    /// The contract's [`TypeId`].
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The contract's type name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for ContractKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Lookup capability returning at most one instance per contract.
///
/// # Preconditions
///
/// The implementation guarantees at most one conforming instance per
/// contract; registration of duplicates is a container concern, not
/// detectable through this interface. Implementations must be safe for
/// concurrent read access — the mediator calls them from any number of
/// in-flight dispatches.
pub trait SingleResolver: Send + Sync {
    /// Resolve the single instance registered under `contract`, if any.
    fn resolve_one(&self, contract: ContractKey) -> Option<Instance>;
}

/// Lookup capability returning every instance registered for a contract.
///
/// Used for notification fan-out. The same concurrency precondition as
/// [`SingleResolver`] applies.
pub trait MultiResolver: Send + Sync {
    /// Resolve all instances registered under `contract`, in registration
    /// order. An unknown contract yields an empty sequence.
    fn resolve_all(&self, contract: ContractKey) -> Vec<Instance>;
}
