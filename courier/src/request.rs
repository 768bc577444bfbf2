//! Request and notification capabilities plus runtime classification.
//!
//! A request declares its response shape through the [`Request::Response`]
//! associated type. Void requests declare `Response = ()`; everything else is
//! a request/response pair. [`classify`] turns that declaration into a
//! runtime [`RequestKind`] tag without any reflection: the tag is a pure
//! function of the type.

use std::any::{TypeId, type_name};
use std::fmt;

/// A value representing an intent to be handled.
///
/// Implement this for every message the mediator should route. The
/// associated `Response` type is the single source of truth for
/// classification:
///
/// - `type Response = ()` — fire-and-forget; `send` completes with no value.
/// - `type Response = Pong` — request/response; `send` returns a `Pong`.
///
/// # Example
///
/// ```rust,ignore
/// struct Ping {
///     message: String,
/// }
///
/// impl Request for Ping {
///     type Response = Pong;
/// }
/// ```
pub trait Request: Send + 'static {
    /// Response produced by this request's handler. Use `()` for requests
    /// that only signal completion.
    type Response: Send + 'static;
}

/// A fan-out event delivered to every subscribed handler.
///
/// Unlike requests, notifications have no response and may have any number
/// of handlers (including zero). They are resolved through the
/// multi-instance resolver.
pub trait Notification: Send + Sync + 'static {}

/// Identity of a concrete type: its [`TypeId`] plus a human-readable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Build the key for `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The underlying [`TypeId`].
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The type's name, as reported by [`std::any::type_name`].
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Classification tag for a request type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// The request completes without producing a response.
    Void,

    /// The request produces a response of the tagged type.
    Response {
        /// Identity of the concrete response type.
        response: TypeKey,
    },
}

impl RequestKind {
    /// Whether this is the fire-and-forget classification.
    pub fn is_void(&self) -> bool {
        matches!(self, RequestKind::Void)
    }

    /// The response type key, if this is a request/response classification.
    pub fn response(&self) -> Option<TypeKey> {
        match self {
            RequestKind::Void => None,
            RequestKind::Response { response } => Some(*response),
        }
    }
}

/// Classify a request type.
///
/// Pure function of the type: the same `R` always yields the same tag. The
/// typed capability's response parameter is authoritative — a request whose
/// response parameter is the unit type satisfies both the void and the
/// parameterized shape, and the typed reading wins, reported as [`Void`]
/// (unit carries no value). A non-unit response is never reported as `Void`.
///
/// [`Void`]: RequestKind::Void
pub fn classify<R: Request>() -> RequestKind {
    if TypeId::of::<R::Response>() == TypeId::of::<()>() {
        RequestKind::Void
    } else {
        RequestKind::Response {
            response: TypeKey::of::<R::Response>(),
        }
    }
}
