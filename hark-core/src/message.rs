//! Message trait and the [`Envelope`] payload wrapper.

use std::ops::Deref;

/// A marker trait for payloads carried by an emitter.
///
/// Messages must be `Send + Sync + 'static`: one emitter can be driven from
/// many threads, and listeners observe the same message by shared reference.
///
/// # Example
///
/// ```rust
/// use hark_core::Message;
///
/// struct UserLoggedIn { user_id: u64 }
///
/// impl Message for UserLoggedIn {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Message",
    label = "must be `Send + Sync + 'static`",
    note = "All payloads passed through hark must be thread-safe and static."
)]
pub trait Message: Send + Sync + 'static {}

// Common Message implementations
impl Message for () {}
impl Message for bool {}
impl Message for i32 {}
impl Message for i64 {}
impl Message for u32 {}
impl Message for u64 {}
impl Message for usize {}
impl Message for String {}
impl Message for &'static str {}
impl<T: Message> Message for Box<T> {}
impl<T: Message> Message for std::sync::Arc<T> {}
impl<T: Message> Message for Vec<T> {}
impl<T: Message> Message for Option<T> {}
impl<T: Message, E: Message> Message for Result<T, E> {}

/// A transient envelope carrying one payload value.
///
/// Useful when the payload type is a plain value (a string, a number) and a
/// dedicated message type would be noise.
///
/// ```rust
/// use hark_core::Envelope;
///
/// let msg = Envelope::new("x");
/// assert_eq!(msg.data, "x");
/// assert_eq!(*msg, "x");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Envelope<D> {
    /// The payload.
    pub data: D,
}

impl<D> Envelope<D> {
    /// Wrap `data` in an envelope.
    pub const fn new(data: D) -> Self {
        Self { data }
    }

    /// Unwrap the payload.
    pub fn into_inner(self) -> D {
        self.data
    }
}

impl<D> From<D> for Envelope<D> {
    fn from(data: D) -> Self {
        Self::new(data)
    }
}

impl<D> Deref for Envelope<D> {
    type Target = D;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<D: Send + Sync + 'static> Message for Envelope<D> {}
