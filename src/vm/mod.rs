//! Observable state containers.
//!
//! Each container holds private UI state behind a lock and notifies a
//! list of registered listeners after every mutation. Listeners get no
//! arguments; they re-read the state they care about through the
//! container's `snapshot()`.
//!
//! # Notification discipline
//!
//! - Mutations always complete before `notify()` runs. An operation that
//!   awaits the network notifies once when it enters its loading state
//!   and once when the result lands.
//! - Listeners run synchronously on the notifying task, in registration
//!   order.
//! - Nothing serializes concurrent operations on one container; one
//!   logical operation in flight at a time is a caller-side discipline,
//!   not something enforced here.

mod form;
mod list;
mod observe;

pub use form::{FormMode, FormPhase, FormState, FormViewModel};
pub use list::{ListPhase, ListState, ListViewModel};
pub use observe::{Listeners, Subscription};
