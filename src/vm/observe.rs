//! Listener registration and change notification.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

type Listener = Arc<dyn Fn() + Send + Sync>;

struct ListenerTable {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// An explicit list of callback handles with stable identity.
///
/// Identity comes from a monotonically assigned id, so removal never
/// depends on pointer equality of the callbacks themselves.
pub struct Listeners {
    inner: Arc<Mutex<ListenerTable>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(ListenerTable {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Register a callback. The returned [`Subscription`] removes exactly
    /// this listener when unsubscribed.
    pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) -> Subscription {
        let mut table = self.inner.lock();
        let id = table.next_id;
        table.next_id += 1;
        table.entries.push((id, Arc::new(listener)));
        Subscription {
            table: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Invoke every currently registered listener, in registration order,
    /// synchronously on the calling task.
    ///
    /// The table lock is released before listeners run, so a listener may
    /// subscribe or unsubscribe without deadlocking; such changes take
    /// effect from the next notification.
    pub fn notify(&self) {
        let snapshot: Vec<Listener> = self
            .inner
            .lock()
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in snapshot {
            listener();
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }
}

impl Default for Listeners {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a registered listener.
///
/// Dropping the handle does not remove the listener; removal is explicit
/// via [`Subscription::unsubscribe`], which is idempotent.
pub struct Subscription {
    table: Weak<Mutex<ListenerTable>>,
    id: u64,
}

impl Subscription {
    /// Remove the listener this handle was created for. Calling this a
    /// second time, or after the container is gone, is a no-op.
    pub fn unsubscribe(&self) {
        if let Some(table) = self.table.upgrade() {
            table.lock().entries.retain(|(id, _)| *id != self.id);
        }
    }
}
