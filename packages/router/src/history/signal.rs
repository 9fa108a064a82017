use std::rc::{Rc, Weak};

use super::Entry;

type Observer = dyn Fn(&Entry);

/// Keeps a tail observer registered.
///
/// Dropping the subscription unregisters the observer. It is pruned from the back stack on the
/// next notification.
#[must_use = "dropping a Subscription unregisters its observer"]
pub struct Subscription {
    _observer: Rc<Observer>,
}

impl Subscription {
    /// Unregister the observer. Same as dropping the subscription.
    pub fn unsubscribe(self) {}
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

/// Observers of the back stack tail.
#[derive(Default)]
pub(crate) struct TailObservers {
    observers: Vec<Weak<Observer>>,
}

impl TailObservers {
    /// Register `observer` and immediately hand it the current tail.
    pub(crate) fn subscribe(
        &mut self,
        tail: &Entry,
        observer: impl Fn(&Entry) + 'static,
    ) -> Subscription {
        let observer: Rc<Observer> = Rc::new(observer);
        observer(tail);
        self.observers.push(Rc::downgrade(&observer));
        Subscription {
            _observer: observer,
        }
    }

    /// Hand the new tail to every live observer, in subscription order.
    ///
    /// Also sorts out the observers whose subscription has been dropped since the last
    /// notification.
    pub(crate) fn notify(&mut self, tail: &Entry) {
        self.observers.retain(|observer| match observer.upgrade() {
            Some(observer) => {
                observer(tail);
                true
            }
            None => false,
        });
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }
}
