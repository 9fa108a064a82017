use std::iter;

use tracing::trace;

use super::{signal::TailObservers, Entry, Subscription};

/// The navigation history: an ordered sequence of entries whose tail is the visible screen.
///
/// The root is always the start destination, so the stack can never be empty. Entries are
/// appended and removed at the tail only; the whole stack above the root may also be replaced
/// in one step. Every mutation is committed before observers see the new tail.
///
/// Only the [`Navigator`](crate::prelude::Navigator) mutates a back stack. Everybody else gets a
/// shared reference.
#[derive(Default)]
pub struct BackStack {
    root: RootEntry,
    above_root: Vec<Entry>,
    observers: TailObservers,
}

struct RootEntry(Entry);

impl Default for RootEntry {
    fn default() -> Self {
        Self(Entry::root())
    }
}

impl BackStack {
    /// A back stack holding only the start destination.
    pub fn new() -> Self {
        Self::default()
    }

    /// The visible entry.
    pub fn tail(&self) -> &Entry {
        self.above_root.last().unwrap_or(&self.root.0)
    }

    /// The root entry.
    pub fn root(&self) -> &Entry {
        &self.root.0
    }

    /// Every entry, root first.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        iter::once(&self.root.0).chain(&self.above_root)
    }

    /// Number of entries, including the root.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.above_root.len() + 1
    }

    /// Whether there is an entry to go back to.
    pub fn can_go_back(&self) -> bool {
        !self.above_root.is_empty()
    }

    /// Observe the tail.
    ///
    /// `observer` is called right away with the current tail and then after every mutation,
    /// until the returned [`Subscription`] is dropped.
    pub fn observe_tail(&mut self, observer: impl Fn(&Entry) + 'static) -> Subscription {
        let tail = self.above_root.last().unwrap_or(&self.root.0);
        self.observers.subscribe(tail, observer)
    }

    pub(crate) fn push(&mut self, entry: Entry) {
        trace!("push {entry}");
        self.above_root.push(entry);
        self.notify();
    }

    /// Remove the tail. `None` at the root, in which case nothing is notified.
    pub(crate) fn pop(&mut self) -> Option<Entry> {
        let popped = self.above_root.pop()?;
        trace!("pop {popped}");
        self.notify();
        Some(popped)
    }

    pub(crate) fn reset_to_root(&mut self) {
        trace!("reset to root");
        self.above_root.clear();
        self.notify();
    }

    /// Replace everything above the root in a single mutation.
    pub(crate) fn replace_above_root(&mut self, entries: Vec<Entry>) {
        trace!("replace {} entries above root", entries.len());
        self.above_root = entries;
        self.notify();
    }

    fn notify(&mut self) {
        let tail = self.above_root.last().unwrap_or(&self.root.0);
        self.observers.notify(tail);
    }
}

impl PartialEq for BackStack {
    fn eq(&self, other: &Self) -> bool {
        self.entries().eq(other.entries())
    }
}

impl std::fmt::Debug for BackStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::{routable::Screen, route_definition::ArgumentBinding};

    fn entry(screen: Screen) -> Entry {
        Entry::new(screen, ArgumentBinding::new()).unwrap()
    }

    fn account(name: &str) -> Entry {
        Entry::new(
            Screen::SingleAccount,
            ArgumentBinding::new().with("name", name),
        )
        .unwrap()
    }

    #[test]
    fn starts_at_root() {
        let stack = BackStack::new();
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.tail(), &Entry::root());
        assert!(!stack.can_go_back());
    }

    #[test]
    fn push_and_pop_at_tail() {
        let mut stack = BackStack::new();
        stack.push(entry(Screen::Accounts));
        stack.push(account("Checking"));
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.tail(), &account("Checking"));

        assert_eq!(stack.pop(), Some(account("Checking")));
        assert_eq!(stack.tail(), &entry(Screen::Accounts));
    }

    #[test]
    fn root_cannot_be_popped() {
        let mut stack = BackStack::new();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.root(), &Entry::root());
    }

    #[test]
    fn reset_to_root_keeps_root() {
        let mut stack = BackStack::new();
        stack.push(entry(Screen::Bills));
        stack.push(entry(Screen::Accounts));
        stack.reset_to_root();
        assert_eq!(stack.entries().collect::<Vec<_>>(), vec![&Entry::root()]);
    }

    #[test]
    fn observers_follow_every_mutation() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut stack = BackStack::new();

        let sink = seen.clone();
        let _sub = stack.observe_tail(move |tail| sink.borrow_mut().push(tail.route_string()));

        stack.push(entry(Screen::Accounts));
        stack.replace_above_root(vec![account("Vacation")]);
        stack.pop();
        stack.pop();

        assert_eq!(
            *seen.borrow(),
            vec!["Overview", "Accounts", "Accounts/Vacation", "Overview"]
        );
    }
}
