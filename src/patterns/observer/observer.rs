//! # Observer
//!
//! Binds a notification callback to the context it acts on. The view keeps
//! observers in per-notification lists and removes them by context.

use std::fmt;
use std::rc::Rc;

use super::notification::Notification;

/// Callback invoked for every matching notification
pub type NotifyMethod = Rc<dyn Fn(&Notification) -> anyhow::Result<()>>;

/// Identity of the object an observer acts on behalf of
///
/// Two contexts are equal only when they were taken from the very same
/// object. The token is an address and is never dereferenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotifyContext(usize);

impl NotifyContext {
    /// Context token for the object behind `target`
    pub fn of<T: ?Sized>(target: &T) -> Self {
        Self((target as *const T).cast::<()>() as usize)
    }
}

/// A notification callback paired with its context
#[derive(Clone)]
pub struct Observer {
    notify: NotifyMethod,
    context: NotifyContext,
}

impl Observer {
    pub fn new(notify: NotifyMethod, context: NotifyContext) -> Self {
        Self { notify, context }
    }

    /// Wrap a closure into an observer for `context`
    pub fn from_fn<F>(context: NotifyContext, notify: F) -> Self
    where
        F: Fn(&Notification) -> anyhow::Result<()> + 'static,
    {
        Self::new(Rc::new(notify), context)
    }

    /// Invoke the bound callback
    pub fn notify_observer(&self, notification: &Notification) -> anyhow::Result<()> {
        (self.notify)(notification)
    }

    /// True iff `context` identifies the same object this observer is bound to
    pub fn compare_notify_context(&self, context: NotifyContext) -> bool {
        self.context == context
    }

    pub fn notify_context(&self) -> NotifyContext {
        self.context
    }
}

impl fmt::Debug for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Recorder {
        seen: RefCell<Vec<String>>,
    }

    #[test]
    fn observer_should_invoke_callback_with_notification() {
        let recorder = Rc::new(Recorder {
            seen: RefCell::new(Vec::new()),
        });
        let target = recorder.clone();
        let observer = Observer::from_fn(NotifyContext::of(&*recorder), move |n| {
            target.seen.borrow_mut().push(n.name().to_string());
            Ok(())
        });

        observer
            .notify_observer(&Notification::new("ObserverTestNote"))
            .unwrap();

        assert_eq!(*recorder.seen.borrow(), vec!["ObserverTestNote"]);
    }

    #[test]
    fn observer_should_compare_context_by_identity() {
        let first = Rc::new(Recorder {
            seen: RefCell::new(Vec::new()),
        });
        let second = Rc::new(Recorder {
            seen: RefCell::new(Vec::new()),
        });
        let observer = Observer::from_fn(NotifyContext::of(&*first), |_| Ok(()));

        assert!(observer.compare_notify_context(NotifyContext::of(&*first)));
        assert!(!observer.compare_notify_context(NotifyContext::of(&*second)));
    }

    #[test]
    fn observer_should_propagate_callback_failure() {
        let observer = Observer::from_fn(NotifyContext(1), |_| anyhow::bail!("boom"));
        let error = observer
            .notify_observer(&Notification::new("N"))
            .unwrap_err();
        assert_eq!(error.to_string(), "boom");
    }
}
