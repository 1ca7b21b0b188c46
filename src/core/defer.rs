/// Runs a closure exactly once when dropped.
///
/// Usually created through [`defer!`](crate::defer), which binds an anonymous
/// guard to the enclosing scope.
#[must_use = "the action runs immediately if the guard is not bound"]
pub struct ScopeExit<F: FnOnce()> {
    action: Option<F>,
}

impl<F: FnOnce()> ScopeExit<F> {
    pub fn new(action: F) -> Self {
        Self {
            action: Some(action),
        }
    }

    /// Drops the guard without running its action.
    pub fn dismiss(mut self) {
        self.action = None;
    }
}

impl<F: FnOnce()> Drop for ScopeExit<F> {
    fn drop(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

/// Defers the given statements until the end of the current scope.
///
/// Guards declared in the same scope run in reverse order.
///
/// ```
/// use std::cell::Cell;
/// use kl_toolkit::defer;
///
/// let i = Cell::new(0);
/// {
///     defer! { i.set(1) }
///     i.set(2);
/// }
/// assert_eq!(i.get(), 1);
/// ```
#[macro_export]
macro_rules! defer {
    ($($body:tt)*) => {
        let _guard = $crate::core::defer::ScopeExit::new(|| { $($body)* ; });
    };
}
