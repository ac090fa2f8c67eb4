//! Store — a state snapshot paired with an action sink.
//!
//! Stores are single-threaded (`Rc`), matching the UI model they serve.
//! Scoping a store narrows both sides of the binding at once: the state
//! side through a case extractor, the action side through a case embedder,
//! so child actions flow back up re-wrapped in the parent's action type.

use std::rc::Rc;

///
/// Store
///

pub struct Store<State, Action> {
    state: State,
    sink: Rc<dyn Fn(Action)>,
}

impl<State, Action: 'static> Store<State, Action> {
    /// Create a store whose actions are dropped. Useful for previews and
    /// tests; real roots use [`Store::with_sink`].
    #[must_use]
    pub fn new(state: State) -> Self {
        Self {
            state,
            sink: Rc::new(|_| {}),
        }
    }

    #[must_use]
    pub fn with_sink(state: State, sink: impl Fn(Action) + 'static) -> Self {
        Self {
            state,
            sink: Rc::new(sink),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    pub fn send(&self, action: Action) {
        (self.sink.as_ref())(action);
    }

    /// Project this store onto one case of the state.
    ///
    /// Returns `None` when the case is not currently active. The scoped
    /// store owns a clone of the child state slice and forwards child
    /// actions through `embed` into this store's sink.
    pub fn scope<ChildState, ChildAction>(
        &self,
        state: impl Fn(&State) -> Option<&ChildState>,
        embed: impl Fn(ChildAction) -> Action + 'static,
    ) -> Option<Store<ChildState, ChildAction>>
    where
        ChildState: Clone,
    {
        let child = state(self.state())?.clone();
        let sink = Rc::clone(&self.sink);

        Some(Store {
            state: child,
            sink: Rc::new(move |action| (sink.as_ref())(embed(action))),
        })
    }
}
