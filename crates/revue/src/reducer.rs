//! Reducer — the seam pairing a feature with its state and action types.

///
/// Reducer
///
/// A feature's reduction logic over its own state/action pair. For a
/// case-routing enum `Foo` the convention is `type State = FooState` and
/// `type Action = FooAction`, the same sibling types the `ReducerView`
/// derive references by name.
///

pub trait Reducer {
    type State;
    type Action;

    fn reduce(&self, state: &mut Self::State, action: Self::Action);
}
