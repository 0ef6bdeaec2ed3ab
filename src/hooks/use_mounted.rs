use std::rc::Rc;

use yew::prelude::*;

/// Whether a component instance has committed its first render
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MountGate {
    #[default]
    Pending,
    Mounted,
}

pub enum MountAction {
    Mounted,
}

impl MountGate {
    pub const fn is_mounted(self) -> bool {
        matches!(self, Self::Mounted)
    }
}

impl Reducible for MountGate {
    type Action = MountAction;

    // Once mounted, stays mounted.
    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match (*self, action) {
            (Self::Mounted, _) => self,
            (Self::Pending, MountAction::Mounted) => Rc::new(Self::Mounted),
        }
    }
}

/// Returns `false` on the first render and `true` from the next render on.
///
/// The flip happens in an effect, which only runs after the first render has
/// been committed in the browser. Server-side rendering never runs effects, so
/// pre-rendered markup always sees `false`.
#[hook]
pub fn use_mounted() -> bool {
    let gate = use_reducer_eq(MountGate::default);

    // Effect: Mark mounted once, after the first commit
    {
        let dispatcher = gate.dispatcher();
        use_effect_with((), move |_| {
            dispatcher.dispatch(MountAction::Mounted);
            || ()
        });
    }

    gate.is_mounted()
}
