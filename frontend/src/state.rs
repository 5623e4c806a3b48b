use std::rc::Rc;

use integrations_shared::{ResultAction, ResultSet};
use yew::prelude::*;

/// Result set held by a `DataForm`, driven through `use_reducer` so that
/// completions of overlapping loads never act on a stale snapshot.
#[derive(Debug, Default, PartialEq)]
pub struct LoadedData(pub ResultSet);

impl Reducible for LoadedData {
    type Action = ResultAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let current = Rc::try_unwrap(self).map_or_else(|shared| shared.0.clone(), |owned| owned.0);
        Rc::new(LoadedData(current.apply(action)))
    }
}
