use std::rc::Rc;

use yew::Reducible;

use super::catalog::RegionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    /// A region was picked and the fake analysis is still running.
    Loading(RegionId),
    Ready(RegionId),
}

pub enum SelectionAction {
    Pick(RegionId),
    /// Fired by the delay timer for the region it was started for.
    Resolve(RegionId),
    Clear,
}

impl Selection {
    pub fn next(self, action: SelectionAction) -> Selection {
        match (self, action) {
            (_, SelectionAction::Pick(region)) => Selection::Loading(region),
            (Selection::Loading(pending), SelectionAction::Resolve(region)) if pending == region => {
                Selection::Ready(region)
            }
            // stale timer from an earlier pick
            (current, SelectionAction::Resolve(_)) => current,
            (_, SelectionAction::Clear) => Selection::Idle,
        }
    }

    pub fn ready(self) -> Option<RegionId> {
        match self {
            Selection::Ready(region) => Some(region),
            _ => None,
        }
    }
}

impl Reducible for Selection {
    type Action = SelectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).next(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_then_resolve_shows_region() {
        let state = Selection::Idle.next(SelectionAction::Pick(RegionId::Norte));
        assert_eq!(state, Selection::Loading(RegionId::Norte));
        assert_eq!(state.ready(), None);

        let state = state.next(SelectionAction::Resolve(RegionId::Norte));
        assert_eq!(state, Selection::Ready(RegionId::Norte));
        assert_eq!(state.ready(), Some(RegionId::Norte));
    }

    #[test]
    fn stale_resolve_is_ignored() {
        let state = Selection::Idle
            .next(SelectionAction::Pick(RegionId::Sul))
            .next(SelectionAction::Pick(RegionId::Nordeste))
            .next(SelectionAction::Resolve(RegionId::Sul));
        assert_eq!(state, Selection::Loading(RegionId::Nordeste));

        let idle = Selection::Idle.next(SelectionAction::Resolve(RegionId::Sul));
        assert_eq!(idle, Selection::Idle);
    }

    #[test]
    fn new_pick_while_ready_goes_back_to_loading() {
        let state = Selection::Ready(RegionId::Sudeste).next(SelectionAction::Pick(RegionId::Sudeste));
        assert_eq!(state, Selection::Loading(RegionId::Sudeste));
    }

    #[test]
    fn clear_returns_to_idle() {
        let state = Selection::Ready(RegionId::CentroOeste).next(SelectionAction::Clear);
        assert_eq!(state, Selection::Idle);
    }

    #[test]
    fn reducer_keeps_same_rc_when_nothing_changes() {
        let state = Rc::new(Selection::Idle);
        let next = state.clone().reduce(SelectionAction::Resolve(RegionId::Norte));
        assert!(Rc::ptr_eq(&state, &next));
    }
}
