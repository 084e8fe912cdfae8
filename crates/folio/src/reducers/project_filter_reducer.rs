//! Project filter reducer

use crate::actions::ProjectFilterAction;
use crate::state::ProjectFilterState;

pub fn reduce(mut state: ProjectFilterState, action: &ProjectFilterAction) -> ProjectFilterState {
    let count = state.filters.len();
    if count == 0 {
        return state;
    }

    match action {
        ProjectFilterAction::Next => {
            state.active = (state.active + 1) % count;
        }
        ProjectFilterAction::Previous => {
            state.active = if state.active == 0 {
                count - 1
            } else {
                state.active - 1
            };
        }
        ProjectFilterAction::Select(index) => {
            if *index < count {
                state.active = *index;
            } else {
                log::debug!("No project filter at index {}", index);
            }
        }
    }

    log::debug!("Project filter: {}", state.active_filter());
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters() -> ProjectFilterState {
        ProjectFilterState::new(vec!["all".into(), "rust".into(), "web".into()])
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let state = reduce(filters(), &ProjectFilterAction::Previous);
        assert_eq!(state.active_filter(), "web");

        let state = reduce(state, &ProjectFilterAction::Next);
        assert_eq!(state.active_filter(), "all");

        let state = reduce(state, &ProjectFilterAction::Next);
        assert_eq!(state.active_filter(), "rust");
    }

    #[test]
    fn test_select_out_of_range_keeps_active() {
        let state = reduce(filters(), &ProjectFilterAction::Select(2));
        assert_eq!(state.active_filter(), "web");

        let state = reduce(state, &ProjectFilterAction::Select(9));
        assert_eq!(state.active_filter(), "web");
    }
}
