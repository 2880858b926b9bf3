//! Input handling — maps selector inputs to state transitions.

use super::event::InputEvent;
use super::state::SelectorState;

/// Apply one input.  Terminal states absorb everything.
pub fn handle_input(state: &mut SelectorState, input: InputEvent) {
    if state.outcome().is_terminal() {
        return;
    }

    match input {
        InputEvent::MoveUp => state.move_up(),
        InputEvent::MoveDown => state.move_down(),
        InputEvent::Toggle => state.toggle(),
        InputEvent::Confirm => state.confirm(),
        InputEvent::Cancel => state.cancel(),
        InputEvent::Other => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Outcome;
    use crate::core::entry::FileEntry;

    fn entries(names: &[&str]) -> Vec<FileEntry> {
        names
            .iter()
            .map(|n| FileEntry::fake(n, 0))
            .collect()
    }

    fn names(entries: Vec<FileEntry>) -> Vec<String> {
        entries.into_iter().map(|e| e.name).collect()
    }

    fn feed(state: &mut SelectorState, inputs: &[InputEvent]) {
        for &input in inputs {
            handle_input(state, input);
        }
    }

    #[test]
    fn move_up_at_top_is_noop() {
        let mut state = SelectorState::new(entries(&["a", "b"]));
        handle_input(&mut state, InputEvent::MoveUp);
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn move_down_clamps_at_last_index() {
        for len in 1..5 {
            let names: Vec<String> = (0..len).map(|i| format!("f{i}")).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let mut state = SelectorState::new(entries(&refs));
            feed(&mut state, &vec![InputEvent::MoveDown; len + 3]);
            assert_eq!(state.cursor(), len - 1);
        }
    }

    #[test]
    fn navigation_round_trip() {
        use InputEvent::*;
        let mut state = SelectorState::new(entries(&["a", "b", "c"]));
        feed(&mut state, &[MoveDown, MoveDown, MoveUp]);
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn double_toggle_restores_flag_and_keeps_cursor() {
        use InputEvent::*;
        let mut state = SelectorState::new(entries(&["a", "b", "c"]));
        feed(&mut state, &[MoveDown, Toggle]);
        assert_eq!(state.flags(), &[false, true, false]);
        assert_eq!(state.cursor(), 1);
        handle_input(&mut state, Toggle);
        assert_eq!(state.flags(), &[false, false, false]);
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn toggle_never_reorders_entries() {
        use InputEvent::*;
        let mut state = SelectorState::new(entries(&["a", "b", "c"]));
        feed(&mut state, &[MoveDown, MoveDown, Toggle, MoveUp, Toggle]);
        let names: Vec<_> = state.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn confirm_returns_flagged_names_in_list_order() {
        use InputEvent::*;
        let mut state = SelectorState::new(entries(&["a", "b", "c"]));
        feed(&mut state, &[MoveDown, MoveDown, Toggle, MoveUp, MoveUp, Toggle, Confirm]);
        assert_eq!(state.outcome(), Outcome::Confirmed);
        assert_eq!(names(state.result()), vec!["a", "c"]);
    }

    #[test]
    fn confirm_without_toggles_is_empty() {
        let mut state = SelectorState::new(entries(&["a", "b"]));
        handle_input(&mut state, InputEvent::Confirm);
        assert_eq!(state.outcome(), Outcome::Confirmed);
        assert!(state.result().is_empty());
    }

    #[test]
    fn cancel_discards_selection() {
        use InputEvent::*;
        let mut state = SelectorState::new(entries(&["a", "b"]));
        feed(&mut state, &[Toggle, MoveDown, Toggle, Cancel]);
        assert_eq!(state.outcome(), Outcome::Cancelled);
        assert!(state.result().is_empty());
    }

    #[test]
    fn other_input_changes_nothing() {
        use InputEvent::*;
        let mut state = SelectorState::new(entries(&["a", "b"]));
        feed(&mut state, &[MoveDown, Toggle, Other, Other]);
        assert_eq!(state.cursor(), 1);
        assert_eq!(state.flags(), &[false, true]);
        assert_eq!(state.outcome(), Outcome::Browsing);
    }

    #[test]
    fn terminal_state_absorbs_input() {
        use InputEvent::*;
        let mut state = SelectorState::new(entries(&["a", "b"]));
        feed(&mut state, &[Toggle, Confirm, MoveDown, Toggle, Cancel]);
        assert_eq!(state.outcome(), Outcome::Confirmed);
        assert_eq!(state.cursor(), 0);
        assert_eq!(names(state.result()), vec!["a"]);
    }

    #[test]
    fn empty_list_only_terminates() {
        use InputEvent::*;
        let mut state = SelectorState::new(Vec::new());
        feed(&mut state, &[MoveDown, MoveUp, Toggle]);
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.outcome(), Outcome::Browsing);
        handle_input(&mut state, Cancel);
        assert_eq!(state.outcome(), Outcome::Cancelled);
        assert!(state.result().is_empty());
    }

    #[test]
    fn empty_list_confirm_yields_nothing() {
        let mut state = SelectorState::new(Vec::new());
        handle_input(&mut state, InputEvent::Confirm);
        assert!(state.result().is_empty());
    }
}
