use super::*;

#[test]
fn push_appends_in_order() {
    let mut state = ToastState::default();
    state.push("one");
    state.push("two");
    let messages: Vec<&str> = state.items.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, ["one", "two"]);
}

#[test]
fn push_returns_unique_ids() {
    let mut state = ToastState::default();
    let a = state.push("a");
    let b = state.push("b");
    assert_ne!(a, b);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push("a");
    let b = state.push("b");
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_a_noop() {
    let mut state = ToastState::default();
    state.push("a");
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut state = ToastState::default();
    let a = state.push("a");
    state.dismiss(a);
    let b = state.push("b");
    assert_ne!(a, b);
}

#[test]
fn duplicate_messages_stack_independently() {
    let mut state = ToastState::default();
    let first = state.push("Image attached");
    state.push("Image attached");
    state.dismiss(first);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].message, "Image attached");
}
