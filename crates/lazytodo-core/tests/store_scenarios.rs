use lazytodo_core::{StoreAction, TodoCounterStore, TodoId, TodoRecord};

#[test]
fn walk_the_dog() {
    let mut store = TodoCounterStore::new();
    assert_eq!(store.counter(), 0);
    assert!(store.is_empty());

    store.increment();
    store.increment();
    assert_eq!(store.counter(), 2);

    store.set_draft_text("Walk dog");
    let id = store.submit_draft().expect("draft should be submitted");
    assert_eq!(store.todos(), &[TodoRecord::new(id, "Walk dog")]);
    assert_eq!(store.draft_text(), "");

    store.delete_todo(id);
    assert!(store.todos().is_empty());
    assert_eq!(store.counter(), 2);
}

#[test]
fn enter_key_matches_direct_submit() {
    let mut by_key = TodoCounterStore::new();
    let mut direct = TodoCounterStore::new();

    for text in ["one", "  ", "two"] {
        by_key.set_draft_text(text);
        direct.set_draft_text(text);
        by_key.submit_draft_on_key("Enter");
        direct.submit_draft();
        assert_eq!(by_key.snapshot(), direct.snapshot());
    }
}

#[test]
fn other_keys_never_submit() {
    let mut store = TodoCounterStore::new();
    store.set_draft_text("pending");
    for key in ["a", "Esc", "Tab", "enter", " "] {
        store.submit_draft_on_key(key);
    }
    assert!(store.is_empty());
    assert_eq!(store.draft_text(), "pending");
}

#[test]
fn delete_middle_of_three() {
    let mut store = TodoCounterStore::new();
    for text in ["A", "B", "C"] {
        store.dispatch(StoreAction::SetDraftText(text.to_string()));
        store.dispatch(StoreAction::SubmitDraft);
    }
    assert_eq!(
        store.todos(),
        &[
            TodoRecord::new(TodoId::new(1), "A"),
            TodoRecord::new(TodoId::new(2), "B"),
            TodoRecord::new(TodoId::new(3), "C"),
        ]
    );

    store.dispatch(StoreAction::DeleteTodo(TodoId::new(2)));

    assert_eq!(
        store.todos(),
        &[
            TodoRecord::new(TodoId::new(1), "A"),
            TodoRecord::new(TodoId::new(3), "C"),
        ]
    );
}
