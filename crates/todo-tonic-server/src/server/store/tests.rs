use super::{Page, PageLimits, TodoStore};
use std::collections::HashSet;
use std::thread::scope;
use std::time::Duration;
use todo_tonic_core::Error;

fn store() -> TodoStore {
    TodoStore::new(PageLimits::default())
}

/// Walks the full listing with the given page size, returning every page.
fn walk_pages(store: &TodoStore, page_size: i32) -> Vec<Page> {
    let mut pages = Vec::new();
    let mut token = String::new();
    loop {
        let page = store.list(page_size, &token).unwrap();
        token = page.next_page_token.clone();
        pages.push(page);
        if token.is_empty() {
            return pages;
        }
    }
}

#[test]
fn create_assigns_distinct_ids() {
    let store = store();
    let ids: HashSet<String> = (0..100)
        .map(|i| store.create(format!("todo {i}"), "").id)
        .collect();
    assert_eq!(ids.len(), 100);
    assert_eq!(store.len(), 100);
}

#[test]
fn create_initializes_flags_and_timestamps() {
    let store = store();
    let created = store.create("buy milk", "two liters");

    assert!(!created.completed);
    assert_eq!(created.created_at, created.updated_at);

    let fetched = store.get(&created.id).unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn get_unknown_id_is_not_found() {
    let store = store();
    let err = store.get("x").unwrap_err();
    assert!(matches!(err, Error::NotFound { id } if id == "x"));
}

#[test]
fn update_replaces_fields_and_refreshes_updated_at() {
    let store = store();
    let created = store.create("buy milk", "two liters");

    // Wall-clock resolution is finer than this on every supported
    // platform, so the refreshed timestamp must move forward.
    std::thread::sleep(Duration::from_millis(5));

    let updated = store
        .update(&created.id, "buy oat milk", "", true)
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "buy oat milk");
    assert_eq!(updated.description, "");
    assert!(updated.completed);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    // The stored entity reflects the mutation, not just the returned copy.
    assert_eq!(store.get(&created.id).unwrap(), updated);
}

#[test]
fn update_unknown_id_is_not_found() {
    let store = store();
    let err = store.update("x", "title", "", false).unwrap_err();
    assert!(matches!(err, Error::NotFound { id } if id == "x"));
}

#[test]
fn delete_removes_entity_permanently() {
    let store = store();
    let created = store.create("temp", "");

    store.delete(&created.id).unwrap();

    assert!(matches!(
        store.get(&created.id).unwrap_err(),
        Error::NotFound { .. }
    ));
    // Double-delete fails as well.
    assert!(matches!(
        store.delete(&created.id).unwrap_err(),
        Error::NotFound { .. }
    ));
    assert!(store.is_empty());
}

#[test]
fn list_returns_everything_in_one_page_when_it_fits() {
    let store = store();
    store.create("A", "");
    store.create("B", "");

    let page = store.list(10, "").unwrap();
    assert_eq!(page.todos.len(), 2);
    assert!(page.next_page_token.is_empty());

    // Ascending id order.
    assert!(page.todos[0].id < page.todos[1].id);
}

#[test]
fn list_paginates_without_gaps_or_duplicates() {
    let store = store();
    let mut expected: Vec<String> = (0..5).map(|i| store.create(format!("todo {i}"), "").id).collect();
    expected.sort();

    let pages = walk_pages(&store, 2);
    assert_eq!(
        pages.iter().map(|p| p.todos.len()).collect::<Vec<_>>(),
        vec![2, 2, 1]
    );
    assert!(!pages[0].next_page_token.is_empty());
    assert!(!pages[1].next_page_token.is_empty());
    assert!(pages[2].next_page_token.is_empty());

    let seen: Vec<String> = pages
        .iter()
        .flat_map(|p| p.todos.iter().map(|t| t.id.clone()))
        .collect();
    assert_eq!(seen, expected);
}

#[test]
fn list_normalizes_page_size() {
    let store = TodoStore::new(PageLimits {
        default_page_size: 3,
        max_page_size: 5,
    });
    for i in 0..8 {
        store.create(format!("todo {i}"), "");
    }

    // Non-positive sizes fall back to the default.
    assert_eq!(store.list(0, "").unwrap().todos.len(), 3);
    assert_eq!(store.list(-7, "").unwrap().todos.len(), 3);
    // Oversized requests are clamped.
    assert_eq!(store.list(50, "").unwrap().todos.len(), 5);
}

#[test]
fn list_on_empty_store_returns_empty_page() {
    let page = store().list(10, "").unwrap();
    assert!(page.todos.is_empty());
    assert!(page.next_page_token.is_empty());
}

#[test]
fn list_rejects_malformed_page_token() {
    let err = store().list(10, "???").unwrap_err();
    assert!(matches!(err, Error::InvalidPageToken { .. }));
}

#[test]
fn cursor_survives_deletion_of_its_todo() {
    let store = store();
    let mut ids: Vec<String> = (0..5).map(|i| store.create(format!("todo {i}"), "").id).collect();
    ids.sort();

    let first = store.list(2, "").unwrap();
    assert!(!first.next_page_token.is_empty());

    // Remove the todo the cursor points at; resuming must still pick up
    // strictly after its position.
    store.delete(&ids[1]).unwrap();

    let second = store.list(2, &first.next_page_token).unwrap();
    let resumed: Vec<&String> = second.todos.iter().map(|t| &t.id).collect();
    assert_eq!(resumed, vec![&ids[2], &ids[3]]);
}

#[test]
fn concurrent_creates_preserve_every_todo() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 32;

    let store = store();

    let ids: Vec<String> = scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let store = &store;
                s.spawn(move || {
                    (0..PER_THREAD)
                        .map(|i| store.create(format!("todo {t}/{i}"), "").id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    let distinct: HashSet<&String> = ids.iter().collect();
    assert_eq!(distinct.len(), THREADS * PER_THREAD);
    assert_eq!(store.len(), THREADS * PER_THREAD);

    // Every created todo is retrievable afterwards.
    for id in &ids {
        store.get(id).unwrap();
    }
}
