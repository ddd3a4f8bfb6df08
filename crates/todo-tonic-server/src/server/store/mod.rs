//! In-memory authority over todo entities.
//!
//! [`TodoStore`] is the single source of truth for every todo in the
//! process. All five operations go through one mutex, so concurrent gRPC
//! handlers never observe a torn state. Callers always receive clones;
//! no reference into the store's collection escapes it.
//!
//! ## Identity and ordering
//!
//! Ids are UUIDv4 strings assigned at creation and never reused, even
//! after deletion. Listing returns todos in ascending id order, which is
//! total and reproducible across calls. Pagination resumes strictly after
//! the id encoded in the page token (see [`cursor`]), so a token stays
//! usable under concurrent inserts and even if the todo it points at has
//! since been deleted.

mod cursor;
#[cfg(test)]
mod tests;

use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::ops::Bound;
use std::time::SystemTime;
use todo_tonic_core::types::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use todo_tonic_core::{Error, Result};
use uuid::Uuid;

/// A single todo entity as held by the store.
///
/// `id` and `created_at` are immutable after creation; everything else is
/// replaced wholesale by [`TodoStore::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: SystemTime,
    pub updated_at: SystemTime,
}

/// One page of results from [`TodoStore::list`].
///
/// `next_page_token` is non-empty iff more todos remain after this page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub todos: Vec<Todo>,
    pub next_page_token: String,
}

/// Page-size normalization bounds for [`TodoStore::list`].
///
/// Injected at construction so independent store instances (e.g. in
/// tests) can use their own bounds.
#[derive(Debug, Clone, Copy)]
pub struct PageLimits {
    /// Applied when a client sends `page_size <= 0`.
    pub default_page_size: i32,
    /// Larger requests are clamped to this value.
    pub max_page_size: i32,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

/// Authoritative, in-process keeper of all todo entities.
///
/// Every operation takes the single internal mutex for its full duration
/// (lookup and mutation together), which serializes all access. Lock hold
/// times are bounded: one page scan for [`list`](Self::list), a keyed
/// lookup for everything else. No operation performs I/O or suspends.
pub struct TodoStore {
    limits: PageLimits,
    todos: Mutex<BTreeMap<String, Todo>>,
}

impl TodoStore {
    /// Creates an empty store with the given page-size bounds.
    pub fn new(limits: PageLimits) -> Self {
        Self {
            limits,
            todos: Mutex::new(BTreeMap::new()),
        }
    }

    /// Creates a todo and returns it.
    ///
    /// Assigns a fresh id, sets `completed = false`, and stamps both
    /// timestamps with the same instant. Never fails; there is no
    /// uniqueness or non-emptiness constraint on titles.
    pub fn create(&self, title: impl Into<String>, description: impl Into<String>) -> Todo {
        let now = SystemTime::now();
        let todo = Todo {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            completed: false,
            created_at: now,
            updated_at: now,
        };

        let prev = self.todos.lock().insert(todo.id.clone(), todo.clone());
        debug_assert!(prev.is_none(), "UUIDv4 collision on {}", todo.id);
        todo
    }

    /// Returns the todo with the given id.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no such todo exists (or it was deleted).
    pub fn get(&self, id: &str) -> Result<Todo> {
        self.todos
            .lock()
            .get(id)
            .cloned()
            .ok_or_else(|| Error::not_found(id))
    }

    /// Returns one page of todos in ascending id order.
    ///
    /// An empty `page_token` starts from the beginning; otherwise the page
    /// resumes strictly after the id the token encodes. `page_size` is
    /// normalized per the store's [`PageLimits`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPageToken`] if the token cannot be decoded.
    pub fn list(&self, page_size: i32, page_token: &str) -> Result<Page> {
        let limit = self.normalize_page_size(page_size);
        let start = if page_token.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(cursor::decode(page_token)?)
        };

        let todos = self.todos.lock();
        // Fetch one extra entity to learn whether another page exists.
        let mut page: Vec<Todo> = todos
            .range((start, Bound::Unbounded))
            .take(limit + 1)
            .map(|(_, todo)| todo.clone())
            .collect();
        drop(todos);

        let next_page_token = if page.len() > limit {
            page.truncate(limit);
            // page is non-empty here: limit >= 1 after normalization.
            cursor::encode(&page[limit - 1].id)
        } else {
            String::new()
        };

        Ok(Page {
            todos: page,
            next_page_token,
        })
    }

    /// Replaces a todo's mutable fields wholesale and refreshes
    /// `updated_at`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no such todo exists (or it was deleted).
    pub fn update(
        &self,
        id: &str,
        title: impl Into<String>,
        description: impl Into<String>,
        completed: bool,
    ) -> Result<Todo> {
        let mut todos = self.todos.lock();
        let todo = todos.get_mut(id).ok_or_else(|| Error::not_found(id))?;

        todo.title = title.into();
        todo.description = description.into();
        todo.completed = completed;
        // SystemTime can step backwards; updated_at must never precede
        // created_at.
        todo.updated_at = SystemTime::now().max(todo.created_at);

        Ok(todo.clone())
    }

    /// Permanently removes a todo. Its id is never reassigned.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no such todo exists, including when it was
    /// already deleted (double-delete fails).
    pub fn delete(&self, id: &str) -> Result<()> {
        self.todos
            .lock()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Error::not_found(id))
    }

    /// Number of todos currently visible.
    pub fn len(&self) -> usize {
        self.todos.lock().len()
    }

    /// Whether the store holds no todos.
    pub fn is_empty(&self) -> bool {
        self.todos.lock().is_empty()
    }

    fn normalize_page_size(&self, page_size: i32) -> usize {
        if page_size <= 0 {
            self.limits.default_page_size as usize
        } else {
            page_size.min(self.limits.max_page_size) as usize
        }
    }
}
