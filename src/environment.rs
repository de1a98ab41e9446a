use core::cell::RefCell;

use crate::compat::{Box, Rc, String, ToOwned, ToString, Vec, format};
use crate::config::HistoryMode;
use crate::error::Result;
use crate::helpers::split_url;

/// Opaque state attached to every history entry written by a manager.
/// Always empty; serializes to `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryState {}

/// Where a manager reads the current location from and writes history to.
///
/// Implemented for the browser window (`web` feature) and for
/// [`MemoryEnvironment`]. Methods take `&self` so several managers can share
/// one environment; the last write wins.
pub trait Environment {
    /// Current path, without query string.
    fn pathname(&self) -> String;

    /// Current query string with its leading `?`, or empty.
    fn search(&self) -> String;

    /// Current path followed by the query string.
    fn current_url(&self) -> String {
        let mut url = self.pathname();
        url.push_str(&self.search());
        url
    }

    /// Replace the current history entry or push a new one.
    fn write_entry(
        &self,
        mode: HistoryMode,
        state: &HistoryState,
        title: &str,
        url: &str,
    ) -> Result<()>;
}

impl<E: Environment + ?Sized> Environment for &E {
    fn pathname(&self) -> String {
        (**self).pathname()
    }

    fn search(&self) -> String {
        (**self).search()
    }

    fn current_url(&self) -> String {
        (**self).current_url()
    }

    fn write_entry(
        &self,
        mode: HistoryMode,
        state: &HistoryState,
        title: &str,
        url: &str,
    ) -> Result<()> {
        (**self).write_entry(mode, state, title, url)
    }
}

impl<E: Environment + ?Sized> Environment for Rc<E> {
    fn pathname(&self) -> String {
        (**self).pathname()
    }

    fn search(&self) -> String {
        (**self).search()
    }

    fn current_url(&self) -> String {
        (**self).current_url()
    }

    fn write_entry(
        &self,
        mode: HistoryMode,
        state: &HistoryState,
        title: &str,
        url: &str,
    ) -> Result<()> {
        (**self).write_entry(mode, state, title, url)
    }
}

impl<E: Environment + ?Sized> Environment for Box<E> {
    fn pathname(&self) -> String {
        (**self).pathname()
    }

    fn search(&self) -> String {
        (**self).search()
    }

    fn current_url(&self) -> String {
        (**self).current_url()
    }

    fn write_entry(
        &self,
        mode: HistoryMode,
        state: &HistoryState,
        title: &str,
        url: &str,
    ) -> Result<()> {
        (**self).write_entry(mode, state, title, url)
    }
}

/// A history write as seen by [`MemoryEnvironment`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryWrite {
    pub mode: HistoryMode,
    pub state: HistoryState,
    pub title: String,
    pub url: String,
}

#[derive(Debug)]
struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
    writes: Vec<HistoryWrite>,
}

impl MemoryHistory {
    fn current(&self) -> &str {
        self.entries.get(self.index).map_or("", String::as_str)
    }

    fn replace(&mut self, url: String) {
        match self.entries.get_mut(self.index) {
            Some(entry) => *entry = url,
            None => self.entries.push(url),
        }
    }

    fn push(&mut self, url: String) {
        self.entries.truncate(self.index + 1);
        self.entries.push(url);
        self.index = self.entries.len() - 1;
    }
}

/// Deterministic in-memory location and session history.
///
/// Writes are applied to the history stack (replace overwrites the current
/// entry, push drops forward entries and appends) and recorded so callers can
/// inspect exactly what was written.
#[derive(Debug)]
pub struct MemoryEnvironment {
    history: RefCell<MemoryHistory>,
}

impl MemoryEnvironment {
    /// Start with a single entry at `url` (path plus optional query).
    pub fn new(url: &str) -> Self {
        Self {
            history: RefCell::new(MemoryHistory {
                entries: Vec::from([url.to_owned()]),
                index: 0,
                writes: Vec::new(),
            }),
        }
    }

    /// Replace the current query string without recording a write,
    /// as if the user edited the address bar.
    pub fn set_search(&self, search: &str) {
        let mut history = self.history.borrow_mut();
        let (path, _) = split_url(history.current());
        let search = search.strip_prefix('?').unwrap_or(search);
        let url = if search.is_empty() {
            path.to_owned()
        } else {
            format!("{path}?{search}")
        };
        history.replace(url);
    }

    /// Replace the current path, keeping the query string. Not recorded as a write.
    pub fn set_pathname(&self, pathname: &str) {
        let mut history = self.history.borrow_mut();
        let (_, query) = split_url(history.current());
        let url = match query {
            Some(query) if !query.is_empty() => format!("{pathname}?{query}"),
            _ => pathname.to_owned(),
        };
        history.replace(url);
    }

    /// Follow a link to `url`: a new entry that is not recorded as a write.
    pub fn navigate(&self, url: &str) {
        self.history.borrow_mut().push(url.to_owned());
    }

    /// Move one entry back. Returns `false` at the first entry.
    pub fn back(&self) -> bool {
        let mut history = self.history.borrow_mut();
        if history.index == 0 {
            return false;
        }
        history.index -= 1;
        true
    }

    /// Move one entry forward. Returns `false` at the last entry.
    pub fn forward(&self) -> bool {
        let mut history = self.history.borrow_mut();
        if history.index + 1 >= history.entries.len() {
            return false;
        }
        history.index += 1;
        true
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.history.borrow().entries.clone()
    }

    /// Index of the current entry.
    pub fn index(&self) -> usize {
        self.history.borrow().index
    }

    /// Every write received so far, oldest first.
    pub fn writes(&self) -> Vec<HistoryWrite> {
        self.history.borrow().writes.clone()
    }

    pub fn write_count(&self) -> usize {
        self.history.borrow().writes.len()
    }

    /// Number of writes received in the given mode.
    pub fn write_count_for(&self, mode: HistoryMode) -> usize {
        self.history
            .borrow()
            .writes
            .iter()
            .filter(|write| write.mode == mode)
            .count()
    }

    pub fn last_write(&self) -> Option<HistoryWrite> {
        self.history.borrow().writes.last().cloned()
    }

    /// Forget recorded writes. The history stack is left as is.
    pub fn clear_writes(&self) {
        self.history.borrow_mut().writes.clear();
    }
}

impl Default for MemoryEnvironment {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Environment for MemoryEnvironment {
    fn pathname(&self) -> String {
        let history = self.history.borrow();
        split_url(history.current()).0.to_string()
    }

    fn search(&self) -> String {
        let history = self.history.borrow();
        match split_url(history.current()).1 {
            Some(query) if !query.is_empty() => format!("?{query}"),
            _ => String::new(),
        }
    }

    fn write_entry(
        &self,
        mode: HistoryMode,
        state: &HistoryState,
        title: &str,
        url: &str,
    ) -> Result<()> {
        let mut history = self.history.borrow_mut();
        history.writes.push(HistoryWrite {
            mode,
            state: *state,
            title: title.to_owned(),
            url: url.to_owned(),
        });
        match mode {
            HistoryMode::Replace => history.replace(url.to_owned()),
            HistoryMode::Push => history.push(url.to_owned()),
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[cfg(not(feature = "std"))]
    use alloc::vec;

    #[test]
    fn test_location_parts() {
        let env = MemoryEnvironment::new("/list?page=2");
        assert_eq!(env.pathname(), "/list");
        assert_eq!(env.search(), "?page=2");
        assert_eq!(env.current_url(), "/list?page=2");
    }

    #[test]
    fn test_bare_question_mark_has_empty_search() {
        let env = MemoryEnvironment::new("/list?");
        assert_eq!(env.search(), "");
        assert_eq!(env.current_url(), "/list");
    }

    #[test]
    fn test_set_search_and_pathname() {
        let env = MemoryEnvironment::new("somePathName");
        env.set_search("?a=1");
        assert_eq!(env.current_url(), "somePathName?a=1");
        env.set_search("");
        assert_eq!(env.current_url(), "somePathName");
        env.set_search("b=2");
        env.set_pathname("/other");
        assert_eq!(env.current_url(), "/other?b=2");
        assert_eq!(env.write_count(), 0);
    }

    #[test]
    fn test_replace_overwrites_current_entry() {
        let env = MemoryEnvironment::new("/a");
        env.write_entry(HistoryMode::Replace, &HistoryState::default(), "", "/a?x=1")
            .unwrap();
        assert_eq!(env.entries(), vec!["/a?x=1"]);
        assert_eq!(env.write_count_for(HistoryMode::Replace), 1);
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let env = MemoryEnvironment::new("/a");
        env.navigate("/b");
        env.navigate("/c");
        assert!(env.back());
        assert!(env.back());
        assert!(!env.back());
        env.write_entry(HistoryMode::Push, &HistoryState::default(), "", "/a?x=1")
            .unwrap();
        assert_eq!(env.entries(), vec!["/a", "/a?x=1"]);
        assert_eq!(env.index(), 1);
        assert!(!env.forward());
    }

    #[test]
    fn test_writes_are_recorded() {
        let env = MemoryEnvironment::default();
        env.write_entry(HistoryMode::Push, &HistoryState::default(), "", "/?q=1")
            .unwrap();
        let write = env.last_write().unwrap();
        assert_eq!(write.mode, HistoryMode::Push);
        assert_eq!(write.title, "");
        assert_eq!(write.url, "/?q=1");
        env.clear_writes();
        assert_eq!(env.write_count(), 0);
        assert_eq!(env.current_url(), "/?q=1");
    }

    #[test]
    fn test_shared_through_rc() {
        let env = Rc::new(MemoryEnvironment::new("/a"));
        let shared: Rc<MemoryEnvironment> = Rc::clone(&env);
        shared
            .write_entry(HistoryMode::Replace, &HistoryState::default(), "", "/a?k=v")
            .unwrap();
        assert_eq!(env.current_url(), "/a?k=v");
    }
}
