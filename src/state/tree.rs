//! Hierarchical navigation state.
//!
//! The state is a stack of levels, root first. Descending loads the active
//! item's children and pushes them as a new level; ascending pops. The root
//! level is never popped, so the stack is never empty.

use tracing::debug;

use crate::item::Item;

/// One depth of siblings with its own cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level<T> {
    pub items: Vec<T>,
    active_index: usize,
}

impl<T> Level<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            active_index: 0,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active(&self) -> Option<&T> {
        self.items.get(self.active_index)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn set_active(&mut self, index: usize) {
        self.active_index = index.min(self.items.len().saturating_sub(1));
    }
}

/// Result of a descend attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descend {
    /// The active item cannot have children (or the level is empty).
    NotAFolder,
    /// The loader returned nothing; the empty hint is set.
    Empty,
    /// A new level was pushed.
    Entered,
}

/// Mutable model for tree browsing.
#[derive(Debug, Clone)]
pub struct TreeNavigationState<T> {
    levels: Vec<Level<T>>,
    empty_hint: Option<(usize, usize)>,
    prompt: String,
}

impl<T: Item> TreeNavigationState<T> {
    pub fn new(prompt: impl Into<String>, roots: Vec<T>) -> Self {
        Self {
            levels: vec![Level::new(roots)],
            empty_hint: None,
            prompt: prompt.into(),
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn levels(&self) -> &[Level<T>] {
        &self.levels
    }

    /// Number of levels on the stack; 1 at the root.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// The level currently displayed.
    pub fn current(&self) -> &Level<T> {
        // Root is never popped.
        &self.levels[self.levels.len() - 1]
    }

    fn current_mut(&mut self) -> &mut Level<T> {
        let top = self.levels.len() - 1;
        &mut self.levels[top]
    }

    pub fn active_item(&self) -> Option<&T> {
        self.current().active()
    }

    pub fn empty_hint(&self) -> Option<(usize, usize)> {
        self.empty_hint
    }

    /// Whether the hint points at the item under the cursor right now.
    pub fn showing_empty_hint(&self) -> bool {
        self.empty_hint == Some((self.levels.len() - 1, self.current().active_index))
    }

    /// Move within the top level, clamped. Clears the hint only if the cursor moved.
    pub fn move_by(&mut self, delta: isize) -> bool {
        let target = self.current().active_index.saturating_add_signed(delta);
        self.set_active(target)
    }

    /// Jump to an index in the top level, clamped. Same hint rule as `move_by`.
    pub fn set_active(&mut self, index: usize) -> bool {
        let level = self.current_mut();
        let before = level.active_index;
        level.set_active(index);
        let moved = level.active_index != before;
        if moved {
            self.empty_hint = None;
        }
        moved
    }

    pub fn descend(&mut self) -> Descend {
        let level_index = self.levels.len() - 1;
        let active_index = self.current().active_index;
        let Some(item) = self.current().active() else {
            return Descend::NotAFolder;
        };
        if !item.has_children() {
            return Descend::NotAFolder;
        }

        let children = item.children();
        if children.is_empty() {
            debug!(level = level_index, index = active_index, "descend found no children");
            self.empty_hint = Some((level_index, active_index));
            return Descend::Empty;
        }

        debug!(depth = level_index + 2, count = children.len(), "entered level");
        self.levels.push(Level::new(children));
        self.empty_hint = None;
        Descend::Entered
    }

    /// Pop the top level unless it is the root. Returns true if a level was popped.
    pub fn ascend(&mut self) -> bool {
        self.empty_hint = None;
        if self.levels.len() > 1 {
            self.levels.pop();
            true
        } else {
            false
        }
    }

    /// Active item names from root to the current level joined by `separator`.
    pub fn breadcrumb(&self, separator: &str) -> String {
        self.levels
            .iter()
            .filter_map(|level| level.active())
            .map(|item| item.name().into_owned())
            .collect::<Vec<_>>()
            .join(separator)
    }
}
