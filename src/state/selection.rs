//! Flat selection state.

/// Whether one or many options can be chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Single,
    Multi,
}

/// One entry of a flat list. `selected` is ignored in single mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption<T> {
    pub item: T,
    pub selected: bool,
}

/// Mutable model for flat selection.
#[derive(Debug, Clone)]
pub struct SelectionState<T> {
    options: Vec<SelectOption<T>>,
    active_index: usize,
    prompt: String,
    mode: SelectionMode,
}

impl<T> SelectionState<T> {
    pub fn new(prompt: impl Into<String>, items: Vec<T>, mode: SelectionMode) -> Self {
        Self {
            options: items
                .into_iter()
                .map(|item| SelectOption {
                    item,
                    selected: false,
                })
                .collect(),
            active_index: 0,
            prompt: prompt.into(),
            mode,
        }
    }

    /// Pre-select options by index. Out-of-range indices are ignored, as is single mode.
    pub fn with_defaults(mut self, selected: &[usize]) -> Self {
        if self.mode == SelectionMode::Multi {
            for &i in selected {
                if let Some(option) = self.options.get_mut(i) {
                    option.selected = true;
                }
            }
        }
        self
    }

    /// Start with the cursor on `index`, clamped into range.
    pub fn with_active(mut self, index: usize) -> Self {
        self.set_active(index);
        self
    }

    pub fn options(&self) -> &[SelectOption<T>] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active(&self) -> Option<&SelectOption<T>> {
        self.options.get(self.active_index)
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Move the cursor by `delta`, clamped to the list. Returns true if it moved.
    pub fn move_by(&mut self, delta: isize) -> bool {
        let before = self.active_index;
        let target = before.saturating_add_signed(delta);
        self.set_active(target);
        self.active_index != before
    }

    pub fn set_active(&mut self, index: usize) {
        self.active_index = index.min(self.options.len().saturating_sub(1));
    }

    /// Toggle the active option. No-op in single mode or on an empty list.
    pub fn toggle_active(&mut self) {
        if self.mode != SelectionMode::Multi {
            return;
        }
        if let Some(option) = self.options.get_mut(self.active_index) {
            option.selected = !option.selected;
        }
    }

    pub fn select_all(&mut self) {
        self.set_all(|_| true);
    }

    pub fn select_none(&mut self) {
        self.set_all(|_| false);
    }

    pub fn invert(&mut self) {
        self.set_all(|selected| !selected);
    }

    fn set_all(&mut self, f: impl Fn(bool) -> bool) {
        if self.mode != SelectionMode::Multi {
            return;
        }
        for option in &mut self.options {
            option.selected = f(option.selected);
        }
    }

    pub fn selected_count(&self) -> usize {
        self.options.iter().filter(|o| o.selected).count()
    }
}

impl<T: Clone> SelectionState<T> {
    /// Selected items in original order.
    pub fn selected_items(&self) -> Vec<T> {
        self.options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.item.clone())
            .collect()
    }

    pub fn active_item(&self) -> Option<T> {
        self.active().map(|o| o.item.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multi(items: &[&'static str]) -> SelectionState<&'static str> {
        SelectionState::new("Pick", items.to_vec(), SelectionMode::Multi)
    }

    #[test]
    fn new_state_starts_at_zero_unselected() {
        let state = multi(&["a", "b"]);
        assert_eq!(state.active_index(), 0);
        assert_eq!(state.selected_count(), 0);
        assert_eq!(state.prompt(), "Pick");
    }

    #[test]
    fn move_by_clamps_both_ends() {
        let mut state = multi(&["a", "b", "c"]);
        assert!(!state.move_by(-1));
        assert_eq!(state.active_index(), 0);
        assert!(state.move_by(5));
        assert_eq!(state.active_index(), 2);
        assert!(!state.move_by(1));
    }

    #[test]
    fn empty_state_keeps_index_zero() {
        let mut state = multi(&[]);
        state.move_by(3);
        state.set_active(9);
        assert_eq!(state.active_index(), 0);
        assert!(state.active().is_none());
        state.toggle_active();
        assert!(state.selected_items().is_empty());
    }

    #[test]
    fn toggle_is_ignored_in_single_mode() {
        let mut state = SelectionState::new("Pick", vec!["a"], SelectionMode::Single);
        state.toggle_active();
        state.select_all();
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn defaults_preselect_and_skip_out_of_range() {
        let state = multi(&["a", "b", "c"]).with_defaults(&[2, 0, 7]);
        assert_eq!(state.selected_items(), vec!["a", "c"]);
    }

    #[test]
    fn bulk_operations() {
        let mut state = multi(&["a", "b", "c"]);
        state.toggle_active();
        state.invert();
        assert_eq!(state.selected_items(), vec!["b", "c"]);
        state.select_all();
        assert_eq!(state.selected_count(), 3);
        state.select_none();
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn with_active_clamps() {
        let state = multi(&["a", "b"]).with_active(10);
        assert_eq!(state.active_index(), 1);
    }
}
