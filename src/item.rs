//! Item capability contract.
//!
//! Flat pickers only need a display name. Tree navigation additionally asks
//! whether an item may have children, loads them lazily, and checks whether
//! the item can be chosen on its own. The defaults describe a plain leaf.

use std::borrow::Cow;

/// Optional header decoration for the active tree item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemMetadata {
    pub icon: Option<String>,
    pub subtitle: Option<String>,
    pub details: Vec<String>,
}

impl ItemMetadata {
    /// Number of header lines this metadata occupies when rendered.
    pub fn line_count(&self) -> usize {
        let title = usize::from(self.icon.is_some() || self.subtitle.is_some());
        title + self.details.len()
    }
}

/// Something a picker can display and return.
pub trait Item: Clone {
    /// Display name shown in the list.
    fn name(&self) -> Cow<'_, str>;

    /// Detail lines shown in the right column of the dynamic two-column layout.
    fn detail(&self) -> Vec<String> {
        Vec::new()
    }

    /// Whether the item may have children. Descending still loads them to find out.
    fn has_children(&self) -> bool {
        false
    }

    /// Load the children. Called on every descend; an empty result means "empty folder".
    fn children(&self) -> Vec<Self> {
        Vec::new()
    }

    /// Whether choosing this item with enter finishes the picker.
    fn is_selectable(&self) -> bool {
        true
    }

    fn metadata(&self) -> Option<ItemMetadata> {
        None
    }
}

impl Item for String {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Item for &'static str {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

/// A named entry with optional detail text, as read from the command line or stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextItem {
    pub name: String,
    pub detail: Option<String>,
}

impl TextItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Parse `name<TAB>detail`; a line without a tab is a bare name.
    pub fn parse_line(line: &str) -> Self {
        match line.split_once('\t') {
            Some((name, detail)) => Self::new(name).with_detail(detail.replace("\\n", "\n")),
            None => Self::new(line),
        }
    }
}

impl Item for TextItem {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn detail(&self) -> Vec<String> {
        self.detail
            .as_deref()
            .map(|d| d.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
