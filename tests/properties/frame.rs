//! Property tests for frame layout.

use std::borrow::Cow;

use proptest::prelude::*;

use termpick::config::{ColorMode, Config};
use termpick::render::{compose, plan};
use termpick::ui::capabilities::TerminalCapabilities;
use termpick::{FlatLayout, Item, Session, UiContext};

/// Tree entry with no children behind it, enough to draw one level.
#[derive(Debug, Clone)]
struct Entry {
    name: String,
    folder: bool,
}

impl Item for Entry {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn has_children(&self) -> bool {
        self.folder
    }

    fn is_selectable(&self) -> bool {
        !self.folder
    }
}

fn assert_fits(lines: &[String], cols: u16, rows: u16) -> Result<(), TestCaseError> {
    prop_assert!(lines.len() <= usize::from(rows));
    for line in lines {
        prop_assert!(termpick::render::text::width(line) <= usize::from(cols), "{:?}", line);
    }
    Ok(())
}

fn ctx() -> UiContext {
    let caps = TerminalCapabilities {
        is_tty: true,
        supports_color: false,
        supports_unicode: true,
    };
    UiContext::from_caps(Some(ColorMode::Never), &Config::default(), caps)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: header + list + footer rows add up to the terminal height
    /// whenever the terminal is tall enough for one list row.
    #[test]
    fn property_row_budget(len in 0usize..200, cols in 1u16..200, rows in 1u16..80, multi in any::<bool>()) {
        let items: Vec<String> = (0..len).map(|i| format!("item {i}")).collect();
        let session = if multi {
            Session::multi("Pick", items, FlatLayout::TwoColumnDynamic)
        } else {
            Session::single("Pick", items, FlatLayout::SingleColumn)
        };
        let plan = plan(&session, &ctx(), cols, rows);
        prop_assert!(plan.list_rows >= 1);
        prop_assert!(plan.window.len() <= plan.list_rows);
        let used = plan.header_rows() + plan.list_rows + plan.footer_rows();
        if usize::from(rows) > plan.header_rows() + plan.footer_rows() {
            prop_assert_eq!(used, usize::from(rows));
        }
    }

    /// PROPERTY: no composed line is wider than the terminal and no frame is taller.
    #[test]
    fn property_frame_fits(len in 0usize..60, cols in 1u16..120, rows in 1u16..40) {
        let items: Vec<String> = (0..len).map(|i| format!("entry number {i} with a long name")).collect();
        let session = Session::multi("Choose several entries", items, FlatLayout::SingleColumn);
        let (_, lines) = compose(&session, &ctx(), cols, rows);
        assert_fits(&lines, cols, rows)?;
    }

    /// PROPERTY: tree frames fit too, down to a one-column terminal.
    #[test]
    fn property_tree_frame_fits(len in 0usize..60, cols in 1u16..120, rows in 1u16..40) {
        let roots: Vec<Entry> = (0..len)
            .map(|i| Entry { name: format!("folder or file {i}"), folder: i % 3 == 0 })
            .collect();
        let session = Session::tree("Browse the tree", roots);
        let (_, lines) = compose(&session, &ctx(), cols, rows);
        assert_fits(&lines, cols, rows)?;
    }
}
