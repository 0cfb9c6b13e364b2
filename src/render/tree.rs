//! Tree level body.

use crate::item::Item;
use crate::state::TreeNavigationState;
use crate::ui::context::UiContext;
use crate::ui::theme::{paint, SemanticColor};

use super::flat::{cursor_prefix, empty_row};
use super::frame::FramePlan;
use super::text::{truncate, width};

pub(super) fn body<T: Item>(
    state: &TreeNavigationState<T>,
    plan: &FramePlan,
    ctx: &UiContext,
) -> Vec<String> {
    let level = state.current();
    if level.is_empty() {
        return vec![empty_row(plan.width, ctx).text];
    }

    level.items[plan.window.range()]
        .iter()
        .enumerate()
        .map(|(offset, item)| {
            let active = plan.window.start + offset == level.active_index();
            let prefix = cursor_prefix(active, ctx);
            if prefix.width > plan.width {
                // Viewport narrower than the cursor.
                return String::new();
            }

            let folder = item.has_children();
            let suffix = if folder {
                format!(" {}", ctx.glyphs.folder)
            } else {
                String::new()
            };

            let budget = plan.width.saturating_sub(prefix.width + width(&suffix));
            let label = format!("{}{}", truncate(&item.name(), budget), suffix);
            let label = truncate(&label, plan.width.saturating_sub(prefix.width));

            let color = if folder {
                Some(SemanticColor::Info)
            } else if !item.is_selectable() {
                Some(SemanticColor::Dim)
            } else {
                None
            };
            let label = match color {
                Some(color) => paint(&label, color, active, ctx.color),
                None if active => paint(&label, SemanticColor::Info, true, ctx.color),
                None => label,
            };

            format!("{}{}", prefix.text, label)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::render::compose;
    use crate::render::text::width;
    use crate::session::Session;
    use crate::state::fixtures::{sample_roots, Node};
    use crate::terminal::{Action, Direction, Key};
    use crate::ui::context::UiContext;

    fn render(session: &Session<Node>, cols: u16, rows: u16) -> Vec<String> {
        compose(session, &UiContext::plain(), cols, rows).1
    }

    #[test]
    fn root_level_marks_folders() {
        let session = Session::tree("Browse", sample_roots());
        let lines = render(&session, 60, 12);
        assert_eq!(
            lines,
            vec![
                "? Browse",
                "Docs",
                "D 3 entries",
                "",
                "> Docs /",
                "  Empty /",
                "  README",
                "",
                "[Right] Open  [Left] Back  [Enter] Select  [q] Quit",
            ]
        );
    }

    #[test]
    fn child_level_shows_breadcrumb() {
        let mut session = Session::tree("Browse", sample_roots());
        session.handle_key(Key::Direction(Direction::Right), 1);
        session.handle_key(Key::Direction(Direction::Down), 1);
        let lines = render(&session, 60, 12);
        // Notes has no metadata, so the header is prompt + breadcrumb.
        assert_eq!(lines[1], "Docs > Notes");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "  Guide");
        assert_eq!(lines[4], "> Notes");
    }

    #[test]
    fn empty_folder_hint_is_drawn() {
        let mut session = Session::tree("Browse", sample_roots());
        session.handle_key(Key::Direction(Direction::Down), 1);
        session.handle_key(Key::Action(Action::Space), 1);
        let lines = render(&session, 60, 12);
        assert!(lines.contains(&"(empty folder)".to_string()));
        assert!(lines.contains(&"> Empty /".to_string()));
    }

    #[test]
    fn narrow_terminal_truncates_names_and_keeps_marker() {
        let roots = vec![Node::folder("Documents", Vec::new())];
        let session = Session::tree("B", roots);
        let lines = render(&session, 8, 12);
        assert_eq!(lines[4], "> Doc… /");
    }

    #[test]
    fn one_column_terminal_never_overflows() {
        let session = Session::tree("B", sample_roots());
        for line in render(&session, 1, 12) {
            assert!(width(&line) <= 1, "{line:?} is wider than one column");
        }
    }
}
