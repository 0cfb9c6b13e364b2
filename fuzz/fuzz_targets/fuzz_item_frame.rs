#![no_main]

use libfuzzer_sys::fuzz_target;
use termpick::config::{ColorMode, Config};
use termpick::render::{compose, FlatLayout};
use termpick::ui::capabilities::TerminalCapabilities;
use termpick::{Session, TextItem, UiContext};

fuzz_target!(|data: &[u8]| {
    let Some(([cols, rows], rest)) = data.split_first_chunk::<2>() else {
        return;
    };
    let Ok(input) = std::str::from_utf8(rest) else {
        return;
    };

    // Stdin-style item lines through every flat layout - this should never panic
    let items: Vec<TextItem> = input.lines().map(TextItem::parse_line).collect();
    let caps = TerminalCapabilities {
        is_tty: true,
        supports_color: false,
        supports_unicode: true,
    };
    let ctx = UiContext::from_caps(Some(ColorMode::Never), &Config::default(), caps);
    let layouts = [
        FlatLayout::SingleColumn,
        FlatLayout::TwoColumnStatic {
            panel: input.to_string(),
        },
        FlatLayout::TwoColumnDynamic,
    ];
    for layout in layouts {
        let session = Session::multi("Fuzz", items.clone(), layout);
        let (_, lines) = compose(&session, &ctx, u16::from(*cols), u16::from(*rows));
        assert!(lines.len() <= usize::from(*rows));
    }
});
