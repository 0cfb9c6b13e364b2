use crate::config::{ColorMode, Config};
use crate::ui::capabilities::{detect_capabilities, TerminalCapabilities};
use crate::ui::theme::Glyphs;

/// Effective presentation settings for one picker run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
    pub vim_keys: bool,
    /// Left column share in two-column layouts, percent
    pub left_percent: u16,
    pub glyphs: Glyphs,
}

impl UiContext {
    pub fn new(cli_color: Option<ColorMode>, config: &Config) -> Self {
        Self::from_caps(cli_color, config, detect_capabilities())
    }

    pub fn from_caps(
        cli_color: Option<ColorMode>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color.unwrap_or(config.output.color) {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => caps.supports_color,
        };

        Self {
            caps,
            color,
            unicode,
            vim_keys: config.keys.vim,
            left_percent: config.layout.left_percent(),
            glyphs: Glyphs::new(unicode),
        }
    }

    /// Plain ASCII, no color, fixed size. Used by renderer tests.
    #[cfg(test)]
    pub(crate) fn plain() -> Self {
        let caps = TerminalCapabilities {
            is_tty: false,
            supports_color: false,
            supports_unicode: false,
        };
        let mut config = Config::default();
        config.output.unicode = false;
        Self::from_caps(Some(ColorMode::Never), &config, caps)
    }
}
