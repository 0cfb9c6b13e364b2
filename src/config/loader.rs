//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PickerError, PickerResult};

use super::types::{ColorMode, Config};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
    /// Set when the whole file was skipped instead of a single key
    pub error: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(error) = &self.error {
            return write!(f, "ignoring {}: {}", self.file.display(), error);
        }
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PickerResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> PickerResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PickerError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                error: None,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from the user config or defaults, then apply env overrides.
///
/// A broken user config is reported as a warning rather than aborting the picker.
pub fn load_or_default() -> (Config, Vec<ConfigWarning>) {
    let mut warnings = Vec::new();
    let mut config = Config::default();

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            match load_with_warnings(&user_config) {
                Ok((loaded, w)) => {
                    config = loaded;
                    warnings = w;
                }
                Err(e) => warnings.push(ConfigWarning {
                    key: String::new(),
                    file: user_config,
                    line: None,
                    suggestion: None,
                    error: Some(e.to_string()),
                }),
            }
        }
    }

    (
        with_env_overrides(config, |key| std::env::var(key).ok()),
        warnings,
    )
}

/// Apply environment variable overrides (TERMPICK_* prefix)
pub fn with_env_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    // TERMPICK_COLOR
    if let Some(mode) = get_env("TERMPICK_COLOR").as_deref().and_then(ColorMode::parse) {
        config.output.color = mode;
    }

    // TERMPICK_UNICODE
    if let Some(val) = get_env("TERMPICK_UNICODE") {
        config.output.unicode = parse_flag(&val);
    }

    // TERMPICK_VIM_KEYS
    if let Some(val) = get_env("TERMPICK_VIM_KEYS") {
        config.keys.vim = parse_flag(&val);
    }

    // TERMPICK_LOG
    if let Some(level) = get_env("TERMPICK_LOG").filter(|l| !l.trim().is_empty()) {
        config.log.level = Some(level);
    }

    // TERMPICK_LOG_FILE
    if let Some(file) = get_env("TERMPICK_LOG_FILE").filter(|f| !f.trim().is_empty()) {
        config.log.file = Some(PathBuf::from(file));
    }

    config
}

fn parse_flag(val: &str) -> bool {
    let val = val.trim().to_lowercase();
    val != "false" && val != "0" && val != "no" && val != "off"
}

/// `<config dir>/termpick/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("termpick").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "output",
        "color",
        "unicode",
        "keys",
        "vim",
        "layout",
        "left_percent",
        "show_hidden",
        "log",
        "file",
        "level",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
