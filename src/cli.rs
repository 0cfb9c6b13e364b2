use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use termpick::config::ColorMode;
use termpick::FlatLayout;

/// termpick - pick items from a list or a directory tree
#[derive(Parser, Debug)]
#[command(name = "termpick")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "The picker draws on stderr; results are printed to stdout.")]
pub struct Cli {
    /// Print the result as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output (auto, always, never)
    #[arg(long, global = true, value_parser = parse_color)]
    pub color: Option<ColorMode>,

    /// Config file (defaults to the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write diagnostic logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick exactly one item
    One(PickArgs),

    /// Pick any number of items
    Many {
        #[command(flatten)]
        pick: PickArgs,

        /// Zero-based indices checked at start
        #[arg(long, value_delimiter = ',')]
        defaults: Vec<usize>,
    },

    /// Browse a directory tree and pick a path
    Browse {
        /// Directory to start in
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Allow picking directories, not just files
        #[arg(long)]
        dirs: bool,

        /// Show dot-files
        #[arg(long)]
        hidden: bool,

        /// Prompt shown above the tree
        #[arg(long, default_value = "Browse")]
        prompt: String,

        /// Exit with status 1 when nothing is picked
        #[arg(long)]
        required: bool,
    },
}

#[derive(Args, Debug)]
pub struct PickArgs {
    /// Items to choose from; read from stdin (`name<TAB>detail` per line) when omitted
    pub items: Vec<String>,

    /// Prompt shown above the list
    #[arg(long, default_value = "Select")]
    pub prompt: String,

    /// List layout
    #[arg(long, value_enum, default_value_t = LayoutArg::Single)]
    pub layout: LayoutArg,

    /// Text for the right column of the static layout
    #[arg(long)]
    pub panel: Option<String>,

    /// Exit with status 1 when nothing is picked
    #[arg(long)]
    pub required: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutArg {
    /// One column of names
    Single,
    /// Names plus a fixed text panel (`--panel`)
    Static,
    /// Names plus the active item's detail
    Dynamic,
}

impl PickArgs {
    /// A panel implies the static layout.
    pub fn flat_layout(&self) -> FlatLayout {
        match (self.layout, &self.panel) {
            (LayoutArg::Dynamic, _) => FlatLayout::TwoColumnDynamic,
            (_, Some(panel)) => FlatLayout::TwoColumnStatic {
                panel: panel.replace("\\n", "\n"),
            },
            (LayoutArg::Static, None) => FlatLayout::TwoColumnStatic {
                panel: String::new(),
            },
            (LayoutArg::Single, None) => FlatLayout::SingleColumn,
        }
    }
}

fn parse_color(value: &str) -> Result<ColorMode, String> {
    ColorMode::parse(value).ok_or_else(|| {
        format!(
            "invalid color mode '{}' (expected auto, always, never)",
            value
        )
    })
}
