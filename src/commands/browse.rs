use std::path::Path;

use anyhow::{Context, Result};
use termpick::{prompt, BrowseOptions, FsNode, TreeBehavior};
use tracing::debug;

use super::output::emit_selection;
use super::Globals;

pub struct BrowseArgs<'a> {
    pub path: &'a Path,
    pub prompt: &'a str,
    pub dirs: bool,
    pub hidden: bool,
    pub required: bool,
}

pub fn cmd_browse(args: BrowseArgs<'_>, globals: &Globals) -> Result<()> {
    let options = BrowseOptions {
        select_dirs: args.dirs,
        show_hidden: args.hidden || globals.config.layout.show_hidden,
    };
    let roots = FsNode::roots(args.path, options)
        .with_context(|| format!("cannot read directory {}", args.path.display()))?;
    debug!(path = %args.path.display(), entries = roots.len(), "browse roots loaded");

    let choice = prompt::browse(args.prompt, roots, TreeBehavior::default(), &globals.ctx)?;
    let choice = if args.required {
        Some(prompt::required_one(choice)?)
    } else {
        choice
    };

    let picked: Vec<String> = choice
        .map(|node| node.into_path().display().to_string())
        .into_iter()
        .collect();
    emit_selection("browse", &picked, false, globals.json)?;
    Ok(())
}
