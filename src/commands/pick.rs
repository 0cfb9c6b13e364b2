use std::io::{self, BufRead};

use anyhow::{bail, Result};
use is_terminal::IsTerminal;
use termpick::{prompt, Item, TextItem};

use super::output::emit_selection;
use super::Globals;
use crate::cli::PickArgs;

/// Items from the command line, or one per stdin line when none were given.
fn load_items(args: &[String]) -> Result<Vec<TextItem>> {
    if !args.is_empty() {
        return Ok(args.iter().map(|a| TextItem::parse_line(a)).collect());
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        bail!("no items given; pass them as arguments or pipe them on stdin");
    }
    parse_lines(stdin.lock())
}

fn parse_lines(input: impl BufRead) -> Result<Vec<TextItem>> {
    let mut items = Vec::new();
    for line in input.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        items.push(TextItem::parse_line(line));
    }
    Ok(items)
}

fn names(items: &[TextItem]) -> Vec<String> {
    items.iter().map(|i| i.name().into_owned()).collect()
}

pub fn cmd_one(pick: &PickArgs, globals: &Globals) -> Result<()> {
    let items = load_items(&pick.items)?;
    let choice = prompt::select_one(&pick.prompt, items, pick.flat_layout(), &globals.ctx)?;
    let choice = if pick.required {
        Some(prompt::required_one(choice)?)
    } else {
        choice
    };

    let picked: Vec<TextItem> = choice.into_iter().collect();
    emit_selection("one", &names(&picked), false, globals.json)?;
    Ok(())
}

pub fn cmd_many(pick: &PickArgs, defaults: &[usize], globals: &Globals) -> Result<()> {
    let items = load_items(&pick.items)?;
    let choices = prompt::select_many(
        &pick.prompt,
        items,
        defaults,
        pick.flat_layout(),
        &globals.ctx,
    )?;
    let choices = if pick.required {
        prompt::required_many(choices)?
    } else {
        choices
    };

    emit_selection("many", &names(&choices), true, globals.json)?;
    Ok(())
}
