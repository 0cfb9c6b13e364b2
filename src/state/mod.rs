//! Picker state models.
//!
//! - `selection` - flat lists, single or multi select
//! - `tree` - stack-of-levels model for hierarchical browsing

mod selection;
mod tree;

pub use selection::{SelectOption, SelectionMode, SelectionState};
pub use tree::{Descend, Level, TreeNavigationState};

#[cfg(test)]
pub(crate) use tree::fixtures;
