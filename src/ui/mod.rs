//! Page behaviors outside the hero canvas. Each module pairs a pure decision
//! (what ends up active, visible or where to scroll) with a `bind` function
//! that wires it to the markup described by [`PageMarkup`](crate::config::PageMarkup).

pub mod filter;
pub mod menu;
pub mod nav;
pub mod scroll;
pub mod tabs;
pub mod ticker;
pub mod timestamp;

/// Marks only `selected` as active out of `count` siblings.
pub fn exclusive(count: usize, selected: usize) -> Vec<bool> {
    (0..count).map(|i| i == selected).collect()
}
