//! Fixed UI chrome around the result area.

pub mod controls;
pub mod header;
pub mod keybindings;
pub mod status_bar;
