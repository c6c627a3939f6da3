// src/gui/actions/mod.rs
//
// Folder module facade: the buttons only see actions::{build, copy, poll}.

mod build;
mod copy;

pub use build::{build, poll};
pub use copy::copy;
