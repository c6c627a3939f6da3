// src/gui/components/mod.rs
pub mod error_dialog;
pub mod form;
pub mod output;
