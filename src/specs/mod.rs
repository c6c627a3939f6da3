// src/specs/mod.rs
//! # Page specs
//!
//! One module per forum page. Each spec knows **where the data lives in that
//! page's HTML** and how to pull it out into `model` types.
//!
//! ## What lives here
//! - Pure parsing of fetched HTML (`&str` in, model out). No networking.
//! - The fixed selectors for each page.
//! - `entry`: the shared name/description/tags splitter used by sheet
//!   features and inventory items.
//!
//! ## What does **not** live here
//! - Fetching and sequencing (`runner`), BBCode layout (`bbcode`), frontends.
//!
//! ## Conventions
//! - Missing structure is an error (`SheetError`), not a silent empty value,
//!   except where noted in the individual spec.
//! - Specs are testable offline against saved pages.
pub mod entry;
pub mod inventory;
pub mod profile;
pub mod sheet;
