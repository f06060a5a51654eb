// src/lib.rs

//! NBI Scraper Library
//!
//! Fetches listing and detail pages from the NBI Handelsakademin website,
//! reduces them to link tables and text via CSS selectors, and exports the
//! results to files.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;
