//! Domain types and pure transformations for the portfolio backend.
//!
//! This crate has no database or network dependencies; rows are handed in
//! by `folio-db` and results are serialized by `folio-api`.

pub mod contact;
pub mod portfolio;
pub mod types;
