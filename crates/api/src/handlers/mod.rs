//! Request handlers.
//!
//! Each submodule serves one resource. Handlers call the injected
//! [`PortfolioStore`](folio_db::PortfolioStore) and map failures via
//! [`AppError`](crate::error::AppError).

pub mod contact;
pub mod education;
pub mod internship;
pub mod project;
pub mod skill;
