//! Route tables.
//!
//! ```text
//! GET  /health          liveness (text)
//! GET  /mysql-health    database reachability (text)
//!
//! GET  /projects        projects with their images
//! GET  /skills          skill rows
//! GET  /education       education rows
//! GET  /internships     internship rows, newest first
//!
//! POST /contact         store a submission and email the operator
//! ```

pub mod contact;
pub mod health;
pub mod portfolio;
