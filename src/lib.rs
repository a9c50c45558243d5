//! Dashboard Engine library crate.
//!
//! This crate holds the computational core of a business-management
//! dashboard: the record schema, pure aggregation functions over the
//! record collections and an explicit state container that the
//! presentation layer owns and threads through its calls.  External
//! applications may depend on the `dashboard_engine` crate, build a
//! [`store::Store`] (or restore one with [`persist::Snapshot`]) and read
//! figures from it directly or through [`report::DashboardReport`].

pub mod access;
pub mod config;
pub mod error;
pub mod finance;
pub mod metrics;
pub mod models;
pub mod persist;
pub mod recruitment;
pub mod report;
pub mod seed;
pub mod store;
