//! Outbound adapters implementing domain ports for infrastructure concerns.
//!
//! Currently a single concern: **persistence**, backed by an in-memory map.
//! The hexagonal seam stays in place so a database-backed adapter can be
//! swapped in without touching the domain layer.

pub mod persistence;
