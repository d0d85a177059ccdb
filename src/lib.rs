//! Screening Client Library
//!
//! This library provides a typed client for a SOAP-based identity
//! screening service, including wire payload mapping, outcome
//! normalization, fault decoding, and the watchlist search and business
//! instant-ID operation families.
//!
//! # Modules
//!
//! - `attributes`: Wire payload mapping for search input records.
//! - `business`: Business instant-ID operation family.
//! - `config`: Configuration management.
//! - `dispatch`: Request dispatch and outcome construction.
//! - `errors`: Error handling types.
//! - `fault`: Service fault decoding.
//! - `models`: Core data models.
//! - `response`: Normalized call outcomes.
//! - `search`: Watchlist search operation family.
//! - `transport`: Transport abstraction over the SOAP wire.

pub mod attributes;
pub mod business;
pub mod config;
pub mod dispatch;
pub mod errors;
pub mod fault;
pub mod models;
pub mod response;
pub mod search;
pub mod transport;
