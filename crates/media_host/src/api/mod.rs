//! HTTP contract: envelopes, forms, transport trait, and typed reads.

pub mod client;
pub mod envelope;
pub mod error;
pub mod form;
pub mod memory;
pub mod service;
