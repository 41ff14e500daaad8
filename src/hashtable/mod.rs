//! Chained hash table backing the symbol tables.
//!
//! The table maps string keys to values using a fixed array of buckets, each
//! owning a singly linked collision chain. It provides:
//!
//! - Insert-or-overwrite, lookup and removal by key
//! - Deterministic bucket placement for a given capacity
//! - Ordered per-bucket iteration and a textual dump for reports
//!
//! The bucket count never changes once the table is built.

pub mod hashtable;
