//! Symbol table for identifier occurrences.
//!
//! A fixed-bucket hash table with chained collisions. The table is an
//! append log, not a set: every identifier occurrence is recorded, entries
//! are never removed or mutated, and repeated occurrences chain behind one
//! another in their bucket.

pub mod table;
