//! ascii-blast (workspace facade crate).
//!
//! Re-exports the member crates under `ascii_blast::{core,term,input,types}`
//! and hosts the process-level pieces the binary needs: [`config`] and
//! [`logging`].

pub mod config;
pub mod logging;

pub use ascii_blast_core as core;
pub use ascii_blast_input as input;
pub use ascii_blast_term as term;
pub use ascii_blast_types as types;
