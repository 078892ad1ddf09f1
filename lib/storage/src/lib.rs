#![doc(test(attr(deny(warnings))))]

//! Contains the in-memory [`Dataset`] and [`Graph`] stores of [rdfmem](https://docs.rs/rdfmem/).

mod canonicalizer;
mod config;
mod dataset;
mod error;
mod graph;
mod memory;
mod pattern;
mod store;
mod stream;
mod transfer;

pub use canonicalizer::TermCanonicalizer;
pub use config::{MissingGraph, StoreConfig};
pub use dataset::Dataset;
pub use error::StorageError;
pub use graph::Graph;
pub use pattern::{ActiveGraph, QuadPattern, TriplePattern};
pub use store::QuadStore;
pub use stream::{QuadStream, StatementIter, StatementStream, TripleStream};
pub use transfer::{copy_quads, import_dataset, import_graph, insert_all};
