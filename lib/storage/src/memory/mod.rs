//! The in-memory statement set shared by datasets and their graph views.
mod quad_set;
mod store;

pub(crate) use store::{MemStore, Snapshot};
