//! Boundary with the external persistence collaborator: design documents and stores.

pub(crate) mod document;
pub(crate) mod store;
