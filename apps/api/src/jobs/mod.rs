// Job listing: read-only access to the `jobs` document collection and the
// HTTP handlers that expose it.

pub mod handlers;
pub mod pagination;
pub mod store;

#[cfg(test)]
pub mod memory;
