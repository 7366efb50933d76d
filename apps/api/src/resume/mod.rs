// Resume upload: PDF text extraction followed by skill matching against the
// job store.

pub mod extract;
pub mod handlers;
