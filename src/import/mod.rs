//! Batch import of script files and directories
//!
//! [`Importer::import`] never fails as a whole: each bad path becomes an
//! [`ErrorRecord`] and the batch keeps going.

pub mod importer;
pub mod record;
pub mod request;
pub mod resolver;

pub use importer::Importer;
pub use record::{ErrorDetails, ErrorKind, ErrorRecord};
pub use request::ImportRequest;
pub use resolver::{Candidate, Origin, Resolver, Step};
