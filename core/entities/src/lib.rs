pub mod envelope;
pub mod error;
pub mod process;
pub mod reader;
pub mod types;
pub mod writer;

pub use envelope::process_document;
pub use error::{EntitiesError, Result};
pub use reader::parse_entities;
pub use types::Entity;
pub use writer::write_entities;
