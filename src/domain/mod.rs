//! Domain layer: name records, validated input, and astronomy entries.

pub mod astronomy_record;
pub mod name_id;
pub mod name_record;
pub mod new_name;

pub use astronomy_record::{ApodPayload, AstronomyRecord};
pub use name_id::NameId;
pub use name_record::NameRecord;
pub use new_name::NewName;
