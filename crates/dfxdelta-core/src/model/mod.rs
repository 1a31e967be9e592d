pub mod classification;
pub mod key;
pub mod record;

pub use classification::{Classification, MatchPass};
pub use key::IdentityKey;
pub use record::{AttrValue, FileRecord};
