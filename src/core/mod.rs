pub mod deck_source;
pub mod errors;
pub mod models;
pub mod search;
pub mod session;
pub mod tasks;

pub use errors::{
    JidhrError,
    SessionError,
};
pub use models::{
    CardFace,
    FormRecord,
    RootRecord,
    SearchHit,
};
pub use session::{
    Session,
    StudyKey,
};
