//! Pure view-model layer: canonical profile data plus the two transforms
//! (hierarchy graph construction and record flattening) the screens paint.

pub mod events;
pub mod hierarchy;
pub mod profile;
pub mod table;
