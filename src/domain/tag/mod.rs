pub mod entity;
pub mod reconcile;
pub mod repository;

pub use entity::{Tag, TagId, TagName};
pub use reconcile::TagInput;
pub use repository::TagRepository;
