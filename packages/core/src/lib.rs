//! `reposcout` Core — wire schema, the operation abstraction, and the sectioned view model.

pub mod entity;
pub mod error;
pub mod operation;
pub mod sort;
pub mod view_data;

pub use entity::{RepoEntity, SearchResponse};
pub use error::SearchError;
pub use operation::{BoxedOperation, Operation};
pub use sort::SortByStars;
pub use view_data::{ViewData, SECTION_RECOMMENDED, SECTION_SEARCH_RESULTS};
