pub mod body;
pub mod pagination;

pub use body::JsonBody;
pub use pagination::{Pagination, DEFAULT_LIMIT};
