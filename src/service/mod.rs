//! Backend access and request probing shared by handlers.

mod backend;
mod validation;
pub use backend::BackendClient;
pub use validation::{IdProbe, Membership};
