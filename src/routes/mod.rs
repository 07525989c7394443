pub mod admin;
pub mod aliases;
pub mod common;
pub mod rewrite;

pub use admin::admin_routes;
pub use aliases::app_routes;
pub use common::common_routes;
pub use rewrite::{default_rewrites, Rewrite, RewriteLayer, RewriteRule, RewriteTable};
