//! Browser-level checks against a served build of the site.

pub mod browser;
pub mod test_server;
