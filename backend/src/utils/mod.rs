mod anyhow_util;
mod db;
mod filters;
mod reply;

pub use anyhow_util::*;
pub use db::*;
pub use filters::*;
pub use reply::*;
