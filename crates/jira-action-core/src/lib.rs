pub mod error;
pub mod fields;
pub mod logging;
pub mod models;
pub mod naming;
pub mod storage;

pub use error::{Error, Result};
pub use fields::FieldStrategy;
pub use naming::{latest_released_matching, next_version_name};
