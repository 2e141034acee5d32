//! Recursive subset assertions over JSON records.
//!
//! `expected` is a partial specification at every level of nesting: each of its keys
//! must be present in `actual`, nested records are compared recursively and every
//! other value (arrays included) must be equal, with numbers compared by value. Extra
//! keys in `actual` are ignored.

pub mod error;
pub mod path;
pub mod subset;

pub use error::SubsetError;
pub use path::KeyPath;
pub use subset::{
    assert_json_value_subset, assert_subset, check_json_subset, check_subset, json_eq,
};
