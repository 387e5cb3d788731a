#![deny(unsafe_code)]

//! Exercise name resolution.
//!
//! [`ExerciseMapper`] resolves the names written in a workout log against an
//! ordered [`LookupTable`]: an exact pass on the normalized name, then a
//! first-hit substring pass in table order, then an `unmapped` fallback.

mod error;
mod mapper;
mod table;
mod utils;

pub use error::{LookupError, Result};
pub use mapper::ExerciseMapper;
pub use table::{LookupEntry, LookupTable};
pub use utils::normalize_name;
