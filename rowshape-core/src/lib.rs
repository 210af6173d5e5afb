mod element;
mod error;
mod index_set;
mod invoke;
mod list;
mod pattern;
mod predicate;
mod record;
mod sequence;
mod shape;
mod shape_info;
mod tuple;
mod util;

pub use ::anyhow::Context;
pub use element::*;
pub use error::*;
pub use index_set::*;
pub use invoke::*;
pub use list::*;
pub use pattern::*;
pub use predicate::*;
pub use record::*;
pub use sequence::*;
pub use shape::*;
pub use shape_info::*;
pub use util::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;

/// Largest tuple arity that implements the sequence traits.
pub const MAX_ARITY: usize = 12;
