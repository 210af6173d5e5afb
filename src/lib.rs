pub use rowshape_core::*;
#[cfg(feature = "derive")]
pub use rowshape_macros::*;
