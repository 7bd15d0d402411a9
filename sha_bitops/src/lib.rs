pub mod errors;
pub mod word;
pub mod bitops;
pub mod round;
pub mod sha256;
pub mod checks;

pub use errors::BitopsError;
pub use word::{to_uint32, ToWord, Word};
pub use bitops::*;
