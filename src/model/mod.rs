mod concert;
mod result;

pub use concert::*;
pub use result::*;
