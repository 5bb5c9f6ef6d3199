mod interface;
#[cfg(feature = "std")]
mod os;

pub use interface::*;
#[cfg(feature = "std")]
pub use os::*;
