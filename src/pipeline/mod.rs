pub mod digits;
pub mod expand;
pub mod feistel;
pub mod round;

pub use digits::*;
pub use expand::*;
pub use feistel::*;
pub use round::*;
