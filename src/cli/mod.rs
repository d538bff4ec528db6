pub mod info;
pub mod page;
pub mod parse;
pub mod search;
pub mod shell;
pub mod transform;

pub use info::*;
pub use page::*;
pub use parse::*;
pub use search::*;
pub use shell::*;
pub use transform::*;
