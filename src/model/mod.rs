mod notes;
mod selection;
mod table;

pub use notes::*;
pub use selection::*;
pub use table::*;
