pub mod catalog;
pub mod grouper;

pub use catalog::{ KanaCatalog, KanaSet };
pub use grouper::group_by_type;
