pub mod assets;
pub mod core;
pub mod kana;

pub use crate::core::{ GroupColor, Kana, KanaGroup, KanaType, RenshugoError };
pub use crate::kana::{ group_by_type, KanaCatalog, KanaSet };
