pub mod errors;
pub mod models;

pub use errors::RenshugoError;
pub use models::{ GroupColor, Kana, KanaGroup, KanaType };
