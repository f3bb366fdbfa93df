/// Raw text of the bundled hiragana dataset, compiled in the same way the
/// original application shipped it in its asset bundle.
pub const HIRAGANA_JSON: &str = include_str!("../assets/hiragana/hiragana.json");
