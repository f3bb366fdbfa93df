use serde::{ Serialize, Serializer };

/// Classification tag carried by each record's `type` field. Tags we don't
/// recognize are preserved verbatim so newer data files still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KanaType {
    Gojuuon,
    Dakuten,
    Handakuten,
    Combination,
    Other(String),
}

impl KanaType {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "gojuuon" => KanaType::Gojuuon,
            "dakuten" => KanaType::Dakuten,
            "handakuten" => KanaType::Handakuten,
            "combination" => KanaType::Combination,
            _ => KanaType::Other(tag.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            KanaType::Gojuuon => "gojuuon",
            KanaType::Dakuten => "dakuten",
            KanaType::Handakuten => "handakuten",
            KanaType::Combination => "combination",
            KanaType::Other(tag) => tag,
        }
    }
}

impl Serialize for KanaType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kana {
    pub id: u32,                     // Unique identifier, stable for lookups and list recycling
    pub kana: String,                // The glyph itself
    pub roumaji: String,             // Latin transliteration
    #[serde(rename = "type")]
    pub kana_type: KanaType,
    pub category: String,            // Secondary free-text classification (e.g. "vowel")
    pub audio: String,               // Media references, opaque to the core
    pub image: String,
    #[serde(rename = "strokeOrder")]
    pub stroke_order: String,
    pub example1_jp: String,         // Example words, parallel jp/roumaji/en triples
    pub example1_roumaji: String,
    pub example1_en: String,
    pub example2_jp: String,
    pub example2_roumaji: String,
    pub example2_en: String,
}

/// 0xAARRGGBB styling token handed through to presentation code. The core
/// never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupColor(pub u32);

/// A named study bucket of kana, derived from the canonical record list.
/// Groups own copies of the immutable records, so they can be recomputed or
/// discarded freely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KanaGroup {
    pub title: String,
    pub description: String,
    pub kana: Vec<Kana>,
    pub color: GroupColor,
}
