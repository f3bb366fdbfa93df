use std::{
    collections::{ HashMap, HashSet },
    sync::{ Arc, Mutex },
};

use serde_json::{ Map, Value };

use crate::core::{ Kana, KanaType, RenshugoError };

/// One parsed dataset: the records in input order plus an id index.
/// Everything in here is immutable once built.
#[derive(Debug)]
pub struct KanaSet {
    records: Vec<Kana>,
    by_id: HashMap<u32, usize>,
}

impl KanaSet {
    fn new(records: Vec<Kana>) -> Self {
        let by_id = records.iter().enumerate().map(|(index, kana)| (kana.id, index)).collect();
        KanaSet { records, by_id }
    }

    /// The records in the order they appeared in the source text. This is
    /// the canonical order used everywhere downstream.
    pub fn records(&self) -> &[Kana] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Kana> {
        self.by_id.get(&id).map(|&index| &self.records[index])
    }

    /// Chunks the canonical order into rows of `row_size` for grid display.
    /// The last row may be shorter.
    pub fn as_rows(&self, row_size: usize) -> Result<Vec<Vec<Kana>>, RenshugoError> {
        if row_size == 0 {
            return Err(RenshugoError::InvalidRowSize);
        }
        Ok(self.records.chunks(row_size).map(|row| row.to_vec()).collect())
    }
}

/// Parses and caches the kana dataset. The first successful `load` wins:
/// later calls and racing threads all observe the same parsed data.
#[derive(Debug, Default)]
pub struct KanaCatalog {
    cache: Mutex<Option<Arc<KanaSet>>>,
}

impl KanaCatalog {
    pub fn new() -> Self {
        KanaCatalog { cache: Mutex::new(None) }
    }

    /// Parse `raw_json` into the canonical record list, or hand back the
    /// result of an earlier successful load without re-parsing. The lock is
    /// held across the parse so concurrent first loads collapse into one;
    /// failed loads leave the cache empty.
    pub fn load(&self, raw_json: &str) -> Result<Arc<KanaSet>, RenshugoError> {
        let mut cache = self.cache.lock().unwrap();
        if let Some(set) = cache.as_ref() {
            return Ok(Arc::clone(set));
        }

        let set = Arc::new(parse_kana_list(raw_json)?);
        *cache = Some(Arc::clone(&set));
        Ok(set)
    }

    /// The cached dataset, if any load has succeeded yet.
    pub fn loaded(&self) -> Option<Arc<KanaSet>> {
        self.cache.lock().unwrap().clone()
    }

    pub fn find_by_id(&self, id: u32) -> Option<Kana> {
        self.loaded().and_then(|set| set.find_by_id(id).cloned())
    }

    /// Grid rows over the canonical order. A catalog with nothing loaded
    /// yields no rows, matching a lookup on data that isn't there yet.
    pub fn as_rows(&self, row_size: usize) -> Result<Vec<Vec<Kana>>, RenshugoError> {
        if row_size == 0 {
            return Err(RenshugoError::InvalidRowSize);
        }
        match self.loaded() {
            Some(set) => set.as_rows(row_size),
            None => Ok(Vec::new()),
        }
    }
}

fn parse_kana_list(raw_json: &str) -> Result<KanaSet, RenshugoError> {
    let root: Value = serde_json::from_str(raw_json)?;
    let entries = match root {
        Value::Array(entries) => entries,
        _ => return Err(RenshugoError::ExpectedArray),
    };

    let mut records = Vec::with_capacity(entries.len());
    let mut seen_ids = HashSet::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let record = parse_kana_record(index, entry)?;
        if !seen_ids.insert(record.id) {
            return Err(RenshugoError::DuplicateId { index, id: record.id });
        }
        records.push(record);
    }

    Ok(KanaSet::new(records))
}

// Field-by-field schema check instead of a derived deserialize, so load
// errors can name the exact record index and field.
fn parse_kana_record(index: usize, entry: &Value) -> Result<Kana, RenshugoError> {
    let record = entry.as_object().ok_or(RenshugoError::ExpectedRecord { index })?;

    Ok(Kana {
        id: id_field(record, index)?,
        kana: required_text(record, index, "kana")?,
        roumaji: required_text(record, index, "roumaji")?,
        kana_type: KanaType::from_tag(&text_field(record, index, "type")?),
        category: text_field(record, index, "category")?,
        audio: text_field(record, index, "audio")?,
        image: text_field(record, index, "image")?,
        stroke_order: text_field(record, index, "strokeOrder")?,
        example1_jp: text_field(record, index, "example1_jp")?,
        example1_roumaji: text_field(record, index, "example1_roumaji")?,
        example1_en: text_field(record, index, "example1_en")?,
        example2_jp: text_field(record, index, "example2_jp")?,
        example2_roumaji: text_field(record, index, "example2_roumaji")?,
        example2_en: text_field(record, index, "example2_en")?,
    })
}

fn id_field(record: &Map<String, Value>, index: usize) -> Result<u32, RenshugoError> {
    match record.get("id") {
        None => Err(RenshugoError::MissingField { index, field: "id" }),
        Some(value) => value
            .as_u64()
            .and_then(|id| u32::try_from(id).ok())
            .ok_or(RenshugoError::InvalidField { index, field: "id" }),
    }
}

fn text_field(
    record: &Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<String, RenshugoError> {
    match record.get(field) {
        None => Err(RenshugoError::MissingField { index, field }),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(RenshugoError::InvalidField { index, field }),
    }
}

fn required_text(
    record: &Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<String, RenshugoError> {
    let text = text_field(record, index, field)?;
    if text.is_empty() {
        return Err(RenshugoError::EmptyField { index, field });
    }
    Ok(text)
}
