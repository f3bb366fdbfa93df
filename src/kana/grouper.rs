use crate::core::{ GroupColor, Kana, KanaGroup, KanaType };

/// Highest record id still counted as part of the basic table. Gojuuon
/// records past it fall out of the "Basic" group.
pub const BASIC_ID_MAX: u32 = 71;

/// Display palette, cycled over emitted groups by position.
pub const GROUP_COLORS: [GroupColor; 6] = [
    GroupColor(0xFF667EEA),
    GroupColor(0xFFFF6B6B),
    GroupColor(0xFF4ECDC4),
    GroupColor(0xFFFFA726),
    GroupColor(0xFFAB47BC),
    GroupColor(0xFF26C6DA),
];

/// Partition records into the fixed study-group sequence: basic gojuuon,
/// dakuten, handakuten, combination sounds, then everything that matched
/// nothing. Pure and infallible: order within a group is input order,
/// empty groups are skipped, and unknown type tags are never rejected.
pub fn group_by_type(records: &[Kana]) -> Vec<KanaGroup> {
    let mut groups = Vec::new();

    let basic: Vec<Kana> = records
        .iter()
        .filter(|kana| kana.kana_type == KanaType::Gojuuon && kana.id <= BASIC_ID_MAX)
        .cloned()
        .collect();
    push_group(&mut groups, "基本ひらがな (Basic Hiragana)", "46 basic hiragana characters", basic);

    push_group(
        &mut groups,
        "濁音 (Dakuten)",
        "Voiced sounds with \" marks",
        by_type(records, &KanaType::Dakuten),
    );

    push_group(
        &mut groups,
        "半濁音 (Handakuten)",
        "Semi-voiced sounds with ° marks",
        by_type(records, &KanaType::Handakuten),
    );

    push_group(
        &mut groups,
        "拗音 (Combination Sounds)",
        "Two-character combinations",
        by_type(records, &KanaType::Combination),
    );

    let leftover: Vec<Kana> = records
        .iter()
        .filter(|kana| match &kana.kana_type {
            KanaType::Gojuuon => kana.id > BASIC_ID_MAX,
            KanaType::Dakuten | KanaType::Handakuten | KanaType::Combination => false,
            KanaType::Other(_) => true,
        })
        .cloned()
        .collect();
    push_group(&mut groups, "その他 (Other)", "Uncategorized characters", leftover);

    groups
}

fn by_type(records: &[Kana], kana_type: &KanaType) -> Vec<Kana> {
    records.iter().filter(|kana| kana.kana_type == *kana_type).cloned().collect()
}

fn push_group(groups: &mut Vec<KanaGroup>, title: &str, description: &str, kana: Vec<Kana>) {
    if kana.is_empty() {
        return;
    }

    // Color follows the emitted position, not the group kind.
    let color = GROUP_COLORS[groups.len() % GROUP_COLORS.len()];
    groups.push(KanaGroup {
        title: title.to_string(),
        description: description.to_string(),
        kana,
        color,
    });
}
