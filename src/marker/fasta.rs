use std::collections::HashMap;

pub const RECORD_MARKER: char = '>';

#[derive(Debug, Clone, PartialEq)]
pub struct SequenceRecord {
    /// Header line as written, marker included.
    pub id: String,
    pub seq: String,
}

impl SequenceRecord {
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

/// Parses FASTA text into records in order of appearance.
///
/// The first line always opens a record, marker or not. A repeated header
/// replaces the sequence of the earlier record but keeps its position.
pub fn parse_fasta(text: &str) -> Vec<SequenceRecord> {
    let mut records: Vec<SequenceRecord> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut current: Option<SequenceRecord> = None;

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if index == 0 || line.starts_with(RECORD_MARKER) {
            if let Some(record) = current.take() {
                push_record(&mut records, &mut positions, record);
            }
            current = Some(SequenceRecord {
                id: line.to_string(),
                seq: String::new(),
            });
        } else if let Some(record) = current.as_mut() {
            record.seq.push_str(line);
        }
    }

    if let Some(record) = current {
        push_record(&mut records, &mut positions, record);
    }

    records
}

fn push_record(
    records: &mut Vec<SequenceRecord>,
    positions: &mut HashMap<String, usize>,
    record: SequenceRecord,
) {
    if let Some(&position) = positions.get(&record.id) {
        log::warn!("Duplicate record {} replaces earlier sequence", record.id);
        records[position] = record;
    } else {
        positions.insert(record.id.clone(), records.len());
        records.push(record);
    }
}
