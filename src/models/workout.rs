use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// One logged training session attempt.
///
/// Field names on disk are `was_done` and `type`; the rest of the crate uses
/// `completed` and `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub id: u64,
    pub date: String, // ⇔ "YYYY-MM-DD", kept verbatim from disk
    #[serde(rename = "was_done")]
    pub completed: bool,
    #[serde(rename = "type")]
    pub kind: String,
    pub comment: String,
}

impl WorkoutRecord {
    pub fn new(id: u64, date: NaiveDate, completed: bool, kind: &str, comment: &str) -> Self {
        Self {
            id,
            date: date.format("%Y-%m-%d").to_string(),
            completed,
            kind: kind.to_string(),
            comment: comment.to_string(),
        }
    }

    /// Lenient reader used by the store: every field falls back to its
    /// default when absent or of the wrong type.
    pub fn from_value(value: &Value) -> Self {
        let str_field = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            id: value.get("id").and_then(Value::as_u64).unwrap_or(0),
            date: str_field("date"),
            completed: value
                .get("was_done")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            kind: str_field("type"),
            comment: str_field("comment"),
        }
    }

    /// Wire form of the record.
    pub fn to_value(&self) -> Value {
        json!({
            "id": self.id,
            "date": self.date,
            "was_done": self.completed,
            "type": self.kind,
            "comment": self.comment,
        })
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        crate::utils::date::parse_date(&self.date)
    }
}

/// Whole persisted document: `{ "workouts": [...] }`.
///
/// The raw JSON entries and any other top-level keys are kept so that a
/// rewrite leaves unknown fields and malformed entries as they were.
/// `WorkoutRecord` values are read-only views over the raw entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutLog {
    records: Vec<WorkoutRecord>,
    entries: Vec<Value>,
    extra: Map<String, Value>,
}

impl WorkoutLog {
    /// Log built from well-formed records only.
    pub fn from_records(records: Vec<WorkoutRecord>) -> Self {
        let mut log = Self::default();
        for r in records {
            log.push(r);
        }
        log
    }

    /// Log read from a parsed document. `extra` holds every top-level key
    /// except `workouts`.
    pub fn from_raw(entries: Vec<Value>, extra: Map<String, Value>) -> Self {
        Self {
            records: entries.iter().map(WorkoutRecord::from_value).collect(),
            entries,
            extra,
        }
    }

    /// Document to write back, unknown keys included.
    pub fn to_document(&self) -> Value {
        let mut doc = self.extra.clone();
        doc.insert("workouts".to_string(), Value::Array(self.entries.clone()));
        Value::Object(doc)
    }

    pub fn records(&self) -> &[WorkoutRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Id for the next record: id of the last entry carrying a valid
    /// (positive integer) id, plus 1; 1 when there is none.
    /// Based on insertion order, not on a maximum scan.
    pub fn next_id(&self) -> u64 {
        self.entries
            .iter()
            .rev()
            .find_map(|e| e.get("id").and_then(Value::as_u64).filter(|id| *id > 0))
            .map(|id| id.saturating_add(1))
            .unwrap_or(1)
    }

    pub fn push(&mut self, record: WorkoutRecord) {
        self.entries.push(record.to_value());
        self.records.push(record);
    }

    /// Records ordered by date for display. Stable, so records sharing a
    /// date keep their insertion order.
    pub fn sorted_by_date(&self) -> Vec<&WorkoutRecord> {
        let mut out: Vec<&WorkoutRecord> = self.records.iter().collect();
        out.sort_by(|a, b| a.date.cmp(&b.date));
        out
    }
}
