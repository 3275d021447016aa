use rowmap_core::{Record, RecordId, Value};

/// A single read or write intent, routed by [`crate::Mapper::exec_batch`].
#[derive(Debug, Clone)]
pub enum Intent {
    FindAll {
        model: String,
    },
    FindOne {
        model: String,
        id: Value,
    },
    Create {
        record: Record,
    },
    Update {
        record: Record,
    },
    Delete {
        model: String,
        id: Value,
    },
    SetOne {
        owner: RecordId,
        relation: String,
        target: Option<RecordId>,
    },
    SetMany {
        owner: RecordId,
        relation: String,
        targets: Vec<RecordId>,
    },
}

/// The per-intent result, in the same order as the submitted intents.
#[derive(Debug)]
pub enum Outcome {
    /// Result of a multi-row read
    Records(Vec<Record>),

    /// Result of a single-row read or a write returning the row
    Record(Option<Record>),

    /// The intent completed without returning data
    Done,
}

impl Outcome {
    #[track_caller]
    pub fn into_records(self) -> Vec<Record> {
        match self {
            Outcome::Records(records) => records,
            other => panic!("expected Outcome::Records, got {other:?}"),
        }
    }

    #[track_caller]
    pub fn into_record(self) -> Option<Record> {
        match self {
            Outcome::Record(record) => record,
            other => panic!("expected Outcome::Record, got {other:?}"),
        }
    }
}
