use serde::{Deserialize, Serialize};

/// A station a rider can wait at.
///
/// Names are unique within a catalog and double as the persisted selection
/// value, so they are compared exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: u32,
    pub name: String,
}

impl Station {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
