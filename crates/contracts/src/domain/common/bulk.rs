use serde::{Deserialize, Serialize};

/// Batch operation applied to the rows selected in bulk mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkAction {
    Activate,
    Deactivate,
    Delete,
}

impl BulkAction {
    pub fn label(&self) -> &'static str {
        match self {
            BulkAction::Activate => "Activate",
            BulkAction::Deactivate => "Deactivate",
            BulkAction::Delete => "Delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkRequest {
    pub action: BulkAction,
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BulkResponse {
    /// Number of records the action actually changed
    pub affected: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_request_wire_format() {
        let request = BulkRequest {
            action: BulkAction::Deactivate,
            ids: vec!["a".into(), "b".into()],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["action"], "deactivate");
        assert_eq!(json["ids"].as_array().map(Vec::len), Some(2));
    }
}
