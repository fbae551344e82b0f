//! Domain modules (vertical slices): request descriptors + wire types.
//!
//! Every gateway response arrives inside the same two-level envelope, so the
//! wrapper and container are generic over the entity type.

pub mod character;

use serde::{Deserialize, Serialize};

/// Top-level response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataWrapper<T> {
    /// Gateway-level status code (distinct from the HTTP status).
    pub code: i32,
    pub status: String,
    #[serde(default)]
    pub copyright: Option<String>,
    #[serde(default, rename = "attributionText")]
    pub attribution_text: Option<String>,
    pub data: DataContainer<T>,
}

/// Paging envelope around the result set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataContainer<T> {
    pub offset: u32,
    pub limit: u32,
    pub total: u32,
    pub count: u32,
    pub results: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_decodes_with_optional_attribution_absent() {
        let json = r#"{
            "code": 200,
            "status": "Ok",
            "data": { "offset": 0, "limit": 20, "total": 0, "count": 0, "results": [] }
        }"#;
        let wrapper: DataWrapper<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(wrapper.code, 200);
        assert_eq!(wrapper.status, "Ok");
        assert!(wrapper.attribution_text.is_none());
        assert!(wrapper.data.results.is_empty());
    }
}
