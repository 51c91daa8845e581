//! Request bodies sent to the table service

use serde::{Deserialize, Serialize};

/// Body of `POST /v1/table/{table_id}/items`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItemsRequest {
    /// Names of the items to create, in order
    pub item_names: Vec<String>,
}

impl AddItemsRequest {
    /// Create a request for the given item names
    pub fn new(item_names: Vec<String>) -> Self {
        Self { item_names }
    }
}

/// Name of the item a client loop creates in `table_id`
///
/// Derived from the table id alone, so the same table always gets the same name.
pub fn item_name(table_id: usize) -> String {
    format!("{}-dish", table_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_name_encodes_table_id() {
        for table_id in 0..100 {
            let name = item_name(table_id);
            assert_eq!(name, format!("{}-dish", table_id));
            assert_eq!(name, item_name(table_id));
        }
    }

    #[test]
    fn test_add_items_json_format() {
        let req = AddItemsRequest::new(vec![item_name(7)]);
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"item_names":["7-dish"]}"#);
    }

    #[test]
    fn test_add_items_preserves_order() {
        let req = AddItemsRequest::new(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(req.item_names, vec!["a", "b", "c"]);
    }
}
