//! Search job aggregate record models.

use serde_json::{Map, Value};

use super::{FieldDescriptor, PageRequest};

/// One fetched page of aggregate records and the request that produced it.
///
/// The shape of a record depends on the query's aggregation, so the page
/// keeps the whole response object. Each entry of `records` is
/// `{"map": {...}}`; [`RecordPage::records`] yields those inner maps.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordPage {
    pub request: PageRequest,
    pub body: Map<String, Value>,
}

impl RecordPage {
    pub fn new(request: PageRequest, body: Map<String, Value>) -> Self {
        Self { request, body }
    }

    /// Record maps in server order. Entries without a `map` object are skipped.
    pub fn records(&self) -> impl Iterator<Item = &Map<String, Value>> {
        self.entries()
            .iter()
            .filter_map(|record| record.get("map").and_then(Value::as_object))
    }

    /// Field metadata, if the response carried any.
    pub fn fields(&self) -> Vec<FieldDescriptor> {
        self.body
            .get("fields")
            .cloned()
            .and_then(|fields| serde_json::from_value(fields).ok())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Cursor for the next page, or `None` once `total` records have been seen.
    pub fn next_request(&self, total: u64) -> Option<PageRequest> {
        self.request.next(self.len(), total)
    }

    fn entries(&self) -> &[Value] {
        self.body
            .get("records")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: Value, request: PageRequest) -> RecordPage {
        match body {
            Value::Object(map) => RecordPage::new(request, map),
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_records_yield_inner_maps() {
        let page = page(
            serde_json::json!({
                "fields": [
                    {"name":"_sourcehost","fieldType":"string","keyField":true},
                    {"name":"_count","fieldType":"int","keyField":false}
                ],
                "records": [
                    {"map": {"_sourcehost": "web-01", "_count": "12"}},
                    {"map": {"_sourcehost": "web-02", "_count": "3"}}
                ]
            }),
            PageRequest::first(100),
        );

        let hosts: Vec<_> = page
            .records()
            .filter_map(|r| r.get("_sourcehost").and_then(Value::as_str))
            .collect();
        assert_eq!(hosts, vec!["web-01", "web-02"]);
        assert_eq!(page.len(), 2);

        let fields = page.fields();
        assert_eq!(fields.len(), 2);
        assert!(fields[0].key_field);
    }

    #[test]
    fn test_missing_records_is_empty() {
        let page = page(serde_json::json!({"fields": []}), PageRequest::first(10));
        assert!(page.is_empty());
        assert_eq!(page.records().count(), 0);
        assert_eq!(page.next_request(5), None);
    }

    #[test]
    fn test_next_request_pages_until_total() {
        let page = page(
            serde_json::json!({"records": [{"map": {}}, {"map": {}}]}),
            PageRequest::first(2),
        );
        assert_eq!(page.next_request(5), Some(PageRequest::new(2, 2)));
        assert_eq!(page.next_request(2), None);
    }
}
