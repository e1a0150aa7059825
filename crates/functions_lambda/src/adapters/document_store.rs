use serde_json::Value;

/// External managed key-value/table service: point get, put, and full scan
/// by table name. Items cross this boundary as JSON objects keyed by their
/// `id` field.
pub trait DocumentStore {
    fn put_item(&self, table: &str, item: &Value) -> Result<(), String>;

    fn get_item(&self, table: &str, id: &str) -> Result<Option<Value>, String>;

    fn scan(&self, table: &str) -> Result<Vec<Value>, String>;
}
