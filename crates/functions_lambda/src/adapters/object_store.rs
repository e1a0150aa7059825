/// External managed blob storage: keyed put of arbitrary content.
pub trait ObjectStore {
    fn put_object(&self, key: &str, body: &[u8], content_type: &str) -> Result<(), String>;
}
