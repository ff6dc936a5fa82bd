pub trait MailObjectStore {
    fn fetch_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, String>;
    fn object_exists(&self, bucket: &str, key: &str) -> Result<bool, String>;
}
