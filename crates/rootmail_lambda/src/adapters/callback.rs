pub trait CallbackSender {
    fn put_json(&self, url: &str, body: &[u8]) -> Result<(), String>;
}
