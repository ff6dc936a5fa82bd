#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogGroupPage {
    pub names: Vec<String>,
    pub next_token: Option<String>,
}

pub trait LogGroupAdmin {
    fn list_log_groups(&self, next_token: Option<&str>) -> Result<LogGroupPage, String>;
    fn delete_log_group(&self, name: &str) -> Result<(), String>;
}
