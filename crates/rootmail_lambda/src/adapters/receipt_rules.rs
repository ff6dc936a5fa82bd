use rootmail_core::rule_set::ReceiptRuleSpec;

pub trait ReceiptRuleAdmin {
    fn create_rule_set(&self, rule_set_name: &str) -> Result<(), String>;
    fn create_rule(&self, spec: &ReceiptRuleSpec) -> Result<(), String>;
    /// `None` leaves the account without an active rule set.
    fn set_active_rule_set(&self, rule_set_name: Option<&str>) -> Result<(), String>;
    fn delete_rule(&self, rule_set_name: &str, rule_name: &str) -> Result<(), String>;
    fn delete_rule_set(&self, rule_set_name: &str) -> Result<(), String>;
}
