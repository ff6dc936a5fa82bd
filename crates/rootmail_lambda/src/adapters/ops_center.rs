use rootmail_core::ops_ticket::OpsTicketDraft;

pub trait OpsTicketing {
    /// Returns the id of the created ops item when the service reports one.
    fn create_ops_item(&self, ticket: &OpsTicketDraft) -> Result<Option<String>, String>;
}
