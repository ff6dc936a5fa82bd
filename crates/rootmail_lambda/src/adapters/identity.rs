/// SES identity operations used by the verification and readiness handlers.
///
/// Status getters return `None` when SES has no attributes for the identity yet.
pub trait EmailIdentityService {
    fn verify_domain_identity(&self, domain: &str) -> Result<String, String>;
    fn verify_domain_dkim(&self, domain: &str) -> Result<Vec<String>, String>;
    fn account_sending_enabled(&self) -> Result<bool, String>;
    fn identity_verification_status(&self, identity: &str) -> Result<Option<String>, String>;
    fn identity_dkim_status(&self, identity: &str) -> Result<Option<String>, String>;
    fn identity_forwarding_enabled(&self, identity: &str) -> Result<Option<bool>, String>;
}
