use rootmail_core::password_reset::PasswordResetParameter;

pub trait ParameterStore {
    fn put_reset_parameter(&self, parameter: &PasswordResetParameter) -> Result<(), String>;
}
