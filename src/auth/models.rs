use regex::Regex;

use crate::validator::{matches, required, FieldError, Validate};

lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

pub const EMAIL_FIELD: &str = "email";
pub const PASSWORD_FIELD: &str = "password";

#[derive(Deserialize, Debug)]
pub struct Credentials {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl Validate for Credentials {
    fn validate(&self) -> Result<(), FieldError> {
        required(EMAIL_FIELD, &self.email, "Informe seu email")?;
        matches(EMAIL_FIELD, &self.email, &EMAIL, "Informe um email válido")?;

        // passwords are taken as typed, a blank one is still a password
        if self.password.is_empty() {
            return Err(FieldError {
                field: PASSWORD_FIELD,
                message: "Informe sua senha",
            });
        }

        Ok(())
    }
}
