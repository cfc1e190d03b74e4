use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::{Error, Result};

const DATE_OF_BIRTH_FORMAT: &str = "%Y-%m-%d";

/// Body of `POST /api/users/signup`. Fields are optional at the serde level so
/// a missing or malformed field surfaces as a validation error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SignupPayload {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, email)]
    pub email: Option<String>,
    #[validate(required, custom(function = "validate_password_strength"))]
    pub password: Option<String>,
    #[validate(required, length(min = 1))]
    pub phone_number: Option<String>,
    #[validate(required, length(min = 1))]
    pub gender: Option<String>,
    #[validate(required, custom(function = "validate_date_of_birth"))]
    pub date_of_birth: Option<String>,
    #[validate(required, length(min = 1))]
    pub membership_status: Option<String>,
}

/// A signup that passed validation.
#[derive(Debug, Clone)]
pub struct Signup {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub gender: String,
    pub date_of_birth: NaiveDate,
    pub membership_status: String,
}

impl SignupPayload {
    pub fn into_signup(self) -> Result<Signup> {
        self.validate()?;
        let date_of_birth = required(self.date_of_birth, "date_of_birth")?;
        let date_of_birth = NaiveDate::parse_from_str(&date_of_birth, DATE_OF_BIRTH_FORMAT)
            .map_err(|_| Error::BadRequest("date_of_birth must be YYYY-MM-DD".to_string()))?;
        Ok(Signup {
            name: required(self.name, "name")?,
            email: required(self.email, "email")?.trim().to_lowercase(),
            password: required(self.password, "password")?,
            phone_number: required(self.phone_number, "phone_number")?,
            gender: required(self.gender, "gender")?,
            date_of_birth,
            membership_status: required(self.membership_status, "membership_status")?,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginPayload {
    #[validate(required, email)]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

impl LoginPayload {
    /// Returns the normalized email and the password.
    pub fn into_credentials(self) -> Result<(String, String)> {
        self.validate()?;
        let email = required(self.email, "email")?.trim().to_lowercase();
        Ok((email, required(self.password, "password")?))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub email: String,
    pub token: String,
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    value.ok_or_else(|| Error::BadRequest(format!("{} is required", field)))
}

/// At least 8 characters with lowercase, uppercase, digit and symbol.
fn validate_password_strength(password: &str) -> std::result::Result<(), ValidationError> {
    let long_enough = password.chars().count() >= 8;
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_alphanumeric());

    if long_enough && has_lower && has_upper && has_digit && has_symbol {
        Ok(())
    } else {
        Err(ValidationError::new("weak_password"))
    }
}

fn validate_date_of_birth(raw: &str) -> std::result::Result<(), ValidationError> {
    NaiveDate::parse_from_str(raw, DATE_OF_BIRTH_FORMAT)
        .map(|_| ())
        .map_err(|_| ValidationError::new("date_format"))
}
