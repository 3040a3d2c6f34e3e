//! Registration form state and validation
//!
//! The form is one structured value mutated through [`RegistrationForm::apply`],
//! keyed by [`FormField`], so validation and submission stay in one place.
//! Error messages are per-field and recoverable; submission is blocked
//! until every rule passes.

use crate::domain::customer::City;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;

/// Role tag sent with every self-registration.
pub const CUSTOMER_ROLE: &str = "ROLE_CUSTOMER";

/// Basic `local@domain.tld` shape check, same as the registration page's.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email regex"));

static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").expect("digits regex"));

const MIN_PASSWORD_LEN: usize = 6;
const PHONE_LEN: usize = 10;

/// Form fields addressable by the reducer and the error map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Username,
    Email,
    Password,
    FirstName,
    LastName,
    PhoneNumber,
    DateOfBirth,
    CityId,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::Username,
        FormField::Email,
        FormField::Password,
        FormField::FirstName,
        FormField::LastName,
        FormField::PhoneNumber,
        FormField::DateOfBirth,
        FormField::CityId,
    ];
}

/// Per-field validation messages. Empty means the form may be submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(HashMap<FormField, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn clear(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Customer self-registration body. Wire keys mirror the backend contract,
/// which mixes snake and camel case.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub phone_number: String,
    pub dob: String,
    #[serde(rename = "cityId")]
    pub city_id: String,
    pub roles: Vec<String>,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            phone_number: String::new(),
            dob: String::new(),
            city_id: String::new(),
            roles: vec![CUSTOMER_ROLE.to_string()],
        }
    }
}

impl RegistrationForm {
    /// Reducer-style transition: set one field's value.
    pub fn apply(&mut self, field: FormField, value: String) {
        match field {
            FormField::Username => self.username = value,
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
            FormField::FirstName => self.first_name = value,
            FormField::LastName => self.last_name = value,
            FormField::PhoneNumber => self.phone_number = value,
            FormField::DateOfBirth => self.dob = value,
            FormField::CityId => self.city_id = value,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Username => &self.username,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::PhoneNumber => &self.phone_number,
            FormField::DateOfBirth => &self.dob,
            FormField::CityId => &self.city_id,
        }
    }

    /// Cheap pre-check used to enable the submit control: every field
    /// non-empty. Full validation still runs on submit.
    pub fn is_complete(&self) -> bool {
        FormField::ALL
            .iter()
            .all(|field| !self.value(*field).trim().is_empty())
    }

    /// Full validation pass. All rules are evaluated together so every
    /// broken field gets its message at once. `today` is the upper bound
    /// for the date of birth; `cities` is the fetched reference list the
    /// selector was populated from.
    pub fn validate(&self, cities: &[City], today: NaiveDate) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if self.username.trim().is_empty() {
            errors.insert(FormField::Username, "Username is required");
        }

        if self.email.trim().is_empty() {
            errors.insert(FormField::Email, "Email is required");
        } else if !EMAIL_RE.is_match(self.email.trim()) {
            errors.insert(FormField::Email, "Email is invalid");
        }

        if self.password.is_empty() {
            errors.insert(FormField::Password, "Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.insert(
                FormField::Password,
                "Password must be at least 6 characters long",
            );
        }

        if self.first_name.trim().is_empty() {
            errors.insert(FormField::FirstName, "First name is required");
        }

        if self.last_name.trim().is_empty() {
            errors.insert(FormField::LastName, "Last name is required");
        }

        if self.phone_number.is_empty() {
            errors.insert(FormField::PhoneNumber, "Phone number is required");
        } else if self.phone_number.chars().count() != PHONE_LEN {
            errors.insert(
                FormField::PhoneNumber,
                "Phone number must be exactly 10 digits",
            );
        } else if !DIGITS_RE.is_match(&self.phone_number) {
            errors.insert(
                FormField::PhoneNumber,
                "Phone number can only contain numbers",
            );
        }

        if self.dob.trim().is_empty() {
            errors.insert(FormField::DateOfBirth, "Date of birth is required");
        } else {
            match NaiveDate::parse_from_str(self.dob.trim(), "%Y-%m-%d") {
                Ok(dob) if dob >= today => {
                    errors.insert(
                        FormField::DateOfBirth,
                        "Date of birth must be before the current date",
                    );
                }
                Ok(_) => {}
                Err(_) => {
                    errors.insert(FormField::DateOfBirth, "Date of birth is invalid");
                }
            }
        }

        if self.city_id.trim().is_empty() {
            errors.insert(FormField::CityId, "City selection is required");
        } else {
            let known = self
                .city_id
                .trim()
                .parse::<i64>()
                .map(|id| cities.iter().any(|city| city.city_id == id))
                .unwrap_or(false);
            if !known {
                errors.insert(FormField::CityId, "City selection is invalid");
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities() -> Vec<City> {
        vec![
            City {
                city_id: 1,
                name: "Chennai".to_string(),
            },
            City {
                city_id: 2,
                name: "Mumbai".to_string(),
            },
        ]
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    fn valid_form() -> RegistrationForm {
        let mut form = RegistrationForm::default();
        form.apply(FormField::Username, "ravi_kumar".to_string());
        form.apply(FormField::Email, "ravi@example.com".to_string());
        form.apply(FormField::Password, "s3cret99".to_string());
        form.apply(FormField::FirstName, "Ravi".to_string());
        form.apply(FormField::LastName, "Kumar".to_string());
        form.apply(FormField::PhoneNumber, "9876543210".to_string());
        form.apply(FormField::DateOfBirth, "1995-04-12".to_string());
        form.apply(FormField::CityId, "1".to_string());
        form
    }

    #[test]
    fn valid_form_passes() {
        let form = valid_form();
        assert!(form.is_complete());
        assert!(form.validate(&cities(), today()).is_empty());
    }

    #[test]
    fn empty_form_reports_every_field() {
        let form = RegistrationForm::default();
        assert!(!form.is_complete());
        let errors = form.validate(&cities(), today());
        assert_eq!(errors.len(), FormField::ALL.len());
        assert_eq!(errors.get(FormField::Username), Some("Username is required"));
    }

    #[test]
    fn phone_length_and_digit_errors_are_distinct() {
        let mut form = valid_form();
        form.apply(FormField::PhoneNumber, "12345".to_string());
        let errors = form.validate(&cities(), today());
        assert_eq!(
            errors.get(FormField::PhoneNumber),
            Some("Phone number must be exactly 10 digits")
        );

        form.apply(FormField::PhoneNumber, "12345abcde".to_string());
        let errors = form.validate(&cities(), today());
        assert_eq!(
            errors.get(FormField::PhoneNumber),
            Some("Phone number can only contain numbers")
        );
    }

    #[test]
    fn email_shape_is_checked() {
        let mut form = valid_form();
        for bad in ["ravi", "ravi@example", "ravi example@x.com"] {
            form.apply(FormField::Email, bad.to_string());
            let errors = form.validate(&cities(), today());
            assert_eq!(errors.get(FormField::Email), Some("Email is invalid"), "{bad}");
        }
    }

    #[test]
    fn short_password_is_rejected() {
        let mut form = valid_form();
        form.apply(FormField::Password, "abc12".to_string());
        let errors = form.validate(&cities(), today());
        assert_eq!(
            errors.get(FormField::Password),
            Some("Password must be at least 6 characters long")
        );
    }

    #[test]
    fn dob_today_or_later_is_rejected() {
        let mut form = valid_form();
        for bad in ["2026-08-30", "2027-01-01"] {
            form.apply(FormField::DateOfBirth, bad.to_string());
            let errors = form.validate(&cities(), today());
            assert_eq!(
                errors.get(FormField::DateOfBirth),
                Some("Date of birth must be before the current date"),
                "{bad}"
            );
        }

        form.apply(FormField::DateOfBirth, "2026-08-29".to_string());
        assert!(form.validate(&cities(), today()).is_empty());
    }

    #[test]
    fn city_must_come_from_the_fetched_list() {
        let mut form = valid_form();
        form.apply(FormField::CityId, "42".to_string());
        let errors = form.validate(&cities(), today());
        assert_eq!(errors.get(FormField::CityId), Some("City selection is invalid"));

        form.apply(FormField::CityId, "not-a-number".to_string());
        let errors = form.validate(&cities(), today());
        assert_eq!(errors.get(FormField::CityId), Some("City selection is invalid"));
    }

    #[test]
    fn wire_body_uses_the_backend_key_names() {
        let form = valid_form();
        let body = serde_json::to_value(&form).unwrap();
        assert_eq!(body["firstName"], "Ravi");
        assert_eq!(body["phone_number"], "9876543210");
        assert_eq!(body["cityId"], "1");
        assert_eq!(body["roles"][0], CUSTOMER_ROLE);
    }
}
