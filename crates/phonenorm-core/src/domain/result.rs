use crate::domain::CountryPhoneRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidPhone {
    /// E.164 number: `+`, calling code, national number.
    pub phone_number: String,
    pub country_iso2: String,
    pub country_iso3: String,
    /// Calling code with a leading `+`.
    pub country_code: String,
}

impl ValidPhone {
    pub(crate) fn new(digits: &str, record: &CountryPhoneRecord) -> Self {
        Self {
            phone_number: format!("+{}", digits),
            country_iso2: record.alpha2.clone(),
            country_iso3: record.alpha3.clone(),
            country_code: format!("+{}", record.country_code),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneResult {
    Valid(ValidPhone),
    Invalid,
}

impl PhoneResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, PhoneResult::Valid(_))
    }

    pub fn as_valid(&self) -> Option<&ValidPhone> {
        match self {
            PhoneResult::Valid(phone) => Some(phone),
            PhoneResult::Invalid => None,
        }
    }

    pub fn into_valid(self) -> Option<ValidPhone> {
        match self {
            PhoneResult::Valid(phone) => Some(phone),
            PhoneResult::Invalid => None,
        }
    }
}
