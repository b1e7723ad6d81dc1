use crate::domain::PhoneResult;
use serde::{Deserialize, Serialize};

/// Flat view of a [`PhoneResult`], with every field null when invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneResultDto {
    pub is_valid: bool,
    pub phone_number: Option<String>,
    pub country_iso2: Option<String>,
    pub country_iso3: Option<String>,
    pub country_code: Option<String>,
}

impl From<&PhoneResult> for PhoneResultDto {
    fn from(result: &PhoneResult) -> Self {
        match result {
            PhoneResult::Valid(phone) => Self {
                is_valid: true,
                phone_number: Some(phone.phone_number.clone()),
                country_iso2: Some(phone.country_iso2.clone()),
                country_iso3: Some(phone.country_iso3.clone()),
                country_code: Some(phone.country_code.clone()),
            },
            PhoneResult::Invalid => Self {
                is_valid: false,
                phone_number: None,
                country_iso2: None,
                country_iso3: None,
                country_code: None,
            },
        }
    }
}
