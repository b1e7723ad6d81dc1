use serde::{Deserialize, Serialize};

/// One row of the country phone table.
///
/// Field names follow the JSON layout of the bundled data file so that
/// replacement tables can be written in the same format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryPhoneRecord {
    pub alpha2: String,
    pub alpha3: String,
    /// Calling code without the leading `+`.
    pub country_code: String,
    #[serde(default)]
    pub country_name: String,
    #[serde(default)]
    pub mobile_begin_with: Vec<String>,
    /// Valid lengths of the national number, calling code excluded.
    pub phone_number_lengths: Vec<usize>,
}

impl CountryPhoneRecord {
    /// Digits following the calling code, if `digits` starts with it.
    pub fn national_number<'a>(&self, digits: &'a str) -> Option<&'a str> {
        digits.strip_prefix(self.country_code.as_str())
    }

    pub fn accepts_length(&self, len: usize) -> bool {
        self.phone_number_lengths.contains(&len)
    }

    /// Records without mobile prefixes accept every national number.
    pub fn has_mobile_prefix(&self, national: &str) -> bool {
        self.mobile_begin_with.is_empty()
            || self
                .mobile_begin_with
                .iter()
                .any(|prefix| national.starts_with(prefix.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::CountryPhoneRecord;

    fn france() -> CountryPhoneRecord {
        CountryPhoneRecord {
            alpha2: "FR".to_string(),
            alpha3: "FRA".to_string(),
            country_code: "33".to_string(),
            country_name: "France".to_string(),
            mobile_begin_with: vec!["6".to_string(), "7".to_string()],
            phone_number_lengths: vec![9],
        }
    }

    #[test]
    fn national_number_strips_calling_code_prefix_only() {
        let record = france();
        assert_eq!(record.national_number("33612345678"), Some("612345678"));
        assert_eq!(record.national_number("612333678"), None);
    }

    #[test]
    fn mobile_prefix_check_passes_without_prefixes() {
        let mut record = france();
        assert!(record.has_mobile_prefix("612345678"));
        assert!(!record.has_mobile_prefix("123456789"));

        record.mobile_begin_with.clear();
        assert!(record.has_mobile_prefix("123456789"));
    }
}
