use crate::domain::{CountryPhoneRecord, PhoneResult, ValidPhone};
use crate::rules::{normalize, resolve, validate};
use crate::table::CountryTable;
use tracing::debug;

/// Calling code prepended to bare numbers that look like NANP numbers.
const NANP_CALLING_CODE: &str = "1";
/// Second NANP candidate tried when a bare number fails the default record.
const NANP_FALLBACK_ALPHA3: &str = "CAN";

#[derive(Debug, Clone, Copy)]
pub struct PhoneOptions<'a> {
    /// ISO 3166 alpha-2 or alpha-3 code; empty means unknown.
    pub country: &'a str,
    pub validate_mobile_prefix: bool,
    /// Disables the echoed trunk prefix fallback for `+` numbers.
    pub strict_detection: bool,
    /// Replaces the bundled table for this call only.
    pub country_table: Option<&'a CountryTable>,
}

impl Default for PhoneOptions<'_> {
    fn default() -> Self {
        Self {
            country: "",
            validate_mobile_prefix: true,
            strict_detection: false,
            country_table: None,
        }
    }
}

impl<'a> PhoneOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn country(mut self, country: &'a str) -> Self {
        self.country = country;
        self
    }

    pub fn validate_mobile_prefix(mut self, enabled: bool) -> Self {
        self.validate_mobile_prefix = enabled;
        self
    }

    pub fn strict_detection(mut self, enabled: bool) -> Self {
        self.strict_detection = enabled;
        self
    }

    pub fn country_table(mut self, table: &'a CountryTable) -> Self {
        self.country_table = Some(table);
        self
    }
}

/// Normalizes `phone_number` to E.164 and validates it.
///
/// The country comes from `options.country` when given, from the calling
/// code when the input starts with `+`, and otherwise defaults to the first
/// table record (the United States), with Canada tried as a fallback for
/// bare ten-digit numbers.
pub fn normalize_phone(phone_number: &str, options: &PhoneOptions<'_>) -> PhoneResult {
    let table = options
        .country_table
        .unwrap_or_else(|| CountryTable::default_table());

    let trimmed = phone_number.trim();
    let has_plus_sign = trimmed.starts_with('+');
    let mut digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    let country = options.country.trim();
    let mut nanp_ambiguous = false;

    let record: &CountryPhoneRecord = if !country.is_empty() {
        let Some(record) = resolve::by_country(country, table) else {
            debug!(country, "unknown country");
            return PhoneResult::Invalid;
        };
        digits = normalize::strip_russian_trunk(&digits, record);
        digits = normalize::ensure_calling_code(&digits, record, has_plus_sign);
        record
    } else if has_plus_sign {
        let candidates =
            resolve::by_phone_number(&digits, options.validate_mobile_prefix, table);
        match (candidates.exact, candidates.possible) {
            (Some(record), _) => record,
            (None, Some(record)) if !options.strict_detection => {
                debug!(country = %record.alpha3, "dropping echoed trunk prefix");
                digits = normalize::strip_echoed_trunk(&digits, record);
                record
            }
            _ => {
                debug!("no country matches calling code");
                return PhoneResult::Invalid;
            }
        }
    } else {
        let record = table.default_record();
        if record.accepts_length(digits.len()) {
            digits = format!("{}{}", NANP_CALLING_CODE, digits);
            nanp_ambiguous = true;
        }
        record
    };

    debug!(country = %record.alpha3, digits = %digits, "country resolved");

    let digits = normalize::strip_leading_zeros(&digits, record);
    if validate::is_valid(&digits, record, options.validate_mobile_prefix, has_plus_sign) {
        return PhoneResult::Valid(ValidPhone::new(&digits, record));
    }

    if nanp_ambiguous {
        if let Some(fallback) = table.find_by_alpha3(NANP_FALLBACK_ALPHA3) {
            if validate::is_valid(
                &digits,
                fallback,
                options.validate_mobile_prefix,
                has_plus_sign,
            ) {
                debug!(country = %fallback.alpha3, "matched NANP fallback");
                return PhoneResult::Valid(ValidPhone::new(&digits, fallback));
            }
        }
    }

    PhoneResult::Invalid
}
