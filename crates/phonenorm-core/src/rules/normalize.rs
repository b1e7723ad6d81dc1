use crate::domain::CountryPhoneRecord;

/// Countries whose national numbers legitimately start with `0`.
const LEADING_ZERO_COUNTRIES: [&str; 2] = ["CIV", "COG"];

pub fn keeps_leading_zeros(record: &CountryPhoneRecord) -> bool {
    LEADING_ZERO_COUNTRIES.contains(&record.alpha3.as_str())
}

/// Drops the domestic trunk `8` from an 11-digit Russian number such as
/// `89234567890`.
pub fn strip_russian_trunk(digits: &str, record: &CountryPhoneRecord) -> String {
    if record.alpha3 == "RUS" && digits.len() == 11 && digits.starts_with("89") {
        return digits[1..].to_string();
    }
    digits.to_string()
}

/// Prepends the calling code to a national number typed without `+`.
pub fn ensure_calling_code(
    digits: &str,
    record: &CountryPhoneRecord,
    has_plus_sign: bool,
) -> String {
    if !has_plus_sign && record.national_number(digits).is_none() {
        return format!("{}{}", record.country_code, digits);
    }
    digits.to_string()
}

/// Removes the digit right after the calling code, e.g. the `0` in
/// `+44 0 7911 123456`.
pub fn strip_echoed_trunk(digits: &str, record: &CountryPhoneRecord) -> String {
    match record.national_number(digits) {
        Some(national) if !national.is_empty() => {
            format!("{}{}", record.country_code, &national[1..])
        }
        _ => digits.to_string(),
    }
}

/// Rewrites `digits` as calling code followed by the national number with
/// its leading zeros removed. Numbers of CIV and COG are returned unchanged.
pub fn strip_leading_zeros(digits: &str, record: &CountryPhoneRecord) -> String {
    if keeps_leading_zeros(record) {
        return digits.to_string();
    }
    let national = record.national_number(digits).unwrap_or(digits);
    format!(
        "{}{}",
        record.country_code,
        national.trim_start_matches('0')
    )
}
