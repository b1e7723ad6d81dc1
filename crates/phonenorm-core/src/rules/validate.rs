use crate::domain::CountryPhoneRecord;

/// Checks `digits` (calling code included, no `+`) against `record`.
///
/// A number written with a `+` must carry the record's calling code.
pub fn is_valid(
    digits: &str,
    record: &CountryPhoneRecord,
    validate_mobile_prefix: bool,
    has_plus_sign: bool,
) -> bool {
    let national = match record.national_number(digits) {
        Some(national) => national,
        None if has_plus_sign => return false,
        None => digits,
    };

    if !record.accepts_length(national.len()) {
        return false;
    }

    !validate_mobile_prefix || record.has_mobile_prefix(national)
}
