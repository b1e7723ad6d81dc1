use crate::domain::CountryPhoneRecord;
use crate::rules::normalize::strip_echoed_trunk;
use crate::rules::validate::is_valid;
use crate::table::CountryTable;

/// Looks up a record by ISO 3166 alpha-2 or alpha-3 code.
///
/// Returns `None` for an empty hint as well as for an unknown one.
pub fn by_country<'t>(hint: &str, table: &'t CountryTable) -> Option<&'t CountryPhoneRecord> {
    let hint = hint.trim().to_ascii_uppercase();
    match hint.len() {
        2 => table.find_by_alpha2(&hint),
        3 => table.find_by_alpha3(&hint),
        _ => None,
    }
}

/// Candidates for a `+` number, each the first match in table order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CandidateMatch<'t> {
    /// Validates as typed.
    pub exact: Option<&'t CountryPhoneRecord>,
    /// Validates once the digit after the calling code is dropped.
    pub possible: Option<&'t CountryPhoneRecord>,
}

pub fn by_phone_number<'t>(
    digits: &str,
    validate_mobile_prefix: bool,
    table: &'t CountryTable,
) -> CandidateMatch<'t> {
    let mut candidates = CandidateMatch::default();

    for record in table {
        if record.national_number(digits).is_none() {
            continue;
        }

        if is_valid(digits, record, validate_mobile_prefix, false) {
            candidates.exact = Some(record);
            break;
        }

        if candidates.possible.is_none() {
            let stripped = strip_echoed_trunk(digits, record);
            if stripped.len() < digits.len()
                && is_valid(&stripped, record, validate_mobile_prefix, false)
            {
                candidates.possible = Some(record);
            }
        }
    }

    candidates
}
