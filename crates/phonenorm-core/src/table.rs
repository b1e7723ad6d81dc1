use crate::domain::CountryPhoneRecord;
use crate::error::CoreError;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::OnceLock;

const DEFAULT_TABLE_JSON: &str = include_str!("../data/country_phone_data.json");

static DEFAULT_TABLE: OnceLock<CountryTable> = OnceLock::new();

/// Ordered, validated list of country phone records.
///
/// Iteration order is the order of the source data. Prefix search relies on
/// it: the first matching record wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryTable {
    records: Vec<CountryPhoneRecord>,
}

impl CountryTable {
    /// The bundled table. The first record is the United States.
    pub fn default_table() -> &'static CountryTable {
        DEFAULT_TABLE.get_or_init(|| {
            CountryTable::from_json_str(DEFAULT_TABLE_JSON)
                .expect("bundled country table is valid")
        })
    }

    pub fn from_records(records: Vec<CountryPhoneRecord>) -> Result<Self, CoreError> {
        if records.is_empty() {
            return Err(CoreError::EmptyTable);
        }

        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(records.len());
        for record in records {
            let record = normalize_record(record)?;
            let key = (record.alpha2.clone(), record.alpha3.clone());
            if !seen.insert(key) {
                return Err(CoreError::DuplicateCountry(record.alpha3));
            }
            normalized.push(record);
        }

        Ok(Self {
            records: normalized,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let records: Vec<CountryPhoneRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CoreError> {
        let records: Vec<CountryPhoneRecord> = serde_json::from_reader(reader)?;
        Self::from_records(records)
    }

    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let file = File::open(path).map_err(|source| CoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_reader(BufReader::new(file))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CountryPhoneRecord> {
        self.records.iter()
    }

    /// Record assumed when neither a country nor a `+` is given.
    pub fn default_record(&self) -> &CountryPhoneRecord {
        &self.records[0]
    }

    pub fn find_by_alpha2(&self, alpha2: &str) -> Option<&CountryPhoneRecord> {
        self.records.iter().find(|record| record.alpha2 == alpha2)
    }

    pub fn find_by_alpha3(&self, alpha3: &str) -> Option<&CountryPhoneRecord> {
        self.records.iter().find(|record| record.alpha3 == alpha3)
    }

    /// Every record sharing `code`, in table order.
    pub fn find_by_calling_code<'a>(
        &'a self,
        code: &'a str,
    ) -> impl Iterator<Item = &'a CountryPhoneRecord> + 'a {
        let code = code.trim_start_matches('+');
        self.records
            .iter()
            .filter(move |record| record.country_code == code)
    }
}

impl<'a> IntoIterator for &'a CountryTable {
    type Item = &'a CountryPhoneRecord;
    type IntoIter = std::slice::Iter<'a, CountryPhoneRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn normalize_record(mut record: CountryPhoneRecord) -> Result<CountryPhoneRecord, CoreError> {
    record.alpha2 = normalize_identifier(&record.alpha2, 2)?;
    record.alpha3 = normalize_identifier(&record.alpha3, 3)?;

    let code = record.country_code.trim().trim_start_matches('+');
    if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::InvalidCallingCode {
            country: record.alpha3,
            code: record.country_code,
        });
    }
    record.country_code = code.to_string();

    if record.phone_number_lengths.is_empty() {
        return Err(CoreError::EmptyPhoneNumberLengths(record.alpha3));
    }

    for prefix in &record.mobile_begin_with {
        if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::InvalidMobilePrefix {
                country: record.alpha3.clone(),
                prefix: prefix.clone(),
            });
        }
    }

    Ok(record)
}

fn normalize_identifier(raw: &str, len: usize) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.len() != len || !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(CoreError::InvalidCountryIdentifier(raw.to_string()));
    }
    Ok(trimmed.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::CountryTable;
    use crate::domain::CountryPhoneRecord;
    use crate::error::CoreError;
    use std::io::Write;

    fn record(alpha2: &str, alpha3: &str, code: &str) -> CountryPhoneRecord {
        CountryPhoneRecord {
            alpha2: alpha2.to_string(),
            alpha3: alpha3.to_string(),
            country_code: code.to_string(),
            country_name: String::new(),
            mobile_begin_with: vec![],
            phone_number_lengths: vec![9],
        }
    }

    #[test]
    fn default_table_starts_with_usa_and_contains_canada() {
        let table = CountryTable::default_table();
        assert_eq!(table.default_record().alpha3, "USA");
        assert!(table.find_by_alpha3("CAN").is_some());
        assert!(table.iter().len() > 200);
    }

    #[test]
    fn default_table_has_unique_identifiers() {
        let table = CountryTable::default_table();
        let mut alpha3: Vec<&str> = table.iter().map(|r| r.alpha3.as_str()).collect();
        alpha3.sort_unstable();
        alpha3.dedup();
        assert_eq!(alpha3.len(), table.iter().len());
    }

    #[test]
    fn find_by_calling_code_keeps_table_order() {
        let table = CountryTable::default_table();
        let nanp: Vec<&str> = table
            .find_by_calling_code("+1")
            .map(|r| r.alpha3.as_str())
            .collect();
        assert_eq!(nanp.first(), Some(&"USA"));
        assert!(nanp.contains(&"CAN"));
        assert!(nanp.contains(&"PRI"));
    }

    #[test]
    fn from_records_rejects_empty_table() {
        let err = CountryTable::from_records(vec![]).unwrap_err();
        assert!(matches!(err, CoreError::EmptyTable));
    }

    #[test]
    fn from_records_uppercases_identifiers_and_strips_plus() {
        let table = CountryTable::from_records(vec![record("fr", "fra", "+33")]).unwrap();
        let france = table.default_record();
        assert_eq!(france.alpha2, "FR");
        assert_eq!(france.alpha3, "FRA");
        assert_eq!(france.country_code, "33");
    }

    #[test]
    fn from_records_rejects_bad_calling_code() {
        let err = CountryTable::from_records(vec![record("FR", "FRA", "3a")]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidCallingCode { .. }));
    }

    #[test]
    fn from_records_rejects_missing_lengths() {
        let mut france = record("FR", "FRA", "33");
        france.phone_number_lengths.clear();
        let err = CountryTable::from_records(vec![france]).unwrap_err();
        assert!(matches!(err, CoreError::EmptyPhoneNumberLengths(code) if code == "FRA"));
    }

    #[test]
    fn from_records_rejects_bad_mobile_prefix() {
        let mut france = record("FR", "FRA", "33");
        france.mobile_begin_with = vec!["6".to_string(), "7a".to_string()];
        let err = CountryTable::from_records(vec![france]).unwrap_err();
        match err {
            CoreError::InvalidMobilePrefix { country, prefix } => {
                assert_eq!(country, "FRA");
                assert_eq!(prefix, "7a");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let mut france = record("FR", "FRA", "33");
        france.mobile_begin_with = vec![String::new()];
        let err = CountryTable::from_records(vec![france]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidMobilePrefix { .. }));
    }

    #[test]
    fn from_records_rejects_bad_identifier() {
        let err = CountryTable::from_records(vec![record("F1", "FRA", "33")]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidCountryIdentifier(ref id) if id == "F1"));

        let err = CountryTable::from_records(vec![record("FR", "FR", "33")]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidCountryIdentifier(_)));
    }

    #[test]
    fn from_records_rejects_duplicates() {
        let err = CountryTable::from_records(vec![
            record("FR", "FRA", "33"),
            record("FR", "FRA", "33"),
        ])
        .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateCountry(_)));
    }

    #[test]
    fn from_json_str_reports_parse_errors() {
        let err = CountryTable::from_json_str("[{\"alpha2\": 1}]").unwrap_err();
        assert!(matches!(err, CoreError::Parse(_)));
    }

    #[test]
    fn from_path_reads_replacement_table() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[{{"alpha2":"FR","alpha3":"FRA","country_code":"33","mobile_begin_with":["6","7"],"phone_number_lengths":[9]}}]"#
        )
        .expect("write table");

        let table = CountryTable::from_path(file.path()).expect("load table");
        assert_eq!(table.iter().len(), 1);
        assert_eq!(table.default_record().country_name, "");
    }

    #[test]
    fn from_path_reports_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = CountryTable::from_path(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CoreError::Read { .. }));
    }
}
