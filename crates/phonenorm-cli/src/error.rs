use anyhow::Error;
use phonenorm_config::ConfigError;
use phonenorm_core::CoreError;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_UNKNOWN_COUNTRY: u8 = 2;
pub const EXIT_BAD_CONFIG: u8 = 3;
pub const EXIT_INVALID_NUMBER: u8 = 4;
pub const EXIT_BAD_TABLE: u8 = 5;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("not a valid phone number: {0}")]
    InvalidNumber(String),
    #[error("unknown country: {0}")]
    UnknownCountry(String),
}

pub fn invalid_number(number: &str) -> Error {
    CliError::InvalidNumber(number.trim().to_string()).into()
}

pub fn unknown_country(country: &str) -> Error {
    CliError::UnknownCountry(country.trim().to_string()).into()
}

/// Table and config failures carry their cause below an anyhow context, so
/// the root cause is always printed; `--verbose` prints the whole chain.
pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
        return;
    }
    let root = err.root_cause();
    if err.chain().count() > 1 {
        eprintln!("error: {}: {}", err, root);
    } else {
        eprintln!("error: {}", err);
    }
    if exit_status(err) == EXIT_BAD_TABLE {
        eprintln!("hint: without --table or `country_table` the bundled table is used");
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(exit_status(err))
}

fn exit_status(err: &Error) -> u8 {
    err.chain()
        .find_map(|cause| {
            if let Some(cli_err) = cause.downcast_ref::<CliError>() {
                return Some(match cli_err {
                    CliError::InvalidNumber(_) => EXIT_INVALID_NUMBER,
                    CliError::UnknownCountry(_) => EXIT_UNKNOWN_COUNTRY,
                });
            }
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return Some(match config_err {
                    ConfigError::MissingHomeDir => EXIT_FAILURE,
                    _ => EXIT_BAD_CONFIG,
                });
            }
            // Any table problem, unreadable file included, is a bad table.
            cause.downcast_ref::<CoreError>().map(|_| EXIT_BAD_TABLE)
        })
        .unwrap_or(EXIT_FAILURE)
}
