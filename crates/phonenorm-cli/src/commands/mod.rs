use anyhow::Result;
use clap::Args;
use phonenorm_config::AppConfig;
use phonenorm_core::{CountryTable, PhoneOptions};
use serde::Serialize;
use std::io::{self, Write};

pub mod batch;
pub mod check;
pub mod countries;

pub struct Context<'a> {
    pub table: &'a CountryTable,
    pub json: bool,
    pub config: &'a AppConfig,
}

/// Detection flags shared by `check` and `batch`. Each on/off pair is
/// mutually overriding (last one wins) and an explicit flag beats the config.
#[derive(Debug, Args)]
pub struct DetectionArgs {
    /// ISO 3166 alpha-2 or alpha-3 country code
    #[arg(long, short)]
    pub country: Option<String>,
    /// Accept numbers outside the country's mobile prefixes
    #[arg(long, overrides_with = "mobile_prefix")]
    pub skip_mobile_prefix: bool,
    /// Require a mobile prefix even when the config turns the check off
    #[arg(long, overrides_with = "skip_mobile_prefix")]
    pub mobile_prefix: bool,
    /// Do not drop a trunk prefix echoed after the calling code
    #[arg(long, overrides_with = "no_strict")]
    pub strict: bool,
    /// Drop echoed trunk prefixes even when the config asks for strict detection
    #[arg(long, overrides_with = "strict")]
    pub no_strict: bool,
}

impl DetectionArgs {
    /// Options for one input. The configured default country is only a
    /// fallback for numbers without a leading "+", so international input
    /// still goes through calling-code detection.
    pub fn options_for<'a>(&'a self, ctx: &Context<'a>, number: &str) -> PhoneOptions<'a> {
        let country = match self.country.as_deref() {
            Some(country) => country,
            None if number.trim_start().starts_with('+') => "",
            None => ctx.config.default_country.as_deref().unwrap_or(""),
        };
        PhoneOptions::new()
            .country(country)
            .validate_mobile_prefix(
                switch(self.mobile_prefix, self.skip_mobile_prefix)
                    .unwrap_or(ctx.config.validate_mobile_prefix),
            )
            .strict_detection(
                switch(self.strict, self.no_strict).unwrap_or(ctx.config.strict_detection),
            )
            .country_table(ctx.table)
    }
}

fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
