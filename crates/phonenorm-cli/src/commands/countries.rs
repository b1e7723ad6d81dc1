use crate::commands::{print_json, Context};
use crate::error::unknown_country;
use anyhow::Result;
use clap::Args;
use phonenorm_core::{by_country, CountryPhoneRecord};

#[derive(Debug, Args)]
pub struct CountriesArgs {
    /// Only countries with this calling code
    #[arg(long, conflicts_with = "country")]
    pub code: Option<String>,
    /// Only the country with this ISO 3166 code
    #[arg(long, short)]
    pub country: Option<String>,
}

pub fn list_countries(ctx: &Context<'_>, args: CountriesArgs) -> Result<()> {
    let records: Vec<&CountryPhoneRecord> = match (&args.country, &args.code) {
        (Some(country), _) => {
            let record = by_country(country, ctx.table)
                .ok_or_else(|| unknown_country(country))?;
            vec![record]
        }
        (None, Some(code)) => ctx.table.find_by_calling_code(code.trim()).collect(),
        (None, None) => ctx.table.iter().collect(),
    };

    if ctx.json {
        return print_json(&records);
    }

    if records.is_empty() {
        println!("no countries");
        return Ok(());
    }

    for record in records {
        println!(
            "{} {} +{} {}",
            record.alpha2, record.alpha3, record.country_code, record.country_name
        );
    }
    Ok(())
}
