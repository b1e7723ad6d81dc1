use crate::commands::{print_json, Context, DetectionArgs};
use crate::error::invalid_number;
use anyhow::Result;
use clap::Args;
use phonenorm_core::{normalize_phone, PhoneResultDto};

#[derive(Debug, Args)]
pub struct CheckArgs {
    pub number: String,
    #[command(flatten)]
    pub detection: DetectionArgs,
}

pub fn check_number(ctx: &Context<'_>, args: CheckArgs) -> Result<()> {
    let options = args.detection.options_for(ctx, &args.number);
    let result = normalize_phone(&args.number, &options);

    if ctx.json {
        print_json(&PhoneResultDto::from(&result))?;
    } else if let Some(phone) = result.as_valid() {
        println!("{} {}", phone.phone_number, phone.country_iso2);
    }

    if !result.is_valid() {
        return Err(invalid_number(&args.number));
    }
    Ok(())
}
