use crate::commands::{print_json, Context, DetectionArgs};
use anyhow::{Context as _, Result};
use clap::Args;
use phonenorm_core::{normalize_phone, PhoneResultDto};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// File with one number per line (defaults to stdin)
    #[arg(long, short)]
    pub input: Option<PathBuf>,
    #[command(flatten)]
    pub detection: DetectionArgs,
}

#[derive(Debug, Serialize)]
struct BatchItemDto {
    input: String,
    #[serde(flatten)]
    result: PhoneResultDto,
}

pub fn normalize_batch(ctx: &Context<'_>, args: BatchArgs) -> Result<()> {
    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("open input {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let mut items = Vec::new();
    for line in reader.lines() {
        let line = line.with_context(|| "read input")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let options = args.detection.options_for(ctx, input);
        let result = normalize_phone(input, &options);
        items.push(BatchItemDto {
            input: input.to_string(),
            result: PhoneResultDto::from(&result),
        });
    }

    let valid = items.iter().filter(|item| item.result.is_valid).count();
    debug!(valid, invalid = items.len() - valid, "batch finished");

    if ctx.json {
        return print_json(&items);
    }

    for item in items {
        match item.result.phone_number {
            Some(phone) => println!("{}\t{}", item.input, phone),
            None => println!("{}\tinvalid", item.input),
        }
    }
    Ok(())
}
