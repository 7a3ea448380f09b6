use crate::args::{Commands, OutputArgs};
use crate::render::{self, Render};
use anyhow::{Result, bail};
use geodex::dataset::continent;
use geodex::domain::config::GeodexConfig;
use geodex::{
    Country, FilterSortOptions, FlagDeriver, get_all_countries, get_country_by_alpha3,
    get_country_by_code, get_country_by_phone,
};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;

/// Runs one subcommand, writing results to stdout.
///
/// Lookups that find nothing print a message on stderr and return [`ExitCode::FAILURE`].
pub(crate) fn run(command: Commands, config: &GeodexConfig) -> Result<ExitCode> {
    let deriver = FlagDeriver::from(&config.flags);
    let mut out = io::stdout().lock();

    match command {
        Commands::List { continent, sort, order, collation, output } => {
            let mut options = FilterSortOptions::new()
                .collation(collation.unwrap_or(config.query.collation));
            if let Some(name) = continent {
                let name = resolve_continent(&name)?;
                options = options.filter(move |c| c.continent == name);
            }
            if let Some(by) = sort {
                options = options.sort(by, order);
            }
            debug!(?options, "Listing countries");

            let countries = get_all_countries(&options);
            render_with(output, &deriver).list(&mut out, &countries)?;
        },
        Commands::Code { code, output } => {
            return found(get_country_by_code(&code), &mut out, output, &deriver, || {
                format!("no country with code '{code}'")
            });
        },
        Commands::Alpha3 { alpha3, output } => {
            return found(get_country_by_alpha3(&alpha3), &mut out, output, &deriver, || {
                format!("no country with alpha-3 code '{alpha3}'")
            });
        },
        Commands::Phone { phone, output } => {
            let countries = get_country_by_phone(phone.trim_start_matches('+'));
            render_with(output, &deriver).list(&mut out, &countries)?;
        },
        Commands::Flag { code } => render::flag(&mut out, &code, &deriver)?,
    }

    out.flush()?;
    Ok(ExitCode::SUCCESS)
}

fn render_with(output: OutputArgs, deriver: &FlagDeriver) -> Render<'_> {
    Render { flags: output.flags.then_some(deriver), json: output.json }
}

fn found(
    country: Option<&Country>,
    out: &mut impl Write,
    output: OutputArgs,
    deriver: &FlagDeriver,
    missing: impl FnOnce() -> String,
) -> Result<ExitCode> {
    match country {
        Some(country) => {
            render_with(output, deriver).one(out, country)?;
            out.flush()?;
            Ok(ExitCode::SUCCESS)
        },
        None => {
            eprintln!("geodex: {}", missing());
            Ok(ExitCode::FAILURE)
        },
    }
}

/// Maps a user-supplied continent name to the dataset spelling, ignoring case.
fn resolve_continent(name: &str) -> Result<&'static str> {
    let name = name.trim();
    match continent::ALL.iter().copied().find(|c| c.eq_ignore_ascii_case(name)) {
        Some(c) => Ok(c),
        None => bail!("unknown continent '{name}' (expected one of: {})", continent::ALL.join(", ")),
    }
}
