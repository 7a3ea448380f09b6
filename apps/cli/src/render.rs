use anyhow::{Context, Result};
use geodex::{Country, FlagDeriver, FlagUrls, to_flag_emoji};
use serde::Serialize;
use std::io::Write;

/// How records are printed.
#[derive(Debug)]
pub(crate) struct Render<'a> {
    pub(crate) flags: Option<&'a FlagDeriver>,
    pub(crate) json: bool,
}

impl Render<'_> {
    /// Prints `countries` as a JSON array or one text line each.
    pub(crate) fn list(&self, out: &mut impl Write, countries: &[&Country]) -> Result<()> {
        if self.json {
            return match self.flags {
                Some(deriver) => {
                    let records: Vec<_> = countries.iter().map(|c| deriver.with_flags(c)).collect();
                    write_json(out, &records)
                },
                None => write_json(out, &countries),
            };
        }

        for country in countries {
            writeln!(out, "{}", self.line(country)).context("Failed to write output")?;
        }
        Ok(())
    }

    /// Prints one record as a JSON object or a text line.
    pub(crate) fn one(&self, out: &mut impl Write, country: &Country) -> Result<()> {
        if self.json {
            return match self.flags {
                Some(deriver) => write_json(out, &deriver.with_flags(country)),
                None => write_json(out, country),
            };
        }
        writeln!(out, "{}", self.line(country)).context("Failed to write output")
    }

    fn line(&self, c: &Country) -> String {
        let capital = if c.capital.is_empty() { "-" } else { c.capital };
        let text = format!(
            "{}  {}  {}  +{}  {}  {}",
            c.code, c.alpha3, c.label, c.phone, capital, c.continent
        );
        if self.flags.is_some() { format!("{}  {text}", to_flag_emoji(c.code)) } else { text }
    }
}

/// Prints the emoji and the four URLs, one `key  value` pair per line.
pub(crate) fn flag(out: &mut impl Write, code: &str, deriver: &FlagDeriver) -> Result<()> {
    let FlagUrls { png20, png40, svg, src_set } = deriver.urls(code);
    let emoji = to_flag_emoji(code);
    for (key, value) in
        [("emoji", emoji), ("png20", png20), ("png40", png40), ("svg", svg), ("srcset", src_set)]
    {
        writeln!(out, "{key:<6}  {value}").context("Failed to write output")?;
    }
    Ok(())
}

fn write_json(out: &mut impl Write, value: &(impl Serialize + ?Sized)) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("Failed to serialize records")?;
    writeln!(out).context("Failed to write output")
}
