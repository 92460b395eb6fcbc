use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use roster_query::config::{Command, Config, OutputFormat};
use roster_query::{
    all_rows, cohort_for, distinct_houses, duplicated_last_names, housemates_of,
    rosters_by_house, students_by_cohort, CohortFilter,
};

fn main() -> ExitCode {
    let config = Config::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter()))
        .init();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let path = config.file.as_path();
    let mut out = io::stdout().lock();
    let format = config.format;

    match &config.command {
        Command::Houses => {
            let houses = distinct_houses(path).context("listing houses")?;
            emit_list(&mut out, format, &houses)?;
        }
        Command::Students { cohort } => {
            let filter = CohortFilter::from(cohort.as_str());
            let students = students_by_cohort(path, &filter)
                .with_context(|| format!("listing students in cohort {filter}"))?;
            emit_list(&mut out, format, &students)?;
        }
        Command::Rosters => {
            let rosters = rosters_by_house(path).context("building house rosters")?;
            match format {
                OutputFormat::Json => emit_json(&mut out, &rosters)?,
                OutputFormat::Text => {
                    for (group, names) in rosters.iter() {
                        writeln!(out, "{group} ({})", names.len())?;
                        for name in names {
                            writeln!(out, "  {name}")?;
                        }
                    }
                }
            }
        }
        Command::Rows => {
            let rows = all_rows(path).context("reading rows")?;
            match format {
                OutputFormat::Json => emit_json(&mut out, &rows)?,
                OutputFormat::Text => {
                    for r in &rows {
                        writeln!(
                            out,
                            "{}|{}|{}|{}",
                            r.full_name, r.house, r.advisor, r.cohort_or_flag
                        )?;
                    }
                }
            }
        }
        Command::Cohort { name } => {
            let cohort =
                cohort_for(path, name).with_context(|| format!("looking up cohort of {name}"))?;
            match (format, cohort) {
                (OutputFormat::Json, cohort) => emit_json(&mut out, &cohort)?,
                (OutputFormat::Text, Some(cohort)) => writeln!(out, "{cohort}")?,
                (OutputFormat::Text, None) => writeln!(out, "{name}: not found")?,
            }
        }
        Command::Duplicates => {
            let names = duplicated_last_names(path).context("finding duplicated last names")?;
            emit_list(&mut out, format, &names)?;
        }
        Command::Housemates { name } => {
            let mates = housemates_of(path, name)
                .with_context(|| format!("finding housemates of {name}"))?;
            emit_list(&mut out, format, &mates)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Print a collection of names, one per line or as a JSON array.
fn emit_list<'a, C>(out: &mut impl Write, format: OutputFormat, items: &'a C) -> Result<()>
where
    &'a C: IntoIterator<Item = &'a String>,
    C: Serialize,
{
    match format {
        OutputFormat::Json => emit_json(out, items),
        OutputFormat::Text => {
            for item in items {
                writeln!(out, "{item}")?;
            }
            Ok(())
        }
    }
}

fn emit_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("writing JSON")?;
    writeln!(out)?;
    Ok(())
}
