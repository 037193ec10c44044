mod error;
mod input;
mod options;
mod output;
mod settings;

use std::fs::File;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use crossterm::tty::IsTty;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};
use tabledom::{find_element, Element, Event};
use tablesort_dom::init_sortable_tables;

use crate::error::CliError;
use crate::input::{delimiter_byte, header_id, TableInput, TABLE_ID};
use crate::options::Options;
use crate::settings::{ColumnSettings, Settings};

const DEFAULT_DELIMITER: char = ',';

fn main() -> ExitCode {
    let options = Options::parse();

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(options: &Options) -> Result<(), CliError> {
    init_logging(options)?;

    let settings = match &options.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let delimiter = options
        .delimiter
        .or(settings.delimiter)
        .unwrap_or(DEFAULT_DELIMITER);

    let input = read_input(options, delimiter_byte(delimiter)?)?;
    let columns = column_settings(&input, &settings, options)?;

    let mut root = Element::new("main")
        .id("document")
        .child(input.to_table(&columns, &settings.markup));
    let mut tables = init_sortable_tables(&mut root, settings.markup.clone());

    for key in &options.sort {
        let column = input.resolve_column(key)?;
        match tables.handle_event(&mut root, &Event::click(header_id(column))) {
            Some(outcome) => log::info!(
                "sorted by {:?} {} as {}",
                input.headers[column],
                outcome.direction,
                outcome.column_type
            ),
            None => log::warn!("column {:?} was not sorted", input.headers[column]),
        }
    }

    let Some(table) = find_element(&root, TABLE_ID) else {
        return Ok(());
    };
    let mut stdout = io::stdout();
    let styled = stdout.is_tty();
    let rendered = output::render(table, &settings.markup, options.format, styled);
    stdout.write_all(rendered.as_bytes())?;
    Ok(())
}

fn init_logging(options: &Options) -> Result<(), CliError> {
    let level = options.log_level();
    match &options.log_file {
        Some(path) => WriteLogger::init(level, Config::default(), File::create(path)?)?,
        None => TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?,
    }
    Ok(())
}

fn read_input(options: &Options, delimiter: u8) -> Result<TableInput, CliError> {
    if options.input.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        TableInput::read(text.as_bytes(), delimiter)
    } else {
        TableInput::read(File::open(&options.input)?, delimiter)
    }
}

/// Settings file entries first, command-line flags on top.
fn column_settings(
    input: &TableInput,
    settings: &Settings,
    options: &Options,
) -> Result<Vec<ColumnSettings>, CliError> {
    let mut columns = vec![ColumnSettings::default(); input.headers.len()];

    for (key, column) in &settings.columns {
        let idx = input.resolve_column(key)?;
        if column.column_type.is_some() {
            columns[idx].column_type = column.column_type;
        }
        if column.sortable.is_some() {
            columns[idx].sortable = column.sortable;
        }
    }
    for (key, column_type) in &options.types {
        columns[input.resolve_column(key)?].column_type = Some(*column_type);
    }
    for key in &options.no_sort {
        columns[input.resolve_column(key)?].sortable = Some(false);
    }

    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablesort_lib::ColumnType;

    #[test]
    fn test_flags_override_settings_file() {
        let input = TableInput {
            headers: vec!["Code".into(), "Seats".into()],
            rows: vec![],
        };
        let settings = Settings::parse(
            "[columns.Seats]\ntype = \"number\"\n[columns.Code]\nsortable = false\n",
        )
        .unwrap();
        let options =
            Options::try_parse_from(["tablesort", "-t", "seats=string", "--no-sort", "2"]).unwrap();

        let columns = column_settings(&input, &settings, &options).unwrap();
        assert_eq!(columns[0].sortable, Some(false));
        assert_eq!(columns[1].column_type, Some(ColumnType::String));
        assert_eq!(columns[1].sortable, Some(false));
    }

    #[test]
    fn test_unknown_settings_column_is_an_error() {
        let input = TableInput {
            headers: vec!["Code".into()],
            rows: vec![],
        };
        let settings = Settings::parse("[columns.Gate]\nsortable = false\n").unwrap();
        let options = Options::try_parse_from(["tablesort"]).unwrap();
        assert!(matches!(
            column_settings(&input, &settings, &options),
            Err(CliError::UnknownColumn(_))
        ));
    }
}
