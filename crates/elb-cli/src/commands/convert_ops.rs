use std::fmt::Write as _;

use serde::Serialize;

use elbonian::convert::numeral_value;
use elbonian::{explain, numeral, ConvertError, Converter, Explanation, Form, Symbol};

use crate::settings::OutputSettings;

/// Output switches after merging command-line flags over settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub json: bool,
    pub pretty: bool,
    pub breakdown: bool,
}

impl OutputOptions {
    pub fn resolve(json_flag: bool, breakdown_flag: bool, settings: &OutputSettings) -> Self {
        let json = json_flag || settings.json;
        Self {
            json,
            pretty: json && settings.pretty,
            breakdown: breakdown_flag || settings.breakdown,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ConversionReport {
    pub input: String,
    pub form: Form,
    pub arabic: u16,
    pub numeral: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Explanation>,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub numeral: String,
    pub well_formed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TableRow {
    pub symbol: Symbol,
    pub value: u16,
    pub max_repeat: u8,
}

pub fn build_report(input: &str, breakdown: bool) -> Result<ConversionReport, ConvertError> {
    let converter = Converter::new(input)?;
    Ok(ConversionReport {
        input: converter.input().to_string(),
        form: converter.form(),
        arabic: converter.to_arabic(),
        numeral: converter.to_numeral(),
        breakdown: breakdown.then(|| explain(&converter)),
    })
}

pub fn build_check(raw: &str) -> CheckReport {
    let trimmed = raw.trim();
    match numeral::validate(trimmed) {
        Ok(symbols) => CheckReport {
            numeral: trimmed.to_string(),
            well_formed: true,
            value: Some(numeral_value(&symbols)),
            reason: None,
        },
        Err(reason) => CheckReport {
            numeral: trimmed.to_string(),
            well_formed: false,
            value: None,
            reason: Some(reason.to_string()),
        },
    }
}

pub fn build_table() -> Vec<TableRow> {
    Symbol::ALL
        .into_iter()
        .map(|symbol| TableRow {
            symbol,
            value: symbol.value(),
            max_repeat: symbol.max_repeat(),
        })
        .collect()
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

pub fn render_report(report: &ConversionReport, opts: OutputOptions) -> serde_json::Result<String> {
    if opts.json {
        return to_json(report, opts.pretty);
    }
    let mut out = String::new();
    let _ = writeln!(out, "input:     {} ({})", report.input, report.form);
    let _ = writeln!(out, "arabic:    {}", report.arabic);
    let _ = write!(out, "numeral:   {}", report.numeral);
    if let Some(breakdown) = &report.breakdown {
        let _ = write!(out, "\nbreakdown: {breakdown}");
    }
    Ok(out)
}

pub fn render_check(report: &CheckReport, opts: OutputOptions) -> serde_json::Result<String> {
    if opts.json {
        return to_json(report, opts.pretty);
    }
    Ok(match (&report.value, &report.reason) {
        (Some(value), _) => format!("OK: {value}"),
        (None, Some(reason)) => format!("Malformed: {reason}"),
        (None, None) => "Malformed".to_string(),
    })
}

pub fn render_table(rows: &[TableRow], opts: OutputOptions) -> serde_json::Result<String> {
    if opts.json {
        return to_json(rows, opts.pretty);
    }
    let mut out = String::from("symbol  value  max");
    for row in rows {
        let _ = write!(
            out,
            "\n{:<6}  {:>5}  {:>3}",
            row.symbol.as_char(),
            row.value,
            row.max_repeat
        );
    }
    Ok(out)
}

pub fn convert_cmd(input: &str, opts: OutputOptions) {
    let report = die!(build_report(input, opts.breakdown), "Error: {}");
    println!("{}", die!(render_report(&report, opts), "Error: {}"));
}

pub fn explain_cmd(input: &str, opts: OutputOptions) {
    let converter = die!(Converter::new(input), "Error: {}");
    let explanation = explain(&converter);
    if opts.json {
        println!("{}", die!(to_json(&explanation, opts.pretty), "Error: {}"));
    } else {
        println!("{} = {}", explanation.numeral, explanation);
    }
}

pub fn check_cmd(raw: &str, opts: OutputOptions) {
    let report = build_check(raw);
    println!("{}", die!(render_check(&report, opts), "Error: {}"));
    if !report.well_formed {
        std::process::exit(1);
    }
}

pub fn table_cmd(opts: OutputOptions) {
    let rows = build_table();
    println!("{}", die!(render_table(&rows, opts), "Error: {}"));
}
