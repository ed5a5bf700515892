//! FILENAME: app/src/runner.rs
// PURPOSE: Evaluates expressions one at a time and writes the report for each.
// CONTEXT: Results go to `out`, text-mode errors go to `err`. In JSON mode
// every expression produces exactly one line on `out`.

use crate::cli::{Config, OutputMode};
use calc_parser::{calculate, parse, tokenize, CalcError, SpannedToken};
use serde::{Serialize, Serializer};
use std::io::{self, BufRead, Write};

/// One JSON line per evaluated expression.
#[derive(Serialize, Debug)]
struct Report<'a> {
    input: &'a str,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_result"
    )]
    result: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ast: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tokens: Option<Vec<SpannedToken>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorReport>,
}

/// JSON has no number for inf or NaN; serde_json would write them as null.
fn serialize_result<S: Serializer>(result: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match result {
        Some(value) if value.is_finite() => serializer.serialize_f64(*value),
        Some(value) if value.is_nan() => serializer.serialize_str("NaN"),
        Some(value) if *value > 0.0 => serializer.serialize_str("inf"),
        Some(_) => serializer.serialize_str("-inf"),
        None => serializer.serialize_none(),
    }
}

#[derive(Serialize, Debug)]
struct ErrorReport {
    kind: &'static str,
    position: usize,
    message: String,
}

impl<'a> Report<'a> {
    fn new(input: &'a str) -> Self {
        Report {
            input,
            result: None,
            ast: None,
            tokens: None,
            error: None,
        }
    }
}

impl From<&CalcError> for ErrorReport {
    fn from(e: &CalcError) -> Self {
        ErrorReport {
            kind: e.kind(),
            position: e.position(),
            message: e.to_string(),
        }
    }
}

pub struct Runner<W: Write, E: Write> {
    config: Config,
    out: W,
    err: E,
    evaluated: usize,
    failures: usize,
}

impl<W: Write, E: Write> Runner<W, E> {
    pub fn new(config: Config, out: W, err: E) -> Self {
        Runner {
            config,
            out,
            err,
            evaluated: 0,
            failures: 0,
        }
    }

    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Evaluates every line of `input`, skipping empty lines.
    pub fn run_lines<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            self.run_expression(&line)?;
        }
        Ok(())
    }

    /// Evaluates one expression and writes its report.
    /// Returns false if the expression was rejected.
    pub fn run_expression(&mut self, input: &str) -> io::Result<bool> {
        self.evaluated += 1;
        let mut report = Report::new(input);

        let outcome = match self.config.mode {
            OutputMode::Value => calculate(input).map(|value| {
                report.result = Some(value);
            }),
            OutputMode::Tokens => tokenize(input).map_err(CalcError::from).map(|tokens| {
                report.tokens = Some(tokens);
            }),
            OutputMode::Ast => parse(input).map(|expr| {
                report.result = Some(expr.evaluate());
                report.ast = Some(expr.to_string());
            }),
        };

        if let Err(e) = &outcome {
            log::info!("expression #{} rejected: {}", self.evaluated, e);
            self.failures += 1;
            report.error = Some(ErrorReport::from(e));
        }

        if self.config.json {
            self.write_json(&report)?;
        } else {
            self.write_text(&report)?;
        }

        Ok(outcome.is_ok())
    }

    fn write_json(&mut self, report: &Report<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, report)?;
        writeln!(self.out)
    }

    fn write_text(&mut self, report: &Report<'_>) -> io::Result<()> {
        if let Some(error) = &report.error {
            return writeln!(self.err, "error: {}", error.message);
        }

        if let Some(tokens) = &report.tokens {
            for spanned in tokens {
                writeln!(self.out, "{}\t{}", spanned.position, spanned.token)?;
            }
            return Ok(());
        }

        match (&report.ast, report.result) {
            (Some(ast), Some(value)) => writeln!(self.out, "{} = {}", ast, value),
            (None, Some(value)) => writeln!(self.out, "{}", value),
            _ => Ok(()),
        }
    }
}
