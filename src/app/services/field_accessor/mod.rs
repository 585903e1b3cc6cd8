//! Typed access to registry fields of a [`Document`]
//!
//! Reads always look at the committed text, writes go to the working text.
//! Layered fields are probed slot by slot: after each slot the next one is
//! read only while the line (counting its line break) is longer than the
//! slot end plus [`LAYER_PROBE_GUARD`].

#[cfg(test)]
pub mod tests;

use crate::app::models::{ChangeMode, FileKind};
use crate::app::services::field_registry::{FieldDescriptor, FieldLocation};
use crate::app::services::record_buffer::Document;
use crate::constants::LAYER_PROBE_GUARD;
use crate::{Error, FieldParseFailure, Result};

/// Raw text of every occurrence of a field, in column order
pub fn read_raw(doc: &Document, descriptor: FieldDescriptor) -> Result<Vec<(FieldLocation, String)>> {
    let base = descriptor.base();
    let line = doc.line(base.line)?;
    let mut fields = Vec::new();

    let mut index = 0;
    loop {
        let location = descriptor.occurrence(index);
        fields.push((location, line.span(location.col_start, location.col_end)));

        if !descriptor.is_layered() || line.probe_len() <= location.col_end + LAYER_PROBE_GUARD {
            break;
        }
        index += 1;
    }

    Ok(fields)
}

/// Number of occurrences the committed text carries
pub fn occurrence_count(doc: &Document, descriptor: FieldDescriptor) -> Result<usize> {
    Ok(read_raw(doc, descriptor)?.len())
}

/// Parse the trimmed text of one field
pub fn parse_field(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// Values of every occurrence of a field
///
/// # Errors
/// * `Error::OutOfRange` if the field's line does not exist
/// * `Error::FieldParse` listing every occurrence that is not a number
pub fn read_value(doc: &Document, parameter: &str, descriptor: FieldDescriptor) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    let mut failures = Vec::new();

    for (location, text) in read_raw(doc, descriptor)? {
        match parse_field(&text) {
            Some(value) => values.push(value),
            None => failures.push(FieldParseFailure {
                parameter: parameter.to_string(),
                line: location.line,
                col_start: location.col_start,
                col_end: location.col_end,
                text,
            }),
        }
    }

    if failures.is_empty() {
        Ok(values)
    } else {
        let kind = FileKind::from_file_name(doc.name())
            .map(|kind| kind.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        Err(Error::FieldParse {
            kind,
            file: doc.name().to_string(),
            failures,
        })
    }
}

/// Fixed-decimal rendering used for every written value
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Write one occurrence of a field into the working text
///
/// # Errors
/// * `Error::OutOfRange` for an occurrence the committed text does not carry
/// * `Error::FormatOverflow` if the rendered value is wider than the slot
pub fn write_value(
    doc: &mut Document,
    descriptor: FieldDescriptor,
    occurrence: usize,
    value: f64,
) -> Result<()> {
    let count = occurrence_count(doc, descriptor)?;
    if occurrence >= count {
        return Err(Error::out_of_range(format!(
            "occurrence {} of field at line {} in '{}' ({} present)",
            occurrence,
            descriptor.base().line,
            doc.name(),
            count
        )));
    }

    let location = descriptor.occurrence(occurrence);
    let text = format_fixed(value, location.decimals);
    doc.write_span(location.line, location.col_start, location.col_end, &text)
}

/// Combine a current value with a change amount
pub fn apply_change(current: f64, amount: f64, mode: ChangeMode) -> f64 {
    match mode {
        ChangeMode::Substitute => amount,
        ChangeMode::Additive => current + amount,
        ChangeMode::Multiplicative => current + current * amount,
    }
}

/// Substituted depth of horizon `index` out of `count`
///
/// A substituted profile depth is spread evenly, so horizon `i` ends at
/// `amount * (i + 1) / count`.
pub fn spread_depth(amount: f64, index: usize, count: usize) -> f64 {
    amount * (index + 1) as f64 / count as f64
}

/// New value of one occurrence, honouring depth spreading
pub fn changed_value(
    values: &[f64],
    index: usize,
    amount: f64,
    mode: ChangeMode,
    spreads_depth: bool,
) -> Result<f64> {
    let current = values.get(index).copied().ok_or_else(|| {
        Error::out_of_range(format!(
            "occurrence {} of a field with {} values",
            index,
            values.len()
        ))
    })?;

    if spreads_depth && mode == ChangeMode::Substitute {
        Ok(spread_depth(amount, index, values.len()))
    } else {
        Ok(apply_change(current, amount, mode))
    }
}
