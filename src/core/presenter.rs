use crate::domain::error::InputError;
use crate::domain::report::ReportRow;
use std::io::{self, Write};
use std::num::IntErrorKind;
use tracing::debug;

/// Console renderer for a slice of report rows
pub trait RowRenderer {
    fn render(&self, rows: &[ReportRow], out: &mut dyn Write) -> io::Result<()>;
    fn name(&self) -> &'static str;
}

/// A preview row count after clamping, with the reasons it was adjusted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewCount {
    pub count: usize,
    pub warnings: Vec<InputError>,
}

/// Clamp a raw `--view` value against `total` rows.
///
/// Unparseable and non-positive values fall back to `default_count`; the
/// result never exceeds `total`. Integers too large for `i64` still count
/// as requests for more rows than exist.
pub fn clamp_view_count(raw: &str, total: usize, default_count: usize) -> ViewCount {
    let mut warnings = Vec::new();
    let trimmed = raw.trim();

    let (requested, requested_text) = match trimmed.parse::<i64>() {
        Ok(n) if n > 0 => (usize::try_from(n).unwrap_or(usize::MAX), n.to_string()),
        Ok(n) => {
            warnings.push(InputError::NonPositive {
                requested: n.to_string(),
                substitute: default_count,
            });
            (default_count, default_count.to_string())
        }
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow) => {
            (usize::MAX, integer_text(trimmed))
        }
        Err(e) if matches!(e.kind(), IntErrorKind::NegOverflow) => {
            warnings.push(InputError::NonPositive {
                requested: integer_text(trimmed),
                substitute: default_count,
            });
            (default_count, default_count.to_string())
        }
        Err(_) => {
            warnings.push(InputError::NotANumber {
                raw: raw.to_string(),
                substitute: default_count,
            });
            (default_count, default_count.to_string())
        }
    };

    let count = if requested > total {
        warnings.push(InputError::ExceedsAvailable {
            requested: requested_text,
            available: total,
        });
        total
    } else {
        requested
    };

    ViewCount { count, warnings }
}

/// Canonical decimal form of an integer literal that overflowed `i64`.
fn integer_text(literal: &str) -> String {
    let (sign, digits) = match literal.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", literal.strip_prefix('+').unwrap_or(literal)),
    };
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        "0".to_string()
    } else {
        format!("{}{}", sign, digits)
    }
}

/// Print the first rows of the report. Only writes to `out`; `rows` is untouched.
pub fn present(
    rows: &[ReportRow],
    requested: &str,
    default_count: usize,
    renderer: &dyn RowRenderer,
    out: &mut dyn Write,
) -> io::Result<()> {
    let view = clamp_view_count(requested, rows.len(), default_count);
    for warning in &view.warnings {
        writeln!(out, "[view] {}", warning)?;
    }
    debug!("Previewing {} of {} rows with {} renderer", view.count, rows.len(), renderer.name());

    writeln!(
        out,
        "\n=== Filesystem Report (showing first {} of {} rows) ===",
        view.count,
        rows.len()
    )?;
    renderer.render(&rows[..view.count], out)
}
