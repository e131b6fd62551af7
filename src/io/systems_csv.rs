//! CSV reader and writer for batches of linear systems.
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::StringRecord;

use crate::system::{SolutionKind, System2x2, System3x3};

/// Coefficient columns of a 2x2 system, equation by equation.
pub const COLUMNS_2X2: [&str; 6] = ["a1", "b1", "c1", "a2", "b2", "c2"];

/// Coefficient columns of a 3x3 system, equation by equation.
pub const COLUMNS_3X3: [&str; 12] = [
    "a1", "b1", "c1", "d1", "a2", "b2", "c2", "d2", "a3", "b3", "c3", "d3",
];

/// Column holding the classification in written output.
pub const SOLUTION_COLUMN: &str = "solution";

/// Configuration for reading and writing system CSV files.
#[derive(Debug, Clone)]
pub struct SystemsCsvConfig {
    /// Field delimiter, comma by default.
    pub delimiter: u8,
    /// Whether the file carries a header row. When reading without
    /// headers, columns are taken in the fixed coefficient order.
    pub has_headers: bool,
}

impl Default for SystemsCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
        }
    }
}

/// Reads a CSV file of 2x2 systems with the default configuration.
pub fn read_systems_2x2<P: AsRef<Path>>(path: P) -> Result<Vec<System2x2>> {
    read_systems_2x2_with_config(path, &SystemsCsvConfig::default())
}

/// Reads a CSV file of 2x2 systems, one per row.
///
/// With headers enabled the coefficient columns are matched by name,
/// case-insensitively and in any order; without headers the first six
/// fields are taken in the order `a1, b1, c1, a2, b2, c2`. Extra
/// columns are ignored.
pub fn read_systems_2x2_with_config<P: AsRef<Path>>(
    path: P,
    config: &SystemsCsvConfig,
) -> Result<Vec<System2x2>> {
    let rows = read_rows(&path, config, &COLUMNS_2X2)?;
    let systems = rows
        .into_iter()
        .map(|v| System2x2::from_rows([[v[0], v[1], v[2]], [v[3], v[4], v[5]]]))
        .collect::<Vec<_>>();
    log::debug!(
        "Read {} 2x2 systems from {}",
        systems.len(),
        path.as_ref().display()
    );
    Ok(systems)
}

/// Reads a CSV file of 3x3 systems with the default configuration.
pub fn read_systems_3x3<P: AsRef<Path>>(path: P) -> Result<Vec<System3x3>> {
    read_systems_3x3_with_config(path, &SystemsCsvConfig::default())
}

/// Reads a CSV file of 3x3 systems, one per row.
///
/// Same contract as [`read_systems_2x2_with_config`] with the twelve
/// columns `a1, b1, c1, d1, a2, b2, c2, d2, a3, b3, c3, d3`.
pub fn read_systems_3x3_with_config<P: AsRef<Path>>(
    path: P,
    config: &SystemsCsvConfig,
) -> Result<Vec<System3x3>> {
    let rows = read_rows(&path, config, &COLUMNS_3X3)?;
    let systems = rows
        .into_iter()
        .map(|v| {
            System3x3::from_rows([
                [v[0], v[1], v[2], v[3]],
                [v[4], v[5], v[6], v[7]],
                [v[8], v[9], v[10], v[11]],
            ])
        })
        .collect::<Vec<_>>();
    log::debug!(
        "Read {} 3x3 systems from {}",
        systems.len(),
        path.as_ref().display()
    );
    Ok(systems)
}

/// Writes classified 2x2 systems with the default configuration.
pub fn write_classified_2x2<P: AsRef<Path>>(
    path: P,
    rows: &[(System2x2, SolutionKind)],
) -> Result<()> {
    write_classified_2x2_with_config(path, rows, &SystemsCsvConfig::default())
}

/// Writes 2x2 systems and their classifications, one per row.
///
/// Output columns are the six coefficients followed by a `solution`
/// column holding the snake_case kind token, so the file round-trips
/// through [`read_systems_2x2_with_config`].
pub fn write_classified_2x2_with_config<P: AsRef<Path>>(
    path: P,
    rows: &[(System2x2, SolutionKind)],
    config: &SystemsCsvConfig,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .from_path(&path)
        .with_context(|| format!("Failed to create output file: {}", path.as_ref().display()))?;

    if config.has_headers {
        writer
            .write_record(COLUMNS_2X2.iter().copied().chain([SOLUTION_COLUMN]))
            .context("Failed to write header row")?;
    }
    for (row_idx, (system, kind)) in rows.iter().enumerate() {
        let [e1, e2] = &system.equations;
        let fields = [
            e1.a.to_string(),
            e1.b.to_string(),
            e1.c.to_string(),
            e2.a.to_string(),
            e2.b.to_string(),
            e2.c.to_string(),
            kind.as_str().to_string(),
        ];
        writer
            .write_record(&fields)
            .with_context(|| format!("Failed to write row {}", row_idx + 1))?;
    }
    writer.flush().context("Failed to flush output file")?;

    log::debug!(
        "Wrote {} classified 2x2 systems to {}",
        rows.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Writes classified 3x3 systems with the default configuration.
pub fn write_classified_3x3<P: AsRef<Path>>(
    path: P,
    rows: &[(System3x3, SolutionKind)],
) -> Result<()> {
    write_classified_3x3_with_config(path, rows, &SystemsCsvConfig::default())
}

/// Writes 3x3 systems and their classifications, one per row.
///
/// Same layout rule as [`write_classified_2x2_with_config`] with the
/// twelve 3x3 coefficient columns.
pub fn write_classified_3x3_with_config<P: AsRef<Path>>(
    path: P,
    rows: &[(System3x3, SolutionKind)],
    config: &SystemsCsvConfig,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .from_path(&path)
        .with_context(|| format!("Failed to create output file: {}", path.as_ref().display()))?;

    if config.has_headers {
        writer
            .write_record(COLUMNS_3X3.iter().copied().chain([SOLUTION_COLUMN]))
            .context("Failed to write header row")?;
    }
    for (row_idx, (system, kind)) in rows.iter().enumerate() {
        let [e1, e2, e3] = &system.equations;
        let fields = [
            e1.a.to_string(),
            e1.b.to_string(),
            e1.c.to_string(),
            e1.d.to_string(),
            e2.a.to_string(),
            e2.b.to_string(),
            e2.c.to_string(),
            e2.d.to_string(),
            e3.a.to_string(),
            e3.b.to_string(),
            e3.c.to_string(),
            e3.d.to_string(),
            kind.as_str().to_string(),
        ];
        writer
            .write_record(&fields)
            .with_context(|| format!("Failed to write row {}", row_idx + 1))?;
    }
    writer.flush().context("Failed to flush output file")?;

    log::debug!(
        "Wrote {} classified 3x3 systems to {}",
        rows.len(),
        path.as_ref().display()
    );
    Ok(())
}

fn read_rows<P: AsRef<Path>>(
    path: &P,
    config: &SystemsCsvConfig,
    columns: &[&str],
) -> Result<Vec<Vec<f64>>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(config.has_headers)
        .from_path(path)
        .with_context(|| format!("Failed to open file: {}", path.as_ref().display()))?;

    let indices = if config.has_headers {
        let headers = reader.headers().context("Failed to read header row")?.clone();
        resolve_columns(&headers, columns)?
    } else {
        (0..columns.len()).collect()
    };

    let mut rows = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
        let mut values = Vec::with_capacity(columns.len());
        for (&idx, name) in indices.iter().zip(columns) {
            values.push(parse_value(&record, idx, name, row_idx)?);
        }
        rows.push(values);
    }
    if rows.is_empty() {
        log::warn!("No systems found in {}", path.as_ref().display());
    }
    Ok(rows)
}

fn resolve_columns(headers: &StringRecord, names: &[&str]) -> Result<Vec<usize>> {
    names
        .iter()
        .map(|name| find_column(headers, name).ok_or_else(|| anyhow!("Missing column '{}'", name)))
        .collect()
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(name))
}

fn parse_value(record: &StringRecord, idx: usize, name: &str, row_idx: usize) -> Result<f64> {
    let raw = record
        .get(idx)
        .ok_or_else(|| anyhow!("Missing value for column '{}' at row {}", name, row_idx + 1))?;
    raw.trim()
        .parse::<f64>()
        .with_context(|| format!("Invalid value '{}' for column '{}' at row {}", raw, name, row_idx + 1))
}
