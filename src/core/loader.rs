use crate::core::SourceRow;
use crate::utils::error::{DocgenError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::path::Path;

/// Decodes the raw catalogue bytes into rows, header first.
///
/// Every record must have as many fields as the first one; a ragged row,
/// a stray quote or invalid UTF-8 aborts the whole load.
pub fn read_rows(path: &Path, data: &[u8]) -> Result<Vec<SourceRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_reader(data);

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    while reader
        .read_record(&mut record)
        .map_err(|e| parse_error(path, e))?
    {
        let (line, start) = record
            .position()
            .map(|p| (p.line(), p.byte() as usize))
            .unwrap_or((0, 0));
        let end = (reader.position().byte() as usize).clamp(start, data.len());

        if let Err((offset, message)) = check_quoting(&data[start..end]) {
            let newlines = data[start..start + offset]
                .iter()
                .filter(|&&b| b == b'\n')
                .count() as u64;
            return Err(DocgenError::ParseError {
                path: path.to_path_buf(),
                line: line + newlines,
                message: message.to_string(),
            });
        }

        rows.push(SourceRow::new(
            line,
            record.iter().map(str::to_string).collect(),
        ));
    }

    tracing::debug!("Decoded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Strict quote rules for one raw record: a quote may only open a field,
/// and a closing quote must be followed by a delimiter or the line end.
/// `csv` tolerates both mistakes and silently rewrites the field.
fn check_quoting(raw: &[u8]) -> std::result::Result<(), (usize, &'static str)> {
    let mut i = 0;
    let mut field_start = true;

    while i < raw.len() {
        if field_start && raw[i] == b'"' {
            i += 1;
            loop {
                match raw.get(i) {
                    None => return Err((i, "extraneous or missing \" in quoted-field")),
                    Some(b'"') => match raw.get(i + 1) {
                        Some(b'"') => i += 2,
                        None | Some(b',') | Some(b'\n') | Some(b'\r') => {
                            i += 1;
                            break;
                        }
                        Some(_) => return Err((i + 1, "extraneous or missing \" in quoted-field")),
                    },
                    Some(_) => i += 1,
                }
            }
            field_start = false;
            continue;
        }

        match raw[i] {
            b',' | b'\n' => field_start = true,
            b'"' => return Err((i, "bare \" in non-quoted-field")),
            _ => field_start = false,
        }
        i += 1;
    }

    Ok(())
}

fn parse_error(path: &Path, err: csv::Error) -> DocgenError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    DocgenError::ParseError {
        path: path.to_path_buf(),
        line,
        message: err.to_string(),
    }
}
