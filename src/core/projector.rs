use crate::core::{CatalogueEntry, ColumnMap, ServiceRecord, SourceRow};
use crate::utils::error::{DocgenError, Result};
use std::path::{Path, PathBuf};

const ALIAS_DELIMITER: char = ';';

/// Turns catalogue rows into service records.
pub struct RecordProjector {
    columns: ColumnMap,
    source: PathBuf,
}

impl RecordProjector {
    pub fn new(columns: ColumnMap, source: impl AsRef<Path>) -> Self {
        Self {
            columns,
            source: source.as_ref().to_path_buf(),
        }
    }

    /// Skips the header row, drops excluded or nameless rows, and keeps the
    /// survivors in source order.
    pub fn project(&self, rows: &[SourceRow]) -> Result<Vec<ServiceRecord>> {
        let mut records = Vec::new();

        for row in rows.iter().skip(1) {
            let entry = self.entry(row)?;

            if !entry.exclude.is_empty() {
                tracing::trace!("line {}: excluded ({})", entry.line, entry.exclude);
                continue;
            }

            if let Some(record) = project_entry(entry) {
                records.push(record);
            }
        }

        Ok(records)
    }

    /// Reads the named columns out of a positional row.
    pub fn entry(&self, row: &SourceRow) -> Result<CatalogueEntry> {
        let field = |index: usize| -> Result<String> {
            row.get(index)
                .map(str::to_string)
                .ok_or_else(|| DocgenError::ParseError {
                    path: self.source.clone(),
                    line: row.line,
                    message: format!(
                        "row has {} columns but column {} is required",
                        row.fields.len(),
                        self.columns.max_index() + 1
                    ),
                })
        };

        Ok(CatalogueEntry {
            line: row.line,
            actual_package: field(self.columns.provider_package_actual)?,
            correct_package: field(self.columns.provider_package_correct)?,
            aliases: field(self.columns.aliases)?,
            exclude: field(self.columns.exclude)?,
        })
    }
}

fn project_entry(entry: CatalogueEntry) -> Option<ServiceRecord> {
    let name = if !entry.actual_package.is_empty() {
        entry.actual_package
    } else if !entry.correct_package.is_empty() {
        entry.correct_package
    } else {
        tracing::debug!("line {}: no provider package name, skipping", entry.line);
        return None;
    };

    let aliases = if entry.aliases.is_empty() {
        Vec::new()
    } else {
        entry
            .aliases
            .split(ALIAS_DELIMITER)
            .map(str::to_string)
            .collect()
    };

    Some(ServiceRecord { name, aliases })
}

/// Stable ascending sort by name; equal names keep their source order.
pub fn sort_records(records: &mut [ServiceRecord]) {
    records.sort_by(|a, b| a.name.cmp(&b.name));
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: usize = 23;

    fn row(line: u64, actual: &str, correct: &str, aliases: &str, exclude: &str) -> SourceRow {
        let mut fields = vec![String::new(); WIDTH];
        fields[4] = actual.to_string();
        fields[5] = correct.to_string();
        fields[7] = aliases.to_string();
        fields[18] = exclude.to_string();
        SourceRow::new(line, fields)
    }

    fn header() -> SourceRow {
        SourceRow::new(1, (0..WIDTH).map(|i| format!("Column{}", i)).collect())
    }

    fn projector() -> RecordProjector {
        RecordProjector::new(ColumnMap::NAMES_DATA, "names_data.csv")
    }

    #[test]
    fn test_header_is_always_skipped() {
        // a header that would otherwise qualify as a record
        let rows = vec![row(1, "header", "", "", "")];
        assert!(projector().project(&rows).unwrap().is_empty());
    }

    #[test]
    fn test_actual_name_takes_precedence() {
        let rows = vec![header(), row(2, "eks", "", "", ""), row(3, "cognitoidp", "cognitoidentityprovider", "", "")];
        let records = projector().project(&rows).unwrap();

        assert_eq!(records[0], ServiceRecord { name: "eks".to_string(), aliases: vec![] });
        assert_eq!(records[1].name, "cognitoidp");
    }

    #[test]
    fn test_correct_name_is_the_fallback() {
        let rows = vec![header(), row(2, "", "s3", "simple storage;s3-compat", "")];
        let records = projector().project(&rows).unwrap();

        assert_eq!(
            records,
            vec![ServiceRecord {
                name: "s3".to_string(),
                aliases: vec!["simple storage".to_string(), "s3-compat".to_string()],
            }]
        );
    }

    #[test]
    fn test_nameless_row_is_dropped() {
        let rows = vec![header(), row(2, "", "", "x", "")];
        assert!(projector().project(&rows).unwrap().is_empty());
    }

    #[test]
    fn test_any_exclude_value_drops_the_row() {
        let rows = vec![
            header(),
            row(2, "ec2", "compute", "", "yes"),
            row(3, "lambda", "", "", "x"),
            row(4, "sqs", "", "", ""),
        ];
        let records = projector().project(&rows).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "sqs");
    }

    #[test]
    fn test_aliases_keep_empty_segments_and_whitespace() {
        let rows = vec![header(), row(2, "a", "", "x;;y ; z;", "")];
        let records = projector().project(&rows).unwrap();

        assert_eq!(records[0].aliases, vec!["x", "", "y ", " z", ""]);
    }

    #[test]
    fn test_short_row_is_a_parse_error() {
        let rows = vec![header(), SourceRow::new(2, vec!["a".to_string(); 10])];
        let err = projector().project(&rows).unwrap_err();

        match err {
            DocgenError::ParseError { line, message, .. } => {
                assert_eq!(line, 2);
                assert!(message.contains("column 19"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_short_header_alone_is_fine() {
        let rows = vec![SourceRow::new(1, vec!["only".to_string()])];
        assert!(projector().project(&rows).unwrap().is_empty());
    }

    #[test]
    fn test_projection_is_repeatable() {
        let rows = vec![header(), row(2, "eks", "", "", ""), row(3, "", "s3", "a;b", "")];
        let p = projector();

        assert_eq!(p.project(&rows).unwrap(), p.project(&rows).unwrap());
    }

    #[test]
    fn test_sort_is_stable_for_equal_names() {
        let mut records = vec![
            ServiceRecord { name: "vpc".to_string(), aliases: vec!["first".to_string()] },
            ServiceRecord { name: "s3".to_string(), aliases: vec![] },
            ServiceRecord { name: "vpc".to_string(), aliases: vec!["second".to_string()] },
            ServiceRecord { name: "acm".to_string(), aliases: vec![] },
        ];
        sort_records(&mut records);

        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["acm", "s3", "vpc", "vpc"]);
        assert_eq!(records[2].aliases, vec!["first"]);
        assert_eq!(records[3].aliases, vec!["second"]);
    }

    #[test]
    fn test_sort_is_bytewise() {
        let mut records = vec![
            ServiceRecord { name: "b".to_string(), aliases: vec![] },
            ServiceRecord { name: "B".to_string(), aliases: vec![] },
            ServiceRecord { name: "a".to_string(), aliases: vec![] },
        ];
        sort_records(&mut records);

        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "a", "b"]);
    }
}
