//! Pip dot layouts parsed from the text layout table.
//!
//! Each pip count has a record of five rows of three characters, with a `1`
//! marking an occupied dot slot, followed by one blank separator line.

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use crate::{error::DominoError, geometry::GeometryConfig};

const RECORD_ROWS: usize = 5;
const RECORD_COLUMNS: usize = 3;
const RECORD_LINES: usize = RECORD_ROWS + 1;

/// Dot centers for one pip count, relative to the cell's top-left corner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipPattern(Vec<(u32, u32)>);

impl PipPattern {
    pub fn new(dots: Vec<(u32, u32)>) -> Self {
        Self(dots)
    }

    pub fn dots(&self) -> &[(u32, u32)] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipLayoutTable {
    patterns: Vec<PipPattern>,
}

impl PipLayoutTable {
    /// Builds a table directly from patterns, indexed by pip count.
    pub fn from_patterns(patterns: Vec<PipPattern>) -> Result<Self, DominoError> {
        if patterns.is_empty() || patterns.len() > usize::from(u8::MAX) + 1 {
            return Err(DominoError::InvalidConfig(format!(
                "layout table needs 1..=256 patterns, got {}",
                patterns.len()
            )));
        }
        Ok(Self { patterns })
    }

    /// Parses records for pip counts `0..=max_pips`, requiring each record to
    /// mark exactly as many dots as its pip count.
    pub fn parse(
        source: &str,
        geometry: &GeometryConfig,
        max_pips: u8,
    ) -> Result<Self, DominoError> {
        Self::parse_records(source, geometry, max_pips, true)
    }

    /// Like [`PipLayoutTable::parse`] but accepts any number of marks per record.
    pub fn parse_lenient(
        source: &str,
        geometry: &GeometryConfig,
        max_pips: u8,
    ) -> Result<Self, DominoError> {
        Self::parse_records(source, geometry, max_pips, false)
    }

    pub fn from_reader<R: BufRead>(
        mut reader: R,
        geometry: &GeometryConfig,
        max_pips: u8,
        strict: bool,
    ) -> Result<Self, DominoError> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Self::parse_records(&source, geometry, max_pips, strict)
    }

    pub fn open<P: AsRef<Path>>(
        path: P,
        geometry: &GeometryConfig,
        max_pips: u8,
        strict: bool,
    ) -> Result<Self, DominoError> {
        let path = path.as_ref();
        log::debug!("Reading pip layout from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), geometry, max_pips, strict)
    }

    fn parse_records(
        source: &str,
        geometry: &GeometryConfig,
        max_pips: u8,
        strict: bool,
    ) -> Result<Self, DominoError> {
        let lines: Vec<&str> = source.lines().collect();
        let records = usize::from(max_pips) + 1;
        let needed = records * RECORD_LINES;
        if lines.len() < needed {
            return Err(DominoError::MalformedLayout {
                line: lines.len() + 1,
                reason: format!(
                    "expected {needed} lines for pip counts 0..={max_pips}, found {}",
                    lines.len()
                ),
            });
        }

        let rows_y = geometry.row_offsets();
        let columns_x = geometry.column_offsets();

        let patterns = lines
            .chunks_exact(RECORD_LINES)
            .take(records)
            .enumerate()
            .map(|(pips, record)| {
                let first_line = pips * RECORD_LINES;
                let mut dots = Vec::new();
                for (row, line) in record[..RECORD_ROWS].iter().enumerate() {
                    let cells: Vec<char> = line.chars().take(RECORD_COLUMNS).collect();
                    if cells.len() < RECORD_COLUMNS {
                        return Err(DominoError::MalformedLayout {
                            line: first_line + row + 1,
                            reason: format!(
                                "row {line:?} is shorter than {RECORD_COLUMNS} characters"
                            ),
                        });
                    }
                    dots.extend(
                        cells
                            .iter()
                            .zip(columns_x)
                            .filter(|(c, _)| **c == '1')
                            .map(|(_, x)| (x, rows_y[row])),
                    );
                }

                let pips = pips as u8;
                if dots.len() != usize::from(pips) {
                    if strict {
                        return Err(DominoError::PipCountMismatch {
                            pips,
                            found: dots.len(),
                        });
                    }
                    log::warn!("Layout record for {pips} pips marks {} dots", dots.len());
                }
                log::debug!("Parsed {} dots for {pips} pips", dots.len());
                Ok(PipPattern(dots))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    pub fn max_pips(&self) -> u8 {
        (self.patterns.len() - 1) as u8
    }

    pub fn pattern(&self, pips: u8) -> Result<&PipPattern, DominoError> {
        self.patterns
            .get(usize::from(pips))
            .ok_or(DominoError::PipCountOutOfRange {
                pips,
                max: self.max_pips(),
            })
    }

    pub fn patterns(&self) -> impl Iterator<Item = (u8, &PipPattern)> {
        self.patterns
            .iter()
            .enumerate()
            .map(|(pips, pattern)| (pips as u8, pattern))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIPPED: &str = include_str!("../../../assets/pip_positions.txt");

    fn geometry() -> GeometryConfig {
        GeometryConfig::new(120)
    }

    fn record(rows: [&str; 5]) -> String {
        let mut s = rows.join("\n");
        s.push_str("\n\n");
        s
    }

    #[test]
    fn shipped_table_has_one_dot_per_pip() {
        let table = PipLayoutTable::parse(SHIPPED, &geometry(), 12).unwrap();
        assert_eq!(table.max_pips(), 12);
        for (pips, pattern) in table.patterns() {
            assert_eq!(pattern.len(), usize::from(pips));
        }
    }

    #[test]
    fn shipped_dots_never_overlap() {
        let g = geometry();
        let table = PipLayoutTable::parse(SHIPPED, &g, 12).unwrap();
        let min_gap = (2 * g.pip_radius) as i64;
        for (_, pattern) in table.patterns() {
            for (i, &(ax, ay)) in pattern.dots().iter().enumerate() {
                for &(bx, by) in &pattern.dots()[i + 1..] {
                    let (dx, dy) = (ax as i64 - bx as i64, ay as i64 - by as i64);
                    assert!(dx * dx + dy * dy >= min_gap * min_gap);
                }
            }
        }
    }

    #[test]
    fn dots_are_emitted_in_row_major_order() {
        let source = record(["000", "000", "000", "000", "000"])
            + &record(["000", "000", "010", "000", "000"])
            + &record(["001", "000", "000", "000", "100"]);
        let table = PipLayoutTable::parse(&source, &geometry(), 2).unwrap();

        assert!(table.pattern(0).unwrap().is_empty());
        assert_eq!(table.pattern(1).unwrap().dots(), &[(60, 60)]);
        assert_eq!(table.pattern(2).unwrap().dots(), &[(90, 30), (30, 90)]);
    }

    #[test]
    fn only_ones_mark_dots() {
        let source = record(["x0 ", "1..", "000", "000", "000"]);
        let table = PipLayoutTable::parse_lenient(&source, &geometry(), 0).unwrap();
        assert_eq!(table.pattern(0).unwrap().dots(), &[(30, 50)]);
    }

    #[test]
    fn too_few_lines_is_malformed() {
        let source = record(["000", "000", "000", "000", "000"]);
        let err = PipLayoutTable::parse(&source, &geometry(), 1).unwrap_err();
        assert!(matches!(err, DominoError::MalformedLayout { line: 7, .. }));
    }

    #[test]
    fn missing_final_separator_is_malformed() {
        let source = "000\n000\n000\n000\n000";
        let err = PipLayoutTable::parse(source, &geometry(), 0).unwrap_err();
        assert!(matches!(err, DominoError::MalformedLayout { .. }));
    }

    #[test]
    fn short_row_is_malformed() {
        let source = record(["000", "000", "000", "000", "000"])
            + &record(["000", "01", "000", "000", "000"]);
        let err = PipLayoutTable::parse(&source, &geometry(), 1).unwrap_err();
        assert!(matches!(err, DominoError::MalformedLayout { line: 8, .. }));
    }

    #[test]
    fn row_width_counts_characters_not_bytes() {
        // "é1" is three bytes but only two characters
        let source = record(["000", "000", "000", "000", "000"])
            + &record(["é1", "000", "000", "000", "000"]);
        let err = PipLayoutTable::parse(&source, &geometry(), 1).unwrap_err();
        assert!(matches!(err, DominoError::MalformedLayout { line: 7, .. }));

        let source = record(["000", "000", "000", "000", "000"])
            + &record(["é01", "000", "000", "000", "000"]);
        let table = PipLayoutTable::parse(&source, &geometry(), 1).unwrap();
        let geometry = geometry();
        assert_eq!(
            table.pattern(1).unwrap().dots(),
            &[(geometry.column_offsets()[2], geometry.row_offsets()[0])]
        );
    }

    #[test]
    fn strict_parse_rejects_count_mismatch() {
        let source = record(["000", "000", "000", "000", "000"])
            + &record(["101", "000", "000", "000", "000"]);
        let err = PipLayoutTable::parse(&source, &geometry(), 1).unwrap_err();
        assert!(matches!(err, DominoError::PipCountMismatch { pips: 1, found: 2 }));

        let table = PipLayoutTable::parse_lenient(&source, &geometry(), 1).unwrap();
        assert_eq!(table.pattern(1).unwrap().len(), 2);
    }

    #[test]
    fn extra_records_are_ignored() {
        let table = PipLayoutTable::parse(SHIPPED, &geometry(), 6).unwrap();
        assert_eq!(table.max_pips(), 6);
        assert!(table.pattern(7).is_err());
    }

    #[test]
    fn lookup_past_max_is_out_of_range() {
        let table = PipLayoutTable::parse(SHIPPED, &geometry(), 12).unwrap();
        assert!(matches!(
            table.pattern(13),
            Err(DominoError::PipCountOutOfRange { pips: 13, max: 12 })
        ));
    }

    #[test]
    fn crlf_line_endings_parse() {
        let source = SHIPPED.replace('\n', "\r\n");
        let table = PipLayoutTable::parse(&source, &geometry(), 12).unwrap();
        assert_eq!(table.pattern(12).unwrap().len(), 12);
    }

    #[test]
    fn reader_and_file_sources_match() {
        let g = geometry();
        let from_str = PipLayoutTable::parse(SHIPPED, &g, 12).unwrap();
        let from_reader = PipLayoutTable::from_reader(SHIPPED.as_bytes(), &g, 12, true).unwrap();
        assert_eq!(from_str, from_reader);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.txt");
        std::fs::write(&path, SHIPPED).unwrap();
        assert_eq!(PipLayoutTable::open(&path, &g, 12, true).unwrap(), from_str);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err =
            PipLayoutTable::open(dir.path().join("absent.txt"), &geometry(), 12, true).unwrap_err();
        assert!(matches!(err, DominoError::Io(_)));
    }
}
