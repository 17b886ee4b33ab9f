// Delimited text import with legacy-encoding fallback

use std::path::Path;

use encoding_rs::Encoding;
use restock_engine::RawTable;

use crate::LoadError;

/// Legacy fallbacks tried after UTF-8, in order. EUC-KR (the cp949 superset)
/// and the GB family are what marketplace exports actually arrive in;
/// Windows-1252 is the last resort for western Excel-saved CSVs.
const LEGACY_ENCODINGS: &[&Encoding] = &[
    encoding_rs::EUC_KR,
    encoding_rs::GBK,
    encoding_rs::GB18030,
    encoding_rs::WINDOWS_1252,
];

/// Import a delimited text file of unknown encoding.
///
/// The file is read into memory once; each candidate encoding decodes from
/// the start of the buffer, so a failed attempt leaves no partial state.
/// Decoding is strict (no replacement characters) — a candidate either
/// produces the whole file or is skipped. A decoded candidate must also
/// parse as a delimited table before it wins; a parse failure moves on to
/// the next encoding. All candidates exhausted is a structural failure.
pub fn import(path: &Path) -> Result<RawTable, LoadError> {
    let bytes = std::fs::read(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    // UTF-8 first, with or without a byte-order mark
    let stripped = bytes.strip_prefix(b"\xef\xbb\xbf".as_slice()).unwrap_or(&bytes);
    if let Ok(text) = std::str::from_utf8(stripped) {
        if let Ok(table) = parse(text) {
            return Ok(table);
        }
    }

    for encoding in LEGACY_ENCODINGS {
        if let Some(text) = encoding.decode_without_bom_handling_and_without_replacement(&bytes) {
            if let Ok(table) = parse(&text) {
                return Ok(table);
            }
        }
    }

    Err(LoadError::Undecodable {
        path: path.display().to_string(),
    })
}

fn parse(content: &str) -> Result<RawTable, csv::Error> {
    let delimiter = sniff_delimiter(content);
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }
    Ok(RawTable::from_rows(rows))
}

/// Detect the most likely field delimiter by checking consistency across the
/// first few lines.
///
/// For each candidate (tab, semicolon, comma, pipe), count fields per line.
/// The delimiter that produces the most consistent field count (>1 field)
/// wins.
fn sniff_delimiter(content: &str) -> u8 {
    let candidates: &[u8] = &[b'\t', b';', b',', b'|'];
    let sample_lines: Vec<&str> = content.lines().take(10).collect();

    if sample_lines.is_empty() {
        return b',';
    }

    let mut best = b',';
    let mut best_score = 0u64;

    for &delim in candidates {
        let counts: Vec<usize> = sample_lines
            .iter()
            .map(|line| {
                csv::ReaderBuilder::new()
                    .delimiter(delim)
                    .has_headers(false)
                    .flexible(true)
                    .from_reader(line.as_bytes())
                    .records()
                    .next()
                    .and_then(|r| r.ok())
                    .map(|r| r.len())
                    .unwrap_or(1)
            })
            .collect();

        // Must produce >1 field on the first line to be viable
        if counts.first().copied().unwrap_or(0) <= 1 {
            continue;
        }

        // Score: (number of lines with same field count as line 1) * field_count
        // Higher field count breaks ties — more columns = more likely real delimiter
        let target = counts[0];
        let consistent = counts.iter().filter(|&&c| c == target).count() as u64;
        let score = consistent * target as u64;

        if score > best_score {
            best_score = score;
            best = delim;
        }
    }

    best
}
