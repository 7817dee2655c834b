/**
 * Compiles resources/region_metadata.txt into a static lookup table
 * that is included by src/generated/metadata.
 */

use std::{collections::BTreeMap, env, fmt::Write as _, fs::{self, File}, io::{BufRead, BufReader}, num::ParseIntError, path::Path};

use thiserror::Error;

const METADATA_PATH: &str = "resources/region_metadata.txt";
const GENERATED_FILE: &str = "region_metadata.rs";

#[derive(Debug, Error)]
enum BuildError {
    #[error("IO error occurred: {0}")]
    IO(#[from] std::io::Error),

    #[error("OUT_DIR is not set: {0}")]
    OutDir(#[from] env::VarError),

    #[error("Line {line_num} is too long (max is {max_len} bytes)")]
    LineTooLong { line_num: usize, max_len: usize },

    #[error("Line {line_num} is malformed: '{line}'")]
    MalformedLine { line_num: usize, line: String },

    #[error("Failed to parse number '{value}' on line {line_num}: {source}")]
    NumberParseError {
        line_num: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

struct RegionEntry {
    calling_code: String,
    required_length: Option<usize>,
}

fn is_region_code(s: &str) -> bool {
    s.len() == 2 && s.bytes().all(|b| b.is_ascii_uppercase())
}

fn is_calling_code(s: &str) -> bool {
    (1..=3).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_region_metadata(path: &str, regions: &mut BTreeMap<String, RegionEntry>) -> Result<(), BuildError> {
    regions.clear();

    let input = File::open(path)?;
    const MAX_LINE_LENGTH: usize = 2 * 1024;

    let mut reader = BufReader::new(input);
    let mut line_buffer = String::with_capacity(MAX_LINE_LENGTH);
    let mut line_number = 0;

    loop {
        line_number += 1;
        line_buffer.clear();

        let bytes_read = reader.read_line(&mut line_buffer)?;
        if bytes_read == 0 {
            break;
        }

        if line_buffer.len() > MAX_LINE_LENGTH {
            return Err(BuildError::LineTooLong {
                line_num: line_number,
                max_len: MAX_LINE_LENGTH,
            });
        }

        let line = line_buffer.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let malformed = || BuildError::MalformedLine {
            line_num: line_number,
            line: line.to_string(),
        };

        let mut fields = line.split('|');
        let (Some(region), Some(calling_code)) = (fields.next(), fields.next()) else {
            return Err(malformed());
        };
        if !is_region_code(region) || !is_calling_code(calling_code) {
            return Err(malformed());
        }

        // Validated above, the parse only guards against overflow.
        calling_code.parse::<u16>().map_err(|e| BuildError::NumberParseError {
            line_num: line_number,
            value: calling_code.to_string(),
            source: e,
        })?;

        let required_length = match fields.next() {
            None | Some("") => None,
            Some(len) => Some(len.parse::<usize>().map_err(|e| BuildError::NumberParseError {
                line_num: line_number,
                value: len.to_string(),
                source: e,
            })?),
        };
        if fields.next().is_some() {
            return Err(malformed());
        }

        regions.insert(region.to_string(), RegionEntry {
            calling_code: calling_code.to_string(),
            required_length,
        });
    }

    Ok(())
}

fn render_table(regions: &BTreeMap<String, RegionEntry>) -> String {
    let mut out = String::with_capacity(64 * regions.len());
    out.push_str("// @generated by build/rust_build.rs from ");
    out.push_str(METADATA_PATH);
    out.push_str("\n\n");
    out.push_str("/// (region code, calling code, required national length), sorted by region code.\n");
    out.push_str("pub static REGION_METADATA: &[(&str, &str, Option<usize>)] = &[\n");
    for (region, entry) in regions {
        let required = match entry.required_length {
            Some(len) => format!("Some({len})"),
            None => "None".to_string(),
        };
        // writing into a String never fails
        let _ = writeln!(out, "    (\"{}\", \"{}\", {}),", region, entry.calling_code, required);
    }
    out.push_str("];\n");
    out
}

fn main() -> Result<(), BuildError> {
    println!("cargo:rerun-if-changed={}", METADATA_PATH);
    println!("cargo:rerun-if-changed=build/rust_build.rs");

    let mut regions = BTreeMap::new();
    parse_region_metadata(METADATA_PATH, &mut regions)?;

    let out_dir = env::var("OUT_DIR")?;
    fs::write(Path::new(&out_dir).join(GENERATED_FILE), render_table(&regions))?;
    Ok(())
}
