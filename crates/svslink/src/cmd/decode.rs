use std::fs;

use svslink_session::{MemoryTransport, Session};

use crate::cmd::DecodeArgs;
use crate::exit::{io_error, CliError, CliResult, DATA_INVALID, SUCCESS, USAGE};
use crate::output::{print_decoded, DecodeReport, DecodedFrame, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let chunks = resolve_chunks(&args)?;
    if chunks.is_empty() {
        return Err(CliError::new(USAGE, "no chunks given"));
    }

    let mut session = Session::new(MemoryTransport::new());
    let mut frames = Vec::new();
    let mut recognized = 0usize;
    for (index, chunk) in chunks.iter().enumerate() {
        let decoded = session.handle_chunk(chunk);
        if !decoded.recognized {
            continue;
        }
        recognized += 1;
        if !decoded.values.is_empty() {
            frames.push(DecodedFrame {
                chunk: index + 1,
                frame_type: decoded.frame_type.map(|ty| ty.name()),
                values: decoded.values,
            });
        }
    }

    if recognized == 0 {
        return Err(CliError::new(
            DATA_INVALID,
            "input did not contain a well-formed frame",
        ));
    }

    let report = DecodeReport {
        frames,
        state: session.state(),
        in_sync: session.is_in_sync(),
    };
    print_decoded(&report, format);

    Ok(SUCCESS)
}

fn resolve_chunks(args: &DecodeArgs) -> CliResult<Vec<Vec<u8>>> {
    if let Some(path) = &args.file {
        let text = fs::read_to_string(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err))?;
        return text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(parse_hex)
            .collect();
    }
    args.chunks.iter().map(|chunk| parse_hex(chunk)).collect()
}

/// Parse a hex chunk. Whitespace, `:` and `-` separators are ignored.
fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let digits: Vec<u8> = input
        .bytes()
        .filter(|b| !b.is_ascii_whitespace() && *b != b':' && *b != b'-')
        .collect();
    if digits.len() % 2 != 0 {
        return Err(CliError::new(
            DATA_INVALID,
            format!("odd number of hex digits in chunk: {input}"),
        ));
    }
    digits
        .chunks(2)
        .map(|pair| {
            let high = hex_digit(pair[0]);
            let low = hex_digit(pair[1]);
            match (high, low) {
                (Some(high), Some(low)) => Ok((high << 4) | low),
                _ => Err(CliError::new(
                    DATA_INVALID,
                    format!("invalid hex in chunk: {input}"),
                )),
            }
        })
        .collect()
}

fn hex_digit(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
