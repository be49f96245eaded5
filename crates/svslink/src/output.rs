use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use svslink_registry::{Bank, Descriptor, ValueSet};
use svslink_session::DeviceState;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// One encoded request frame.
#[derive(Serialize)]
pub struct EncodedFrame {
    pub request: String,
    pub frame_type: &'static str,
    pub frame: String,
}

/// Values carried by one frame completed during decoding.
#[derive(Serialize)]
pub struct DecodedFrame {
    /// 1-based index of the chunk that completed the frame.
    pub chunk: usize,
    pub frame_type: Option<&'static str>,
    pub values: ValueSet,
}

#[derive(Serialize)]
pub struct DecodeReport<'a> {
    pub frames: Vec<DecodedFrame>,
    pub state: &'a DeviceState,
    pub in_sync: bool,
}

#[derive(Serialize)]
struct ParamRow {
    name: &'static str,
    bank_kind: &'static str,
    bank: u8,
    offset: u16,
    width: u16,
    domain: String,
    reset_group: Option<u8>,
}

impl ParamRow {
    fn new(descriptor: &Descriptor) -> Self {
        let bank_kind = match descriptor.bank() {
            Bank::Memory(_) => "memory",
            Bank::Action(_) => "action",
        };
        Self {
            name: descriptor.name(),
            bank_kind,
            bank: descriptor.group_id(),
            offset: descriptor.offset(),
            width: descriptor.width(),
            domain: descriptor.domain().to_string(),
            reset_group: descriptor.reset_group(),
        }
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

fn table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

pub fn print_encoded(frames: &[EncodedFrame], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(frames),
        OutputFormat::Table => {
            let mut table = table(vec!["REQUEST", "TYPE", "FRAME"]);
            for frame in frames {
                table.add_row(vec![
                    frame.request.clone(),
                    frame.frame_type.to_string(),
                    frame.frame.clone(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for frame in frames {
                println!("{}", frame.frame);
            }
        }
    }
}

pub fn print_decoded(report: &DecodeReport<'_>, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Table => {
            let mut table = table(vec!["ATTRIBUTE", "VALUE"]);
            for (name, value) in report.state.values() {
                table.add_row(vec![name.to_string(), value.to_string()]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for frame in &report.frames {
                println!(
                    "chunk={} type={} {}",
                    frame.chunk,
                    frame.frame_type.unwrap_or("UNKNOWN"),
                    render_values(&frame.values)
                );
            }
            println!("state {}", render_values(report.state.values()));
        }
    }
}

pub fn print_params<'a>(descriptors: impl Iterator<Item = &'a Descriptor>, format: OutputFormat) {
    let rows: Vec<ParamRow> = descriptors.map(ParamRow::new).collect();
    match format {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Table => {
            let mut table = table(vec!["NAME", "BANK", "OFFSET", "WIDTH", "DOMAIN", "RESET"]);
            for row in &rows {
                table.add_row(vec![
                    row.name.to_string(),
                    format!("{} 0x{:02x}", row.bank_kind, row.bank),
                    format!("0x{:02x}", row.offset),
                    row.width.to_string(),
                    row.domain.clone(),
                    reset_label(row.reset_group),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for row in &rows {
                println!(
                    "{} bank={}:0x{:02x} offset=0x{:02x} width={} domain={} reset={}",
                    row.name,
                    row.bank_kind,
                    row.bank,
                    row.offset,
                    row.width,
                    row.domain,
                    reset_label(row.reset_group)
                );
            }
        }
    }
}

fn reset_label(reset_group: Option<u8>) -> String {
    reset_group.map_or_else(|| "-".to_string(), |group| group.to_string())
}

fn render_values(values: &ValueSet) -> String {
    values
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join(" ")
}
