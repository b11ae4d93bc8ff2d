//! Super FX model inspection utility.
//!
//! Provides three subcommands:
//! - `inspect`: decode one model from explicit stream offsets and print a
//!   summary, or the full decoded model as JSON.
//! - `frames`: decode every animation frame of a vertex stream.
//! - `header`: dump one object-header record and optionally decode its model.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};
use serde::Serialize;
use sfx_rs::prelude::*;

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Command::Inspect(opts) => run_inspect(opts),
		Command::Frames(opts) => run_frames(opts),
		Command::Header(opts) => run_header(opts),
	}
}

#[derive(Parser)]
#[command(name = "model_utils")]
#[command(author = "sfx-rs project")]
#[command(version)]
#[command(about = "Inspect Super FX 3D models inside cartridge images", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Decode a model from explicit vertex and face stream offsets
	Inspect(InspectArgs),
	/// Decode every animation frame of a vertex stream
	Frames(FramesArgs),
	/// Dump one record of an object-header table
	Header(HeaderArgs),
}

#[derive(Args, Clone, Copy)]
struct LimitArgs {
	/// Maximum BSP tree depth before decoding aborts
	#[arg(long, value_name = "DEPTH", default_value_t = 64)]
	max_depth: usize,

	/// Maximum commands per stream walk before decoding aborts
	#[arg(long, value_name = "COUNT", default_value_t = 4096)]
	max_commands: usize,
}

#[derive(Args)]
struct InspectArgs {
	/// Path to the ROM image
	#[arg(value_name = "ROM")]
	rom: PathBuf,

	/// Absolute offset of the vertex stream (hex)
	#[arg(short, long, value_name = "HEX", value_parser = parse_hex)]
	vertices: usize,

	/// Absolute offset of the face stream (hex)
	#[arg(short, long, value_name = "HEX", value_parser = parse_hex)]
	faces: usize,

	/// Animation frame to decode, clamped to the available range
	#[arg(long, value_name = "N", default_value_t = 0, allow_negative_numbers = true)]
	frame: i32,

	/// Print the decoded model as JSON
	#[arg(long, default_value_t = false)]
	json: bool,

	#[command(flatten)]
	limits: LimitArgs,
}

#[derive(Args)]
struct FramesArgs {
	/// Path to the ROM image
	#[arg(value_name = "ROM")]
	rom: PathBuf,

	/// Absolute offset of the vertex stream (hex)
	#[arg(short, long, value_name = "HEX", value_parser = parse_hex)]
	vertices: usize,

	#[command(flatten)]
	limits: LimitArgs,
}

#[derive(Args)]
struct HeaderArgs {
	/// Path to the ROM image
	#[arg(value_name = "ROM")]
	rom: PathBuf,

	/// Absolute offset of the object-header table (hex)
	#[arg(short, long, value_name = "HEX", value_parser = parse_hex)]
	table: usize,

	/// Record index inside the table
	#[arg(short, long, value_name = "N")]
	index: usize,

	/// Also decode the model the record points to
	#[arg(short, long, default_value_t = false)]
	decode: bool,

	#[command(flatten)]
	limits: LimitArgs,
}

/// JSON view of a decoded model.
#[derive(Serialize)]
struct ModelReport<'a> {
	vertices_offset: usize,
	faces_offset: usize,
	frame: &'a Frame,
	faces: &'a FaceSet,
	draw_batches: Vec<DrawBatch>,
}

fn parse_hex(value: &str) -> Result<usize, String> {
	let digits = value.trim_start_matches("0x").trim_start_matches("0X").trim_start_matches('$');
	usize::from_str_radix(digits, 16).map_err(|err| format!("invalid hex offset '{value}': {err}"))
}

fn build_config(limits: LimitArgs) -> Result<ParseConfig> {
	if limits.max_depth == 0 {
		bail!("max-depth must be greater than zero");
	}
	if limits.max_commands == 0 {
		bail!("max-commands must be greater than zero");
	}
	Ok(ParseConfig::new(limits.max_depth, limits.max_commands))
}

fn open_rom(path: &Path) -> Result<Rom> {
	let rom = Rom::open(path).with_context(|| format!("Failed to read {}", path.display()))?;
	if rom.has_stripped_header() {
		info!("Stripped copier header from {}", path.display());
	}
	Ok(rom)
}

fn run_inspect(args: InspectArgs) -> Result<()> {
	let config = build_config(args.limits)?;
	let rom = open_rom(&args.rom)?;

	let mut model = Model::with_config(rom.data(), args.vertices, args.faces, config)
		.with_context(|| {
			format!("Failed to decode model at 0x{:X}/0x{:X}", args.vertices, args.faces)
		})?;
	if args.frame != 0 {
		model.reload_frame(args.frame).with_context(|| format!("Failed to decode frame {}", args.frame))?;
	}

	if args.json {
		let report = ModelReport {
			vertices_offset: model.vertices_offset(),
			faces_offset: model.faces_offset(),
			frame: model.frame(),
			faces: model.face_set(),
			draw_batches: model.draw_batches()?,
		};
		println!("{}", serde_json::to_string_pretty(&report)?);
		return Ok(());
	}

	print_model(&model)
}

fn print_model(model: &Model) -> Result<()> {
	println!("Vertices: 0x{:X} | Faces: 0x{:X}", model.vertices_offset(), model.faces_offset());
	println!(
		"Frame {}/{} | {} vertices",
		model.current_frame(),
		model.frame_count(),
		model.vertices().len()
	);
	for (index, vertex) in model.vertices().iter().enumerate() {
		println!("  v{index:03} {vertex}");
	}

	match model.face_set() {
		FaceSet::TriangleIndices(triangles) => {
			println!("Triangle list only: {} triangles", triangles.len());
			for (index, triangle) in triangles.iter().enumerate() {
				println!("  t{index:03} {triangle:?}");
			}
		}
		FaceSet::Faces(faces) => {
			println!("{} faces", faces.len());
			for (index, face) in faces.iter().enumerate() {
				println!("  f{index:03} {face}");
			}
		}
	}

	let batches = model.draw_batches()?;
	let primitives = |primitive: Primitive| batches.iter().filter(|b| b.primitive == primitive).count();
	println!(
		"Draw batches: {} (fans {}, lines {}, points {})",
		batches.len(),
		primitives(Primitive::TriangleFan),
		primitives(Primitive::Lines),
		primitives(Primitive::Points)
	);
	Ok(())
}

fn run_frames(args: FramesArgs) -> Result<()> {
	let config = build_config(args.limits)?;
	let rom = open_rom(&args.rom)?;
	let data = rom.bytes();

	let first = sfx_rs::sfx_types::model::decode_frame_with_config(data, args.vertices, 0, &config)
		.with_context(|| format!("Failed to decode vertex stream at 0x{:X}", args.vertices))?;
	println!("Vertex stream 0x{:X}: {} frame(s)", args.vertices, first.frame_count);
	if !first.is_animated() {
		println!("  frame 000: {} vertices", first.vertex_count());
		return Ok(());
	}

	let mut failures = 0usize;
	for index in 0..first.frame_count {
		let requested = i32::try_from(index).context("Frame index does not fit in i32")?;
		match sfx_rs::sfx_types::model::decode_frame_with_config(data, args.vertices, requested, &config) {
			Ok(frame) => println!("  frame {index:03}: {} vertices", frame.vertex_count()),
			Err(err) => {
				failures += 1;
				warn!("Frame {index} failed: {err}");
			}
		}
	}

	if failures > 0 {
		bail!("{failures} of {} frames failed to decode", first.frame_count);
	}
	Ok(())
}

fn run_header(args: HeaderArgs) -> Result<()> {
	let config = build_config(args.limits)?;
	let rom = open_rom(&args.rom)?;

	let header = rom
		.object_header(args.table, args.index)
		.with_context(|| format!("Failed to read object header {} at 0x{:X}", args.index, args.table))?;

	println!("Record {}: {}", args.index, hex::encode_upper(header.to_bytes()));
	println!("  {header}");

	if !args.decode {
		return Ok(());
	}
	if header.is_empty() {
		bail!("Object {} has no model", args.index);
	}

	let model = rom.load_object_with_config(args.table, args.index, config)?;
	print_model(&model)
}
