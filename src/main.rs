//! Offline counterpart of the viewer's export path: compiles a layout set
//! JSON file to a dimensioned SVG diagram for one panel side.

use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use panelkit::{
    compile, export_filename, init_logging, to_svg, LayoutSet, Side, SideSelector, StrokeColors,
    ThemeMode,
};

struct Args {
    input: PathBuf,
    side: Side,
    theme: ThemeMode,
    output: Option<PathBuf>,
}

fn usage() -> ! {
    eprintln!(
        "panelkit {}\n\nUsage: panelkit <layout-set.json> [--side left|right|back] [--dark] [-o <out.svg>]",
        panelkit::VERSION
    );
    process::exit(2);
}

fn parse_args() -> Result<Args> {
    let mut input = None;
    let mut side = Side::Left;
    let mut theme = ThemeMode::Light;
    let mut output = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--side" => {
                let value = args.next().unwrap_or_else(|| usage());
                side = Side::from_str(&value).map_err(|e| anyhow::anyhow!(e))?;
            }
            "--dark" => theme = ThemeMode::Dark,
            "-o" | "--output" => {
                output = Some(PathBuf::from(args.next().unwrap_or_else(|| usage())));
            }
            "-h" | "--help" => usage(),
            _ if input.is_none() => input = Some(PathBuf::from(arg)),
            _ => usage(),
        }
    }

    let Some(input) = input else { usage() };
    Ok(Args {
        input,
        side,
        theme,
        output,
    })
}

fn main() -> Result<()> {
    init_logging()?;
    let args = parse_args()?;

    let json = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let layout_set: LayoutSet =
        serde_json::from_str(&json).context("Failed to parse layout set JSON")?;

    let Some(layout) = layout_set.side(args.side) else {
        let available: Vec<_> = SideSelector::available(&layout_set)
            .iter()
            .map(|s| s.label().to_string())
            .collect();
        bail!(
            "No layout for side '{}'; available: {}",
            args.side,
            available.join(", ")
        );
    };

    let colors = StrokeColors::for_mode(args.theme);
    let drawing = compile(layout, &colors);
    let svg = to_svg(&drawing);

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(export_filename(&drawing, args.side, None)));
    std::fs::write(&output, &svg)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!(
        side = %args.side,
        sections = layout.section_count(),
        path = %output.display(),
        "Diagram written"
    );
    println!("{}", output.display());
    Ok(())
}
