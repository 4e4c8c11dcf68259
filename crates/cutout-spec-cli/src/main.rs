use cutout_spec::{CutoutSpecification, DisplayConfig, Insets, Parser, Rect};
use serde::Serialize;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Cutout(cutout_spec::Error),
    InvalidSpecification,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Cutout(err) => write!(f, "{err}"),
            CliError::InvalidSpecification => write!(f, "Invalid cutout specification"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<cutout_spec::Error> for CliError {
    fn from(value: cutout_spec::Error) -> Self {
        Self::Cutout(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Parse,
    Render,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    config: Option<String>,
    width: Option<i32>,
    height: Option<i32>,
    density: Option<f32>,
    ratio: Option<f32>,
    pretty: bool,
    example: bool,
    out: Option<String>,
}

#[derive(Serialize)]
struct RectOut {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl From<Rect> for RectOut {
    fn from(r: Rect) -> Self {
        Self {
            left: r.min.x,
            top: r.min.y,
            right: r.max.x,
            bottom: r.max.y,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ParseOut {
    path: Option<String>,
    left_bound: Option<RectOut>,
    top_bound: Option<RectOut>,
    right_bound: Option<RectOut>,
    bottom_bound: Option<RectOut>,
    insets: Insets,
}

impl From<&CutoutSpecification> for ParseOut {
    fn from(spec: &CutoutSpecification) -> Self {
        Self {
            path: spec.path().map(|p| p.to_string()),
            left_bound: spec.left_bound().map(RectOut::from),
            top_bound: spec.top_bound().map(RectOut::from),
            right_bound: spec.right_bound().map(RectOut::from),
            bottom_bound: spec.bottom_bound().map(RectOut::from),
            insets: spec.safe_insets(),
        }
    }
}

const DEFAULT_WIDTH: i32 = 1080;
const DEFAULT_HEIGHT: i32 = 2400;

/// Rounded top-center notch, 144x80 dp.
const EXAMPLE_SPEC: &str = "M -72,0 H 72 V 56 Q 72,80 48,80 H -48 Q -72,80 -72,56 Z @dp";

fn usage() -> &'static str {
    "cutout-spec-cli\n\
\n\
USAGE:\n\
  cutout-spec-cli [parse] [--pretty] [display options] [<path>|-]\n\
  cutout-spec-cli render [--out <path>] [display options] [<path>|-]\n\
  cutout-spec-cli [parse|render] --example [display options]\n\
\n\
DISPLAY OPTIONS:\n\
  --config <path>     JSON file: { \"density\", \"width\", \"height\", \"pixelRatio\" }\n\
  --width <px>        display width (default 1080)\n\
  --height <px>       display height (default 2400)\n\
  --density <n>       stable density used by `@dp` specifications (default 1)\n\
  --ratio <n>         physical pixel to display size ratio (default 1)\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', the specification is read from stdin.\n\
  - --example uses a built-in rounded notch instead of reading any input.\n\
  - Flags override values loaded with --config.\n\
  - parse prints path, bounds and safe insets as JSON.\n\
  - render prints an SVG document stroking the cutout path; use --out to write a file.\n\
  - Exit code 3 means the specification produced no path.\n\
"
}

fn next_value<'a>(it: &mut impl Iterator<Item = &'a String>) -> Result<&'a String, CliError> {
    it.next().ok_or(CliError::Usage(usage()))
}

fn parse_number<T: std::str::FromStr>(raw: &str) -> Result<T, CliError> {
    raw.parse::<T>().map_err(|_| CliError::Usage(usage()))
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "parse" => args.command = Command::Parse,
            "render" => args.command = Command::Render,
            "--pretty" => args.pretty = true,
            "--example" => args.example = true,
            "--config" => args.config = Some(next_value(&mut it)?.clone()),
            "--width" => args.width = Some(parse_number(next_value(&mut it)?)?),
            "--height" => args.height = Some(parse_number(next_value(&mut it)?)?),
            "--density" => args.density = Some(parse_number(next_value(&mut it)?)?),
            "--ratio" => args.ratio = Some(parse_number(next_value(&mut it)?)?),
            "--out" => args.out = Some(next_value(&mut it)?.clone()),
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    if args.example && args.input.is_some() {
        return Err(CliError::Usage(usage()));
    }
    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn display_config(args: &Args) -> Result<DisplayConfig, CliError> {
    let mut config = match args.config.as_deref() {
        Some(path) => serde_json::from_str::<DisplayConfig>(&std::fs::read_to_string(path)?)?,
        None => DisplayConfig::new(1.0, DEFAULT_WIDTH, DEFAULT_HEIGHT),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(density) = args.density {
        config.density = density;
    }
    if let Some(ratio) = args.ratio {
        config.pixel_ratio = ratio;
    }
    Ok(config)
}

fn timing_enabled() -> bool {
    matches!(
        std::env::var("CUTOUT_SPEC_TIMING").as_deref(),
        Ok("1") | Ok("true")
    )
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None | Some("-") => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

/// Viewport of the physical display, i.e. the display size after the pixel ratio.
fn viewport(config: &DisplayConfig) -> (i32, i32) {
    let scale = |v: i32| ((v as f32 * config.pixel_ratio).round() as i32).max(1);
    (scale(config.width), scale(config.height))
}

fn render_svg(spec: &CutoutSpecification, config: &DisplayConfig) -> String {
    let (w, h) = viewport(config);
    let d = spec.path().map(|p| p.to_string()).unwrap_or_default();
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\
<path d=\"{d}\" fill=\"none\" stroke=\"black\" stroke-width=\"2\"/></svg>\n"
    )
}

fn run(args: Args) -> Result<(), CliError> {
    let text = if args.example {
        EXAMPLE_SPEC.to_string()
    } else {
        read_input(args.input.as_deref())?
    };
    let text = text.trim();
    if text.is_empty() {
        return Err(CliError::InvalidSpecification);
    }

    let config = display_config(&args)?;
    let parser = Parser::new(config)?;

    let start = timing_enabled().then(std::time::Instant::now);
    let spec = parser.parse(text);
    if let Some(start) = start {
        eprintln!("parse: {:?}", start.elapsed());
    }

    if !spec.is_valid() {
        return Err(CliError::InvalidSpecification);
    }

    match args.command {
        Command::Parse => write_json(&ParseOut::from(&spec), args.pretty),
        Command::Render => write_text(&render_svg(&spec, parser.config()), args.out.as_deref()),
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::InvalidSpecification) => {
            eprintln!("{}", CliError::InvalidSpecification);
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
