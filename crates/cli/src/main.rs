use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use nalgebra::Vector2;
use pathgeom::api as geo;
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod io;

#[derive(Parser)]
#[command(name = "pathgeom-cli")]
#[command(about = "Run 2D path geometry operations on JSON token paths")]
struct Cmd {
    /// Write the JSON result here instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

// Where a single input path comes from; stdin when neither is given.
#[derive(Args)]
struct PathIn {
    /// Inline JSON token array, e.g. '["M",0,0,"L",10,0]'
    #[arg(long, conflicts_with = "file")]
    path: Option<String>,
    /// File holding the JSON token array
    #[arg(long)]
    file: Option<PathBuf>,
}

impl PathIn {
    fn load(&self) -> Result<geo::Path> {
        io::load_path(self.path.as_deref(), self.file.as_deref())
    }
}

// A length along the path, or a fraction of it with `--normalized`.
#[derive(Args)]
struct At {
    #[arg(long, allow_hyphen_values = true)]
    at: f64,
    /// Interpret `--at` as a fraction of the total length
    #[arg(long)]
    normalized: bool,
}

#[derive(Subcommand)]
enum Action {
    /// Total arc length
    Length(PathIn),
    /// Point at a length
    Position {
        #[command(flatten)]
        at: At,
        #[command(flatten)]
        input: PathIn,
    },
    /// Unit normal at a length (outward for closed paths)
    Normal {
        #[command(flatten)]
        at: At,
        #[command(flatten)]
        input: PathIn,
    },
    /// Tangent angle (radians) at a length
    Angle {
        #[command(flatten)]
        at: At,
        #[command(flatten)]
        input: PathIn,
    },
    /// Winding: 1, -1, or 0 when indeterminate
    Orientation(PathIn),
    /// Whether the path ends with a Close
    Closed(PathIn),
    /// Circular arc from `start` to `end` (radians)
    Arc {
        #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
        cx: f64,
        #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
        cy: f64,
        #[arg(long)]
        r: f64,
        #[arg(long, allow_hyphen_values = true)]
        start: f64,
        #[arg(long, allow_hyphen_values = true)]
        end: f64,
    },
    /// Closed full circle
    Circle {
        #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
        cx: f64,
        #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
        cy: f64,
        #[arg(long)]
        r: f64,
    },
    /// Parallel offset (positive grows closed paths outward)
    Offset {
        #[arg(long, allow_hyphen_values = true)]
        d: f64,
        #[command(flatten)]
        input: PathIn,
    },
    /// Keep the part between `start` from the start and `end` from the end
    Trim {
        #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
        start: f64,
        #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
        end: f64,
        /// Take `start`/`end` as fractions t1, t2 of the length (keeps [t1, t2])
        #[arg(long)]
        normalized: bool,
        #[command(flatten)]
        input: PathIn,
    },
    /// Concatenate paths in order
    Join {
        /// Inline JSON token arrays, in join order
        #[arg(long = "path", required = true, num_args = 1..)]
        paths: Vec<String>,
    },
    /// Replace a trailing Close by an explicit closing Line
    Open(PathIn),
    /// Convert every Line to an equivalent cubic Bézier
    Beziers(PathIn),
    /// Per-segment token runs
    Segments(PathIn),
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let value = run(cmd.action)?;
    io::emit(cmd.out.as_deref(), &value)
}

fn run(action: Action) -> Result<Value> {
    let value = match action {
        Action::Length(input) => json!(geo::path_length(&input.load()?)),
        Action::Position { at, input } => {
            let p = input.load()?;
            let q = if at.normalized {
                geo::position_at(at.at, &p)
            } else {
                geo::position_at_length(at.at, &p)
            };
            point(q.context("position query")?)
        }
        Action::Normal { at, input } => {
            let p = input.load()?;
            let n = if at.normalized {
                geo::normal_at(at.at, &p)
            } else {
                geo::normal_at_length(at.at, &p)
            };
            point(n.context("normal query")?)
        }
        Action::Angle { at, input } => {
            let p = input.load()?;
            let a = if at.normalized {
                geo::angle_at(at.at, &p)
            } else {
                geo::angle_at_length(at.at, &p)
            };
            json!(a.context("angle query")?)
        }
        Action::Orientation(input) => json!(geo::orientation(&input.load()?)),
        Action::Closed(input) => json!(geo::is_closed(&input.load()?)),
        Action::Arc {
            cx,
            cy,
            r,
            start,
            end,
        } => {
            tracing::debug!(cx, cy, r, start, end, "arc");
            io::path_value(&geo::arc(Vector2::new(cx, cy), r, start, end))
        }
        Action::Circle { cx, cy, r } => io::path_value(&geo::circle(Vector2::new(cx, cy), r)),
        Action::Offset { d, input } => {
            let p = input.load()?;
            io::path_value(&geo::offset(d, &p).context("offsetting path")?)
        }
        Action::Trim {
            start,
            end,
            normalized,
            input,
        } => {
            let p = input.load()?;
            let trimmed = if normalized {
                geo::path_trim(start, end, &p)
            } else {
                geo::trim_by_length(start, end, &p)
            };
            io::path_value(&trimmed)
        }
        Action::Join { paths } => {
            let parsed = paths
                .iter()
                .enumerate()
                .map(|(i, text)| {
                    io::parse_path_json(text).with_context(|| format!("join input #{i}"))
                })
                .collect::<Result<Vec<_>>>()?;
            let joined = match parsed.split_first() {
                Some((first, rest)) => geo::path_join(first, rest),
                None => geo::Path::new(),
            };
            io::path_value(&joined)
        }
        Action::Open(input) => io::path_value(&geo::make_open(&input.load()?)),
        Action::Beziers(input) => io::path_value(&geo::to_beziers(&input.load()?)),
        Action::Segments(input) => serde_json::to_value(geo::split_segments(&input.load()?))?,
    };
    Ok(value)
}

fn point(p: Vector2<f64>) -> Value {
    json!([p.x, p.y])
}
