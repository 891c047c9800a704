use anyhow::{bail, Context, Result};
use pathgeom::api::{Path as GeoPath, Token};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Parse a JSON token array such as `["M", 0, 0, "L", 10, 0, "Z"]`.
pub fn parse_path_json(text: &str) -> Result<GeoPath> {
    let tokens: Vec<Token> =
        serde_json::from_str(text.trim()).context("path input is not a JSON token array")?;
    GeoPath::from_tokens(&tokens).context("parsing path tokens")
}

/// Load a path from an inline JSON string, a file, or stdin (in that order).
pub fn load_path(inline: Option<&str>, file: Option<&Path>) -> Result<GeoPath> {
    if let Some(text) = inline {
        return parse_path_json(text);
    }
    if let Some(file) = file {
        let text =
            fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
        return parse_path_json(&text);
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("reading path from stdin")?;
    if text.trim().is_empty() {
        bail!("no path given: pass --path, --file or pipe JSON on stdin");
    }
    parse_path_json(&text)
}

/// JSON form of a path, with the leading `"path"` marker the host expects.
pub fn path_value(path: &GeoPath) -> Value {
    let mut tokens = vec![Token::Tag(pathgeom::api::PATH_MARKER.to_string())];
    tokens.extend(path.to_tokens());
    serde_json::to_value(tokens).unwrap_or(Value::Null)
}

/// Print `value` to stdout, or write it to `out` (parent dirs are created).
pub fn emit(out: Option<&Path>, value: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    let Some(out) = out else {
        println!("{text}");
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, text).with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(out = %out.display(), "wrote output");
    Ok(())
}
