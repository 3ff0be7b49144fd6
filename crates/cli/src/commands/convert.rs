use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

use dnacode_codec::Conversion;

pub fn convert_data(
    mode: Conversion,
    data: Option<String>,
    input: Option<&PathBuf>,
    output: Option<&PathBuf>,
    format: &str,
) -> Result<()> {
    let payload = read_payload(data, input)?;
    let payload = payload.trim();

    // Malformed payloads are part of the normal response surface: render the
    // failure as a result string instead of exiting non-zero.
    let result = match mode.apply(payload) {
        Ok(converted) => converted,
        Err(err) => format!("Error: {err}"),
    };

    let content = match format {
        "text" => result,
        "json" => {
            use serde_json::json;
            serde_json::to_string_pretty(&json!({
                "mode": mode,
                "input": payload,
                "result": result,
            }))?
        }
        _ => anyhow::bail!("Unknown format '{format}'. Use: text or json"),
    };

    if let Some(path) = output {
        std::fs::write(path, content).context("Failed to write output file")?;
    } else {
        println!("{content}");
    }

    Ok(())
}

fn read_payload(data: Option<String>, input: Option<&PathBuf>) -> Result<String> {
    if let Some(data) = data {
        return Ok(data);
    }
    if let Some(path) = input {
        return std::fs::read_to_string(path).context("Failed to read input file");
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;
    Ok(buffer)
}
