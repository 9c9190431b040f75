use tracing::{debug, info};

use crate::cli::config::{AppConfig, SourceArgs};
use crate::error::{LocatorError, Result};
use crate::locator::aggregator::LocatorEngine;
use crate::locator::locator_model::LocatorCandidate;
use crate::report::json::{LocatorReport, render_json};
use crate::report::variables::render_variables;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::events_for;

// ============================================================================
// locators subcommand
// ============================================================================

pub fn cmd_locators(
    source: &SourceArgs,
    format: Option<&str>,
    output: Option<&str>,
    trace: Option<&str>,
    config: &AppConfig,
) -> Result<()> {
    let engine = LocatorEngine::new(config.locators.clone())?;
    let (label, html) = read_source(source)?;

    let outcome = engine.parse_traced(&html);
    info!(source = %label, count = outcome.locators.len(), "parsed page");

    if let Some(path) = trace {
        let tracer = TraceLogger::new(path);
        tracer.log_all(&events_for(&label, &outcome.decisions));
    }

    let format = format.unwrap_or(&config.output.format);
    let content = render_output(format, &label, &html, &outcome.locators)?;

    let output = output.or(config.output.path.as_deref());
    write_output(output, &content)
}

/// Render locators in the requested format.
pub fn render_output(
    format: &str,
    label: &str,
    html: &str,
    locators: &[LocatorCandidate],
) -> Result<String> {
    match format {
        "text" => Ok(render_variables(locators, label)),
        "json" => {
            let report = LocatorReport::new(label, html, locators);
            let mut json = render_json(&report)?;
            json.push('\n');
            Ok(json)
        }
        other => Err(LocatorError::UnknownFormat(other.to_string())),
    }
}

// ============================================================================
// checkbox subcommand
// ============================================================================

pub fn cmd_checkbox(source: &SourceArgs, label: Option<&str>, config: &AppConfig) -> Result<()> {
    let engine = LocatorEngine::new(config.locators.clone())?;
    let (name, html) = read_source(source)?;

    let result = engine.analyze_checkboxes(&html);
    debug!(source = %name, framework = result.framework.tag(), "checkbox convention detected");

    println!("Framework:   {}", result.framework_tag);
    println!("Description: {}", result.description);
    println!("Pattern:     {}", result.pattern);
    if let Some(label) = label {
        println!("Example:     {}", result.render(label));
    }

    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// Load HTML from `--input` or `--url`. Returns a display label and the text.
pub fn read_source(source: &SourceArgs) -> Result<(String, String)> {
    match (&source.input, &source.url) {
        (Some(path), _) => {
            let bytes = std::fs::read(path)
                .map_err(|e| LocatorError::io(format!("reading {}", path), e))?;
            Ok((path.clone(), decode_html(&bytes)?))
        }
        (None, Some(url)) => Ok((url.clone(), fetch_url(url)?)),
        (None, None) => Err(LocatorError::Config(
            "one of --input or --url is required".to_string(),
        )),
    }
}

/// Decode raw bytes as HTML text.
///
/// Invalid UTF-8 sequences are replaced rather than rejected; a NUL byte
/// means the input is binary.
pub fn decode_html(bytes: &[u8]) -> Result<String> {
    if let Some(pos) = bytes.iter().position(|&b| b == 0) {
        return Err(LocatorError::NotText(format!("NUL byte at offset {}", pos)));
    }

    let text = String::from_utf8_lossy(bytes);
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    Ok(text.to_string())
}

pub fn fetch_url(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::new();
    let response = client
        .get(url)
        .send()
        .map_err(|source| LocatorError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(LocatorError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let bytes = response.bytes().map_err(|source| LocatorError::Fetch {
        url: url.to_string(),
        source,
    })?;
    decode_html(&bytes)
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .map_err(|e| LocatorError::io(format!("writing {}", path), e))?;
            info!(path, "wrote locators");
            Ok(())
        }
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}
