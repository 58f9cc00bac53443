use std::io::{Read, Write};
use std::path::Path;

use courier_errors::{ErrorCode, ErrorType, Parameters, ResponseRecorder, SerializableError, codec};
use http::StatusCode;
use serde_json::Value;
use uuid::Uuid;

use crate::config::Config;

/// Print the code registry as a table
pub fn codes(out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{:<26} {:<6} DEFAULT NAME", "CODE", "STATUS")?;

    for code in ErrorCode::all() {
        writeln!(
            out,
            "{:<26} {:<6} {}",
            code.as_str(),
            code.status_code().as_u16(),
            code.default_name().unwrap_or("-")
        )?;
    }

    Ok(())
}

/// Inputs for [`encode`], as given on the command line
pub struct EncodeRequest<'a> {
    pub code: &'a str,
    pub name: Option<&'a str>,
    pub instance_id: Option<Uuid>,
    pub params: &'a [String],
}

/// Build a structured error and print the HTTP response it encodes to
pub fn encode(config: &Config, request: &EncodeRequest<'_>, out: &mut impl Write) -> anyhow::Result<()> {
    let error = build_error(config, request)?;

    let mut recorder = ResponseRecorder::new();
    codec::write_error_response(&mut recorder, &error)?;
    let response = recorder.into_response();

    writeln!(out, "HTTP/1.1 {}", response.status())?;
    for (name, value) in response.headers() {
        writeln!(out, "{name}: {}", value.to_str()?)?;
    }
    writeln!(out)?;

    writeln!(out, "{}", serde_json::to_string_pretty(&error)?)?;

    Ok(())
}

/// Decode an envelope body and print its fields
pub fn decode(status: u16, file: Option<&Path>, out: &mut impl Write) -> anyhow::Result<()> {
    let status = StatusCode::from_u16(status).map_err(|e| anyhow::anyhow!("invalid status {status}: {e}"))?;

    let body = match file {
        Some(path) if path != Path::new("-") => {
            std::fs::read(path).map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?
        }
        _ => {
            let mut body = Vec::new();
            std::io::stdin().read_to_end(&mut body)?;
            body
        }
    };

    let error = codec::from_body(status, &body)?;
    print_error(&error, out)
}

fn print_error(error: &SerializableError, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(
        out,
        "code:        {} ({})",
        error.error_code,
        error.error_code.status_code().as_u16()
    )?;
    writeln!(out, "name:        {}", error.error_name)?;
    writeln!(out, "instance id: {}", error.error_instance_id)?;
    writeln!(
        out,
        "parameters:  {}",
        serde_json::to_string_pretty(&Value::from(error.parameters.clone()))?
    )?;

    Ok(())
}

fn build_error(config: &Config, request: &EncodeRequest<'_>) -> anyhow::Result<SerializableError> {
    let code: ErrorCode = request.code.parse()?;

    let name = match request.name {
        Some(name) if name.contains(':') => name.to_owned(),
        Some(name) => format!("{}:{name}", config.errors.namespace),
        None => code
            .default_name()
            .ok_or_else(|| anyhow::anyhow!("--name is required for {code}"))?
            .to_owned(),
    };

    let error_type = ErrorType::new(code, name)?;
    let parameters = parse_params(request.params)?;

    let mut error = SerializableError::new(&error_type).with_parameters(parameters);
    if let Some(instance_id) = request.instance_id {
        error = error.with_instance_id(instance_id);
    }

    tracing::debug!(
        error_code = %error.error_code,
        error_name = %error.error_name,
        error_instance_id = %error.error_instance_id,
        "built error from command line"
    );

    Ok(error)
}

/// Parse `key=value` pairs; values that are valid JSON keep their JSON type
fn parse_params(params: &[String]) -> anyhow::Result<Parameters> {
    let mut parameters = Parameters::new();

    for param in params {
        let Some((key, raw)) = param.split_once('=') else {
            anyhow::bail!("parameter '{param}' must be written as key=value");
        };

        if key.is_empty() {
            anyhow::bail!("parameter '{param}' has an empty key");
        }

        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()));
        parameters.insert(key, value);
    }

    Ok(parameters)
}
