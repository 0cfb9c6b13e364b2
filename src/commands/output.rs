use std::io::{self, Write};

/// Write one JSON document followed by a newline.
pub fn write_json(out: &mut impl Write, value: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Write each value on its own line.
pub fn write_lines<S: AsRef<str>>(out: &mut impl Write, lines: &[S]) -> io::Result<()> {
    for line in lines {
        out.write_all(line.as_ref().as_bytes())?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Print the picked values to stdout, as plain lines or one JSON object.
pub fn emit_selection(command: &str, picked: &[String], multi: bool, json: bool) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if json {
        let selected = if multi {
            serde_json::json!(picked)
        } else {
            serde_json::json!(picked.first())
        };
        return write_json(
            &mut out,
            &serde_json::json!({
                "command": command,
                "selected": selected,
            }),
        );
    }
    write_lines(&mut out, picked)
}
