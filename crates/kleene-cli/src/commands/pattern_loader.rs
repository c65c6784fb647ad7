use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Pattern source plus where it came from, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPattern {
    pub source: String,
    pub path: Option<String>,
}

pub fn load_pattern(
    pattern: Option<&str>,
    pattern_file: Option<&Path>,
) -> Result<LoadedPattern, String> {
    if let Some(path) = pattern_file {
        if path.as_os_str() == "-" {
            return load_stdin();
        }
        return load_file(path);
    }

    if let Some(text) = pattern {
        return Ok(LoadedPattern {
            source: text.to_string(),
            path: None,
        });
    }

    Err("pattern is required: use a positional argument or -p/--pattern-file".to_string())
}

fn load_stdin() -> Result<LoadedPattern, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(LoadedPattern {
        source: strip_line_ending(buf),
        path: Some("<stdin>".to_string()),
    })
}

fn load_file(path: &Path) -> Result<LoadedPattern, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
    Ok(LoadedPattern {
        source: strip_line_ending(content),
        path: Some(path.to_string_lossy().into_owned()),
    })
}

/// Drop one trailing newline. Every other character of a pattern is literal.
pub fn strip_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
