//! Loads source text from a file path or inline `-s` text.

use std::path::Path;

/// Loaded source plus the display path used in diagnostics.
pub struct Source {
    pub text: String,
    pub path: Option<String>,
}

pub fn load_source(path: Option<&Path>, text: Option<&str>) -> Result<Source, String> {
    match (path, text) {
        (Some(_), Some(_)) => Err("pass either a source file or -s <TEXT>, not both".to_string()),
        (None, None) => Err("no source given; pass a file path or -s <TEXT>".to_string()),
        (None, Some(text)) => Ok(Source {
            text: text.to_string(),
            path: None,
        }),
        (Some(path), None) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
            Ok(Source {
                text,
                path: Some(path.display().to_string()),
            })
        }
    }
}
