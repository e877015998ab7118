use crate::domain::model::SourceDocument;
use crate::utils::error::{ConvertError, Result};
use regex::Regex;
use std::sync::LazyLock;

const DELIMITER: &str = "---";

static FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<field>[A-Za-z0-9_]+):\s*(?P<value>.*)").unwrap());

static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{% img (?P<image>.+) %\}").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    BeforeMetadata,
    InMetadata,
    InBody,
}

impl ParseState {
    fn on_delimiter(self) -> Self {
        match self {
            ParseState::BeforeMetadata => ParseState::InMetadata,
            ParseState::InMetadata | ParseState::InBody => ParseState::InBody,
        }
    }
}

/// Splits an Octopress post into its front matter fields and body lines.
///
/// Fails when the front matter is never closed, since the body would then be
/// silently lost.
pub fn parse(path: &str, content: &str) -> Result<SourceDocument> {
    let mut state = ParseState::BeforeMetadata;
    let mut metadata = Vec::new();
    let mut body = Vec::new();

    for raw_line in content.lines() {
        let line = raw_line.trim_end();

        if state == ParseState::InBody {
            body.push(rewrite_image(line));
            continue;
        }

        if line == DELIMITER {
            state = state.on_delimiter();
            continue;
        }

        if state == ParseState::InMetadata {
            if line.is_empty() {
                continue;
            }
            match FIELD.captures(line) {
                Some(caps) => metadata.push((caps["field"].to_string(), caps["value"].to_string())),
                None => tracing::debug!("Ignoring front matter line in {}: {:?}", path, line),
            }
        }
    }

    if state != ParseState::InBody {
        return Err(ConvertError::MissingBodyDelimiter {
            file: path.to_string(),
        });
    }

    Ok(SourceDocument {
        path: path.to_string(),
        metadata,
        body,
    })
}

/// `{% img cat.png %}` → `![cat.png](cat.png)`
fn rewrite_image(line: &str) -> String {
    match IMAGE.captures(line) {
        Some(caps) => format!("![{0}]({0})", &caps["image"]),
        None => line.to_string(),
    }
}
