use serde_json::Value;
use site_core::Attributes;
use thiserror::Error;

const FENCE: &str = "---";

#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("frontmatter opened with --- but never closed")]
    Unterminated,
    #[error("frontmatter is not valid yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("frontmatter must be a mapping, found {found}")]
    NotAMapping { found: &'static str },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedContent {
    pub attributes: Attributes,
    pub body: String,
}

/// Split a content file into its YAML frontmatter attributes and body.
///
/// A file that does not open with a `---` line has no attributes.
pub fn parse_frontmatter(content: &str) -> Result<ParsedContent, FrontmatterError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let Some(rest) = strip_fence_line(content) else {
        return Ok(ParsedContent {
            attributes: Attributes::new(),
            body: content.to_string(),
        });
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == FENCE {
            let yaml = &rest[..offset];
            let body = rest[offset + line.len()..].trim_start_matches(['\r', '\n']);
            return Ok(ParsedContent {
                attributes: parse_attributes(yaml)?,
                body: body.to_string(),
            });
        }
        offset += line.len();
    }
    Err(FrontmatterError::Unterminated)
}

fn strip_fence_line(content: &str) -> Option<&str> {
    let rest = content.strip_prefix(FENCE)?;
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

fn parse_attributes(yaml: &str) -> Result<Attributes, FrontmatterError> {
    if yaml.trim().is_empty() {
        return Ok(Attributes::new());
    }
    match serde_yaml::from_str::<Value>(yaml)? {
        Value::Object(map) => Ok(map.into_iter().collect()),
        Value::Null => Ok(Attributes::new()),
        other => Err(FrontmatterError::NotAMapping {
            found: kind_of(&other),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
