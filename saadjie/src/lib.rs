use serde_yaml::Value;

/// One entry of a parsed descriptor tree, either a directory or a file.
///
/// The variant is decided solely by the `type` discriminator in the raw
/// document; nodes with any other (or no) discriminator never make it into
/// the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateNode {
    Directory {
        name: String,
        children: Vec<TemplateNode>,
    },
    File {
        name: String,
        content: String,
    },
}

impl TemplateNode {
    /// The path segment this node contributes when materialized.
    pub fn name(&self) -> &str {
        match self {
            Self::Directory { name, .. } => name,
            Self::File { name, .. } => name,
        }
    }
}

/// Projects a dynamically-typed descriptor value into zero or more
/// [`TemplateNode`] values. This function is total: it never fails.
///
/// - A sequence contributes the concatenation of its elements (siblings).
/// - A mapping contributes at most one node, read from its `name`, `type`,
///   `children` and `content` keys. Unknown keys are ignored so descriptor
///   formats can grow without breaking older binaries.
/// - Anything else (scalars, null) is inert and contributes nothing.
///
/// Malformed mappings are skipped, not errors: one bad branch must not stop
/// its siblings from being usable. Skips are reported at debug level.
///
/// # Example
/// ```
/// let value: serde_yaml::Value = serde_yaml::from_str(
///     "{ name: src, type: directory, children: [{ name: main.rs, type: file }] }",
/// )
/// .unwrap();
/// let nodes = saadjie::parse_nodes(&value);
///
/// assert_eq!(nodes.len(), 1);
/// assert_eq!(nodes[0].name(), "src");
/// ```
pub fn parse_nodes(value: &Value) -> Vec<TemplateNode> {
    match value {
        Value::Sequence(items) => items.iter().flat_map(parse_nodes).collect(),
        Value::Mapping(_) => parse_mapping(value).into_iter().collect(),
        _ => Vec::new(),
    }
}

fn parse_mapping(value: &Value) -> Option<TemplateNode> {
    let name = match value.get("name").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => {
            log::debug!("skipping node without a usable name: {:?}", value);
            return None;
        }
    };

    match value.get("type").and_then(Value::as_str) {
        Some("directory") => {
            // `children` may be a sequence, a single nested mapping, or absent.
            let children = value.get("children").map(parse_nodes).unwrap_or_default();

            Some(TemplateNode::Directory { name, children })
        }
        Some("file") => {
            let content = value
                .get("content")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();

            Some(TemplateNode::File { name, content })
        }
        other => {
            log::debug!("skipping node '{}' with unrecognized type: {:?}", name, other);

            None
        }
    }
}
