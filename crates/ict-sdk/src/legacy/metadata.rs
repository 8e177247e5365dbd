use super::manifest::WippManifest;
use super::LegacyOptions;
use crate::error::IctError;
use crate::model::{Author, Doi, Metadata, ToolName};
use ict_core::{Diagnostic, FieldPath};
use regex::Regex;
use serde_json::{json, Map, Value};
use tracing::warn;

pub const PLACEHOLDER_NAME: &str = "organization/ICTname";
pub const PLACEHOLDER_AUTHOR: &str = "First Last";
pub const PLACEHOLDER_CONTACT: &str = "author@ict.com";

const AUTHOR_EMAIL_PATTERN: &str = r"[^()\s]+@\S+\.[^()\s.]+";
const WARNING_KIND: &str = "legacy_conversion";

/// Metadata fields a caller may override; anything else in the overrides is
/// still passed through and validated like a normal document field.
pub const METADATA_FIELDS: &[&str] = &[
    "specVersion",
    "name",
    "version",
    "container",
    "entrypoint",
    "title",
    "description",
    "author",
    "contact",
    "repository",
    "documentation",
    "citation",
];

pub(crate) fn convert_metadata(
    manifest: &WippManifest,
    options: &LegacyOptions,
    warnings: &mut Vec<Diagnostic>,
) -> Result<Metadata, IctError> {
    let overrides = &options.overrides;
    let mut warn_unless_overridden = |field: &str, diagnostic: Diagnostic| {
        if !overrides.contains_key(field) {
            warn!(field, reference = ?diagnostic.reference, "{}", diagnostic.message);
            warnings.push(diagnostic);
        }
    };

    let mut document = Map::new();
    document.insert("specVersion".to_string(), json!(options.spec_version));
    document.insert("version".to_string(), json!(manifest.version));

    let name = match derive_name(manifest) {
        Some(name) => name,
        None => {
            warn_unless_overridden(
                "name",
                Diagnostic::warning(
                    WARNING_KIND,
                    FieldPath::keys(&["name"]),
                    format!("could not derive a tool name; using `{PLACEHOLDER_NAME}`"),
                    "legacy.metadata.name_placeholder",
                )
                .with_related(json!({
                    "containerId": manifest.container_id,
                    "title": manifest.title,
                })),
            );
            PLACEHOLDER_NAME.to_string()
        }
    };
    document.insert("name".to_string(), json!(name));

    let author = match manifest.author.as_deref().and_then(derive_author) {
        Some(author) => author,
        None => {
            warn_unless_overridden(
                "author",
                Diagnostic::warning(
                    WARNING_KIND,
                    FieldPath::keys(&["author"]),
                    format!("could not derive an author; using `{PLACEHOLDER_AUTHOR}`"),
                    "legacy.metadata.author_placeholder",
                ),
            );
            PLACEHOLDER_AUTHOR.to_string()
        }
    };
    document.insert("author".to_string(), json!([author]));

    let contact = match manifest.author.as_deref().and_then(derive_contact) {
        Some(contact) => contact,
        None => {
            warn_unless_overridden(
                "contact",
                Diagnostic::warning(
                    WARNING_KIND,
                    FieldPath::keys(&["contact"]),
                    format!("no email found in author; using `{PLACEHOLDER_CONTACT}`"),
                    "legacy.metadata.contact_placeholder",
                ),
            );
            PLACEHOLDER_CONTACT.to_string()
        }
    };
    document.insert("contact".to_string(), json!(contact));

    if let Some(citation) = &manifest.citation {
        if Doi::new(citation).is_ok() {
            document.insert("citation".to_string(), json!(citation));
        } else {
            warn_unless_overridden(
                "citation",
                Diagnostic::warning(
                    WARNING_KIND,
                    FieldPath::keys(&["citation"]),
                    "legacy citation is not a DOI; dropped",
                    "legacy.metadata.citation_dropped",
                )
                .with_related(json!({ "citation": citation })),
            );
        }
    }

    insert_opt(&mut document, "container", manifest.container_id.clone());
    insert_opt(
        &mut document,
        "entrypoint",
        manifest.base_command.as_ref().map(|command| command.join(" ")),
    );
    insert_opt(&mut document, "title", manifest.title.clone());
    insert_opt(&mut document, "description", manifest.description.clone());
    insert_opt(&mut document, "repository", manifest.repository.clone());

    for (field, value) in overrides {
        document.insert(field.clone(), value.clone());
    }

    Metadata::from_value(&Value::Object(document))
}

fn insert_opt(document: &mut Map<String, Value>, key: &str, value: Option<String>) {
    if let Some(value) = value {
        document.insert(key.to_string(), Value::String(value));
    }
}

/// `<registry organization>/<title without spaces>`.
fn derive_name(manifest: &WippManifest) -> Option<String> {
    let organization = manifest.container_id.as_deref()?.split('/').next()?;
    let title = manifest.title.as_deref()?.replace(' ', "");
    let name = format!("{organization}/{title}");
    ToolName::new(&name).ok().map(|_| name)
}

/// First two whitespace-separated tokens of the legacy author string.
fn derive_author(author: &str) -> Option<String> {
    let candidate = author.split_whitespace().take(2).collect::<Vec<_>>().join(" ");
    Author::new(&candidate).ok().map(|_| candidate)
}

fn derive_contact(author: &str) -> Option<String> {
    let pattern = Regex::new(AUTHOR_EMAIL_PATTERN).expect("valid regex");
    pattern.find(author).map(|found| found.as_str().to_string())
}

#[cfg(test)]
#[path = "metadata_test.rs"]
mod tests;
