use crate::error::IctError;
use crate::reader::ObjectReader;
use ict_core::{FieldPath, Version};
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::fmt::{Display, Formatter};

const CONTAINER_PATTERN: &str = r"^([a-zA-Z0-9_.\-]+/)*[a-zA-Z0-9_.\-]+:[a-zA-Z0-9_.\-]+$";
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s.]+$";
const HTTP_URL_PATTERN: &str = r"^https?://[^\s/?#]+[^\s]*$";

const VERSION_EXPECTED: &str = "MAJOR.MINOR.PATCH[-PRERELEASE]";

/// `<organization>/<name>` or `<organization>/<group>/<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ToolName(String);

impl ToolName {
    pub fn new(value: &str) -> Result<Self, IctError> {
        Self::parse_at(value, FieldPath::keys(&["name"]))
    }

    pub(crate) fn parse_at(value: &str, path: FieldPath) -> Result<Self, IctError> {
        let segments = value.split('/').collect::<Vec<_>>();
        let valid = matches!(segments.len(), 2 | 3) && segments.iter().all(|s| !s.is_empty());
        if !valid {
            return Err(IctError::invalid_format(
                path,
                value,
                "<organization>/<name> or <organization>/<group>/<name>",
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// `<registry path>/<image repository>:<tag>`; the registry path may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContainerImage(String);

impl ContainerImage {
    pub fn new(value: &str) -> Result<Self, IctError> {
        Self::parse_at(value, FieldPath::keys(&["container"]))
    }

    pub(crate) fn parse_at(value: &str, path: FieldPath) -> Result<Self, IctError> {
        let pattern = Regex::new(CONTAINER_PATTERN).expect("valid regex");
        if !pattern.is_match(value) {
            return Err(IctError::invalid_format(
                path,
                value,
                "<registry path>/<image repository>:<tag>",
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// `<first name> <last name>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Author(String);

impl Author {
    pub fn new(value: &str) -> Result<Self, IctError> {
        Self::parse_at(value, FieldPath::keys(&["author"]))
    }

    pub(crate) fn parse_at(value: &str, path: FieldPath) -> Result<Self, IctError> {
        let parts = value.split(' ').collect::<Vec<_>>();
        if parts.len() != 2 || parts.iter().any(|part| part.is_empty()) {
            return Err(IctError::invalid_format(
                path,
                value,
                "<first name> <last name>",
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Digital object identifier, `10.<registrant>/<suffix>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Doi(String);

impl Doi {
    pub fn new(value: &str) -> Result<Self, IctError> {
        Self::parse_at(value, FieldPath::keys(&["citation"]))
    }

    pub(crate) fn parse_at(value: &str, path: FieldPath) -> Result<Self, IctError> {
        if !value.starts_with("10.") || value.split('/').count() != 2 {
            return Err(IctError::invalid_format(path, value, "10.<prefix>/<suffix>"));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HttpUrl(String);

impl HttpUrl {
    pub fn new(value: &str) -> Result<Self, IctError> {
        Self::parse_at(value, FieldPath::keys(&["repository"]))
    }

    pub(crate) fn parse_at(value: &str, path: FieldPath) -> Result<Self, IctError> {
        let pattern = Regex::new(HTTP_URL_PATTERN).expect("valid regex");
        if !pattern.is_match(value) {
            return Err(IctError::invalid_format(path, value, "an http(s) URL"));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Contact {
    Email(String),
    Url(HttpUrl),
}

impl Contact {
    pub fn new(value: &str) -> Result<Self, IctError> {
        Self::parse_at(value, FieldPath::keys(&["contact"]))
    }

    pub(crate) fn parse_at(value: &str, path: FieldPath) -> Result<Self, IctError> {
        let email = Regex::new(EMAIL_PATTERN).expect("valid regex");
        if email.is_match(value) {
            return Ok(Self::Email(value.to_string()));
        }
        HttpUrl::parse_at(value, path.clone())
            .map(Self::Url)
            .map_err(|_| IctError::invalid_format(path, value, "an email address or an http(s) URL"))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Email(email) => email,
            Self::Url(url) => url.as_str(),
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl Display for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(ToolName, ContainerImage, Author, Doi, HttpUrl, Contact);

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub spec_version: Version,
    pub name: ToolName,
    pub version: Version,
    pub container: ContainerImage,
    pub entrypoint: String,
    /// Defaults to `name` when the document omits it.
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub author: Vec<Author>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    pub repository: HttpUrl,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<HttpUrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<Doi>,
}

impl Metadata {
    /// Reads the metadata fields of a top-level document. Unknown keys are ignored.
    pub fn from_value(value: &Value) -> Result<Self, IctError> {
        let reader = ObjectReader::new(value, FieldPath::root())?;
        Self::read(&reader)
    }

    pub(crate) fn read(reader: &ObjectReader<'_>) -> Result<Self, IctError> {
        let spec_version = read_version(reader, "specVersion")?;
        let name = ToolName::parse_at(reader.required_str("name")?, reader.field_path("name"))?;
        let version = read_version(reader, "version")?;
        let container = ContainerImage::parse_at(
            reader.required_str("container")?,
            reader.field_path("container"),
        )?;
        let entrypoint = reader.required_str("entrypoint")?.to_string();
        let title = reader.optional_str("title")?.map(str::to_string);
        let description = reader.optional_str("description")?.map(str::to_string);

        let author_path = reader.field_path("author");
        let author = reader
            .required_string_list("author")?
            .iter()
            .enumerate()
            .map(|(index, author)| Author::parse_at(author, author_path.index(index)))
            .collect::<Result<Vec<_>, _>>()?;
        if author.is_empty() {
            return Err(IctError::invalid_value(author_path, "at least one author is required"));
        }

        let contact = reader
            .optional_str("contact")?
            .map(|contact| Contact::parse_at(contact, reader.field_path("contact")))
            .transpose()?;
        let repository =
            HttpUrl::parse_at(reader.required_str("repository")?, reader.field_path("repository"))?;
        let documentation = reader
            .optional_str("documentation")?
            .map(|url| HttpUrl::parse_at(url, reader.field_path("documentation")))
            .transpose()?;
        let citation = reader
            .optional_str("citation")?
            .map(|doi| Doi::parse_at(doi, reader.field_path("citation")))
            .transpose()?;

        Ok(Self {
            spec_version,
            title: title.unwrap_or_else(|| name.as_str().to_string()),
            name,
            version,
            container,
            entrypoint,
            description,
            author,
            contact,
            repository,
            documentation,
            citation,
        })
    }
}

fn read_version(reader: &ObjectReader<'_>, key: &str) -> Result<Version, IctError> {
    let path = reader.field_path(key);
    let raw = match reader.required(key)? {
        Value::String(text) => text.clone(),
        _ => return Err(IctError::invalid_value(path, "expected a version string")),
    };
    Version::parse(&raw).map_err(|_| IctError::invalid_format(path, raw, VERSION_EXPECTED))
}

#[cfg(test)]
#[path = "metadata_test.rs"]
mod tests;
