//! multipart upload payloads
//!
//! follows the graphql multipart request convention: an `operations` part with
//! the query and variables, a `map` part pointing the upload placeholder at a
//! variable path, and the file itself under the placeholder's field name.

use crate::error::{Error, Result};
use crate::merge::Variables;
use crate::operation::Mutation;
use reqwest::blocking::multipart::{Form, Part};
use serde_json::{json, Value};
use std::fs::File;
use std::path::Path;

/// content type used when the file extension is not recognized
pub(crate) const DEFAULT_CONTENT_TYPE: &str = "image/png";

/// multipart body for a file-attaching mutation
///
/// owns the open source file; the handle is released once the request built
/// from [`UploadPayload::into_form`] completes or the payload is dropped.
#[derive(Debug)]
pub struct UploadPayload {
    operations: Value,
    map: Value,
    file: UploadFile,
}

#[derive(Debug)]
struct UploadFile {
    field: String,
    file_name: String,
    content_type: String,
    handle: File,
    len: u64,
}

impl UploadPayload {
    /// open `path` and build the payload for `mutation`
    ///
    /// `variables` must hold the placeholder at `variable`, which is mapped to
    /// the binary part.
    pub fn new(
        mutation: &Mutation,
        variables: Variables,
        variable: &str,
        path: impl AsRef<Path>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let placeholder = match variables.get(variable) {
            Some(Value::String(placeholder)) => placeholder.clone(),
            _ => {
                return Err(Error::Input(format!(
                    "upload variable `{variable}` must hold a placeholder string"
                )))
            }
        };

        let io_err = |source: std::io::Error| Error::Io {
            path: path.to_path_buf(),
            source,
        };
        let handle = File::open(path).map_err(io_err)?;
        let len = handle.metadata().map_err(io_err)?.len();

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| placeholder.clone());

        let mut map = Variables::new();
        map.insert(placeholder.clone(), json!([format!("variables.{variable}")]));

        Ok(Self {
            operations: json!({
                "query": mutation.query,
                "variables": variables,
            }),
            map: Value::Object(map),
            file: UploadFile {
                field: placeholder,
                file_name,
                content_type: content_type_for(path).to_string(),
                handle,
                len,
            },
        })
    }

    /// payload for `productImageCreate`, mapping the `image` variable
    pub fn product_image(
        mutation: &Mutation,
        variables: Variables,
        path: impl AsRef<Path>,
    ) -> Result<Self> {
        Self::new(mutation, variables, "image", path)
    }

    /// override the content type of the binary part
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.file.content_type = content_type.into();
        self
    }

    /// the `operations` document (`query` and `variables`)
    pub fn operations(&self) -> &Value {
        &self.operations
    }

    /// the `map` document
    pub fn map(&self) -> &Value {
        &self.map
    }

    /// multipart field carrying the file
    pub fn file_field(&self) -> &str {
        &self.file.field
    }

    /// file name sent with the file part
    pub fn file_name(&self) -> &str {
        &self.file.file_name
    }

    /// mime type of the file part
    pub fn content_type(&self) -> &str {
        &self.file.content_type
    }

    /// size of the source file in bytes
    pub fn file_len(&self) -> u64 {
        self.file.len
    }

    /// encode as a multipart form, moving the file handle into the body
    pub(crate) fn into_form(self) -> Result<Form> {
        let UploadFile {
            field,
            file_name,
            content_type,
            handle,
            len,
        } = self.file;

        let part = Part::reader_with_length(handle, len)
            .file_name(file_name)
            .mime_str(&content_type)?;

        Ok(Form::new()
            .text("operations", serde_json::to_string(&self.operations)?)
            .text("map", serde_json::to_string(&self.map)?)
            .part(field, part))
    }
}

fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => DEFAULT_CONTENT_TYPE,
    }
}
