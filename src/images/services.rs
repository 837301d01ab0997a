use std::path::Path;

use anyhow::Context;
use base64::{engine::general_purpose, Engine as _};
use bytes::Bytes;
use time::OffsetDateTime;

use crate::state::AppState;

pub struct UploadItem {
    pub body: Bytes,
    pub content_type: String,
    pub file_name: Option<String>,
}

impl UploadItem {
    /// Content type from the multipart part, else guessed from the file name.
    pub fn new(body: Bytes, content_type: Option<&str>, file_name: Option<&str>) -> Self {
        let content_type = content_type
            .map(str::to_string)
            .or_else(|| {
                file_name
                    .and_then(|n| mime_guess::from_path(n).first())
                    .map(|m| m.essence_str().to_string())
            })
            .unwrap_or_else(|| "application/octet-stream".into());
        Self {
            body,
            content_type,
            file_name: file_name.map(str::to_string),
        }
    }
}

/// Write the upload into the upload directory and return its stored path.
pub async fn store_upload(st: &AppState, item: &UploadItem) -> anyhow::Result<String> {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    let name = upload_file_name(millis, item.file_name.as_deref(), &item.content_type);
    st.storage
        .put_object(&name, item.body.clone(), &item.content_type)
        .await
        .with_context(|| format!("store upload {}", name))
}

/// `<millis>-<original name>`; two uploads of the same name in the same
/// millisecond collide and the later one wins.
fn upload_file_name(millis: i128, original: Option<&str>, content_type: &str) -> String {
    let base = original
        .and_then(|n| Path::new(n).file_name())
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("image.{}", ext_from_mime(content_type).unwrap_or("bin")));
    format!("{}-{}", millis, base)
}

fn ext_from_mime(ct: &str) -> Option<&'static str> {
    match ct {
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        "image/heic" => Some("heic"),
        "image/gif" => Some("gif"),
        _ => None,
    }
}

/// Base64 of the stored image, or `None` if there is no path or the file is gone.
pub async fn load_image_data(
    st: &AppState,
    image_path: Option<&str>,
) -> anyhow::Result<Option<String>> {
    let Some(path) = image_path else {
        return Ok(None);
    };
    let data = st.storage.read_object(path).await?;
    Ok(data.map(|bytes| general_purpose::STANDARD.encode(bytes)))
}
