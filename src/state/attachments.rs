//! Attached-image bookkeeping for the prompt form.
//!
//! DESIGN
//! ======
//! Two sequences, kept index-aligned: `thumbs` (local previews, appended the
//! moment a file is accepted) and `uploaded_uris` (server-assigned URIs,
//! appended only once the upload succeeds). While an upload is in flight the
//! thumb sequence is one longer; a failed upload rolls its thumb back so a
//! failed attachment leaves no trace. Uploads are driven strictly one at a
//! time by the component layer, which is what keeps this alignment simple.
//!
//! Preview URLs are owned resources (object URLs); every removal path hands
//! the evicted thumbs back to the caller so it can revoke them.

#[cfg(test)]
#[path = "attachments_test.rs"]
mod attachments_test;

/// Maximum number of attached images.
pub const ATTACH_LIMIT: usize = 2;

/// Maximum accepted image size in bytes (6 MiB).
pub const MAX_IMAGE_BYTES: f64 = 6.0 * 1024.0 * 1024.0;

/// A local preview entry for one attached image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Thumb {
    /// Object URL for the local preview image.
    pub preview_url: String,
    /// Original file name, shown in the filename label.
    pub name: String,
}

/// Why a selected file was not attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileRejection {
    /// The attachment limit is already reached; selection processing stops.
    LimitReached,
    /// Not an image MIME type; the file is skipped.
    NotAnImage,
    /// Larger than [`MAX_IMAGE_BYTES`]; the file is skipped.
    TooLarge,
}

impl FileRejection {
    /// User-facing toast text for this rejection.
    #[must_use]
    pub fn message(self) -> String {
        match self {
            Self::LimitReached => format!("Max {ATTACH_LIMIT} images"),
            Self::NotAnImage => "Only images allowed".to_owned(),
            Self::TooLarge => "Image too large (>6MB)".to_owned(),
        }
    }
}

/// Local previews plus their server-assigned URIs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttachmentState {
    pub thumbs: Vec<Thumb>,
    pub uploaded_uris: Vec<String>,
}

impl AttachmentState {
    /// Whether the attachment limit is reached.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.thumbs.len() >= ATTACH_LIMIT
    }

    /// Screen one selected file. Checks run in order: limit, MIME type,
    /// size. The limit check wins even for files that would also fail the
    /// other checks, because it stops the whole selection batch.
    ///
    /// # Errors
    ///
    /// Returns the applicable [`FileRejection`].
    pub fn screen_file(&self, mime_type: &str, size_bytes: f64) -> Result<(), FileRejection> {
        if self.is_full() {
            return Err(FileRejection::LimitReached);
        }
        if !mime_type.starts_with("image/") {
            return Err(FileRejection::NotAnImage);
        }
        if size_bytes > MAX_IMAGE_BYTES {
            return Err(FileRejection::TooLarge);
        }
        Ok(())
    }

    /// Append a local preview (called before its upload starts).
    pub fn push_thumb(&mut self, preview_url: String, name: String) {
        self.thumbs.push(Thumb { preview_url, name });
    }

    /// Record the server URI for the most recently accepted file.
    pub fn confirm_upload(&mut self, uri: String) {
        self.uploaded_uris.push(uri);
    }

    /// Remove the entry at `index` from both sequences (user removal).
    /// Returns the evicted thumb so its preview URL can be revoked.
    pub fn remove_at(&mut self, index: usize) -> Option<Thumb> {
        if index >= self.thumbs.len() {
            return None;
        }
        if index < self.uploaded_uris.len() {
            self.uploaded_uris.remove(index);
        }
        Some(self.thumbs.remove(index))
    }

    /// Roll back the thumb for a failed upload, identified by its preview
    /// URL (indices may have shifted if the user removed another entry while
    /// the upload was in flight). The URI sequence is untouched: the failed
    /// upload never contributed one.
    pub fn remove_by_preview(&mut self, preview_url: &str) -> Option<Thumb> {
        let index = self.thumbs.iter().position(|t| t.preview_url == preview_url)?;
        Some(self.thumbs.remove(index))
    }

    /// Drop every attachment, returning the thumbs for URL revocation.
    pub fn clear(&mut self) -> Vec<Thumb> {
        self.uploaded_uris.clear();
        std::mem::take(&mut self.thumbs)
    }

    /// The JSON-encoded URI list sent as the `image_uris` form field.
    #[must_use]
    pub fn uris_json(&self) -> String {
        serde_json::to_string(&self.uploaded_uris).unwrap_or_else(|_| "[]".to_owned())
    }

    /// Comma-joined file names for the filename label; empty when nothing is
    /// attached.
    #[must_use]
    pub fn file_label(&self) -> String {
        self.thumbs
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
