use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An uploaded asset in the media library.
///
/// Upload itself happens against external file storage; the client only
/// reads and deletes the registration records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: u64,
    pub file_name: String,
    pub url: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub created_at: DateTime<Utc>,
}
