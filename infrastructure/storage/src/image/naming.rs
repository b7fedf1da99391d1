use std::path::Path;

/// Builds the stored file name for an upload: the upload timestamp in
/// milliseconds followed by the original extension, if any.
///
/// The extension is lower-cased; anything but ASCII alphanumerics drops it.
pub fn stored_file_name(timestamp_millis: i64, original_name: Option<&str>) -> String {
    match extension_of(original_name) {
        Some(ext) => format!("{}.{}", timestamp_millis, ext),
        None => timestamp_millis.to_string(),
    }
}

fn extension_of(original_name: Option<&str>) -> Option<String> {
    let ext = Path::new(original_name?).extension()?.to_str()?;
    if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
