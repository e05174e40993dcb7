use url::Url;

use crate::error::{Error, Result};

/// Build the `s3://{bucket}/{prefix}` locator for an object.
///
/// Both parts are used verbatim: nothing is trimmed, escaped or validated, so
/// `s3_uri("", "")` is `"s3:///"`.
pub fn s3_uri(prefix: &str, bucket: &str) -> String {
    format!("s3://{bucket}/{prefix}")
}

/// Like [`s3_uri`], but refuse inputs that would produce a locator pointing
/// somewhere other than `prefix` inside `bucket`.
pub fn checked_s3_uri(prefix: &str, bucket: &str) -> Result<String> {
    if bucket.is_empty() {
        return Err(Error::InvalidLocator("bucket name is empty".to_string()));
    }
    if bucket.contains('/') {
        return Err(Error::InvalidLocator(format!(
            "bucket name `{bucket}` contains '/'"
        )));
    }
    if prefix.starts_with('/') {
        return Err(Error::InvalidLocator(format!(
            "prefix `{prefix}` must not start with '/'"
        )));
    }

    let uri = s3_uri(prefix, bucket);
    let url = Url::parse(&uri).map_err(|e| Error::InvalidLocator(format!("{uri}: {e}")))?;
    if url.host_str() != Some(bucket) {
        return Err(Error::InvalidLocator(format!(
            "{uri}: bucket `{bucket}` is not a valid host name"
        )));
    }
    Ok(uri)
}
