use futures::TryStreamExt;
use log::{debug, info};

use crate::error::Result;
use crate::models::{ExportOptions, ToDelimited};
use crate::utils::BucketConnector;

/// Return the key of the first object listed in `bucket`, or `None` if the
/// bucket is empty.
///
/// Listing order is whatever the store returns. Zero-byte `folder/` marker
/// keys count as objects. Listing stops at the first object; later pages are
/// never requested.
pub async fn reveal_first_key<C>(connector: &C, bucket: &str) -> Result<Option<String>>
where
    C: BucketConnector + ?Sized,
{
    let op = connector.open(bucket)?;
    let mut lister = op.lister_with("/").recursive(true).await?;

    while let Some(entry) = lister.try_next().await? {
        // The listing root itself is not an object.
        if entry.path() == "/" || entry.path().is_empty() {
            continue;
        }
        debug!("First object in bucket '{}': '{}'", bucket, entry.path());
        return Ok(Some(entry.path().to_string()));
    }

    debug!("Bucket '{bucket}' is empty");
    Ok(None)
}

/// Serialize `table` to CSV in memory and upload it as a single object.
///
/// Any object already stored at `options.path` is overwritten.
pub async fn export_table<C, T>(
    connector: &C,
    table: &T,
    bucket: &str,
    options: &ExportOptions,
) -> Result<()>
where
    C: BucketConnector + ?Sized,
    T: ToDelimited,
{
    let body = table.to_delimited(options.header, options.index)?;
    let size = body.len();

    let op = connector.open(bucket)?;
    op.write(&options.path, body).await?;

    info!(
        "Uploaded {} bytes of CSV to '{}' in bucket '{}'",
        size, options.path, bucket
    );
    Ok(())
}
