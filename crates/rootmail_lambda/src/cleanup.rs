//! Irreversible teardown helpers for integration-test environments.

use tracing::info;

use crate::adapters::buckets::BucketAdmin;
use crate::adapters::log_groups::LogGroupAdmin;
use crate::error::HandlerError;

/// Deletes every log group whose name contains `pattern`; returns the deleted names.
pub fn delete_log_groups(
    pattern: &str,
    logs: &impl LogGroupAdmin,
) -> Result<Vec<String>, HandlerError> {
    let mut deleted = Vec::new();
    let mut next_token: Option<String> = None;

    loop {
        let page = logs
            .list_log_groups(next_token.as_deref())
            .map_err(HandlerError::service("DescribeLogGroups"))?;

        for name in page.names.into_iter().filter(|name| name.contains(pattern)) {
            info!(log_group = %name, "deleting log group");
            logs.delete_log_group(&name)
                .map_err(HandlerError::service("DeleteLogGroup"))?;
            info!(log_group = %name, "log group deleted");
            deleted.push(name);
        }

        match page.next_token {
            Some(token) if !token.is_empty() => next_token = Some(token),
            _ => break,
        }
    }

    Ok(deleted)
}

/// Deletes all object versions and delete markers, then the bucket itself.
/// Returns the number of versions removed.
pub fn empty_and_delete_bucket(
    bucket: &str,
    buckets: &impl BucketAdmin,
) -> Result<usize, HandlerError> {
    info!(bucket, "emptying bucket");
    let mut removed = 0usize;
    let mut marker = None;

    loop {
        let page = buckets
            .list_object_versions(bucket, marker.as_ref())
            .map_err(HandlerError::service("ListObjectVersions"))?;

        for version in &page.versions {
            buckets
                .delete_object_version(bucket, version)
                .map_err(HandlerError::service("DeleteObject"))?;
            removed += 1;
        }

        match page.next {
            Some(next) => marker = Some(next),
            None => break,
        }
    }

    buckets
        .delete_bucket(bucket)
        .map_err(HandlerError::service("DeleteBucket"))?;
    info!(bucket, versions_removed = removed, "bucket deleted");
    Ok(removed)
}
