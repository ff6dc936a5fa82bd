use crate::adapters::buckets::{BucketAdmin, ObjectVersionPage, ObjectVersionRef, VersionMarker};
use crate::adapters::object_store::MailObjectStore;

use super::block_on;

#[derive(Debug, Clone)]
pub struct S3Adapter {
    client: aws_sdk_s3::Client,
}

impl S3Adapter {
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }
}

impl MailObjectStore for S3Adapter {
    fn fetch_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, String> {
        let client = self.client.clone();
        let bucket = bucket.to_string();
        let key = key.to_string();

        block_on(async move {
            let output = client
                .get_object()
                .bucket(bucket)
                .key(key)
                .send()
                .await
                .map_err(|error| format!("failed to read object from s3: {error:?}"))?;
            output
                .body
                .collect()
                .await
                .map(|data| data.into_bytes().to_vec())
                .map_err(|error| format!("failed to read object body: {error}"))
        })
    }

    fn object_exists(&self, bucket: &str, key: &str) -> Result<bool, String> {
        match block_on(self.client.head_object().bucket(bucket).key(key).send()) {
            Ok(_) => Ok(true),
            Err(error) => {
                let service_error = error.into_service_error();
                if service_error.is_not_found() {
                    Ok(false)
                } else {
                    Err(format!("failed to head object in s3: {service_error:?}"))
                }
            }
        }
    }
}

impl BucketAdmin for S3Adapter {
    fn list_object_versions(
        &self,
        bucket: &str,
        marker: Option<&VersionMarker>,
    ) -> Result<ObjectVersionPage, String> {
        let output = block_on(
            self.client
                .list_object_versions()
                .bucket(bucket)
                .set_key_marker(marker.and_then(|value| value.key_marker.clone()))
                .set_version_id_marker(marker.and_then(|value| value.version_id_marker.clone()))
                .send(),
        )
        .map_err(|error| format!("failed to list object versions: {error:?}"))?;

        let versions = output
            .versions()
            .iter()
            .filter_map(|version| {
                version.key().map(|key| ObjectVersionRef {
                    key: key.to_string(),
                    version_id: version.version_id().map(str::to_string),
                })
            })
            .chain(output.delete_markers().iter().filter_map(|marker| {
                marker.key().map(|key| ObjectVersionRef {
                    key: key.to_string(),
                    version_id: marker.version_id().map(str::to_string),
                })
            }))
            .collect();

        let next = output.is_truncated().unwrap_or(false).then(|| VersionMarker {
            key_marker: output.next_key_marker().map(str::to_string),
            version_id_marker: output.next_version_id_marker().map(str::to_string),
        });

        Ok(ObjectVersionPage { versions, next })
    }

    fn delete_object_version(&self, bucket: &str, version: &ObjectVersionRef) -> Result<(), String> {
        block_on(
            self.client
                .delete_object()
                .bucket(bucket)
                .key(&version.key)
                .set_version_id(version.version_id.clone())
                .send(),
        )
        .map(|_| ())
        .map_err(|error| format!("failed to delete object version: {error:?}"))
    }

    fn delete_bucket(&self, bucket: &str) -> Result<(), String> {
        block_on(self.client.delete_bucket().bucket(bucket).send())
            .map(|_| ())
            .map_err(|error| format!("failed to delete bucket: {error:?}"))
    }
}
