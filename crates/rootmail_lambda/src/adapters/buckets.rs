#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectVersionRef {
    pub key: String,
    pub version_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionMarker {
    pub key_marker: Option<String>,
    pub version_id_marker: Option<String>,
}

/// One listing page; versions and delete markers are both included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectVersionPage {
    pub versions: Vec<ObjectVersionRef>,
    pub next: Option<VersionMarker>,
}

pub trait BucketAdmin {
    fn list_object_versions(
        &self,
        bucket: &str,
        marker: Option<&VersionMarker>,
    ) -> Result<ObjectVersionPage, String>;
    fn delete_object_version(&self, bucket: &str, version: &ObjectVersionRef) -> Result<(), String>;
    fn delete_bucket(&self, bucket: &str) -> Result<(), String>;
}
