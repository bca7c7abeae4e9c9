use crate::domain::model::{CheckOutcome, CheckStatus, ReleaseElement};
use crate::domain::ports::{Check, NotificationSink, ReleaseSource, Storage};
use crate::utils::error::{Result, UpkeepError};
use async_trait::async_trait;

pub const UPDATE_CHECK: &str = "update";

/// Artifact name used when the metadata omits `outputFile`.
pub const DEFAULT_ARTIFACT: &str = "app-release.apk";

/// Compares the published release against the running build and downloads
/// the artifact when a newer one is available.
pub struct UpdatePipeline<R: ReleaseSource, S: Storage, N: NotificationSink> {
    releases: R,
    storage: S,
    notifier: N,
    current_version_code: u64,
}

impl<R: ReleaseSource, S: Storage, N: NotificationSink> UpdatePipeline<R, S, N> {
    pub fn new(releases: R, storage: S, notifier: N, current_version_code: u64) -> Self {
        Self {
            releases,
            storage,
            notifier,
            current_version_code,
        }
    }

    /// The first metadata element is the authoritative build.
    async fn latest_release(&self) -> Result<ReleaseElement> {
        let metadata = self.releases.fetch_metadata().await?;
        metadata
            .elements
            .into_iter()
            .next()
            .ok_or_else(|| UpkeepError::ProcessingError {
                message: "Release metadata lists no build elements".to_string(),
            })
    }

    /// Strictly newer than the running build; same version code is current.
    pub fn is_newer(&self, release: &ReleaseElement) -> bool {
        release.version_code > self.current_version_code
    }

    fn download_name(release: &ReleaseElement) -> String {
        format!("upkeep-{}.apk", release.version_name)
    }

    async fn download(&self, release: &ReleaseElement) -> Result<String> {
        let artifact = release.output_file.as_deref().unwrap_or(DEFAULT_ARTIFACT);
        let data = self.releases.fetch_artifact(artifact).await?;

        let destination = Self::download_name(release);
        tracing::debug!(
            "Writing release artifact ({} bytes) to {}",
            data.len(),
            destination
        );
        self.storage.write_file(&destination, &data).await?;
        Ok(destination)
    }
}

#[async_trait]
impl<R: ReleaseSource, S: Storage, N: NotificationSink> Check for UpdatePipeline<R, S, N> {
    fn name(&self) -> &'static str {
        UPDATE_CHECK
    }

    async fn run(&self) -> Result<CheckOutcome> {
        let release = self.latest_release().await?;

        if !self.is_newer(&release) {
            tracing::debug!(
                "Published version code {} is not newer than {}",
                release.version_code,
                self.current_version_code
            );
            return Ok(CheckOutcome {
                check: UPDATE_CHECK.to_string(),
                status: CheckStatus::Clear,
            });
        }

        tracing::info!(
            "New version available: {} (code {})",
            release.version_name,
            release.version_code
        );
        let destination = self.download(&release).await?;
        self.notifier
            .notify(
                "New version available",
                &format!(
                    "Version {} was downloaded to {}",
                    release.version_name, destination
                ),
            )
            .await?;

        Ok(CheckOutcome {
            check: UPDATE_CHECK.to_string(),
            status: CheckStatus::Triggered(format!("version {} downloaded", release.version_name)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ReleaseMetadata;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    struct MockReleaseSource {
        metadata: ReleaseMetadata,
        artifacts: HashMap<String, Vec<u8>>,
        artifact_fetches: AtomicUsize,
    }

    impl MockReleaseSource {
        fn new(metadata: ReleaseMetadata) -> Self {
            Self {
                metadata,
                artifacts: HashMap::new(),
                artifact_fetches: AtomicUsize::new(0),
            }
        }

        fn with_artifact(mut self, name: &str, data: &[u8]) -> Self {
            self.artifacts.insert(name.to_string(), data.to_vec());
            self
        }
    }

    #[async_trait]
    impl ReleaseSource for MockReleaseSource {
        async fn fetch_metadata(&self) -> Result<ReleaseMetadata> {
            Ok(self.metadata.clone())
        }

        async fn fetch_artifact(&self, name: &str) -> Result<Vec<u8>> {
            self.artifact_fetches.fetch_add(1, Ordering::SeqCst);
            self.artifacts
                .get(name)
                .cloned()
                .ok_or_else(|| UpkeepError::ProcessingError {
                    message: format!("no such artifact: {}", name),
                })
        }
    }

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                UpkeepError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct RecordingSink {
        notifications: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl NotificationSink for RecordingSink {
        async fn notify(&self, title: &str, _body: &str) -> Result<()> {
            self.notifications.lock().await.push(title.to_string());
            Ok(())
        }
    }

    fn metadata(version_code: u64, version_name: &str, output_file: Option<&str>) -> ReleaseMetadata {
        ReleaseMetadata {
            elements: vec![ReleaseElement {
                version_code,
                version_name: version_name.to_string(),
                output_file: output_file.map(String::from),
            }],
        }
    }

    #[tokio::test]
    async fn test_newer_release_is_downloaded_and_notified() {
        let source = MockReleaseSource::new(metadata(7, "1.7.0", Some("maintenance-1.7.0.apk")))
            .with_artifact("maintenance-1.7.0.apk", b"new-build");
        let storage = MockStorage::default();
        let sink = RecordingSink::default();
        let pipeline = UpdatePipeline::new(source, storage.clone(), sink.clone(), 5);

        let outcome = pipeline.run().await.unwrap();

        assert_eq!(
            outcome.status,
            CheckStatus::Triggered("version 1.7.0 downloaded".to_string())
        );
        let stored = storage.read_file("upkeep-1.7.0.apk").await.unwrap();
        assert_eq!(stored, b"new-build");
        assert_eq!(sink.notifications.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_same_version_code_fetches_no_artifact() {
        let source = MockReleaseSource::new(metadata(5, "1.5.0", None));
        let pipeline = UpdatePipeline::new(
            source,
            MockStorage::default(),
            RecordingSink::default(),
            5,
        );

        let outcome = pipeline.run().await.unwrap();

        assert_eq!(outcome.status, CheckStatus::Clear);
        assert_eq!(
            pipeline.releases.artifact_fetches.load(Ordering::SeqCst),
            0
        );
        assert!(pipeline.notifier.notifications.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_older_published_version_is_clear() {
        let source = MockReleaseSource::new(metadata(3, "1.3.0", None));
        let pipeline = UpdatePipeline::new(
            source,
            MockStorage::default(),
            RecordingSink::default(),
            5,
        );

        assert_eq!(pipeline.run().await.unwrap().status, CheckStatus::Clear);
    }

    #[tokio::test]
    async fn test_missing_output_file_falls_back_to_default_name() {
        let source = MockReleaseSource::new(metadata(9, "1.9.0", None))
            .with_artifact(DEFAULT_ARTIFACT, b"fallback-build");
        let storage = MockStorage::default();
        let pipeline =
            UpdatePipeline::new(source, storage.clone(), RecordingSink::default(), 5);

        pipeline.run().await.unwrap();

        assert_eq!(
            storage.read_file("upkeep-1.9.0.apk").await.unwrap(),
            b"fallback-build"
        );
    }

    #[tokio::test]
    async fn test_empty_metadata_is_processing_error() {
        let source = MockReleaseSource::new(ReleaseMetadata { elements: vec![] });
        let pipeline = UpdatePipeline::new(
            source,
            MockStorage::default(),
            RecordingSink::default(),
            5,
        );

        let err = pipeline.run().await.unwrap_err();
        assert!(matches!(err, UpkeepError::ProcessingError { .. }));
    }
}
