use std::cell::RefCell;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zip::ZipArchive;

use super::*;
use crate::archive::ZipArchiver;
use crate::config::BundleConfig;
use crate::error::{DeskpackError, archive as archive_error};
use crate::hash::HASH_PREFIX;
use crate::ui::RecordingProgressReporter;

const INDEX: &str = "<html>\n<footer>{{dev}}</footer>\n</html>\n";

/// Writes a minimal bundle tree per platform id into the request's out dir
struct FakePackager {
    platforms: Vec<&'static str>,
    requests: RefCell<Vec<PackageRequest>>,
}

impl FakePackager {
    fn new() -> Self {
        Self::for_targets(&["linux-x64"])
    }

    fn for_targets(platforms: &[&'static str]) -> Self {
        Self {
            platforms: platforms.to_vec(),
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl Packager for FakePackager {
    fn package(&self, request: &PackageRequest) -> Result<Vec<PathBuf>> {
        self.requests.borrow_mut().push(request.clone());
        let mut paths = Vec::new();
        for target in &self.platforms {
            let bundle = request.out.join(format!("{}-{}", request.app_name, target));
            let src = bundle.join("resources/app/src");
            fs::create_dir_all(&src)?;
            fs::write(src.join("index.html"), INDEX)?;
            fs::write(bundle.join("LICENSE"), target)?;
            paths.push(bundle);
        }
        Ok(paths)
    }
}

/// Packager that reports success without producing anything
struct EmptyPackager;

impl Packager for EmptyPackager {
    fn package(&self, _request: &PackageRequest) -> Result<Vec<PathBuf>> {
        Ok(Vec::new())
    }
}

struct FailingArchiver;

impl Archiver for FailingArchiver {
    fn archive(
        &self,
        _source_dir: &Path,
        dest: &Path,
        _progress: &mut dyn ProgressReporter,
    ) -> Result<ArchiveSummary> {
        Err(archive_error::failed(dest, "disk full"))
    }
}

fn config(root: &Path) -> ResolvedConfig {
    ResolvedConfig::resolve(&BundleConfig::default(), root).unwrap()
}

fn options(version: Option<&str>, platform: Platform) -> BundleOptions {
    BundleOptions {
        version: version.map(str::to_string),
        platform,
        skip_archive: false,
    }
}

fn run_with(
    config: &ResolvedConfig,
    packager: &dyn Packager,
    archiver: &dyn Archiver,
    options: &BundleOptions,
) -> (Result<BundleReport>, RecordingProgressReporter) {
    let mut progress = RecordingProgressReporter::default();
    let result = BundlePipeline::new(config, packager, archiver, &mut progress).run(options);
    (result, progress)
}

fn run(config: &ResolvedConfig, options: &BundleOptions) -> Result<BundleReport> {
    run_with(config, &FakePackager::new(), &ZipArchiver::deflated(), options).0
}

fn read_entry(archive: &Path, name: &str) -> String {
    let mut zip = ZipArchive::new(File::open(archive).unwrap()).unwrap();
    let mut content = String::new();
    zip.by_name(name)
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    content
}

#[test]
fn test_linux_run_with_version() {
    let temp = TempDir::new().unwrap();
    let config = config(temp.path());

    let (result, progress) = run_with(
        &config,
        &FakePackager::new(),
        &ZipArchiver::deflated(),
        &options(Some("1.2.3"), Platform::Linux),
    );
    let report = result.unwrap();

    let index = temp.path().join("electron/resources/app/src/index.html");
    assert_eq!(
        fs::read_to_string(&index).unwrap(),
        "<html>\n<footer>1.2.3</footer>\n</html>\n"
    );
    assert!(!temp.path().join("temp").exists());

    let archive = temp.path().join("electron.zip");
    assert_eq!(
        read_entry(&archive, "resources/app/src/index.html"),
        "<html>\n<footer>1.2.3</footer>\n</html>\n"
    );
    assert_eq!(read_entry(&archive, "LICENSE"), "linux-x64");

    assert_eq!(
        progress.labels(),
        vec!["Packaging", "Created", "Moved", "Cleaned", "Stamped", "Zipped"]
    );
    assert_eq!(report.destination, temp.path().join("electron"));
    assert_eq!(
        report.bundles,
        vec![temp.path().join("temp/frontpage-linux-x64")]
    );
    assert!(!report.replaced_previous);
    assert!(report.stamp.as_ref().unwrap().replaced);
    match report.archive {
        ArchiveOutcome::Created { summary, digest } => {
            assert_eq!(summary.path, archive);
            assert!(digest.starts_with(HASH_PREFIX));
        }
        other => panic!("expected an archive, got {other:?}"),
    }
}

#[test]
fn test_darwin_run_skips_archive() {
    let temp = TempDir::new().unwrap();
    let config = config(temp.path());
    fs::write(temp.path().join("electron.zip"), "from an earlier run").unwrap();

    let report = run(&config, &options(None, Platform::Darwin)).unwrap();

    assert_eq!(
        report.archive,
        ArchiveOutcome::SkippedMacFamily(Platform::Darwin)
    );
    assert!(report.stamp.is_none());
    assert!(temp.path().join("electron/LICENSE").is_file());
    assert_eq!(
        fs::read_to_string(temp.path().join("electron.zip")).unwrap(),
        "from an earlier run"
    );
}

#[test]
fn test_mas_run_skips_archive() {
    let temp = TempDir::new().unwrap();
    let report = run(&config(temp.path()), &options(None, Platform::Mas)).unwrap();
    assert_eq!(report.archive, ArchiveOutcome::SkippedMacFamily(Platform::Mas));
    assert!(!temp.path().join("electron.zip").exists());
}

#[test]
fn test_skip_archive_on_request() {
    let temp = TempDir::new().unwrap();
    let mut opts = options(Some("2.0.0"), Platform::Win32);
    opts.skip_archive = true;

    let report = run(&config(temp.path()), &opts).unwrap();

    assert_eq!(report.archive, ArchiveOutcome::SkippedByRequest);
    assert!(!temp.path().join("electron.zip").exists());
}

#[test]
fn test_previous_destination_is_replaced() {
    let temp = TempDir::new().unwrap();
    let stale = temp.path().join("electron");
    fs::create_dir_all(stale.join("old")).unwrap();
    fs::write(stale.join("old/stale.txt"), "stale").unwrap();

    let report = run(&config(temp.path()), &options(None, Platform::Linux)).unwrap();

    assert!(report.replaced_previous);
    assert!(!stale.join("old").exists());
    assert!(stale.join("LICENSE").is_file());
}

#[test]
fn test_previous_archive_is_replaced() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("electron.zip");
    fs::write(&archive, "not a zip at all").unwrap();

    run(&config(temp.path()), &options(None, Platform::Linux)).unwrap();

    let zip = ZipArchive::new(File::open(&archive).unwrap()).unwrap();
    assert!(zip.len() > 0);
}

#[test]
fn test_run_without_version_leaves_token() {
    let temp = TempDir::new().unwrap();
    let (result, progress) = run_with(
        &config(temp.path()),
        &FakePackager::new(),
        &ZipArchiver::deflated(),
        &options(None, Platform::Linux),
    );
    result.unwrap();

    assert_eq!(
        fs::read_to_string(temp.path().join("electron/resources/app/src/index.html")).unwrap(),
        INDEX
    );
    assert!(!progress.labels().contains(&"Stamped"));
}

#[test]
fn test_rerun_produces_identical_archive() {
    let temp = TempDir::new().unwrap();
    let config = config(temp.path());
    let archive = temp.path().join("electron.zip");

    run(&config, &options(Some("1.0.0"), Platform::Linux)).unwrap();
    let first = fs::read(&archive).unwrap();
    run(&config, &options(Some("1.0.0"), Platform::Linux)).unwrap();

    assert_eq!(fs::read(&archive).unwrap(), first);
}

#[test]
fn test_first_bundle_wins_when_several_are_produced() {
    let temp = TempDir::new().unwrap();
    let config = config(temp.path());
    let packager = FakePackager::for_targets(&["linux-x64", "linux-arm64"]);

    let (result, _) = run_with(
        &config,
        &packager,
        &ZipArchiver::deflated(),
        &options(None, Platform::Linux),
    );

    // The second bundle stays behind, so the out dir is not empty
    assert!(matches!(result, Err(DeskpackError::RemoveFailed { .. })));
    assert_eq!(
        fs::read_to_string(temp.path().join("electron/LICENSE")).unwrap(),
        "linux-x64"
    );
    assert!(temp.path().join("temp/frontpage-linux-arm64").is_dir());
}

#[test]
fn test_empty_packager_result_is_an_error() {
    let temp = TempDir::new().unwrap();
    let (result, _) = run_with(
        &config(temp.path()),
        &EmptyPackager,
        &ZipArchiver::deflated(),
        &options(None, Platform::Linux),
    );
    assert!(matches!(
        result,
        Err(DeskpackError::NoBundleProduced { .. })
    ));
    assert!(!temp.path().join("electron").exists());
}

#[test]
fn test_missing_stamp_file_aborts_before_archive() {
    let temp = TempDir::new().unwrap();
    let mut bundle_config = BundleConfig::default();
    bundle_config.stamp.file = PathBuf::from("resources/app/src/missing.html");
    let config = ResolvedConfig::resolve(&bundle_config, temp.path()).unwrap();

    let result = run(&config, &options(Some("1.2.3"), Platform::Linux));

    assert!(matches!(result, Err(DeskpackError::FileNotFound { .. })));
    assert!(temp.path().join("electron").is_dir());
    assert!(!temp.path().join("electron.zip").exists());
}

#[test]
fn test_archive_failure_aborts_run() {
    let temp = TempDir::new().unwrap();
    let (result, progress) = run_with(
        &config(temp.path()),
        &FakePackager::new(),
        &FailingArchiver,
        &options(Some("1.2.3"), Platform::Win32),
    );

    assert!(matches!(result, Err(DeskpackError::ArchiveFailed { .. })));
    assert!(!progress.labels().contains(&"Zipped"));
    // Earlier stages keep their effects
    assert!(temp.path().join("electron/LICENSE").is_file());
}

#[test]
fn test_packager_receives_platform_and_ignores() {
    let temp = TempDir::new().unwrap();
    let config = config(temp.path());
    let packager = FakePackager::new();

    let (result, _) = run_with(
        &config,
        &packager,
        &ZipArchiver::deflated(),
        &options(None, Platform::Win32),
    );
    result.unwrap();

    let requests = packager.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].platform, Platform::Win32);
    assert_eq!(requests[0].out, temp.path().join("temp"));
    assert!(requests[0].ignore.contains(&"electron".to_string()));
    assert!(requests[0].ignore.contains(&"electron.zip".to_string()));
}
