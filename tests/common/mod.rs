//! Common test utilities for Deskpack integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// Stand-in for electron-packager
///
/// Accepts the same arguments deskpack passes (`. <name> --out=.. --platform=..`)
/// and writes a minimal bundle for the requested platform, including an
/// executable that drops `launched.txt` next to itself when started.
#[allow(dead_code)]
pub const FAKE_PACKAGER: &str = r#"name="$2"
for arg in "$@"; do
  case "$arg" in
    --out=*) out="${arg#--out=}";;
    --platform=*) platform="${arg#--platform=}";;
  esac
done
if [ -n "$FAIL_PACKAGER" ]; then
  echo "Unable to determine Electron version" 1>&2
  exit 1
fi
bundle="$out/$name-$platform-x64"
mkdir -p "$bundle/resources/app/src"
cat index.html > "$bundle/resources/app/src/index.html"
echo "$platform" > "$bundle/version"
case "$platform" in
  darwin|mas) exe="$bundle/$name.app/Contents/MacOS/$name";;
  win32) exe="$bundle/$name.exe";;
  *) exe="$bundle/$name";;
esac
mkdir -p "$(dirname "$exe")"
printf '#!/bin/sh\necho launched > launched.txt\n' > "$exe"
chmod +x "$exe"
echo "Packaging app for platform $platform x64 using electron v13.1.7" 1>&2
echo "Wrote new app to $bundle" 1>&2
"#;

/// A test workspace for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a front-end workspace wired to the fake packager
    pub fn with_fake_packager() -> Self {
        let workspace = Self::new();
        workspace.write_file(
            "index.html",
            "<html>\n<footer>{{dev}}</footer>\n</html>\n",
        );
        workspace.write_file("package.json", r#"{"name": "frontpage", "version": "0.0.0"}"#);
        workspace.write_file(".tools/fake-packager.sh", FAKE_PACKAGER);
        workspace.write_config("");
        workspace
    }

    /// Write deskpack.yaml with the fake packager plus `extra` keys
    pub fn write_config(&self, extra: &str) {
        let script = self.path.join(".tools/fake-packager.sh");
        self.write_file(
            "deskpack.yaml",
            &format!(
                "packager:\n  program: sh\n  args: ['{}']\n{}",
                script.display(),
                extra
            ),
        );
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Entry names of a zip archive in workspace
    pub fn archive_entries(&self, path: &str) -> Vec<String> {
        let file = std::fs::File::open(self.path.join(path)).expect("Failed to open archive");
        let mut zip = zip::ZipArchive::new(file).expect("Failed to read archive");
        (0..zip.len())
            .map(|i| zip.by_index(i).expect("Failed to read entry").name().to_string())
            .collect()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_creation() {
        let workspace = TestWorkspace::new();
        assert!(workspace.path.exists());
    }

    #[test]
    fn test_workspace_file_operations() {
        let workspace = TestWorkspace::new();
        workspace.write_file("src/index.html", "{{dev}}");
        assert!(workspace.file_exists("src/index.html"));
        assert_eq!(workspace.read_file("src/index.html"), "{{dev}}");
    }
}
