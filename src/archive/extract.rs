//! Zip archive extraction

use std::fs::{self, File};
use std::io::{self, BufReader, ErrorKind, Read};
use std::path::{Component, Path, PathBuf};

use zip::ZipArchive;

use crate::common::fs::ensure_parent;
use crate::error::{Result, archive as archive_error, fs as fs_error};
use crate::ui::ProgressReporter;

/// Unix file type bits for a symbolic link
const S_IFMT: u32 = 0o170_000;
const S_IFLNK: u32 = 0o120_000;

/// A link entry, created once every file and directory is in place
struct PendingLink {
    name: String,
    path: PathBuf,
    target: String,
}

/// Extract `archive` into `destination`, returning the number of entries
///
/// Entries with absolute or `..` paths, entries written through a link, and
/// links resolving outside `destination` are rejected before anything is
/// written for them. Links are created last, so no entry is ever written
/// through a link from the same archive.
pub fn extract_archive(
    archive: &Path,
    destination: &Path,
    progress: &mut dyn ProgressReporter,
) -> Result<usize> {
    let file = File::open(archive).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            fs_error::not_found(archive)
        } else {
            fs_error::read_failed(archive, e)
        }
    })?;
    let mut zip = ZipArchive::new(BufReader::new(file))
        .map_err(|e| archive_error::extract_failed(archive, e))?;

    fs::create_dir_all(destination).map_err(|e| fs_error::write_failed(destination, e))?;
    let root = dunce::canonicalize(destination).map_err(|e| fs_error::read_failed(destination, e))?;
    progress.init_file_progress(zip.len() as u64);

    let mut links = Vec::new();
    for index in 0..zip.len() {
        let mut entry = zip
            .by_index(index)
            .map_err(|e| archive_error::extract_failed(archive, e))?;
        let name = entry.name().to_string();
        let Some(relative) = entry.enclosed_name() else {
            return Err(archive_error::unsafe_entry(name));
        };
        reject_linked_path(&root, &relative, &name)?;
        let out_path = root.join(&relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(|e| fs_error::write_failed(&out_path, e))?;
            progress.update_file(&name);
            continue;
        }

        let mode = entry.unix_mode();
        if mode.is_some_and(|m| m & S_IFMT == S_IFLNK) {
            let mut target = String::new();
            entry
                .read_to_string(&mut target)
                .map_err(|e| archive_error::extract_failed(archive, e))?;
            links.push(PendingLink {
                name,
                path: out_path,
                target,
            });
            continue;
        }

        ensure_parent(&out_path)?;
        let mut out = File::create(&out_path).map_err(|e| fs_error::write_failed(&out_path, e))?;
        io::copy(&mut entry, &mut out).map_err(|e| archive_error::extract_failed(archive, e))?;
        if let Some(mode) = mode {
            set_permissions(&out_path, mode)?;
        }
        progress.update_file(&name);
    }

    create_links(&root, &links, progress)?;

    progress.finish_files();
    Ok(zip.len())
}

/// Create the deferred links, then check every one again against the final tree
fn create_links(
    root: &Path,
    links: &[PendingLink],
    progress: &mut dyn ProgressReporter,
) -> Result<()> {
    for link in links {
        let relative = link.path.strip_prefix(root).unwrap_or(link.path.as_path());
        reject_linked_path(root, relative, &link.name)?;
        ensure_parent(&link.path)?;
        if !link_stays_inside(root, &link.path, Path::new(&link.target)) {
            return Err(archive_error::unsafe_entry(format!(
                "{} -> {}",
                link.name, link.target
            )));
        }
        create_symlink(Path::new(&link.target), &link.path)?;
        progress.update_file(&link.name);
    }

    // A link checked early may run through one created after it
    for link in links {
        if !link_stays_inside(root, &link.path, Path::new(&link.target)) {
            let _ = fs::remove_file(&link.path);
            return Err(archive_error::unsafe_entry(format!(
                "{} -> {}",
                link.name, link.target
            )));
        }
    }
    Ok(())
}

/// Refuse an entry whose path under `root` runs through an existing link
fn reject_linked_path(root: &Path, relative: &Path, name: &str) -> Result<()> {
    let mut current = root.to_path_buf();
    for component in relative.components() {
        current.push(component);
        if current
            .symlink_metadata()
            .is_ok_and(|meta| meta.file_type().is_symlink())
        {
            return Err(archive_error::unsafe_entry(name));
        }
    }
    Ok(())
}

/// Whether a link at `link` pointing to `target` resolves inside `root`
///
/// `root` must be canonical. Links already on disk are followed while the
/// target is walked, and the walk may not leave `root` at any point.
fn link_stays_inside(root: &Path, link: &Path, target: &Path) -> bool {
    if target.is_absolute() {
        return false;
    }
    let Some(parent) = link.parent() else {
        return false;
    };
    if !parent.starts_with(root) {
        return false;
    }

    let components: Vec<Component<'_>> = target.components().collect();
    let mut current = parent.to_path_buf();
    for (index, component) in components.iter().enumerate() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                current.pop();
            }
            Component::Normal(name) => {
                current.push(name);
                let is_link = current
                    .symlink_metadata()
                    .is_ok_and(|meta| meta.file_type().is_symlink());
                if is_link {
                    match dunce::canonicalize(&current) {
                        Ok(real) => current = real,
                        // A dangling last hop is checked as a link of its own
                        Err(_) if index + 1 == components.len() => {}
                        Err(_) => return false,
                    }
                }
            }
            Component::RootDir | Component::Prefix(_) => return false,
        }
        if !current.starts_with(root) {
            return false;
        }
    }
    true
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> Result<()> {
    std::os::unix::fs::symlink(target, link).map_err(|e| fs_error::write_failed(link, e))
}

#[cfg(not(unix))]
fn create_symlink(target: &Path, link: &Path) -> Result<()> {
    // No portable links; keep the target path as the file body
    fs::write(link, target.to_string_lossy().as_bytes())
        .map_err(|e| fs_error::write_failed(link, e))
}

#[cfg(unix)]
fn set_permissions(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode & 0o777))
        .map_err(|e| fs_error::write_failed(path, e))
}

#[cfg(not(unix))]
fn set_permissions(_path: &Path, _mode: u32) -> Result<()> {
    Ok(())
}
