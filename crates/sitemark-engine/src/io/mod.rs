use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
}

/// Read a markdown file and return its content
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a file, creating parent directories
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Scan for markdown files in the content directory, sorted by path
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_content_dir(content_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}

/// Path of `file` relative to the content root.
pub fn content_relative(content_root: &Path, file: &Path) -> Result<RelativePathBuf, IoError> {
    let relative = file.strip_prefix(content_root).map_err(|_| {
        IoError::InvalidContentDir(format!(
            "{} is outside {}",
            file.display(),
            content_root.display()
        ))
    })?;
    RelativePathBuf::from_path(relative).map_err(|e| IoError::InvalidContentDir(e.to_string()))
}

/// Output path of a page, relative to the output root.
///
/// `content/blog/post.md` maps to `blog/post.html`.
pub fn page_destination(content_root: &Path, file: &Path) -> Result<RelativePathBuf, IoError> {
    Ok(content_relative(content_root, file)?.with_extension("html"))
}

/// Recursively copy every file under `src` into `dst`
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<usize, IoError> {
    fs::create_dir_all(dst).map_err(IoError::Io)?;

    let mut copied = 0;
    for entry in fs::read_dir(src).map_err(IoError::Io)? {
        let entry = entry.map_err(IoError::Io)?;
        let from = entry.path();
        let to = dst.join(entry.file_name());

        if from.is_dir() {
            copied += copy_dir_recursive(&from, &to)?;
        } else {
            log::debug!("copying {} to {}", from.display(), to.display());
            fs::copy(&from, &to).map_err(IoError::Io)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Delete `dir` if present and recreate it empty
pub fn reset_dir(dir: &Path) -> Result<(), IoError> {
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(IoError::Io)?;
    }
    fs::create_dir_all(dir).map_err(IoError::Io)
}
