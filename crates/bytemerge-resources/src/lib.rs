//! # bytemerge-resources
//!
//! Locates the static tables a `bytemerge` host loads at startup:
//! * the merge table, `merges.json` (required);
//! * the token color table, `token_colors.json` (optional).

use directories_next::ProjectDirs;
use std::env;
use std::path::{Path, PathBuf};

/// Attempt to build a System/$USER [`ProjectDirs`] for bytemerge.
///
/// Used to determine the default data directory.
pub fn bytemerge_project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "crates", "bytemerge")
}

/// Environment variable key to override the default data directory.
pub const BYTEMERGE_DATA_DIR: &str = "BYTEMERGE_DATA_DIR";

/// Default merge table file name.
pub const MERGES_FILE_NAME: &str = "merges.json";

/// Default color table file name.
pub const COLORS_FILE_NAME: &str = "token_colors.json";

/// Get the data directory for bytemerge.
///
/// The resolution order is:
/// 1. `path`, if present.
/// 2. [`BYTEMERGE_DATA_DIR`] env var.
/// 3. `project_dirs().data_dir()`
/// 4. `None`
pub fn resolve_data_dir<P: AsRef<Path>>(path: Option<P>) -> Option<PathBuf> {
    if let Some(path) = path {
        path.as_ref().to_path_buf().into()
    } else if let Ok(path) = env::var(BYTEMERGE_DATA_DIR) {
        PathBuf::from(path).into()
    } else if let Some(pds) = bytemerge_project_dirs() {
        pds.data_dir().to_path_buf().into()
    } else {
        None
    }
}

/// Options for [`ResourcePaths`].
#[derive(Clone, Default, Debug)]
pub struct ResourceOptions {
    /// Optional path to the data directory.
    pub data_dir: Option<PathBuf>,

    /// Optional explicit merge table path; overrides the data directory.
    pub merges_path: Option<PathBuf>,

    /// Optional explicit color table path; overrides the data directory.
    pub colors_path: Option<PathBuf>,
}

/// Resolved static table paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourcePaths {
    /// The merge table path.
    pub merges_path: PathBuf,

    /// The color table path, if one exists.
    pub colors_path: Option<PathBuf>,
}

impl ResourcePaths {
    /// Resolve the table paths.
    ///
    /// An explicit color table path must exist; a color table found through
    /// the data directory is used only if present. The merge table is not
    /// checked here; loading it reports a missing file.
    pub fn resolve(options: ResourceOptions) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir(options.data_dir);

        let merges_path = match (options.merges_path, &data_dir) {
            (Some(path), _) => path,
            (None, Some(dir)) => dir.join(MERGES_FILE_NAME),
            (None, None) => anyhow::bail!("Unable to resolve data dir."),
        };

        let colors_path = match (options.colors_path, &data_dir) {
            (Some(path), _) => {
                if !path.is_file() {
                    anyhow::bail!("color table not found: {}", path.display());
                }
                Some(path)
            }
            (None, Some(dir)) => Some(dir.join(COLORS_FILE_NAME)).filter(|p| p.is_file()),
            (None, None) => None,
        };

        log::debug!("merge table: {}", merges_path.display());
        match &colors_path {
            Some(path) => log::debug!("color table: {}", path.display()),
            None => log::debug!("no color table; using default colors"),
        }

        Ok(Self {
            merges_path,
            colors_path,
        })
    }
}
