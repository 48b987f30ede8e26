use crate::core::error::{RelgrabError, RelgrabResult};
use std::path::{Component, Path, PathBuf};

/// Get the relgrab home directory
///
/// Platform-specific locations:
/// - Windows: %APPDATA%\relgrab
/// - Linux: ~/.config/relgrab
/// - macOS: ~/Library/Application Support/relgrab
pub fn relgrab_home() -> RelgrabResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| RelgrabError::Path("Could not determine config directory".to_string()))?;
    Ok(config_dir.join("relgrab"))
}

/// Get the config file path
///
/// Platform-specific locations:
/// - Windows: %APPDATA%\relgrab\config.yaml
/// - Linux: ~/.config/relgrab/config.yaml
/// - macOS: ~/Library/Application Support/relgrab/config.yaml
pub fn config_file() -> RelgrabResult<PathBuf> {
    Ok(relgrab_home()?.join("config.yaml"))
}

/// Build the local path an asset is written to.
///
/// The asset name comes from the remote API and must be a single plain file
/// name; anything that would escape `dir` is rejected. An empty `dir` means
/// the current directory.
pub fn asset_destination(dir: &Path, asset_name: &str) -> RelgrabResult<PathBuf> {
    let mut components = Path::new(asset_name).components();
    let is_plain = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );

    if !is_plain || asset_name.contains(|c: char| c == '/' || c == '\\') {
        return Err(RelgrabError::Path(format!(
            "Refusing to write asset with unsafe name '{}'",
            asset_name
        )));
    }

    Ok(dir.join(asset_name))
}
