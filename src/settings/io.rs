// src/settings/io.rs
use bevy::log::{debug, info};
use directories_next::ProjectDirs;
use std::fs;
use std::io::{self, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "ObjectLayoutTools";
const APPLICATION: &str = "ObjectLayoutEditor";
const CONFIG_FILE: &str = "app_settings.json";

fn config_path() -> io::Result<PathBuf> {
    let proj_dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).ok_or_else(|| {
        io::Error::new(ErrorKind::NotFound, "no config directory for this platform")
    })?;
    let config_dir = proj_dirs.config_dir();
    fs::create_dir_all(config_dir)?;
    Ok(config_dir.join(CONFIG_FILE))
}

/// Settings from the platform config dir; a missing file yields defaults.
pub fn load_settings_from_file<T: for<'de> serde::Deserialize<'de> + Default>() -> io::Result<T> {
    read_settings(&config_path()?)
}

pub fn save_settings_to_file<T: serde::Serialize>(settings: &T) -> io::Result<()> {
    write_settings(&config_path()?, settings)
}

fn read_settings<T: for<'de> serde::Deserialize<'de> + Default>(path: &Path) -> io::Result<T> {
    let file = match fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("AppSettings: No settings file at {:?}, using defaults.", path);
            return Ok(T::default());
        }
        Err(e) => return Err(e),
    };
    info!("AppSettings: Loading settings from {:?}", path);
    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        io::Error::new(
            ErrorKind::InvalidData,
            format!("settings file {:?} is not valid: {}", path, e),
        )
    })
}

/// Writes next to `path` and renames over it, so a crash mid-write never
/// leaves a truncated settings file behind.
fn write_settings<T: serde::Serialize>(path: &Path, settings: &T) -> io::Result<()> {
    let tmp_path = path.with_extension("json.tmp");
    debug!("AppSettings: Saving settings to {:?}", path);
    {
        let mut writer = BufWriter::new(fs::File::create(&tmp_path)?);
        serde_json::to_writer_pretty(&mut writer, settings).map_err(io::Error::other)?;
        writer.flush()?;
    }
    fs::rename(&tmp_path, path)
}
