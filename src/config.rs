use log::{debug, warn};
use platform_dirs::AppDirs;
use ron::de::from_reader;
use ron::ser::{to_string_pretty, PrettyConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "defaults::max_fractional_places")]
    pub max_fractional_places: usize,
    #[serde(default = "defaults::series_terms")]
    pub series_terms: u32,
}

macro_rules! default_ {
    ($name:ident, $type:ident) => {
        pub fn $name() -> $type {
            Config::default().$name
        }
    };
}

mod defaults {
    use super::Config;
    default_!(max_fractional_places, usize);
    default_!(series_terms, u32);
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_fractional_places: 50,
            series_terms: 20,
        }
    }
}

impl Config {
    pub fn path() -> Option<PathBuf> {
        let dirs = AppDirs::new(Some("tallyfrac"), false)?;
        Some(dirs.config_dir.join("tallyfrac.cfg"))
    }

    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            warn!("no config directory on this platform, using defaults");
            return Self::default();
        };
        if let Some(dir) = path.parent() {
            if let Err(e) = fs::create_dir_all(dir) {
                warn!("could not create {}: {e}", dir.display());
            }
        }
        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(_) => {
                debug!("writing default config to {}", path.display());
                Self::default().write(&path);
                return Self::default();
            }
        };
        match from_reader::<fs::File, Self>(file) {
            Ok(conf) => {
                // write back default values of any fields not present
                conf.write(&path);
                conf
            }
            Err(e) => {
                warn!("could not read {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn from_ron(s: &str) -> ron::error::SpannedResult<Self> {
        ron::from_str(s)
    }

    pub fn to_ron(&self) -> ron::error::Result<String> {
        to_string_pretty(self, PrettyConfig::default())
    }

    fn write(&self, path: &Path) {
        match self.to_ron() {
            Ok(s) => {
                if let Err(e) = fs::write(path, s) {
                    warn!("could not write {}: {e}", path.display());
                }
            }
            Err(e) => warn!("could not serialize config: {e}"),
        }
    }
}

#[test]
fn missing_fields_test() {
    let conf = Config::from_ron("(series_terms: 7)").unwrap();
    assert_eq!(conf.series_terms, 7);
    assert_eq!(conf.max_fractional_places, Config::default().max_fractional_places);

    assert_eq!(Config::from_ron("()").unwrap(), Config::default());
}

#[test]
fn ron_test() {
    let conf = Config { max_fractional_places: 12, series_terms: 3 };
    let text = conf.to_ron().unwrap();
    assert_eq!(Config::from_ron(&text).unwrap(), conf);
}
