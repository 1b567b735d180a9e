use log::debug;
use serde::Deserialize;
use serde_json::from_str;
use crate::error::{ Result, ShimError, };
use std::{
    env::join_paths,
    ffi::OsString,
    fs::read_to_string,
    path::{ Path, PathBuf, },
};




pub const JAVA: &'static str = "java";
pub const MAIN_CLASS: &'static str = "ARHtmlMain";
pub const OUTPUT_DIR: &'static str = "outputs";
pub const CLASSPATH: [&'static str; 2] = [
    "ANTLR/out/testbin",
    "ANTLR/antlr-runtime-4.13.2.jar",
];




/// How to reach the html generator and where its artifacts go.
///
/// Every field may be omitted from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub java: PathBuf,
    pub classpath: Vec<PathBuf>,
    pub main_class: String,
    pub output_dir: PathBuf,
    /// treat a nonzero exit of the generator as fatal
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            java: PathBuf::from(JAVA),
            classpath: CLASSPATH.iter().map(PathBuf::from).collect(),
            main_class: MAIN_CLASS.to_string(),
            output_dir: PathBuf::from(OUTPUT_DIR),
            strict: true,
        }
    }
}

impl Config {
    pub fn load(file: Option<&Path>) -> Result<Self> {
        match file {
            Some(file) => Self::file(file),
            None => Ok(Self::default()),
        }
    }

    pub fn with_output_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.output_dir = dir;
        }
        self
    }

    /// The `-cp` argument, joined with the platform separator.
    pub fn classpath_arg(&self) -> Result<OsString> {
        join_paths(&self.classpath)
            .map_err(|err| ShimError::Config {
                path: None,
                reason: format!("classpath: {err}"),
            })
    }

    fn file(file: &Path) -> Result<Self> {
        let invalid = |reason: String| ShimError::Config {
            path: Some(file.to_path_buf()),
            reason,
        };
        let text = read_to_string(file)
            .map_err(|err| invalid(err.to_string()))?;
        let config = from_str(&text)
            .map_err(|err| invalid(err.to_string()))?;
        debug!("loaded {config:?} from {file:?}");
        Ok(config)
    }
}
