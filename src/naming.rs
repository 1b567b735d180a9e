use std::path::{ Path, PathBuf, };


pub const EXTENSION: &'static str = "html";


/// `quiz1.txt` -> `quiz1.html`, `quiz1` -> `quiz1.html`.
/// Only the last extension goes and the parent directory stays.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension(EXTENSION)
}

/// Where `output` lands once moved into `dir`.
pub fn artifact_path(output: &Path, dir: &Path) -> PathBuf {
    match output.file_name() {
        Some(name) => dir.join(name),
        None => dir.join(output),
    }
}
