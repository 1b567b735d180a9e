use log::{ debug, info, warn, };
use crate::{
    config::Config,
    generator::Generator,
    naming::{ artifact_path, output_path, },
    error::{ Result, ShimError, },
};
use std::{
    io,
    fs::{ copy, create_dir_all, remove_file, rename, },
    path::{ Path, PathBuf, },
};




/// Generate the html for `input` and move it into the output directory.
///
/// Steps run strictly one after the other: derive the output name, run the
/// generator to completion, create the output directory, move the file.
/// Returns the path of the relocated artifact.
pub fn run<G: Generator + ?Sized>(
    config: &Config,
    input: &Path,
    generator: &G,
    ) -> Result<PathBuf> {
    let output = output_path(input);
    info!("generating {output:?} from {input:?}");

    let invocation = generator.generate(input, &output)?;
    if let Some(failure) = invocation.failure() {
        if config.strict {
            return Err(ShimError::ToolFailed {
                failure,
                stderr: invocation.stderr,
            });
        }
        warn!("html generator failed ({failure}), continuing");
    }
    invocation.warn_stderr();

    ensure_output_dir(&config.output_dir)?;
    let artifact = relocate(&output, &config.output_dir)?;
    info!("wrote {artifact:?}");
    Ok(artifact)
}


pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    create_dir_all(dir)
        .map_err(|source| ShimError::CreateDir {
            dir: dir.to_path_buf(),
            source,
        })
}


/// Move `output` into `dir` under the same file name, replacing any
/// previous artifact.
pub fn relocate(output: &Path, dir: &Path) -> Result<PathBuf> {
    if !output.is_file() {
        return Err(ShimError::MissingOutput { path: output.to_path_buf() });
    }
    let artifact = artifact_path(output, dir);
    let moved = match rename(output, &artifact) {
        Err(err) if crosses_devices(&err) => {
            debug!("rename failed ({err}), copying instead");
            copy_then_remove(output, &artifact)
        }
        other => other,
    };
    moved.map_err(|source| ShimError::Move {
        from: output.to_path_buf(),
        to: artifact.clone(),
        source,
    })?;
    Ok(artifact)
}


/// `mv` across filesystems. Either `from` ends up at `to` or `to` is left
/// absent.
pub fn copy_then_remove(from: &Path, to: &Path) -> io::Result<()> {
    copy_then(from, to, |from| remove_file(from))
}

fn copy_then<F>(from: &Path, to: &Path, remove: F) -> io::Result<()>
where F: FnOnce(&Path) -> io::Result<()> {
    copy(from, to)?;
    remove(from).map_err(|err| {
        if let Err(cleanup) = remove_file(to) {
            warn!("could not remove partial copy {to:?}: {cleanup}");
        }
        err
    })
}


#[cfg(unix)]
const CROSS_DEVICE: i32 = 18; // EXDEV
#[cfg(windows)]
const CROSS_DEVICE: i32 = 17; // ERROR_NOT_SAME_DEVICE

fn crosses_devices(err: &io::Error) -> bool {
    #[cfg(any(unix, windows))]
    { err.raw_os_error() == Some(CROSS_DEVICE) }
    #[cfg(not(any(unix, windows)))]
    { false }
}
