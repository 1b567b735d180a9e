use log::{ debug, info, warn, };
use crate::{
    config::Config,
    error::{ Failure, Result, ShimError, },
};
use std::{
    ffi::OsString,
    path::{ Path, PathBuf, },
    process::{ Command, Output, },
};




/// Something that turns a quiz file into an html file.
pub trait Generator {
    fn generate(&self, input: &Path, output: &Path) -> Result<Invocation>;
}




/// Outcome of one blocking run of the generator.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}
impl Invocation {
    #[cfg(test)]
    pub(crate) fn success() -> Self {
        Self::exited(Some(0))
    }
    #[cfg(test)]
    pub(crate) fn exited(code: Option<i32>) -> Self {
        Self{ code, stdout: String::new(), stderr: String::new() }
    }
    pub fn succeeded(&self) -> bool {
        self.code == Some(0)
    }
    pub fn failure(&self) -> Option<Failure> {
        if self.succeeded() { None }
        else { Some(Failure::from_code(self.code)) }
    }
    fn from_output(output: Output) -> Self {
        Self{
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
    fn log_stdout(&self) {
        self.stdout
            .lines()
            .filter( |line| !line.trim().is_empty() )
            .for_each( |line| info!("{line}") );
    }
    /// Only for runs that carry on; a fatal failure reports stderr itself.
    pub(crate) fn warn_stderr(&self) {
        self.stderr
            .lines()
            .filter( |line| !line.trim().is_empty() )
            .for_each( |line| warn!("{line}") );
    }
}




/// `java -cp <classpath> ARHtmlMain <input> <output>`
#[derive(Debug, Clone)]
pub struct JavaGenerator {
    java: PathBuf,
    classpath: OsString,
    main_class: String,
}
impl JavaGenerator {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self{
            java: config.java.clone(),
            classpath: config.classpath_arg()?,
            main_class: config.main_class.clone(),
        })
    }

    pub fn command(&self, input: &Path, output: &Path) -> Command {
        let mut command = Command::new(&self.java);
        command
            .arg("-cp")
            .arg(&self.classpath)
            .arg(&self.main_class)
            .arg(input)
            .arg(output);
        command
    }
}
impl Generator for JavaGenerator {
    fn generate(&self, input: &Path, output: &Path) -> Result<Invocation> {
        let mut command = self.command(input, output);
        debug!("running {command:?}");
        let invocation = command
            .output()
            .map(Invocation::from_output)
            .map_err(|source| ShimError::Spawn {
                program: self.java.clone(),
                source,
            })?;
        invocation.log_stdout();
        debug!("{:?} exited with {:?}", self.java, invocation.code);
        Ok(invocation)
    }
}
