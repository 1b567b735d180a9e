pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod naming;
pub mod shim;

pub use config::Config;
pub use error::{ Failure, ShimError, };
pub use generator::{ Generator, Invocation, JavaGenerator, };
pub use shim::run;
