pub mod dates;
pub mod errors;
pub mod normalizer;
pub mod runner;
pub mod seq;

use crate::errors::DateFixError;

pub fn run() -> Result<(), DateFixError> {
    runner::run()
}
