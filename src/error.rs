use super::*;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
  #[error("failed to read config file `{}`: {source}", .path.display())]
  Config { path: PathBuf, source: io::Error },
  #[error("failed to read dictionary file `{}`: {source}", .path.display())]
  Dictionary { path: PathBuf, source: io::Error },
  #[error("failed to write output file `{}`: {source}", .path.display())]
  Output { path: PathBuf, source: io::Error },
  #[error("config file contains non-integer data on line {number}: `{line}`")]
  SampleSize { line: String, number: usize },
}

impl Error {
  pub(crate) fn code(&self) -> i32 {
    match self {
      Self::Dictionary { .. } => 1,
      Self::Config { .. } => 2,
      Self::SampleSize { .. } => 3,
      Self::Output { .. } => 4,
    }
  }
}
