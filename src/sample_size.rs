use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SampleSize {
  number: usize,
  raw: String,
}

impl SampleSize {
  pub(crate) fn read_all(path: &Path) -> Result<Vec<Self>> {
    let contents = fs::read_to_string(path).map_err(|source| Error::Config {
      path: path.into(),
      source,
    })?;

    contents
      .lines()
      .enumerate()
      .map(|(index, line)| Self::from_line(line, index + 1))
      .collect()
  }

  pub(crate) fn from_line(line: &str, number: usize) -> Result<Self> {
    if line.is_empty() || !line.bytes().all(|byte| byte.is_ascii_digit()) {
      return Err(Error::SampleSize {
        line: line.into(),
        number,
      });
    }

    Ok(Self {
      number,
      raw: line.into(),
    })
  }

  // Digits are read as base 10, so leading zeros do not change the count.
  pub(crate) fn count(&self) -> Result<usize> {
    self.raw.parse().map_err(|_| Error::SampleSize {
      line: self.raw.clone(),
      number: self.number,
    })
  }

  pub(crate) fn raw(&self) -> &str {
    &self.raw
  }
}

#[cfg(test)]
mod tests {
  use {super::*, tempfile::TempDir};

  fn read(dir: &TempDir, contents: &str) -> Result<Vec<SampleSize>> {
    let path = dir.path().join("sizes.txt");
    fs::write(&path, contents).unwrap();
    SampleSize::read_all(&path)
  }

  #[test]
  fn sizes_keep_file_order() {
    let dir = TempDir::new().unwrap();

    let sizes = read(&dir, "2\n10\n3\n").unwrap();

    assert_eq!(
      sizes.iter().map(SampleSize::raw).collect::<Vec<&str>>(),
      ["2", "10", "3"]
    );
  }

  #[test]
  fn leading_zeros_are_kept_in_the_raw_size() {
    let dir = TempDir::new().unwrap();

    let sizes = read(&dir, "007\n").unwrap();

    assert_eq!(sizes[0].raw(), "007");
    assert_eq!(sizes[0].count().unwrap(), 7);
  }

  #[test]
  fn trailing_characters_are_rejected() {
    let dir = TempDir::new().unwrap();

    let error = read(&dir, "12a\n").unwrap_err();

    assert!(matches!(
      &error,
      Error::SampleSize { line, number: 1 } if line == "12a"
    ));
    assert_eq!(error.code(), 3);
  }

  #[test]
  fn negative_numbers_are_rejected() {
    let dir = TempDir::new().unwrap();

    assert!(matches!(
      read(&dir, "-5\n").unwrap_err(),
      Error::SampleSize { .. }
    ));
  }

  #[test]
  fn blank_lines_are_rejected() {
    let dir = TempDir::new().unwrap();

    assert!(matches!(
      read(&dir, "2\n\n4\n").unwrap_err(),
      Error::SampleSize { number: 2, .. }
    ));
  }

  #[test]
  fn validation_stops_at_the_first_bad_line() {
    let dir = TempDir::new().unwrap();

    assert!(matches!(
      read(&dir, "1\ntwo\nthree\n").unwrap_err(),
      Error::SampleSize { number: 2, .. }
    ));
  }

  #[test]
  fn count_rejects_sizes_that_overflow() {
    let size = SampleSize::from_line("99999999999999999999999999", 1).unwrap();

    let error = size.count().unwrap_err();

    assert!(matches!(error, Error::SampleSize { .. }));
    assert_eq!(error.code(), 3);
  }

  #[test]
  fn missing_file_is_a_config_error() {
    let dir = TempDir::new().unwrap();

    let error = SampleSize::read_all(&dir.path().join("missing.txt")).unwrap_err();

    assert!(matches!(error, Error::Config { .. }));
    assert_eq!(error.code(), 2);
  }
}
