use super::*;

#[derive(Debug)]
pub(crate) struct Dictionary {
  words: Vec<String>,
}

impl Dictionary {
  pub(crate) fn load(path: &Path) -> Result<Self> {
    let contents = fs::read_to_string(path).map_err(|source| Error::Dictionary {
      path: path.into(),
      source,
    })?;

    Ok(Self {
      words: contents.lines().map(str::to_owned).collect(),
    })
  }

  pub(crate) fn len(&self) -> usize {
    self.words.len()
  }

  pub(crate) fn word(&self, index: usize) -> &str {
    &self.words[index]
  }
}
