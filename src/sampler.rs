use super::*;

pub(crate) struct Sampler<'a> {
  base: &'a str,
  dictionary: &'a Dictionary,
}

impl<'a> Sampler<'a> {
  pub(crate) fn new(dictionary: &'a Dictionary, base: &'a str) -> Self {
    Self { base, dictionary }
  }

  fn output_path(&self, size: &SampleSize) -> PathBuf {
    let base = self.base.strip_suffix(".txt").unwrap_or(self.base);
    PathBuf::from(format!("{base}{}.txt", size.raw()))
  }

  pub(crate) fn write_all(&self, rng: &mut impl Rng, sizes: &[SampleSize]) -> Result {
    for size in sizes {
      self.write_sample(rng, size)?;
    }

    Ok(())
  }

  fn write_sample(&self, rng: &mut impl Rng, size: &SampleSize) -> Result<PathBuf> {
    let path = self.output_path(size);

    // Requested counts beyond the dictionary are clamped to its length.
    let count = size.count()?.min(self.dictionary.len());

    let mut indices = (0..self.dictionary.len()).collect::<Vec<usize>>();
    indices.shuffle(rng);
    indices.truncate(count);

    self
      .write_words(&path, &indices)
      .map_err(|source| Error::Output {
        path: path.clone(),
        source,
      })?;

    info!("wrote {count} words to {}", path.display());

    Ok(path)
  }

  fn write_words(&self, path: &Path, indices: &[usize]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    for &index in indices {
      writeln!(writer, "{}", self.dictionary.word(index))?;
    }

    writer.flush()
  }
}
