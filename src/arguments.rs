use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Arguments {
  #[clap(long, short, help = "Path to the sample size config file, one count per line")]
  config: PathBuf,
  #[clap(long, short, help = "Path to the newline-delimited word list")]
  dictionary: PathBuf,
  #[clap(long, short, help = "Base path for generated sample files")]
  output: String,
  #[clap(long, help = "Seed for the shuffle, random when omitted")]
  seed: Option<u64>,
}

impl Arguments {
  pub(crate) fn run(self) -> Result {
    let dictionary = Dictionary::load(&self.dictionary)?;

    debug!(
      "loaded {} words from {}",
      dictionary.len(),
      self.dictionary.display()
    );

    let sizes = SampleSize::read_all(&self.config)?;

    debug!(
      "read {} sample sizes from {}",
      sizes.len(),
      self.config.display()
    );

    let mut rng = match self.seed {
      Some(seed) => StdRng::seed_from_u64(seed),
      None => StdRng::from_entropy(),
    };

    Sampler::new(&dictionary, &self.output).write_all(&mut rng, &sizes)
  }
}
