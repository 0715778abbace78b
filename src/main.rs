use {
  crate::{
    arguments::Arguments, dictionary::Dictionary, error::Error, sample_size::SampleSize,
    sampler::Sampler,
  },
  clap::Parser,
  log::{debug, info},
  rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom},
  std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    process,
  },
};

mod arguments;
mod dictionary;
mod error;
mod sample_size;
mod sampler;

type Result<T = (), E = Error> = std::result::Result<T, E>;

fn main() {
  env_logger::init();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(error.code());
  }
}
