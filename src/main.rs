mod args;

use args::{Cli, Commands};
use clap::Parser;
use tracing::{debug, trace};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use std::fs;
use std::time::Instant;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Xts(#[from] xtsp::Error),
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    trace!("starting xtsp cli");
    if let Err(e) = xts_cli() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn xts_cli() -> Result<(), CliError> {
    let args = Cli::parse();

    match args.command {
        Commands::Encrypt(enc) => {
            let common = enc.common;

            // read plaintext from input path
            let mut buffer = fs::read(&common.input)?;

            // read or generate key
            let key = if enc.gen_key {
                let rand_key = match enc.key_size {
                    args::KeySize::Bits128 => xtsp::Key::rand_key_256()?,
                    args::KeySize::Bits192 => xtsp::Key::rand_key_384()?,
                    args::KeySize::Bits256 => xtsp::Key::rand_key_512()?,
                };
                fs::write(&common.key, rand_key.as_bytes())?;
                debug!(path = ?common.key, "wrote generated key");
                rand_key
            } else {
                xtsp::Key::try_from_slice(&fs::read(&common.key)?)?
            };

            let xts = xtsp::Xts::new(&key);
            let start = Instant::now();

            // encrypt in place, output is the same length as input
            xts.encrypt_sectors(&mut buffer, common.sector, common.sector_size)?;

            let duration = start.elapsed();

            fs::write(&common.output, &buffer)?;
            println!(
                "Encrypted {} bytes in {} ms",
                buffer.len(),
                duration.as_millis()
            );
            Ok(())
        }
        Commands::Decrypt(common) => {
            // read inputs
            let mut buffer = fs::read(&common.input)?;
            let key = xtsp::Key::try_from_slice(&fs::read(&common.key)?)?;

            let xts = xtsp::Xts::new(&key);
            let start = Instant::now();

            xts.decrypt_sectors(&mut buffer, common.sector, common.sector_size)?;

            let duration = start.elapsed();

            fs::write(&common.output, &buffer)?;
            println!(
                "Decrypted {} bytes in {} ms",
                buffer.len(),
                duration.as_millis()
            );
            Ok(())
        }
    }
}
