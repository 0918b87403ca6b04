use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use utf8_codec::{Cursor, Utf8File, check_bytes};

mod config;
mod log;

use crate::{config::Config, log::Logger};

/// 1-based line and column (in code points) of byte offset `pos`, which must be the end of a
/// valid prefix of `bytes`
fn locate(bytes: &[u8], pos: usize) -> anyhow::Result<(usize, usize)> {
    let prefix = Utf8File::new(&bytes[..pos]);
    let mut line = 1usize;
    let mut column = 1usize;
    let mut head = prefix.start()?;

    while let Some(cursor) = head {
        if cursor.data()? == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }

        head = cursor.next()?;
    }

    Ok((line, column))
}

fn main() -> anyhow::Result<ExitCode> {
    let config = Config::parse();

    let logger = Logger::new(config.use_ansi_color, config.minimum_level());
    let path = config.path.display();

    let bytes = match std::fs::read(&config.path) {
        Ok(bytes) => bytes,
        Err(e) => {
            logger.fatal(format_args!("Failed to read {path}: {e}"));
            return Ok(ExitCode::FAILURE);
        }
    };
    logger.debug(format_args!("Read {} bytes from {path}", bytes.len()));

    if bytes.is_empty() {
        logger.warn(format_args!("{path} is empty"));
    }

    match check_bytes(&bytes) {
        Ok(count) => {
            logger.info(format_args!(
                "{path}: valid utf-8, {count} code points in {} bytes",
                bytes.len()
            ));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let (line, column) = locate(&bytes, e.valid_up_to)
                .context("Failed to locate the malformed sequence")?;
            logger.error(format_args!("{path}:{line}:{column}: {e}: {}", e.source));
            logger.verbose(format_args!(
                "{} of {} bytes are valid",
                e.valid_up_to,
                bytes.len()
            ));
            Ok(ExitCode::FAILURE)
        }
    }
}

#[cfg(test)]
mod test {
    use super::locate;

    #[test]
    fn locates_after_newlines() {
        let bytes = "ab\nc€d".as_bytes();
        assert_eq!(locate(bytes, 0).unwrap(), (1, 1));
        assert_eq!(locate(bytes, 2).unwrap(), (1, 3));
        assert_eq!(locate(bytes, 3).unwrap(), (2, 1));
        assert_eq!(locate(bytes, bytes.len()).unwrap(), (2, 4));
    }

    #[test]
    fn locates_invalid_byte() {
        let bytes = [b'x', b'\n', b'y', 0xFF];
        let err = utf8_codec::check_bytes(&bytes).unwrap_err();
        assert_eq!(locate(&bytes, err.valid_up_to).unwrap(), (2, 2));
    }
}
