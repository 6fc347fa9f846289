// SPDX-License-Identifier: PMPL-1.0-or-later

//! stderr logging for the command-line front end

use anyhow::{Context, Result};
use log::LevelFilter;

pub fn setup(level: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .context("failed to install logger")
}
