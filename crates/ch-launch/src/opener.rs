// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! OS-level URL opening

use std::io;

/// Hands a URL to the operating system's default handler
///
/// Launching is fire-and-forget: implementations return once the handler
/// has been started and never wait for the opened application to exit.
pub trait UrlOpener {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Opener backed by the platform's default URL handler
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        webbrowser::open(url)
    }
}
