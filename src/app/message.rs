// SPDX-License-Identifier: MPL-2.0
use crate::page;
use std::time::Instant;

/// Start-up parameters from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Chrome/content language override (`--lang de|en`).
    pub lang: Option<String>,
    /// Explicit site configuration file (`--config path`).
    pub config_path: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Page(page::Message),
    /// The simulated form submission finished.
    SubmissionFinished(bool),
    EscapePressed,
    /// Carousel autoplay clock.
    Tick(Instant),
}
