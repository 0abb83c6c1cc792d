//! Offline helpers behind the `linktrade` binary.
//!
//! Lets operators check how the bot will read a pasted set, what link
//! codes the configured range produces, and which configuration is in
//! effect, without a running bot.

use anyhow::{Context, Result};
use linktrade_intake::{split_spec, strip_code_block, QueueSettings, SplitSpec, TradeQueue};
use linktrade_queue::LinkTradeQueue;
use serde::Serialize;
use std::io::Read;
use std::path::Path;

/// How a raw chat message is read by the intake pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    /// Message text after code-fence stripping.
    pub cleaned: String,
    #[serde(flatten)]
    pub split: SplitSpec,
}

impl SplitReport {
    pub fn from_message(raw: &str) -> Self {
        let cleaned = strip_code_block(raw);
        let split = split_spec(&cleaned);
        Self { cleaned, split }
    }

    /// True when the message would pass the splitter without diagnostics.
    pub fn is_clean(&self) -> bool {
        self.split.invalid.is_empty()
    }
}

/// Reads a message from `path`, or from stdin when `path` is `-`.
pub fn read_message(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read message from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Draws `count` link codes the way the queue would for requests without one.
pub fn draw_codes(settings: &QueueSettings, count: usize) -> Result<Vec<String>> {
    let queue = LinkTradeQueue::new(settings.clone()).context("Invalid queue settings")?;
    Ok((0..count)
        .map(|_| queue.next_random_code().to_string())
        .collect())
}
