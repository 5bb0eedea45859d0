//! Show command implementation
//!
//! Prints the Number for a content item, optionally re-sampling it the way a
//! click on the displayed value would.

use std::thread;
use std::time::Duration;

use numbers_core::traits::Clock;
use numbers_engine::{NumberCard, NumbersContext};
use tracing::{debug, info};

use crate::Result;

/// Options for the show command
#[derive(Debug, Clone)]
pub struct ShowArgs<'a> {
    pub seed: u32,
    pub published_at: Option<&'a str>,
    pub refresh: u32,
    pub interval_ms: u64,
    pub suffix: &'a str,
}

/// Run the show command
pub fn run<C: Clock>(ctx: &NumbersContext<C>, args: &ShowArgs<'_>) -> Result<()> {
    let mut card = NumberCard::from_raw(ctx, args.seed, args.published_at);
    info!(
        seed = card.seed(),
        effective_date = %card.effective_date().to_rfc3339(),
        "Showing Number"
    );

    println!("{}", render_line(ctx, &card, args.suffix));

    for round in 1..=args.refresh {
        thread::sleep(Duration::from_millis(args.interval_ms));
        let seconds = card.refresh(ctx);
        debug!(round, display_seconds = seconds, "Refreshed");
        println!("{}", render_line(ctx, &card, args.suffix));
    }

    Ok(())
}

/// Formats one display line: the Number followed by the suffix, if any.
pub fn render_line<C: Clock>(ctx: &NumbersContext<C>, card: &NumberCard, suffix: &str) -> String {
    let number = card.display(ctx);
    if suffix.is_empty() {
        number
    } else {
        format!("{} {}", number, suffix)
    }
}
