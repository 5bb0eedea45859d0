//! Odds command implementation
//!
//! Prints the current negative odds and how far the window has run.

use numbers_core::traits::Clock;
use numbers_engine::NumbersContext;
use tracing::info;

use crate::Result;

/// Run the odds command
pub fn run<C: Clock>(ctx: &NumbersContext<C>) -> Result<()> {
    info!(anchor = %ctx.anchor(), "Reading negative odds");
    println!("{}", summary(ctx));
    Ok(())
}

/// Human-readable odds line.
pub fn summary<C: Clock>(ctx: &NumbersContext<C>) -> String {
    format!(
        "negative odds {:.4} ({:.1}% of window elapsed, window {} to {})",
        ctx.current_negative_odds(),
        ctx.window_progress() * 100.0,
        ctx.anchor(),
        ctx.anchor().window_end().to_rfc3339(),
    )
}
