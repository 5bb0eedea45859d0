//! Check command implementation
//!
//! Prints the resolved configuration and session anchor.

use numbers_core::traits::Clock;
use numbers_engine::NumbersContext;
use tracing::info;

use crate::config::NumbersConfig;
use crate::Result;

/// Run the check command
pub fn run<C: Clock>(config: &NumbersConfig, ctx: &NumbersContext<C>) -> Result<()> {
    info!("Checking configuration...");
    for line in report(config, ctx) {
        println!("{}", line);
    }
    info!("Configuration OK");
    Ok(())
}

/// Lines describing the resolved configuration.
pub fn report<C: Clock>(config: &NumbersConfig, ctx: &NumbersContext<C>) -> Vec<String> {
    let anchor_source = if config.anchor.is_some() {
        "pinned"
    } else {
        "current year"
    };

    vec![
        format!("version    {}", crate::VERSION),
        format!("anchor     {} ({})", ctx.anchor(), anchor_source),
        format!("window end {}", ctx.anchor().window_end().to_rfc3339()),
        format!("locale     {}", ctx.format().locale()),
        format!("log level  {}", config.log_level),
        format!("suffix     {}", config.suffix),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use numbers_core::traits::FixedClock;
    use numbers_core::types::Anchor;

    #[test]
    fn test_report_pinned_anchor() {
        let config = NumbersConfig {
            anchor: Some("2024-04-01".to_string()),
            ..Default::default()
        };
        let anchor = config.resolve_anchor().unwrap().unwrap();
        let ctx = NumbersContext::with_anchor(
            FixedClock::new(anchor.instant()),
            anchor,
            config.number_format().unwrap(),
        );

        let lines = report(&config, &ctx);
        assert_eq!(lines[1], "anchor     2024-04-01T00:00:00+00:00 (pinned)");
        assert_eq!(lines[3], "locale     en-US");
        assert_eq!(anchor, Anchor::for_year(2024).unwrap());
    }
}
