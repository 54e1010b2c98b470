use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber once. `RUST_LOG` overrides the default
/// `ledgerlens=info`; output goes to stderr so stdout stays clean for data.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "ledgerlens=info".parse() {
            filter = filter.add_directive(directive);
        }

        if let Err(err) = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
        {
            tracing::debug!(%err, "global subscriber already installed");
        }
    });
}
