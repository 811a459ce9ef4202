use anyhow::Result;
use tracing_subscriber::EnvFilter;
use worklog::commands::Cli;
use worklog::libs::messages::macros::is_debug_mode;

fn main() -> Result<()> {
    // In debug mode all messages are routed through tracing instead of
    // plain stdout, so a subscriber has to be installed up front.
    if is_debug_mode() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("worklog=debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    Cli::menu()
}
