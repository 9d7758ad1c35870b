use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the console subscriber. `RUST_LOG` overrides the default filter.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "airport_checkin=info,cookie_checkin=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
