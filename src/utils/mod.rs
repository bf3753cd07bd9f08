use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Tolerance for comparing floating-point balances.
pub const AMOUNT_TOLERANCE: f64 = 0.01;

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "finance_core=info".parse::<Directive>() {
            filter = filter.add_directive(directive);
        }

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Compares two amounts within `AMOUNT_TOLERANCE`.
pub fn amounts_match(left: f64, right: f64) -> bool {
    (left - right).abs() < AMOUNT_TOLERANCE
}
