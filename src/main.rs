/*
 * Spalla Bird
 *
 * A minimal side-scrolling arcade game: keep the bird in the air with the
 * space bar and fly through the gaps between the pipes. One hit ends the
 * round; press space again to start over.
 *
 * Logging goes to stderr; set RUST_LOG (e.g. RUST_LOG=spalla_bird=debug)
 * to change the verbosity.
 */

use spalla_bird::app::{model, update};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "spalla_bird=info";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let registry = tracing_subscriber::registry().with(filter).with(fmt::layer());
    let _ = registry.try_init();
}

fn main() {
    init_logging();

    nannou::app(model)
        .update(update)
        .run();
}
