//! Shared helpers for integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use rust_bingo::cards::generate_card;
use rust_bingo::core::{ScriptedRng, SessionConfig};
use rust_bingo::session::BingoSession;

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Session whose card is B:1-5, I:16-20, N:31,32,FREE,34,35, G:46-50,
/// O:61-65 and whose calls come out in ascending order.
#[allow(dead_code)]
pub fn ordered_session(config: SessionConfig) -> BingoSession<ScriptedRng> {
    let script: Vec<usize> = (1..=14).rev().collect();
    let card = generate_card(&mut ScriptedRng::new(script));
    BingoSession::from_parts(config, card, ScriptedRng::zeros()).unwrap()
}
