//! Log setup: `timestamp | LEVEL | message` on stderr, `info` unless
//! `RUST_LOG` says otherwise.

use std::io::Write;

use env_logger::{Builder, Env};

/// Install the global logger. Later calls are no-ops (tests call it repeatedly).
pub fn init() {
    builder().try_init().ok();
}

fn builder() -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} | {} | {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.args()
        )
    });
    builder
}
