//! Logger initialisation for the binary and tests.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Maps a `-v` count onto a default level filter.
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initializes the global logger.
///
/// `verbosity` picks the default filter via [`level_for`]; `RUST_LOG`
/// overrides it when set.
pub fn init(verbosity: u8) {
    let env = Env::default().default_filter_or(level_for(verbosity).to_string());
    let mut builder = Builder::from_env(env);

    // A second call keeps whichever logger was installed first.
    if builder.try_init().is_err() {
        log::trace!("logger already initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, LevelFilter::Info)]
    #[case(1, LevelFilter::Debug)]
    #[case(2, LevelFilter::Trace)]
    #[case(9, LevelFilter::Trace)]
    fn verbosity_levels(#[case] verbosity: u8, #[case] expected: LevelFilter) {
        assert_eq!(level_for(verbosity), expected);
    }

    #[test]
    fn repeated_init_is_harmless() {
        init(0);
        init(2);
    }
}
