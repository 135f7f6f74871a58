mod shortnumberinfo_tests;
mod test_metadata;

static ONCE: std::sync::Once = std::sync::Once::new();

/// Enables trace logging once for the whole test binary.
pub(crate) fn init_logging() {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .is_test(true)
            .init()
    });
}
