
static ONCE: std::sync::Once = std::sync::Once::new();

fn init_logger() {
    ONCE.call_once(|| colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .init()
    );
}
