mod catalog_tests;
mod broadcaster_tests;

// Initialize logging once per test binary; repeated calls are harmless
pub(crate) fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}
