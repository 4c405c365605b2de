//! Environment overrides, kept in their own test binary since they mutate process state

use resultkit::config::Config;

#[test]
fn test_env_overrides_nested_keys() {
    std::env::set_var("RESULTKIT_BENCH__CHAIN_ITERATIONS", "10");
    std::env::set_var("RESULTKIT_LOG__LEVEL", "trace");

    let config = Config::load(None).expect("Failed to load config");
    assert_eq!(config.bench.chain_iterations, 10);
    assert_eq!(config.log.level, "trace");
    assert_eq!(config.bench.basic_iterations, 1_000_000);

    std::env::remove_var("RESULTKIT_BENCH__CHAIN_ITERATIONS");
    std::env::remove_var("RESULTKIT_LOG__LEVEL");
}
