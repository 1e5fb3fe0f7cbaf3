
/// Config bound to an OS-assigned port with a short drain budget
pub(crate) fn test_config() -> gs_config::Config {
    let mut config = gs_config::Config::default();
    config.server.port = 0;
    config.server.worker_tick_ms = 10;
    config.shutdown.drain_timeout_secs = 5;
    config.shutdown.signals = vec!["hangup".to_string()];
    config
}
