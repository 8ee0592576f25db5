#[test]
fn subscriber_installs_once() {
    physio_app::logging::init(false).unwrap();
    tracing::info!("logging initialised");

    let err = physio_app::logging::init(true).unwrap_err();
    assert!(err.to_string().contains("failed to install tracing subscriber"));
}
