//! Tests for the process-wide logger. They share one installed logger, so
//! each test holds `SERIAL` for its whole body.
#![cfg(feature = "enabled")]

use mammut_log::{
    Error, Level, LineFormat, Logger, MemoryOutput, debug, error, info, info_if, log_entry,
    trace, warn,
};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

static MEMORY: OnceLock<MemoryOutput> = OnceLock::new();
static SERIAL: Mutex<()> = Mutex::new(());

fn setup() -> (MutexGuard<'static, ()>, &'static MemoryOutput) {
    let guard = SERIAL.lock().unwrap_or_else(PoisonError::into_inner);
    let memory = MEMORY.get_or_init(|| {
        let memory =
            MemoryOutput::new().format(LineFormat::plain().timestamp(false).file_info(false));
        mammut_log::install(Logger::builder().output(memory.clone()).build())
            .expect("first install in this process");
        memory
    });
    mammut_log::init();
    memory.clear();
    (guard, memory)
}

#[test]
fn init_starts_at_debug() {
    let (_guard, _memory) = setup();
    assert!(mammut_log::is_initialized());
    assert_eq!(mammut_log::threshold(), Level::Debug);
}

#[test]
fn init_is_idempotent_reset() {
    let (_guard, _memory) = setup();
    mammut_log::set_threshold(Level::Error);
    mammut_log::init();
    mammut_log::init();
    assert_eq!(mammut_log::threshold(), Level::Debug);
}

#[test]
fn set_and_get_threshold() {
    let (_guard, _memory) = setup();
    for level in Level::all() {
        mammut_log::set_threshold(level);
        assert_eq!(mammut_log::threshold(), level);
        assert_eq!(mammut_log::logger().threshold(), level);
    }
}

#[test]
fn default_threshold_hides_trace_only() {
    let (_guard, memory) = setup();
    debug!("visible");
    trace!("hidden");
    assert_eq!(memory.take(), vec!["DEBUG visible"]);
}

#[test]
fn trace_threshold_emits_every_level() {
    let (_guard, memory) = setup();
    mammut_log::set_threshold(Level::Trace);

    error!("disk {} failed", 2);
    warn!("retrying");
    info!("connected");
    debug!("state={}", "idle");
    trace!("tick");

    assert_eq!(
        memory.take(),
        vec![
            "ERROR disk 2 failed",
            "WARN  retrying",
            "INFO  connected",
            "DEBUG state=idle",
            "TRACE tick"
        ]
    );
}

#[test]
fn error_threshold_silences_lower_levels() {
    let (_guard, memory) = setup();
    mammut_log::set_threshold(Level::Error);

    warn!("w");
    info!("i");
    debug!("d");
    trace!("t");
    log_entry!();
    info_if!(true, "conditional");

    assert!(memory.is_empty());
}

#[test]
fn second_install_is_rejected() {
    let (_guard, _memory) = setup();
    let err = mammut_log::install(Logger::builder().build()).unwrap_err();
    assert!(matches!(err, Error::AlreadyInstalled));
    let err = mammut_log::init_with_config(&mammut_log::Config::default()).unwrap_err();
    assert!(matches!(err, Error::AlreadyInstalled));
}
