//! Validate the no-leak property: every acquired decoder handle is released
//! exactly once, whichever exit path a call takes.

use rawbridge::testing::MockBackend;
use rawbridge::{decode_with, DecodeStatus};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const INPUT: &[u8] = &[0xff, 0xd8, 0xff, 0xe1, 9, 9, 9, 9];

#[test]
fn test_success_releases_the_handle() {
    init_logging();
    let backend = MockBackend::new(4, 4);
    let counters = backend.counters();

    decode_with(&backend, INPUT).unwrap();

    assert_eq!(counters.acquired(), 1);
    assert_eq!(counters.released(), 1);
}

#[test]
fn test_every_failure_path_releases_exactly_once() {
    init_logging();
    let cases: Vec<(&str, MockBackend)> = vec![
        (
            "open failure",
            MockBackend::new(4, 4).open_status(DecodeStatus::FileUnsupported),
        ),
        (
            "unpack failure",
            MockBackend::new(4, 4).unpack_status(DecodeStatus::DataError),
        ),
        ("zero raw dims", MockBackend::new(4, 4).zero_raw_dimensions()),
        (
            "zero header dims",
            MockBackend::new(4, 4).zero_header_dimensions(),
        ),
        ("missing plane", MockBackend::new(4, 4).missing_plane()),
        ("short plane", MockBackend::new(4, 4).short_plane(2)),
        ("oversized dims", MockBackend::new(u32::MAX, u32::MAX)),
    ];

    for (name, backend) in cases {
        let counters = backend.counters();
        assert!(decode_with(&backend, INPUT).is_err(), "{name}");
        assert_eq!(counters.acquired(), 1, "{name}: one handle acquired");
        assert_eq!(counters.released(), 1, "{name}: one handle released");
    }
}

#[test]
fn test_failed_acquisition_has_nothing_to_release() {
    init_logging();
    let backend = MockBackend::new(4, 4).fail_acquire();
    let counters = backend.counters();

    assert!(decode_with(&backend, INPUT).is_err());

    assert_eq!(counters.acquired(), 0);
    assert_eq!(counters.released(), 0);
}

#[test]
fn test_empty_input_acquires_nothing() {
    init_logging();
    let backend = MockBackend::new(4, 4);
    let counters = backend.counters();

    assert!(decode_with(&backend, &[]).is_err());

    assert_eq!(counters.acquired(), 0);
    assert_eq!(counters.released(), 0);
}

#[test]
fn test_mixed_batch_balances_acquires_and_releases() {
    init_logging();
    // Interleave successes with every failure flavor; across the whole
    // batch every acquire must be matched by exactly one release.
    let backends: Vec<MockBackend> = vec![
        MockBackend::new(4, 4),
        MockBackend::new(4, 4).open_status(DecodeStatus::IoError),
        MockBackend::new(4, 4),
        MockBackend::new(4, 4).unpack_status(DecodeStatus::Other(-77)),
        MockBackend::new(4, 4).missing_plane(),
        MockBackend::new(4, 4),
        MockBackend::new(4, 4).short_plane(5),
        MockBackend::new(16, 12),
    ];

    let mut acquired = 0;
    let mut released = 0;
    for backend in &backends {
        let counters = backend.counters();
        for _ in 0..3 {
            let _ = decode_with(backend, INPUT);
        }
        acquired += counters.acquired();
        released += counters.released();
    }

    assert_eq!(acquired, backends.len() * 3);
    assert_eq!(acquired, released);
}
