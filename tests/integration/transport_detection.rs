use dropterm::{
    support::errors::FatalError,
    transport::{resolve_transport, TransportKind},
};

use crate::common::FakeProbe;

#[test]
fn dbus_is_preferred_when_reachable() {
    let mut probe = FakeProbe::new(&[true], &[]);
    let kind = resolve_transport(&mut probe).expect("detection succeeds");
    assert_eq!(kind, TransportKind::Dbus);
    assert_eq!(probe.dcop_probes, 0, "dcop is never probed after a dbus hit");
    assert_eq!(probe.launches, 0);
}

#[test]
fn dcop_is_the_fallback_transport() {
    let mut probe = FakeProbe::new(&[false], &[true]);
    let kind = resolve_transport(&mut probe).expect("detection succeeds");
    assert_eq!(kind, TransportKind::Dcop);
    assert_eq!(probe.launches, 0);
}

#[test]
fn application_is_launched_once_before_the_second_round() {
    let mut probe = FakeProbe::new(&[false, true], &[false]);
    let kind = resolve_transport(&mut probe).expect("detection succeeds");
    assert_eq!(kind, TransportKind::Dbus);
    assert_eq!(probe.launches, 1);
    assert_eq!(probe.dbus_probes, 2, "each endpoint probed at most twice");
}

#[test]
fn still_unreachable_after_launch_is_fatal() {
    let mut probe = FakeProbe::new(&[false, false], &[false, false]);
    let err = resolve_transport(&mut probe).expect_err("no transport must abort");
    assert_eq!(err.exit_code(), 22);
    assert_eq!(probe.launches, 1, "exactly one launch attempt");
    assert_eq!(probe.dbus_probes, 2);
    assert_eq!(probe.dcop_probes, 2);
}

#[test]
fn launch_failure_aborts_without_a_second_round() {
    let mut probe = FakeProbe::new(&[false], &[false])
        .failing_launch(FatalError::AppNotInstalled { app: "yakuake" });
    let err = resolve_transport(&mut probe).expect_err("failed launch must abort");
    assert_eq!(err.exit_code(), 20);
    assert_eq!(probe.dbus_probes, 1, "no probe after a failed launch");
}
