use std::{cell::RefCell, fs, path::PathBuf, rc::Rc};

use dropterm::{session::open_session, transport::SessionTransport};

use crate::common::{config_from, Call, CallLog, FakeProbe, RecordingTransport};

fn new_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

fn sourced_script_path(calls: &[Call]) -> PathBuf {
    for call in calls {
        if let Call::RunCommand(line) = call {
            let path = line
                .strip_prefix(" source ")
                .expect("directive must start with ` source `");
            return PathBuf::from(path);
        }
    }
    panic!("no run_command call recorded");
}

#[test]
fn full_bootstrap_issues_the_fixed_call_sequence() {
    let config = config_from(&["dropterm", "-w", "/tmp", "-t", "My Tab", "-e", "echo", "hi"]);
    let mut probe = FakeProbe::new(&[false, true], &[false]);
    let calls = new_log();
    let transport = RecordingTransport::new(Rc::clone(&calls));

    open_session(&config, &mut probe, move |_| {
        Box::new(transport) as Box<dyn SessionTransport>
    })
    .expect("bootstrap should succeed");

    assert_eq!(probe.launches, 1, "one launch attempt before the second round");

    let calls = calls.borrow();
    assert_eq!(calls.len(), 4, "calls: {calls:?}");
    assert_eq!(calls[0], Call::AddSession);
    assert_eq!(calls[2], Call::SetTitle("My Tab".into()));
    assert_eq!(calls[3], Call::ShowWindow);

    let script_path = sourced_script_path(&calls);
    let body = fs::read_to_string(&script_path).expect("script should be readable");
    assert_eq!(
        body.lines().last().expect("script has lines"),
        "cd /tmp && exec echo hi",
        "body: {body}"
    );
    fs::remove_file(&script_path).expect("cleanup");
}

#[test]
fn quiet_flag_never_raises_the_window() {
    let config = config_from(&["dropterm", "-w", "/tmp", "-t", "My Tab", "-q", "-e", "echo", "hi"]);
    let mut probe = FakeProbe::new(&[true], &[]);
    let calls = new_log();
    let transport = RecordingTransport::new(Rc::clone(&calls));

    open_session(&config, &mut probe, move |_| {
        Box::new(transport) as Box<dyn SessionTransport>
    })
    .expect("bootstrap should succeed");

    let calls = calls.borrow();
    assert!(
        !calls.iter().any(|call| *call == Call::ShowWindow),
        "calls: {calls:?}"
    );
    fs::remove_file(sourced_script_path(&calls)).expect("cleanup");
}

#[test]
fn profile_properties_are_applied_inside_the_script() {
    let config = config_from(&["dropterm", "-w", "/tmp", "-p", "FOO=bar", "-p", "BAZ=qux"]);
    let mut probe = FakeProbe::new(&[true], &[]);
    let calls = new_log();
    let transport = RecordingTransport::new(Rc::clone(&calls));

    open_session(&config, &mut probe, move |_| {
        Box::new(transport) as Box<dyn SessionTransport>
    })
    .expect("bootstrap should succeed");

    let calls = calls.borrow();
    let script_path = sourced_script_path(&calls);
    let body = fs::read_to_string(&script_path).expect("script should be readable");
    let profile_line = body
        .lines()
        .position(|line| line == "konsoleprofile 'FOO=bar;BAZ=qux'")
        .expect("profile line present");
    let cd_line = body
        .lines()
        .position(|line| line.starts_with("cd "))
        .expect("cd line present");
    assert!(profile_line < cd_line, "profile must precede cd: {body}");
    fs::remove_file(&script_path).expect("cleanup");
}

#[test]
fn missing_workdir_aborts_before_any_probe_or_call() {
    let config = config_from(&["dropterm", "-w", "/no-such-dir-dropterm-test"]);
    let mut probe = FakeProbe::new(&[true], &[]);
    let calls = new_log();
    let transport = RecordingTransport::new(Rc::clone(&calls));

    let err = open_session(&config, &mut probe, move |_| {
        Box::new(transport) as Box<dyn SessionTransport>
    })
    .expect_err("nonexistent workdir must abort");

    assert_eq!(err.exit_code(), 2);
    assert_eq!(probe.dbus_probes, 0, "no probe before validation");
    assert_eq!(probe.launches, 0);
    assert!(calls.borrow().is_empty(), "no transport call was made");
}

#[test]
fn failed_session_creation_is_fatal_with_its_own_code() {
    let config = config_from(&["dropterm", "-w", "/tmp"]);
    let mut probe = FakeProbe::new(&[true], &[]);
    let calls = new_log();
    let transport = RecordingTransport::new(Rc::clone(&calls)).failing_add_session();

    let err = open_session(&config, &mut probe, move |_| {
        Box::new(transport) as Box<dyn SessionTransport>
    })
    .expect_err("failed create must abort");

    assert_eq!(err.exit_code(), 4);
    assert_eq!(calls.borrow().as_slice(), [Call::AddSession]);
}

#[test]
fn failed_command_injection_is_fatal_with_its_own_code() {
    let config = config_from(&["dropterm", "-w", "/tmp", "-t", "My Tab"]);
    let mut probe = FakeProbe::new(&[true], &[]);
    let calls = new_log();
    let transport = RecordingTransport::new(Rc::clone(&calls)).failing_run_command();

    let err = open_session(&config, &mut probe, move |_| {
        Box::new(transport) as Box<dyn SessionTransport>
    })
    .expect_err("failed injection must abort");

    assert_eq!(err.exit_code(), 7);
    let calls = calls.borrow();
    assert_eq!(calls.len(), 2, "no title or window call after the failure");
    fs::remove_file(sourced_script_path(&calls)).expect("cleanup");
}

#[test]
fn unsupported_rename_is_only_a_warning() {
    let config = config_from(&["dropterm", "-w", "/tmp", "-t", "My Tab"]);
    let mut probe = FakeProbe::new(&[false], &[true]);
    let calls = new_log();
    let transport = RecordingTransport::new(Rc::clone(&calls)).without_rename();

    open_session(&config, &mut probe, move |_| {
        Box::new(transport) as Box<dyn SessionTransport>
    })
    .expect("unsupported rename must not abort");

    let calls = calls.borrow();
    assert_eq!(calls[3], Call::ShowWindow, "run continues past the rename");
    fs::remove_file(sourced_script_path(&calls)).expect("cleanup");
}
