use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use ktrace::resolve::Addr2Line;

/// Drop a small executable shell script into `dir` to stand in for the
/// real addr2line binary.
fn write_stub(dir: &Path, script: &str) -> PathBuf {
    let path = dir.join("addr2line");
    fs::write(&path, script).expect("write stub");
    let mut perms = fs::metadata(&path).expect("stat stub").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("chmod stub");
    path
}

#[test]
fn resolves_one_line_per_address() {
    let dir = tempfile::tempdir().expect("tempdir");
    let stub = write_stub(
        dir.path(),
        "#!/bin/sh\nprintf 'src/kernel/trap.rs:42\\nsrc/kernel/task/mod.rs:7\\n'\n",
    );

    let resolver = Addr2Line::new(stub, "kos");
    let addrs = vec!["0x80200a10".to_string(), "0x80200b44".to_string()];
    let lines = resolver.resolve(&addrs).expect("resolve");

    assert_eq!(lines.len(), addrs.len());
    assert_eq!(lines[0], "src/kernel/trap.rs:42");
    assert_eq!(lines[1], "src/kernel/task/mod.rs:7");
}

#[test]
fn all_addresses_reach_the_tool_in_one_invocation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let stub = write_stub(dir.path(), "#!/bin/sh\nfor a in \"$@\"; do echo \"$a\"; done\n");

    let resolver = Addr2Line::new(stub, "kos");
    let addrs = vec!["0x1".to_string(), "0x2".to_string(), "0x3".to_string()];
    let lines = resolver.resolve(&addrs).expect("resolve");

    // First line is the --exe flag, then the addresses in input order.
    assert_eq!(lines[0], "--exe=kos");
    assert_eq!(&lines[1..], &addrs[..]);
}

#[test]
fn failing_tool_reports_exit_code_and_yields_no_lines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let stub = write_stub(dir.path(), "#!/bin/sh\necho 'partial output'\nexit 3\n");

    let resolver = Addr2Line::new(stub, "kos");
    let err = resolver.resolve(&["0x0".to_string()]).unwrap_err();

    assert!(err.to_string().contains("status 3"), "unexpected error: {err}");
}

#[test]
fn empty_address_list_never_spawns_the_tool() {
    // A nonexistent tool path would fail on spawn; an empty batch must not
    // get that far.
    let resolver = Addr2Line::new("/nonexistent/addr2line", "kos");
    assert!(resolver.resolve(&[]).expect("no-op resolve").is_empty());
}
