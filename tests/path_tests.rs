use rworkout::utils::path::{expand_tilde, from_cwd, resolve_in};
use std::env;
use std::path::{Path, PathBuf};

#[test]
fn test_resolve_in_keeps_absolute_paths() {
    let dir = tempfile::tempdir().expect("temp dir");
    let abs = dir.path().join("mine.json");

    let resolved = resolve_in(Path::new("/somewhere/else"), &abs.to_string_lossy());
    assert_eq!(resolved, abs);
}

#[test]
fn test_resolve_in_joins_relative_paths() {
    let base = Path::new("/base/dir");

    assert_eq!(resolve_in(base, "w.json"), base.join("w.json"));
    assert_eq!(resolve_in(base, "sub/w.json"), base.join("sub").join("w.json"));
}

#[test]
fn test_expand_tilde() {
    assert_eq!(expand_tilde("plain.json"), PathBuf::from("plain.json"));
    // only a leading "~/" is expanded
    assert_eq!(expand_tilde("a/~/b.json"), PathBuf::from("a/~/b.json"));

    if let Some(home) = dirs::home_dir() {
        assert_eq!(expand_tilde("~/w.json"), home.join("w.json"));
        assert_eq!(resolve_in(Path::new("/base"), "~/w.json"), home.join("w.json"));
    }
}

#[test]
fn test_from_cwd_resolves_against_working_directory() {
    let cwd = env::current_dir().expect("cwd");

    assert_eq!(from_cwd("w.json").expect("resolve"), cwd.join("w.json"));
    assert_eq!(from_cwd("/tmp/w.json").expect("resolve"), PathBuf::from("/tmp/w.json"));
}
