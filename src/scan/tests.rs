use super::*;
use std::os::unix::fs::PermissionsExt;
use tempfile::TempDir;

/// base/{foo,.bar,.bar/baz}, each holding `empty`, `.empty`, `not_empty`
/// and `.not_empty`.
fn testdir() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("base");
    let foo = base.join("foo");
    let bar = base.join(".bar");
    let baz = bar.join("baz");
    for dir in [&foo, &bar, &baz] {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join("empty"), "").unwrap();
        fs::write(dir.join(".empty"), "").unwrap();
        fs::write(dir.join("not_empty"), "dummy content").unwrap();
        fs::write(dir.join(".not_empty"), "more dummy content").unwrap();
    }
    (temp, base)
}

fn filtered(temp: &TempDir, base: &Path, options: &FilterOptions) -> Vec<String> {
    filter_files(base, options)
        .unwrap()
        .into_iter()
        .map(|p| {
            p.strip_prefix(temp.path())
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect()
}

fn sorted(paths: &[&str]) -> Vec<String> {
    let mut paths: Vec<String> = paths.iter().map(|p| p.to_string()).collect();
    paths.sort();
    paths
}

const ALL: &[&str] = &[
    "base/foo/.empty",
    "base/foo/.not_empty",
    "base/foo/empty",
    "base/foo/not_empty",
    "base/.bar/.empty",
    "base/.bar/.not_empty",
    "base/.bar/empty",
    "base/.bar/not_empty",
    "base/.bar/baz/.empty",
    "base/.bar/baz/.not_empty",
    "base/.bar/baz/empty",
    "base/.bar/baz/not_empty",
];

#[test]
fn test_filter_files_with_default_options() {
    let (temp, base) = testdir();
    assert_eq!(filtered(&temp, &base, &FilterOptions::default()), sorted(ALL));
}

#[test]
fn test_filter_files_returns_absolute_paths() {
    let (_temp, base) = testdir();
    let files = filter_files(&base, &FilterOptions::default()).unwrap();
    assert!(files.iter().all(|p| p.is_absolute()));
}

#[test]
fn test_filter_files_without_hidden_files() {
    let (temp, base) = testdir();
    let options = FilterOptions::new().hidden(false);
    assert_eq!(
        filtered(&temp, &base, &options),
        sorted(&["base/foo/empty", "base/foo/not_empty"])
    );
}

#[test]
fn test_filter_files_without_empty_files() {
    let (temp, base) = testdir();
    let options = FilterOptions::new().empty(false);
    assert_eq!(
        filtered(&temp, &base, &options),
        sorted(&[
            "base/foo/.not_empty",
            "base/foo/not_empty",
            "base/.bar/.not_empty",
            "base/.bar/not_empty",
            "base/.bar/baz/.not_empty",
            "base/.bar/baz/not_empty",
        ])
    );
}

#[test]
fn test_filter_files_exclude_dot_star_equals_no_hidden() {
    let (temp, base) = testdir();
    let excluded = filtered(&temp, &base, &FilterOptions::new().exclude([".*"]));
    let unhidden = filtered(&temp, &base, &FilterOptions::new().hidden(false));
    assert_eq!(excluded, unhidden);
    assert_eq!(excluded, sorted(&["base/foo/empty", "base/foo/not_empty"]));
}

#[test]
fn test_filter_files_exclude_directory_patterns() {
    let (temp, base) = testdir();
    let bar_only = sorted(&ALL[4..]);
    for pattern in ["foo", "fo?", "f*", "?oo", "*o", "f?o"] {
        let options = FilterOptions::new().exclude([pattern]);
        assert_eq!(filtered(&temp, &base, &options), bar_only, "pattern {pattern}");
    }

    let options = FilterOptions::new().exclude(["*ba?"]);
    assert_eq!(filtered(&temp, &base, &options), sorted(&ALL[..4]));
}

#[test]
fn test_filter_files_exclude_file_patterns() {
    let (temp, base) = testdir();

    let options = FilterOptions::new().exclude(["not_*"]);
    assert_eq!(
        filtered(&temp, &base, &options),
        sorted(&[
            "base/foo/.empty",
            "base/foo/.not_empty",
            "base/foo/empty",
            "base/.bar/.empty",
            "base/.bar/.not_empty",
            "base/.bar/empty",
            "base/.bar/baz/.empty",
            "base/.bar/baz/.not_empty",
            "base/.bar/baz/empty",
        ])
    );

    let options = FilterOptions::new().exclude(["*not_*"]);
    assert_eq!(
        filtered(&temp, &base, &options),
        sorted(&[
            "base/foo/.empty",
            "base/foo/empty",
            "base/.bar/.empty",
            "base/.bar/empty",
            "base/.bar/baz/.empty",
            "base/.bar/baz/empty",
        ])
    );
}

#[test]
fn test_filter_files_uncompilable_pattern_matches_literally() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a[b"), "x").unwrap();
    fs::write(temp.path().join("ab"), "x").unwrap();
    let files = filter_files(temp.path(), &FilterOptions::new().exclude(["a[b"])).unwrap();
    assert_eq!(files, [temp.path().join("ab")]);
}

#[test]
fn test_filter_files_single_file_root() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join(".hidden");
    fs::write(&file, "x").unwrap();
    let options = FilterOptions::new().hidden(false);
    assert_eq!(filter_files(&file, &options).unwrap(), [file.clone()]);
}

#[test]
fn test_filter_files_skips_symlinks() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("real"), "x").unwrap();
    std::os::unix::fs::symlink(temp.path().join("real"), temp.path().join("link")).unwrap();
    let files = filter_files(temp.path(), &FilterOptions::default()).unwrap();
    assert_eq!(files, [temp.path().join("real")]);
}

#[test]
fn test_filter_files_missing_root() {
    let err = filter_files("path/doesnt/exist", &FilterOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "path/doesnt/exist: No such file or directory");
}

#[test]
fn test_real_size_of_directory() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("dir");
    let subdir = dir.join("subdir");
    fs::create_dir_all(&subdir).unwrap();
    fs::write(dir.join("file1"), vec![0u8; 100]).unwrap();
    fs::write(dir.join("file2"), vec![0u8; 200]).unwrap();
    fs::write(subdir.join("file3"), vec![0u8; 300]).unwrap();
    fs::write(subdir.join("file4"), vec![0u8; 400]).unwrap();
    assert_eq!(real_size(&dir).unwrap(), 1000);
}

#[test]
fn test_real_size_of_directory_with_unreadable_subdirectory() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("dir");
    let subdir = dir.join("subdir");
    fs::create_dir_all(&subdir).unwrap();
    fs::write(dir.join("file1"), vec![0u8; 100]).unwrap();
    fs::write(subdir.join("file2"), vec![0u8; 200]).unwrap();

    let mode = fs::metadata(&subdir).unwrap().permissions().mode();
    fs::set_permissions(&subdir, fs::Permissions::from_mode(0o222)).unwrap();
    // Permission bits do not bind a privileged user.
    let privileged = fs::read_dir(&subdir).is_ok();
    let result = real_size(&dir);
    fs::set_permissions(&subdir, fs::Permissions::from_mode(mode)).unwrap();

    if privileged {
        return;
    }
    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("{}: Permission denied", subdir.display())
    );
}

#[test]
fn test_real_size_of_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("file");
    fs::write(&file, vec![0u8; 123]).unwrap();
    assert_eq!(real_size(&file).unwrap(), 123);
}

#[test]
fn test_real_size_of_nonexistent_path() {
    let err = real_size("path/doesnt/exist").unwrap_err();
    assert_eq!(err.to_string(), "path/doesnt/exist: No such file or directory");
}

#[test]
fn test_real_size_ignores_symlinks() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("dir");
    fs::create_dir(&dir).unwrap();
    fs::write(temp.path().join("outside"), vec![0u8; 50]).unwrap();
    fs::write(dir.join("inside"), vec![0u8; 7]).unwrap();
    std::os::unix::fs::symlink(temp.path().join("outside"), dir.join("link")).unwrap();
    assert_eq!(real_size(&dir).unwrap(), 7);
}
