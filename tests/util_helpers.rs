//! Filesystem and URL helpers used together, the way a downloader would:
//! create a scratch directory, lay out a repo, copy files, verify and clean up.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use librepo::checksum::{best_checksum, verify_file_checksum, ChecksumType, MetalinkHash};
use librepo::util::{
    copy_content, gettmpdir, is_local_path, pathconcat, prepend_url_protocol, remove_dir,
    url_without_path,
};
use librepo::{global_init_with, Config};
use tempfile::TempDir;

#[test]
fn test_scratch_repo_lifecycle() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let config = Config {
        debug: true,
        tmp_dir: Some(temp.path().to_path_buf()),
    };
    global_init_with(&config);

    let scratch = gettmpdir(&config).unwrap();
    let scratch_str = scratch.to_string_lossy().into_owned();

    let repodata = pathconcat(&[&scratch_str, "repodata", ""]).unwrap();
    assert!(repodata.ends_with("/repodata/"));
    fs::create_dir_all(&repodata).unwrap();

    let source_path = pathconcat(&[&repodata, "repomd.xml"]).unwrap();
    let copy_path = pathconcat(&[&repodata, "repomd.xml.copy"]).unwrap();
    fs::write(&source_path, b"abc").unwrap();

    let mut source = File::open(&source_path).unwrap();
    let mut dest = File::options()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(&copy_path)
        .unwrap();
    assert_eq!(copy_content(&mut source, &mut dest).unwrap(), 3);
    dest.flush().unwrap();

    let hashes = vec![
        MetalinkHash::new("md5", "900150983cd24fb0d6963f7d28e17f72"),
        MetalinkHash::new(
            "sha256",
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        ),
    ];
    let (checksum_type, expected) = best_checksum(&hashes).unwrap();
    assert_eq!(checksum_type, ChecksumType::Sha256);
    verify_file_checksum(Path::new(&copy_path), checksum_type, expected).unwrap();

    let url = prepend_url_protocol(&source_path).unwrap();
    assert!(url.starts_with("file:///"));
    assert!(is_local_path(&url));
    assert_eq!(url_without_path(&url), "file://");

    remove_dir(&scratch).unwrap();
    assert!(!scratch.exists());
}

#[test]
fn test_remote_urls_are_not_local() {
    let base = "https://mirror.example.org/pub/fedora/linux";
    let url = pathconcat(&[base, "releases/40/", "repodata/repomd.xml"]).unwrap();

    assert_eq!(url, "https://mirror.example.org/pub/fedora/linux/releases/40/repodata/repomd.xml");
    assert!(!is_local_path(&url));
    assert_eq!(url_without_path(&url), "https://mirror.example.org");
    assert_eq!(prepend_url_protocol(&url).unwrap(), url);
}
