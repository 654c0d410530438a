#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use rstest::rstest;
use std::io::Write;

fn write_source(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(contents).unwrap();
    path
}

#[test]
fn test_open_creates_root() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("vault");
    let vault = DirVault::open(&root).unwrap();
    assert!(root.is_dir());
    assert!(vault.is_empty());
}

#[test]
fn test_add_stores_file_and_records_item() {
    let dir = tempfile::tempdir().unwrap();
    let vault = DirVault::open(&dir.path().join("vault")).unwrap();
    let source = write_source(dir.path(), "capture.pcap", b"packet bytes");

    let item = vault
        .add(
            "c1",
            &source,
            "capture.pcap",
            VaultMetadata {
                contains: vec!["pcap".to_string()],
                action_name: Some("get_pcap".to_string()),
                app_run_id: None,
            },
        )
        .unwrap();

    assert_eq!(item.container_id, "c1");
    assert_eq!(item.name, "capture.pcap");
    assert_eq!(item.size, 12);
    assert_eq!(item.contains, vec!["pcap".to_string()]);
    assert!(item.path.is_file());
    assert_eq!(fs::read(&item.path).unwrap(), b"packet bytes");
}

#[test]
fn test_vault_id_is_content_digest() {
    let dir = tempfile::tempdir().unwrap();
    let vault = DirVault::open(&dir.path().join("vault")).unwrap();
    let source = write_source(dir.path(), "a.bin", b"same bytes");
    let other = write_source(dir.path(), "b.bin", b"same bytes");

    let first = vault
        .add("c1", &source, "a.bin", VaultMetadata::default())
        .unwrap();
    let second = vault
        .add("c1", &other, "b.bin", VaultMetadata::default())
        .unwrap();

    // Identical content yields identical vault ids regardless of name
    assert_eq!(first.vault_id, second.vault_id);
    assert_eq!(first.vault_id.len(), 64);
}

#[test]
fn test_items_scoped_to_container() {
    let dir = tempfile::tempdir().unwrap();
    let vault = DirVault::open(&dir.path().join("vault")).unwrap();
    let source = write_source(dir.path(), "f.bin", b"data");

    vault
        .add("c1", &source, "f.bin", VaultMetadata::default())
        .unwrap();
    vault
        .add("c2", &source, "f.bin", VaultMetadata::default())
        .unwrap();

    assert_eq!(vault.items("c1").unwrap().len(), 1);
    assert_eq!(vault.items("c2").unwrap().len(), 1);
    assert!(vault.items("c3").unwrap().is_empty());
}

#[test]
fn test_find_by_vault_id() {
    let dir = tempfile::tempdir().unwrap();
    let vault = DirVault::open(&dir.path().join("vault")).unwrap();
    let source = write_source(dir.path(), "f.bin", b"data");

    let stored = vault
        .add("c1", &source, "f.bin", VaultMetadata::default())
        .unwrap();
    let found = vault.find(&stored.vault_id).unwrap();
    assert_eq!(found, stored);
}

#[rstest]
#[case("missing")]
#[case("")]
fn test_find_unknown_id_fails(#[case] id: &str) {
    let dir = tempfile::tempdir().unwrap();
    let vault = DirVault::open(&dir.path().join("vault")).unwrap();
    let err = vault.find(id).unwrap_err();
    assert!(matches!(err, VaultError::NotFound(_)));
    assert_eq!(err.to_string(), "Specified vault ID not found in vault");
}

#[test]
fn test_index_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("vault");
    let source = write_source(dir.path(), "f.bin", b"data");

    let stored = {
        let vault = DirVault::open(&root).unwrap();
        vault
            .add("c1", &source, "f.bin", VaultMetadata::default())
            .unwrap()
    };

    let reopened = DirVault::open(&root).unwrap();
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.find(&stored.vault_id).unwrap(), stored);
}
