//! Stress test: key generation and reload across many configuration
//! directories, in parallel, with repeated resolves and account rewrites.

use std::collections::HashSet;
use std::thread;

use acme_account::crypto::RSA_KEY_BITS;
use acme_account::{load_key, read_account, resolve_key, write_account, AccountRecord, ConfigDir};

#[test]
fn stress_independent_dirs_in_parallel() {
    let tmp = tempfile::tempdir().unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let dir = ConfigDir::new(tmp.path().join(format!("client-{i}")));
            thread::spawn(move || {
                let record = AccountRecord {
                    uri: format!("https://ca.example/reg/{i}"),
                    ca: "https://ca.example/directory".to_string(),
                    ..AccountRecord::default()
                };
                write_account(&dir, &record).expect("write failed");
                let key = resolve_key(&dir.key_path(), true).expect("resolve failed");
                (dir, record, key)
            })
        })
        .collect();

    let mut moduli = HashSet::new();
    for handle in handles {
        let (dir, record, key) = handle.join().expect("thread panicked");
        let account = read_account(&dir).unwrap();
        assert_eq!(account.record, record);
        assert_eq!(account.require_key().unwrap(), &key);

        let rsa = key.as_rsa().expect("generated keys are RSA");
        assert!(
            moduli.insert(modulus_bytes(rsa)),
            "two directories got the same key"
        );
    }
    assert_eq!(moduli.len(), 8);
}

#[test]
fn stress_repeated_resolve_is_stable() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("account.key");

    let first = resolve_key(&path, true).unwrap();
    assert_eq!(first.bits(), RSA_KEY_BITS);

    for _ in 0..50 {
        assert_eq!(resolve_key(&path, true).unwrap(), first);
        assert_eq!(resolve_key(&path, false).unwrap(), first);
    }
    assert_eq!(load_key(&path).unwrap(), first);
}

#[test]
fn stress_account_rewrites_keep_key() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = ConfigDir::new(tmp.path());
    write_account(&dir, &AccountRecord::default()).unwrap();
    let key = resolve_key(&dir.key_path(), true).unwrap();

    for i in 0..200 {
        let record = AccountRecord {
            contact: (0..i % 7).map(|n| format!("mailto:c{n}@example.com")).collect(),
            current_terms: format!("v{}", i / 10),
            agreed_terms: format!("v{}", i / 20),
            ..AccountRecord::default()
        };
        write_account(&dir, &record).unwrap();

        let account = read_account(&dir).unwrap();
        assert_eq!(account.record, record);
        assert_eq!(account.key.as_ref(), Some(&key));
    }
}

fn modulus_bytes(key: &rsa::RsaPrivateKey) -> Vec<u8> {
    use rsa::traits::PublicKeyParts;
    key.n().to_bytes_be()
}
