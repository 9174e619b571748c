// tests/query_tests.rs
//! Query engine: filter semantics, properties and lookup

mod common;
use common::{catalog_of, names, setup, FIXTURE_NAMES};

use crypto_atlas::{filter, find_by_name, list_all, AtlasError, Catalog, FilterKey, ALL, CATEGORY_FILTERS};
use pretty_assertions::assert_eq;

const QUERIES: [&str; 12] = [
    "", "a", "ae", "aes", "hash", "bitcoin", "key", "tls", "sign", "e", " ", "zzz",
];

#[test]
fn empty_query_with_all_returns_everything_in_order() {
    setup();
    let catalog = Catalog::builtin();
    assert_eq!(names(&filter(catalog, "", ALL)), FIXTURE_NAMES.to_vec());
    assert_eq!(names(&list_all(catalog)), FIXTURE_NAMES.to_vec());
}

#[test]
fn hash_query_hits_sha_and_hmac() {
    let catalog = Catalog::builtin();
    assert_eq!(names(&filter(catalog, "hash", ALL)), vec!["SHA-256", "HMAC"]);
}

#[test]
fn hash_category_is_substring_of_full_label() {
    let catalog = Catalog::builtin();
    assert_eq!(names(&filter(catalog, "", "Hash")), vec!["SHA-256"]);
}

#[test]
fn every_short_category_label_matches_something() {
    let catalog = Catalog::builtin();
    assert_eq!(names(&filter(catalog, "", "Symmetric")), vec!["AES-256"]);
    assert_eq!(
        names(&filter(catalog, "", "Asymmetric")),
        vec!["RSA-2048", "SECP256K1"]
    );
    assert_eq!(names(&filter(catalog, "", "Key Exchange")), vec!["Diffie-Hellman"]);

    for label in CATEGORY_FILTERS {
        assert!(
            !filter(catalog, "", label).is_empty(),
            "category button {label:?} shows nothing"
        );
    }
}

#[test]
fn category_match_is_case_sensitive() {
    let catalog = Catalog::builtin();
    assert!(filter(catalog, "", "hash").is_empty());
    assert!(filter(catalog, "", "key exchange").is_empty());
    // lower-case "symmetric" only appears inside "Asymmetric ..."
    assert_eq!(
        names(&filter(catalog, "", "symmetric")),
        vec!["RSA-2048", "SECP256K1"]
    );
}

#[test]
fn full_category_label_also_matches() {
    let catalog = Catalog::builtin();
    assert_eq!(
        names(&filter(catalog, "", "Message Authentication Code")),
        vec!["HMAC"]
    );
}

#[test]
fn bitcoin_matches_use_cases_and_description() {
    let catalog = Catalog::builtin();
    // SHA-256 lists "Bitcoin Mining" as a use case; SECP256K1 mentions Bitcoin in its description
    assert_eq!(
        names(&filter(catalog, "bitcoin", ALL)),
        vec!["SHA-256", "SECP256K1"]
    );
    assert_eq!(
        names(&filter(catalog, "bitcoin", "Asymmetric")),
        vec!["SECP256K1"]
    );
}

#[test]
fn abstract_text_is_searched() {
    let catalog = Catalog::builtin();
    // only in AES's abstract
    assert_eq!(
        names(&filter(catalog, "classified information", ALL)),
        vec!["AES-256"]
    );
}

#[test]
fn full_name_is_not_searched() {
    let catalog = Catalog::builtin();
    assert!(filter(catalog, "rijndael", ALL).is_empty());
}

#[test]
fn no_match_is_empty_not_error() {
    let catalog = Catalog::builtin();
    assert!(filter(catalog, "zzz-no-match", ALL).is_empty());
    assert!(filter(catalog, "", "Post-Quantum").is_empty());
}

#[test]
fn query_is_not_trimmed() {
    let catalog = Catalog::builtin();
    assert!(filter(catalog, " aes-256 ", ALL).is_empty());
    assert_eq!(names(&filter(catalog, "aes-256", ALL)), vec!["AES-256"]);
}

#[test]
fn search_is_case_insensitive() {
    let catalog = Catalog::builtin();
    assert_eq!(filter(catalog, "aes", ALL), filter(catalog, "AES", ALL));
    assert!(names(&filter(catalog, "aes", ALL)).contains(&"AES-256".to_string()));
    assert_eq!(filter(catalog, "BiTcOiN", ALL), filter(catalog, "bitcoin", ALL));
}

#[test]
fn filter_is_idempotent() {
    let catalog = Catalog::builtin();
    for q in QUERIES {
        for c in CATEGORY_FILTERS {
            assert_eq!(filter(catalog, q, c), filter(catalog, q, c));
        }
    }
}

#[test]
fn extending_the_query_only_narrows() {
    let catalog = Catalog::builtin();
    for c in CATEGORY_FILTERS {
        for base in QUERIES {
            let wide = filter(catalog, base, c);
            for ext in ["a", "s", "-", "2", " "] {
                let extended = format!("{base}{ext}");
                for r in filter(catalog, &extended, c) {
                    assert!(
                        wide.iter().any(|w| std::ptr::eq(*w, r)),
                        "{extended:?} matched {} but {base:?} did not",
                        r.name
                    );
                }
            }
        }
    }
}

#[test]
fn all_category_equals_text_only_match() {
    let catalog = Catalog::builtin();
    for q in QUERIES {
        let needle = q.to_lowercase();
        let text_only: Vec<_> = catalog.iter().filter(|r| r.matches_text(&needle)).collect();
        assert_eq!(filter(catalog, q, ALL), text_only);
    }
}

#[test]
fn results_are_subsequences_of_the_catalog() {
    let catalog = Catalog::builtin();
    let all = list_all(catalog);
    for q in QUERIES {
        for c in CATEGORY_FILTERS {
            let result = filter(catalog, q, c);
            let mut cursor = 0;
            for r in &result {
                let pos = all[cursor..]
                    .iter()
                    .position(|a| std::ptr::eq(*a, *r))
                    .expect("result out of catalog order");
                cursor += pos + 1;
            }
        }
    }
}

#[test]
fn find_by_name_returns_every_record() {
    let catalog = Catalog::builtin();
    for record in catalog {
        let found = find_by_name(catalog, &record.name).unwrap();
        assert!(std::ptr::eq(found, record));
    }
}

#[test]
fn find_by_name_reports_not_found() {
    let catalog = Catalog::builtin();
    assert_eq!(find_by_name(catalog, "RSA-2048").unwrap().name, "RSA-2048");
    match find_by_name(catalog, "RSA-4096") {
        Err(AtlasError::NotFound(name)) => assert_eq!(name, "RSA-4096"),
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert!(matches!(
        find_by_name(catalog, "not-a-real-algorithm"),
        Err(AtlasError::NotFound(_))
    ));
    assert!(matches!(find_by_name(catalog, "rsa-2048"), Err(AtlasError::NotFound(_))));
}

#[test]
fn filter_key_applies_like_filter() {
    let catalog = Catalog::builtin();
    let key = FilterKey::new("tls", "Asymmetric");
    assert_eq!(key.apply(catalog), filter(catalog, "tls", "Asymmetric"));
    assert_eq!(FilterKey::default(), FilterKey::new("", ALL));
}

#[test]
fn works_on_external_catalogs() {
    let catalog = catalog_of(&[
        ("Blowfish", "Symmetric Encryption"),
        ("Ed25519", "Asymmetric Encryption & Digital Signatures"),
        ("Poly1305", "Message Authentication Code"),
    ]);
    assert_eq!(names(&filter(&catalog, "", "Symmetric")), vec!["Blowfish"]);
    assert_eq!(names(&filter(&catalog, "TESTING", ALL)).len(), 3);
    assert_eq!(names(&filter(&catalog, "ed2", ALL)), vec!["Ed25519"]);
}
