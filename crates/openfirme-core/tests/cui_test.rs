//! CUI normalization tests through the public API

use openfirme_core::{normalize_cui, OpenFirmeError, CODE_INVALID_CUI};

#[test]
fn normalization_keeps_digits_only() {
    for (input, expected) in [
        ("12345678", "12345678"),
        ("RO12345678", "12345678"),
        ("ro-12 34 56 78", "12345678"),
        ("cui: 99", "99"),
    ] {
        assert_eq!(normalize_cui(input).unwrap(), expected, "input {input:?}");
    }
}

#[test]
fn out_of_range_inputs_fail_validation() {
    for input in ["", "1", "RO1", "12345678901", "no digits here"] {
        let err = normalize_cui(input).unwrap_err();
        match err {
            OpenFirmeError::Validation { code, message } => {
                assert_eq!(code, CODE_INVALID_CUI);
                assert!(!message.is_empty());
            }
            other => panic!("input {input:?} produced {other:?}"),
        }
    }
}
