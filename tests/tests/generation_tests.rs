//! Per-scheme generation against the fixture template directory

use std::io;
use std::path::Path;

use coregen_api::Error;
use coregen_generator::tokens::find_placeholder;
use coregen_generator::{dispatch, FileSystem, GeneratedScheme, Generator, MemoryFs};
use coregen_params::{CATALOG_SIZE, SchemeKind};
use coregen_tests::{fixture_config, rom_body, seeded_fs, BN_PAIRING_CODE, CURVE_A_ZERO_CODE};

fn generate(fs: &dyn FileSystem, id: u32) -> coregen_api::Result<GeneratedScheme> {
    let config = fixture_config();
    let generator = Generator::new(&config, fs);
    dispatch(id)?.run(&generator)
}

fn main_file(fs: &MemoryFs, scheme: &str, file: &str) -> String {
    let path = fixture_config().scheme_main_dir(scheme).join(file);
    fs.get(&path)
        .unwrap_or_else(|| panic!("{} was not generated", path.display()))
}

fn has_main_file(fs: &MemoryFs, scheme: &str, file: &str) -> bool {
    fs.is_file(&fixture_config().scheme_main_dir(scheme).join(file))
}

fn has_test_file(fs: &MemoryFs, scheme: &str, file: &str) -> bool {
    fs.is_file(&fixture_config().scheme_test_dir(scheme).join(file))
}

fn enabled_region(code: &str) -> String {
    format!("/* */\n{code}\n/* */")
}

fn disabled_region(code: &str) -> String {
    format!("/* \n{code}\n */")
}

#[test]
fn test_ed25519() {
    let fs = seeded_fs();
    let out = generate(&fs, 1).unwrap();
    assert_eq!(out.name, "ED25519");
    assert_eq!(out.kind, SchemeKind::Curve);

    let big = main_file(&fs, "ED25519", "CONFIG_BIG.java");
    assert!(big.starts_with("package org.miracl.core.ED25519;"));
    assert!(big.contains("MODBYTES=32;"));
    assert!(big.contains("BASEBITS=56;"));

    let field = main_file(&fs, "ED25519", "CONFIG_FIELD.java");
    assert!(field.contains("MODBITS=255;"));
    assert!(field.contains("MODTYPE=PSEUDO_MERSENNE;"));
    assert!(field.contains("FEXCESS=((int)1<<25);"));
    assert!(field.contains("RIADZG2A=0;"));
    assert!(field.contains("TOWER=NEGATOWER;"));

    let curve = main_file(&fs, "ED25519", "CONFIG_CURVE.java");
    assert!(curve.contains("CURVETYPE=EDWARDS;"));
    assert!(curve.contains("CURVE_A=-1;"));
    assert!(curve.contains("CURVE_PAIRING_TYPE=NOT;"));
    assert!(curve.contains("G2_TABLE=NOT;"));
    assert!(curve.contains("HASH_TYPE=32;"));
    assert!(curve.contains("AESKEY=16;"));

    assert!(main_file(&fs, "ED25519", "ECP.java").contains(&disabled_region(CURVE_A_ZERO_CODE)));
    assert_eq!(main_file(&fs, "ED25519", "ROM.java"), rom_body("ED25519"));
    assert!(has_main_file(&fs, "ED25519", "BIG.java"));
    assert!(has_test_file(&fs, "ED25519", "TestECDH.java"));

    for absent in ["FP2.java", "FP4.java", "PAIR.java", "FP12.java", "MPIN.java"] {
        assert!(!has_main_file(&fs, "ED25519", absent), "{absent}");
    }
}

#[test]
fn test_bn254() {
    let fs = seeded_fs();
    let out = generate(&fs, 26).unwrap();
    assert_eq!(out.kind, SchemeKind::PairingCurve);

    for file in ["FP2.java", "FP4.java", "ECP2.java", "FP12.java", "PAIR.java", "MPIN.java", "BLS.java"] {
        assert!(has_main_file(&fs, "BN254", file), "{file}");
    }
    for file in ["TestMPIN.java", "TestBLS.java", "TesttimeMPIN.java"] {
        assert!(has_test_file(&fs, "BN254", file), "{file}");
    }
    assert!(!has_main_file(&fs, "BN254", "FP24.java"));

    let pair = main_file(&fs, "BN254", "PAIR.java");
    assert!(pair.contains(&enabled_region(BN_PAIRING_CODE)));
    assert!(!pair.contains("PFBNS"));
    assert!(main_file(&fs, "BN254", "ECP.java").contains(&enabled_region(CURVE_A_ZERO_CODE)));

    let curve = main_file(&fs, "BN254", "CONFIG_CURVE.java");
    assert!(curve.contains("CURVE_PAIRING_TYPE=BN;"));
    assert!(curve.contains("SEXTIC_TWIST=D_TYPE;"));
    assert!(curve.contains("SIGN_OF_X=NEGATIVEX;"));
    assert!(curve.contains("ATE_BITS=66;"));
    assert!(curve.contains("G2_TABLE=71;"));
    assert!(main_file(&fs, "BN254", "CONFIG_FIELD.java").contains("RIADZG2A=-1;"));
}

#[test]
fn test_bls12_uses_generic_pairing() {
    let fs = seeded_fs();
    generate(&fs, 29).unwrap();
    let pair = main_file(&fs, "BLS12381", "PAIR.java");
    assert!(pair.contains(&disabled_region(BN_PAIRING_CODE)));
}

#[test]
fn test_bls48_tower() {
    let fs = seeded_fs();
    generate(&fs, 36).unwrap();
    for file in ["FP2.java", "FP8.java", "FP16.java", "FP48.java", "PAIR8.java", "BLS256.java"] {
        assert!(has_main_file(&fs, "BLS48581", file), "{file}");
    }
    assert!(!has_main_file(&fs, "BLS48581", "PAIR.java"));

    let field = main_file(&fs, "BLS48581", "CONFIG_FIELD.java");
    assert!(field.contains("QNRI=0;"));
    assert!(field.contains("TOWER=POSITOWER;"));
    assert!(main_file(&fs, "BLS48581", "CONFIG_CURVE.java").contains("HASH_TYPE=64;"));
}

#[test]
fn test_rsa2048() {
    let fs = seeded_fs();
    let out = generate(&fs, 38).unwrap();
    assert_eq!(out.kind, SchemeKind::Rsa);
    assert!(main_file(&fs, "RSA2048", "CONFIG_BIG.java").contains("MODBYTES=128;"));
    assert!(main_file(&fs, "RSA2048", "CONFIG_FF.java").contains("FFLEN=2;"));
    assert!(has_test_file(&fs, "RSA2048", "TestRSA.java"));
    assert!(!has_main_file(&fs, "RSA2048", "ECP.java"));
}

#[test]
fn test_every_scheme_fully_substituted() {
    let fs = seeded_fs();
    for id in 1..=CATALOG_SIZE {
        generate(&fs, id).unwrap_or_else(|e| panic!("selector {id}: {e}"));
    }
    for (path, text) in fs.files_under(&fixture_config().output_root) {
        assert!(!text.contains("XXX"), "{}", path.display());
        assert_eq!(find_placeholder(&text), None, "{}", path.display());
    }
}

#[test]
fn test_regeneration_is_identical() {
    let fs = seeded_fs();
    let root = fixture_config().output_root;
    generate(&fs, 3).unwrap();
    let first = fs.files_under(&root);
    generate(&fs, 3).unwrap();
    assert_eq!(fs.files_under(&root), first);
}

/// Delegates to a [`MemoryFs`] but fails every write to one file name
struct FailingWrites<'a> {
    inner: &'a MemoryFs,
    file: &'static str,
}

impl FileSystem for FailingWrites<'_> {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.inner.create_dir_all(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner.is_file(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.inner.read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        if path.file_name().and_then(|n| n.to_str()) == Some(self.file) {
            return Err(io::Error::other("no space left on device"));
        }
        self.inner.write(path, contents)
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        self.inner.copy(from, to)
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<String>> {
        self.inner.list_files(dir)
    }
}

#[test]
fn test_partial_write_leaves_copy_behind() {
    let fs = seeded_fs();
    let failing = FailingWrites {
        inner: &fs,
        file: "FP.java",
    };
    let err = generate(&failing, 1).unwrap_err();
    assert!(matches!(err, Error::PartialWrite { ref path, .. } if path.ends_with("FP.java")));

    // the copy happened, the substitution did not
    assert!(main_file(&fs, "ED25519", "FP.java").contains("XXX"));
    // files before the failure are complete, files after it were never written
    assert!(main_file(&fs, "ED25519", "DBIG.java").contains("ED25519"));
    assert!(!has_main_file(&fs, "ED25519", "ECP.java"));
}

#[test]
fn test_missing_template_aborts_scheme() {
    let fs = MemoryFs::new();
    let err = generate(&fs, 17).unwrap_err();
    assert!(matches!(err, Error::MissingTemplate { .. }));
    assert_eq!(err.kind(), "missing-template");
}
