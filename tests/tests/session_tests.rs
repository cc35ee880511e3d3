//! Selection sessions, from raw input to the generated tree

use coregen_api::Error;
use coregen_generator::driver::Step;
use coregen_generator::{
    run_session, FileSystem, Generator, LocalFs, MemoryFs, Orchestrator, Outcome, SelectionDriver,
    SelectionReader,
};
use coregen_params::SchemeKind;
use coregen_tests::{fixture_config, scratch_dir, seeded_fs, template_body, TEMPLATE_DIR};

#[test]
fn test_duplicate_selection_is_ignored() {
    let fs = seeded_fs();
    let config = fixture_config();
    let mut input = SelectionReader::batch("3\n3\n5\n0\n".as_bytes());
    let report = run_session(&Generator::new(&config, &fs), &mut input);

    assert_eq!(report.selection.as_slice(), &[3, 5]);
    let names: Vec<_> = report.succeeded().map(|s| s.name).collect();
    assert_eq!(names, ["NIST256", "ANSSI"]);
    assert!(report.is_success());
}

#[test]
fn test_unknown_selector_is_reported() {
    let mut driver = SelectionDriver::new();
    let step = driver.feed(41);
    assert!(matches!(step, Step::Rejected(Error::UnknownScheme { id: 41, .. })));
    assert!(driver.selection().is_empty());

    let fs = seeded_fs();
    let config = fixture_config();
    let mut input = SelectionReader::batch("41\nseven\n1\n".as_bytes());
    let report = run_session(&Generator::new(&config, &fs), &mut input);

    assert_eq!(report.selection.as_slice(), &[1]);
    let rejected: Vec<_> = report.rejected().map(Error::kind).collect();
    assert_eq!(rejected, ["unknown-scheme", "invalid-input"]);
    // rejected input is not a scheme failure
    assert!(report.is_success());
}

#[test]
fn test_input_after_sentinel_is_not_read() {
    let fs = seeded_fs();
    let config = fixture_config();
    let mut input = SelectionReader::batch("1\n0\n2\n".as_bytes());
    let report = run_session(&Generator::new(&config, &fs), &mut input);
    assert_eq!(report.selection.as_slice(), &[1]);
    assert!(!fs.is_dir(config.scheme_main_dir("C25519")));
}

#[test]
fn test_failed_scheme_does_not_stop_session() {
    let fs = seeded_fs();
    // remove the only copy of one curve's constants
    let config = fixture_config().with_template_dir("elsewhere");
    for (path, text) in fs.files_under(TEMPLATE_DIR) {
        if !path.ends_with("ROM_NIST256_64.java") {
            let name = path.file_name().unwrap().to_owned();
            fs.insert_file(std::path::Path::new("elsewhere").join(name), text);
        }
    }

    let mut input = SelectionReader::batch("3\n4\n".as_bytes());
    let report = run_session(&Generator::new(&config, &fs), &mut input);

    assert_eq!(report.selection.as_slice(), &[3, 4]);
    assert!(!report.is_success());
    let failed: Vec<_> = report.failed().map(|(id, name, e)| (id, name, e.kind())).collect();
    assert_eq!(failed, [(3, "NIST256", "missing-template")]);
    assert!(matches!(report.outcomes[1], Outcome::Generated { id: 4, .. }));
}

#[test]
fn test_orchestrated_run() {
    let fs = seeded_fs();
    let config = fixture_config();
    let mut input = SelectionReader::batch("1\n26\n38\n0\n".as_bytes());
    let report = Orchestrator::new(&config, &fs).run(&mut input).unwrap();

    assert!(report.is_success());
    assert_eq!(
        report.kinds_selected(),
        [SchemeKind::Curve, SchemeKind::PairingCurve, SchemeKind::Rsa]
    );

    assert_eq!(fs.get("core/pom.xml").as_deref(), Some("<project/>\n"));
    let main = config.main_root();
    for shared in ["HASH256.java", "HASH384.java", "HASH512.java", "GCM.java", "SHARE.java"] {
        assert!(fs.is_file(&main.join(shared)), "{shared}");
    }
    assert!(fs.is_file(&config.test_root().join("TestNHS.java")));
    for scheme in ["ED25519", "BN254", "RSA2048"] {
        assert!(fs.is_dir(config.scheme_main_dir(scheme)), "{scheme}");
        assert!(fs.is_dir(config.scheme_test_dir(scheme)), "{scheme}");
    }
}

#[test]
fn test_missing_shared_file_aborts_session() {
    let fs = MemoryFs::new();
    fs.insert_file("templates/pom.xml", "<project/>");
    let config = fixture_config();
    let mut input = SelectionReader::batch("1\n".as_bytes());
    let err = Orchestrator::new(&config, &fs).run(&mut input).unwrap_err();
    assert!(matches!(err, Error::MissingTemplate { .. }));
    assert!(!fs.is_dir(config.scheme_main_dir("ED25519")));
}

#[test]
fn test_missing_shared_test_keeps_report() {
    let fs = seeded_fs();
    let config = fixture_config().with_template_dir("elsewhere");
    for (path, text) in fs.files_under(TEMPLATE_DIR) {
        if !path.ends_with("TestNHS.java") {
            let name = path.file_name().unwrap().to_owned();
            fs.insert_file(std::path::Path::new("elsewhere").join(name), text);
        }
    }

    let mut input = SelectionReader::batch("1\n26\n0\n".as_bytes());
    let report = Orchestrator::new(&config, &fs).run(&mut input).unwrap();

    // schemes written before the closing step are still reported
    let names: Vec<_> = report.succeeded().map(|s| s.name).collect();
    assert_eq!(names, ["ED25519", "BN254"]);
    assert!(fs.is_file(&config.scheme_main_dir("ED25519").join("CONFIG_BIG.java")));

    assert!(matches!(
        report.closing_error,
        Some(Error::MissingTemplate { ref path }) if path.ends_with("TestNHS.java")
    ));
    assert_eq!(report.closing_error.as_ref().map(Error::kind), Some("missing-template"));
    assert_eq!(report.failed().count(), 0);
    assert!(!report.is_success());
    assert!(!fs.is_file(&config.test_root().join("TestNHS.java")));
}

#[test]
fn test_run_on_disk() {
    let root = scratch_dir("session");
    let templates = root.join("templates");
    std::fs::create_dir_all(&templates).unwrap();

    // copy the in-memory fixtures to disk
    for (path, text) in seeded_fs().files_under(TEMPLATE_DIR) {
        std::fs::write(templates.join(path.file_name().unwrap()), text).unwrap();
    }

    let config = fixture_config()
        .with_template_dir(&templates)
        .with_output_root(root.join("core"));
    let mut input = SelectionReader::batch("2\n0\n".as_bytes());
    let report = Orchestrator::new(&config, &LocalFs).run(&mut input).unwrap();
    assert!(report.is_success());

    let big = std::fs::read_to_string(config.scheme_main_dir("C25519").join("CONFIG_BIG.java")).unwrap();
    assert_eq!(
        big,
        template_body("CONFIG_BIG.java")
            .replace("XXX", "C25519")
            .replace("@NB@", "32")
            .replace("@BASE@", "56")
    );
    assert!(root.join("core/pom.xml").is_file());

    std::fs::remove_dir_all(&root).unwrap();
}
