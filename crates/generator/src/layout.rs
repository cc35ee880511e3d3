//! Template file sets of the Java (64-bit word) target
//!
//! Template names may contain the name token; it is replaced with the scheme
//! name before the template is looked up (`ROM_XXX_64.java` becomes
//! `ROM_ED25519_64.java`).

use crate::features::{ModuleSet, RegionState};
use crate::tokens;

/// Which per-scheme tree a file is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tree {
    Main,
    Test,
}

/// One template copied into a scheme directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile {
    pub template: &'static str,
    pub output: &'static str,
    pub tree: Tree,
    /// Whether placeholder tokens are substituted after the copy
    pub substitute: bool,
}

impl TemplateFile {
    /// Template file name for the given scheme
    pub fn template_name(&self, scheme: &str) -> String {
        self.template.replace(tokens::NAME, scheme)
    }
}

const fn main(template: &'static str, output: &'static str) -> TemplateFile {
    TemplateFile {
        template,
        output,
        tree: Tree::Main,
        substitute: true,
    }
}

const fn same(name: &'static str) -> TemplateFile {
    main(name, name)
}

const fn test(name: &'static str) -> TemplateFile {
    TemplateFile {
        template: name,
        output: name,
        tree: Tree::Test,
        substitute: true,
    }
}

/// Files every curve gets
pub const CURVE_FILES: &[TemplateFile] = &[
    same("CONFIG_BIG.java"),
    same("CONFIG_FIELD.java"),
    same("CONFIG_CURVE.java"),
    main("BIG64.java", "BIG.java"),
    main("DBIG64.java", "DBIG.java"),
    main("FP64.java", "FP.java"),
    same("ECP.java"),
    same("ECDH.java"),
    same("HPKE.java"),
    // curve constants are generated per curve and carry no placeholders
    TemplateFile {
        template: "ROM_XXX_64.java",
        output: "ROM.java",
        tree: Tree::Main,
        substitute: false,
    },
    test("TestECDH.java"),
    test("TestHPKE.java"),
    test("TestHTP.java"),
    test("TesttimeECDH.java"),
];

const QUADRATIC_FILES: &[TemplateFile] = &[same("FP2.java"), same("FP4.java")];

const DEGREE12_FILES: &[TemplateFile] = &[
    same("ECP2.java"),
    same("FP12.java"),
    same("PAIR.java"),
    same("MPIN.java"),
    same("BLS.java"),
    test("TestMPIN.java"),
    test("TestHTP2.java"),
    test("TestBLS.java"),
    test("TesttimeMPIN.java"),
];

const DEGREE24_FILES: &[TemplateFile] = &[
    same("ECP4.java"),
    same("FP8.java"),
    same("FP24.java"),
    same("PAIR4.java"),
    same("MPIN192.java"),
    same("BLS192.java"),
    test("TestMPIN192.java"),
    test("TestBLS192.java"),
    test("TesttimeMPIN192.java"),
];

const DEGREE48_FILES: &[TemplateFile] = &[
    same("FP8.java"),
    same("ECP8.java"),
    same("FP16.java"),
    same("FP48.java"),
    same("PAIR8.java"),
    same("MPIN256.java"),
    same("BLS256.java"),
    test("TestMPIN256.java"),
    test("TestBLS256.java"),
    test("TesttimeMPIN256.java"),
];

/// Files every RSA modulus gets
pub const RSA_FILES: &[TemplateFile] = &[
    same("CONFIG_BIG.java"),
    same("CONFIG_FF.java"),
    main("BIG64.java", "BIG.java"),
    main("DBIG64.java", "DBIG.java"),
    main("FF64.java", "FF.java"),
    same("RSA.java"),
    same("private_key.java"),
    same("public_key.java"),
    test("TestRSA.java"),
    test("TesttimeRSA.java"),
];

/// Files required by a module group
pub const fn module_files(set: ModuleSet) -> &'static [TemplateFile] {
    match set {
        ModuleSet::QuadraticExtension => QUADRATIC_FILES,
        ModuleSet::Degree12 => DEGREE12_FILES,
        ModuleSet::Degree24 => DEGREE24_FILES,
        ModuleSet::Degree48 => DEGREE48_FILES,
    }
}

/// Build descriptor copied once into the output root
pub const BUILD_FILE: &str = "pom.xml";

/// Scheme-independent sources copied once into the main root; `*` matches
/// any run of characters
pub const SHARED_FILES: &[&str] = &[
    "HASH*.java",
    "HMAC.java",
    "SHA3.java",
    "RAND.java",
    "AES.java",
    "GCM.java",
    "NHS.java",
    "SHARE.java",
];

/// Scheme-independent tests copied into the test root after the session
pub const SHARED_TEST_FILES: &[&str] = &["TestNHS.java"];

/// Block comment delimiters of a target language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentSyntax {
    pub open: &'static str,
    pub close: &'static str,
}

pub const JAVA_COMMENTS: CommentSyntax = CommentSyntax {
    open: "/*",
    close: "*/",
};

impl CommentSyntax {
    /// Text replacing a region's start and finish markers
    ///
    /// Regions ship commented out. Enabling one closes the comment at the
    /// start marker and reopens it at the finish marker; a disabled region
    /// keeps its comment and the markers are dropped.
    pub const fn render_region(self, state: RegionState) -> (&'static str, &'static str) {
        match state {
            RegionState::Enabled => (self.close, self.open),
            RegionState::Disabled => ("", ""),
        }
    }
}

/// Match a file name against a pattern with at most one `*`
pub fn matches_pattern(name: &str, pattern: &str) -> bool {
    match pattern.split_once('*') {
        None => name == pattern,
        Some((prefix, suffix)) => {
            name.len() >= prefix.len() + suffix.len()
                && name.starts_with(prefix)
                && name.ends_with(suffix)
        }
    }
}
