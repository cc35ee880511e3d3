//! Fixtures for the coregen integration tests
//!
//! The fixtures build a miniature template directory in a [`MemoryFs`]. Each
//! template carries the placeholders its real counterpart would, so a full
//! generation run exercises every token of a scheme.

use std::path::{Path, PathBuf};

use coregen_generator::layout::{self, TemplateFile};
use coregen_generator::{GeneratorConfig, MemoryFs, ModuleSet};
use coregen_params::{Scheme, CATALOG};

pub const TEMPLATE_DIR: &str = "templates";

const MODULE_SETS: [ModuleSet; 4] = [
    ModuleSet::QuadraticExtension,
    ModuleSet::Degree12,
    ModuleSet::Degree24,
    ModuleSet::Degree48,
];

/// Body of the A = 0 code in the `ECP` fixture
pub const CURVE_A_ZERO_CODE: &str = "\tpublic static final boolean A_IS_ZERO=true;";

/// Body of the BN code in the `PAIR` fixture
pub const BN_PAIRING_CODE: &str = "\tpublic static final boolean BN_LOOP=true;";

/// Fixture text of a template
pub fn template_body(template: &str) -> String {
    let header = "package org.miracl.core.XXX;\n\n";
    let body = match template {
        "CONFIG_BIG.java" => concat!(
            "public class CONFIG_BIG {\n",
            "\tpublic static final int MODBYTES=@NB@;\n",
            "\tpublic static final int BASEBITS=@BASE@;\n",
            "}\n",
        )
        .to_owned(),
        "CONFIG_FIELD.java" => concat!(
            "public class CONFIG_FIELD {\n",
            "\tpublic static final int MODBITS=@NBT@;\n",
            "\tpublic static final int PM1D2=@M8@;\n",
            "\tpublic static final int MODTYPE=@MT@;\n",
            "\tpublic static final int QNRI=@QI@;\n",
            "\tpublic static final int RIADZ=@RZ@;\n",
            "\tpublic static final int RIADZG2A=@RZ2@;\n",
            "\tpublic static final int TOWER=@TW@;\n",
            "\tpublic static final int FEXCESS=((int)1<<@SH@);\n",
            "}\n",
        )
        .to_owned(),
        "CONFIG_CURVE.java" => concat!(
            "public class CONFIG_CURVE {\n",
            "\tpublic static final int CURVETYPE=@CT@;\n",
            "\tpublic static final int CURVE_A=@CA@;\n",
            "\tpublic static final int CURVE_PAIRING_TYPE=@PF@;\n",
            "\tpublic static final int SEXTIC_TWIST=@ST@;\n",
            "\tpublic static final int SIGN_OF_X=@SX@;\n",
            "\tpublic static final int ATE_BITS=@AB@;\n",
            "\tpublic static final int G2_TABLE=@G2@;\n",
            "\tpublic static final int HASH_TYPE=@HT@;\n",
            "\tpublic static final int AESKEY=@AK@;\n",
            "}\n",
        )
        .to_owned(),
        "CONFIG_FF.java" => "public class CONFIG_FF {\n\tpublic static final int FFLEN=@ML@;\n}\n".to_owned(),
        "ECP.java" => format!("public final class ECP {{\n/* CAISZS\n{CURVE_A_ZERO_CODE}\nCAISZF */\n}}\n"),
        "PAIR.java" => format!("public final class PAIR {{\n/* PFBNS\n{BN_PAIRING_CODE}\nPFBNF */\n}}\n"),
        other => format!("// {other} for XXX\n"),
    };
    format!("{header}{body}")
}

/// Fixture text of a per-curve constants file
pub fn rom_body(scheme: &str) -> String {
    format!("package org.miracl.core.{scheme};\n\npublic class ROM {{\n\t// constants of {scheme}\n}}\n")
}

fn seed_files(fs: &MemoryFs, dir: &Path, files: &[TemplateFile], scheme: &str) {
    for file in files {
        let name = file.template_name(scheme);
        let body = if file.substitute {
            template_body(&name)
        } else {
            rom_body(scheme)
        };
        fs.insert_file(dir.join(name), body);
    }
}

/// Seed every template needed by every catalog scheme, plus the shared files
pub fn seed_templates(fs: &MemoryFs) {
    let dir = Path::new(TEMPLATE_DIR);
    for entry in CATALOG.iter() {
        let name = entry.scheme.name();
        match entry.scheme {
            Scheme::Curve(_) => {
                seed_files(fs, dir, layout::CURVE_FILES, name);
                for set in MODULE_SETS {
                    seed_files(fs, dir, layout::module_files(set), name);
                }
            }
            Scheme::Rsa(_) => seed_files(fs, dir, layout::RSA_FILES, name),
        }
    }

    fs.insert_file(dir.join(layout::BUILD_FILE), "<project/>\n");
    for name in [
        "HASH256.java",
        "HASH384.java",
        "HASH512.java",
        "HMAC.java",
        "SHA3.java",
        "RAND.java",
        "AES.java",
        "GCM.java",
        "NHS.java",
        "SHARE.java",
    ] {
        fs.insert_file(dir.join(name), format!("// shared {name}\n"));
    }
    for name in layout::SHARED_TEST_FILES {
        fs.insert_file(dir.join(name), format!("// shared test {name}\n"));
    }
}

/// A memory file system holding the full fixture template directory
pub fn seeded_fs() -> MemoryFs {
    let fs = MemoryFs::new();
    seed_templates(&fs);
    fs
}

/// Configuration reading the fixture templates and writing under `core`
pub fn fixture_config() -> GeneratorConfig {
    GeneratorConfig::default().with_template_dir(TEMPLATE_DIR)
}

/// A unique scratch directory under the system temp dir
pub fn scratch_dir(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!("coregen-{label}-{}", std::process::id()))
}
