use std::fs;
use std::path::{Path, PathBuf};

use pathspect::Charset;
use tempfile::TempDir;

pub const TRUTH: &str = "The Truth Is Out There";
pub const FRENCH_TRUTH: &str = "La Vérité Est Ailleurs";
pub const TURKISH_TRUTH: &str = "Gerçek Başka bir yerde mi";

/// Scratch tree shared by the integration tests:
///
/// ```text
/// root/
///   xfile.txt           TRUTH
///   xfile-clone.txt     TRUTH
///   xfile-french.txt    FRENCH_TRUTH (utf-8)
///   xfile.turkish       TURKISH_TRUTH (windows-1254)
///   empty.txt
///   empty-dir/
///   templates/          my_template.txt, other_template.txt, readme.md, nested/deep.txt
/// ```
pub struct Fixture {
    _temp: TempDir,
    pub root: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let root = temp.path().to_path_buf();

        fs::write(root.join("xfile.txt"), TRUTH).unwrap();
        fs::write(root.join("xfile-clone.txt"), TRUTH).unwrap();
        fs::write(root.join("xfile-french.txt"), FRENCH_TRUTH).unwrap();
        fs::write(root.join("xfile.turkish"), turkish().encode(TURKISH_TRUTH)).unwrap();
        fs::write(root.join("empty.txt"), "").unwrap();
        fs::create_dir(root.join("empty-dir")).unwrap();

        let templates = root.join("templates");
        fs::create_dir_all(templates.join("nested")).unwrap();
        for name in ["my_template.txt", "other_template.txt", "readme.md"] {
            fs::write(templates.join(name), name).unwrap();
        }
        fs::write(templates.join("nested").join("deep.txt"), "deep").unwrap();

        Self { _temp: temp, root }
    }

    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }
}

pub fn turkish() -> Charset {
    Charset::for_label("windows-1254").unwrap()
}
