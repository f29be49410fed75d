use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestProject {
    pub root: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("stacks")).unwrap();
        fs::create_dir_all(root.path().join("templates")).unwrap();
        Self { root }
    }

    pub fn write_stack(&self, file_name: &str, content: &str) {
        fs::write(self.root.path().join("stacks").join(file_name), content).unwrap();
    }

    pub fn write_template(&self, file_name: &str, content: &str) {
        fs::write(self.root.path().join("templates").join(file_name), content).unwrap();
    }

    pub fn output(&self, file_name: &str) -> PathBuf {
        self.root.path().join("output").join(file_name)
    }

    #[allow(dead_code)]
    pub fn read_output(&self, file_name: &str) -> String {
        fs::read_to_string(self.output(file_name)).unwrap()
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }
}
