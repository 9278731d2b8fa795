use std::{
    env::temp_dir,
    fs::{create_dir_all, remove_dir_all, write},
    path::{Path, PathBuf},
};

/// Scratch directory removed on drop.
pub struct TestDir {
    path: PathBuf,
}

impl TestDir {
    pub fn new(name: &str) -> Self {
        let path = temp_dir().join(format!("dist-server-{}-{name}", std::process::id()));

        let _ = remove_dir_all(&path);
        create_dir_all(&path).expect("create test dir");

        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.path.join(relative);

        if let Some(parent) = path.parent() {
            create_dir_all(parent).expect("create parent dir");
        }

        write(path, contents).expect("write test file");
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = remove_dir_all(&self.path);
    }
}
