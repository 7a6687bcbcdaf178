use lsh::parse::Invocation;
use lsh::process::Streams;
use once_cell::sync::Lazy;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Serialise tests that read or change the process working directory.
pub fn lock_env<'a>() -> MutexGuard<'a, ()> {
    match ENV_LOCK.lock() {
        Ok(guard) => guard,
        Err(poison) => poison.into_inner(),
    }
}

/// Scratch directory that restores the original working directory on drop.
pub struct TestEnv {
    temp_dir: TempDir,
    original_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            temp_dir: tempfile::tempdir().unwrap(),
            original_dir: env::current_dir().unwrap(),
        }
    }

    pub fn root(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        env::set_current_dir(&self.original_dir).ok();
    }
}

/// In-memory stdout and stderr for builtins and launch diagnostics.
#[derive(Default)]
pub struct Capture {
    pub out: Vec<u8>,
    pub err: Vec<u8>,
}

impl Capture {
    pub fn streams(&mut self) -> Streams<'_> {
        Streams::new(&mut self.out, &mut self.err)
    }

    pub fn out_text(&self) -> String {
        String::from_utf8(self.out.clone()).unwrap()
    }

    pub fn err_text(&self) -> String {
        String::from_utf8(self.err.clone()).unwrap()
    }
}

pub fn invocation(tokens: &[&str]) -> Invocation {
    Invocation::from_tokens(tokens.iter().copied())
}

pub fn canonical_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

pub fn assert_paths_equal(lhs: &Path, rhs: &Path) {
    assert_eq!(canonical_path(lhs), canonical_path(rhs));
}
