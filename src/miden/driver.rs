//! Subprocess driver for the `miden` executable.
//!
//! # Usage
//!
//! ```ignore
//! let driver = MidenDriver::from_env();
//! let input = InputFile::new(vec![Goldilocks::ONE, Goldilocks::new(2)]);
//! let (output, hash) = driver.run("begin add end", &input)?;
//! ```

use super::stack::{InputFile, Output};
use super::{MidenError, MidenResult};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Program hash as reported by the executable.
pub type ProgramHash = Vec<u8>;

/// Environment variable naming the executable.
pub const MIDEN_BIN_ENV: &str = "MIDEN_BIN";

const DEFAULT_BINARY: &str = "miden";

const RUN_HASH_PREFIX: &str = "Executing program with hash ";
const RUN_HASH_SUFFIX: &str = "... done";
const COMPILE_HASH_PREFIX: &str = "program hash is ";

/// Runner that invokes Miden via subprocess.
#[derive(Debug, Clone)]
pub struct MidenDriver {
    binary: PathBuf,
}

impl MidenDriver {
    /// Create a driver for the executable at `binary`.
    pub fn new<P: Into<PathBuf>>(binary: P) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Create a driver from `MIDEN_BIN`, falling back to `miden` on `PATH`.
    pub fn from_env() -> Self {
        let binary = std::env::var_os(MIDEN_BIN_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BINARY));
        Self::new(binary)
    }

    /// Path of the executable.
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Check if the executable can be run.
    pub fn is_available(&self) -> bool {
        self.version().is_ok()
    }

    /// Version string reported by `miden --version`.
    pub fn version(&self) -> MidenResult<String> {
        let stdout = self.exec(&[OsStr::new("--version")])?;
        Ok(stdout.trim().to_string())
    }

    /// Compile an assembly file and return its program hash.
    pub fn compile_file(&self, assembly: &Path) -> MidenResult<ProgramHash> {
        let stdout = self.exec(&[
            OsStr::new("compile"),
            OsStr::new("--assembly"),
            assembly.as_os_str(),
        ])?;
        extract_hash(&stdout, COMPILE_HASH_PREFIX, "")
    }

    /// Compile assembly source and return its program hash.
    pub fn compile(&self, assembly: &str) -> MidenResult<ProgramHash> {
        let workdir = Workdir::new()?;
        workdir.write_assembly(assembly)?;
        self.compile_file(&workdir.assembly_path())
    }

    /// Run an assembly file on an input file, writing the output file.
    pub fn run_file(
        &self,
        assembly: &Path,
        input: &Path,
        output: &Path,
    ) -> MidenResult<ProgramHash> {
        let stdout = self.exec(&[
            OsStr::new("run"),
            OsStr::new("--assembly"),
            assembly.as_os_str(),
            OsStr::new("--input"),
            input.as_os_str(),
            OsStr::new("--output"),
            output.as_os_str(),
        ])?;
        extract_hash(&stdout, RUN_HASH_PREFIX, RUN_HASH_SUFFIX)
    }

    /// Run assembly source on `input` and return the output and program hash.
    pub fn run(&self, assembly: &str, input: &InputFile) -> MidenResult<(Output, ProgramHash)> {
        let workdir = Workdir::new()?;
        workdir.write_assembly(assembly)?;
        workdir.write_input(input)?;

        let hash = self.run_file(
            &workdir.assembly_path(),
            &workdir.input_path(),
            &workdir.output_path(),
        )?;
        let output = workdir.read_output()?;
        Ok((output, hash))
    }

    /// Prove execution of an assembly file, writing the proof and output files.
    pub fn prove_file(
        &self,
        assembly: &Path,
        input: &Path,
        proof: &Path,
        output: &Path,
    ) -> MidenResult<()> {
        self.exec(&[
            OsStr::new("prove"),
            OsStr::new("--assembly"),
            assembly.as_os_str(),
            OsStr::new("--input"),
            input.as_os_str(),
            OsStr::new("--proof"),
            proof.as_os_str(),
            OsStr::new("--output"),
            output.as_os_str(),
        ])?;
        Ok(())
    }

    /// Run the executable and return its standard output.
    fn exec(&self, args: &[&OsStr]) -> MidenResult<String> {
        tracing::debug!(binary = %self.binary.display(), ?args, "invoking miden");

        let output = Command::new(&self.binary)
            .args(args)
            .output()
            .map_err(|source| MidenError::Spawn {
                binary: self.binary.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::warn!(status = %output.status, %stderr, "miden failed");
            return Err(MidenError::Failed {
                status: output.status,
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for MidenDriver {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Temporary directory holding the files of one invocation.
///
/// Removed when dropped.
struct Workdir {
    dir: tempfile::TempDir,
}

impl Workdir {
    fn new() -> MidenResult<Self> {
        let dir = tempfile::Builder::new().prefix("miden").tempdir()?;
        Ok(Self { dir })
    }

    fn assembly_path(&self) -> PathBuf {
        self.dir.path().join("assembly.masm")
    }

    fn input_path(&self) -> PathBuf {
        self.dir.path().join("input.json")
    }

    fn output_path(&self) -> PathBuf {
        self.dir.path().join("output.json")
    }

    fn write_assembly(&self, assembly: &str) -> MidenResult<()> {
        fs::write(self.assembly_path(), assembly)?;
        Ok(())
    }

    fn write_input(&self, input: &InputFile) -> MidenResult<()> {
        fs::write(self.input_path(), serde_json::to_vec(input)?)?;
        Ok(())
    }

    fn read_output(&self) -> MidenResult<Output> {
        let data = fs::read(self.output_path())?;
        Ok(serde_json::from_slice(&data)?)
    }
}

/// Find the first line starting with `prefix` and return the remainder,
/// cut at the last occurrence of `suffix` when `suffix` is non-empty.
fn extract_line<'a>(stdout: &'a str, prefix: &str, suffix: &str) -> Option<&'a str> {
    let line = stdout.lines().find_map(|line| line.strip_prefix(prefix))?;
    if suffix.is_empty() {
        return Some(line.trim_end());
    }
    Some(match line.rfind(suffix) {
        Some(end) => &line[..end],
        None => line.trim_end(),
    })
}

fn extract_hash(stdout: &str, prefix: &str, suffix: &str) -> MidenResult<ProgramHash> {
    let hex_hash = extract_line(stdout, prefix, suffix).ok_or(MidenError::HashNotFound)?;
    let hash = hex::decode(hex_hash)?;
    tracing::info!(hash = hex_hash, "miden program hash");
    Ok(hash)
}
