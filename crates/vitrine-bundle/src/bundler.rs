//! The compilation step behind the orchestrator.

use crate::error::{BundleError, Result};
use crate::target::BuildTarget;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Output of one bundling run, held in memory until the orchestrator
/// commits it to disk.
#[derive(Debug, Clone)]
pub struct BundleOutput {
    /// The self-contained script. Exposes the target's initializer as
    /// a global and has no module exports of its own.
    pub script: String,
    /// Co-located stylesheet, when the entry module pulled styles in.
    pub stylesheet: Option<String>,
}

/// A compiler that turns an entry module into a standalone script.
///
/// Vitrine never implements bundling itself; implementations wrap an
/// external toolchain. Returning output in memory lets the
/// orchestrator finish every fallible step before touching the
/// target directory.
#[async_trait]
pub trait Bundler: Send + Sync {
    /// Compile the target's entry module.
    ///
    /// The returned script must be safe to embed via a plain script
    /// tag and must not include any module from `target.externals`;
    /// those are resolved against the host-page globals in the map.
    async fn bundle(&self, target: &BuildTarget) -> Result<BundleOutput>;
}

/// Bundler that drives an external bundler executable.
///
/// The child writes into a scratch directory, and the results are
/// read back into memory; the real output directory is only written
/// by the orchestrator after the whole compilation has succeeded.
#[derive(Debug, Clone)]
pub struct CommandBundler {
    program: String,
    extra_args: Vec<String>,
}

impl CommandBundler {
    /// Bundler driving the named executable with the default
    /// argument shape (see [`CommandBundler::esbuild`]).
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            extra_args: Vec::new(),
        }
    }

    /// The default toolchain: esbuild producing an IIFE bundle with
    /// the runtime libraries externalized.
    pub fn esbuild() -> Self {
        Self::new("esbuild")
    }

    /// Append extra arguments to every invocation, e.g. toolchain
    /// flags that map externalized modules onto host globals.
    pub fn with_args(mut self, args: &[&str]) -> Self {
        self.extra_args.extend(args.iter().map(|a| a.to_string()));
        self
    }

    fn args_for(&self, target: &BuildTarget, scratch: &std::path::Path) -> Vec<String> {
        let stem = target
            .bundle_file
            .strip_suffix(".js")
            .unwrap_or(&target.bundle_file);
        let mut args = vec![
            target.entry.display().to_string(),
            "--bundle".to_string(),
            "--format=iife".to_string(),
            format!("--outdir={}", scratch.display()),
            format!("--entry-names={stem}"),
        ];
        for module in target.externals.keys() {
            args.push(format!("--external:{module}"));
        }
        args.extend(self.extra_args.iter().cloned());
        args
    }
}

#[async_trait]
impl Bundler for CommandBundler {
    async fn bundle(&self, target: &BuildTarget) -> Result<BundleOutput> {
        let scratch = tempfile::tempdir()?;
        let args = self.args_for(target, scratch.path());

        debug!(
            program = %self.program,
            entry = %target.entry.display(),
            "Running bundler"
        );

        let output = Command::new(&self.program)
            .args(&args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| BundleError::BundlerSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(BundleError::BundlerFailed {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let script = tokio::fs::read_to_string(scratch.path().join(&target.bundle_file)).await?;
        let stylesheet =
            match tokio::fs::read_to_string(scratch.path().join(&target.stylesheet_file)).await {
                Ok(css) => Some(css),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
                Err(err) => return Err(err.into()),
            };

        Ok(BundleOutput { script, stylesheet })
    }
}
