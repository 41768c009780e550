//! Environment probes for the native utility-class framework.

use std::path::{Path, PathBuf};

/// Detects whether the native utility-class framework is available.
///
/// Implementations must not query the [`StyleContext`](super::StyleContext)
/// they are installed in.
pub trait Prober: Send + Sync {
    fn detect(&self) -> bool;
}

impl<F> Prober for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn detect(&self) -> bool {
        self()
    }
}

/// A prober with a fixed answer.
///
/// Server-rendered and embedded targets have nothing to probe and use
/// [`ConstantProber::absent`], which forces the precompiled bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantProber(pub bool);

impl ConstantProber {
    pub fn absent() -> Self {
        ConstantProber(false)
    }

    pub fn present() -> Self {
        ConstantProber(true)
    }
}

impl Default for ConstantProber {
    fn default() -> Self {
        Self::absent()
    }
}

impl Prober for ConstantProber {
    fn detect(&self) -> bool {
        self.0
    }
}

/// Config file names that mark a project as building with the utility framework.
pub const TAILWIND_CONFIG_FILES: &[&str] = &[
    "tailwind.config.js",
    "tailwind.config.cjs",
    "tailwind.config.mjs",
    "tailwind.config.ts",
];

/// Reports the framework present when the project root carries its config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailwindConfigProber {
    root: PathBuf,
}

impl TailwindConfigProber {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The first config file found under the root, if any.
    pub fn config_path(&self) -> Option<PathBuf> {
        TAILWIND_CONFIG_FILES
            .iter()
            .map(|name| self.root.join(name))
            .find(|path| path.is_file())
    }
}

impl Prober for TailwindConfigProber {
    fn detect(&self) -> bool {
        match self.config_path() {
            Some(path) => {
                log::debug!("native framework config found at {}", path.display());
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_prober() {
        assert!(!ConstantProber::default().detect());
        assert!(ConstantProber::present().detect());
    }

    #[test]
    fn test_closure_prober() {
        let prober = || true;
        assert!(prober.detect());
    }

    #[test]
    fn test_tailwind_config_prober() {
        let dir = tempfile::tempdir().unwrap();
        let prober = TailwindConfigProber::new(dir.path());
        assert!(!prober.detect());

        std::fs::write(dir.path().join("tailwind.config.ts"), "export default {}").unwrap();
        assert!(prober.detect());
        assert_eq!(
            prober.config_path(),
            Some(dir.path().join("tailwind.config.ts"))
        );
    }

    #[test]
    fn test_tailwind_config_prober_ignores_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("tailwind.config.js")).unwrap();
        assert!(!TailwindConfigProber::new(dir.path()).detect());
    }
}
