use std::env;
use std::process::Command;

/// Options derived from the host machine used to configure cargo commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub features: Vec<String>,
    pub rustflags: Option<String>,
}

impl BuildConfig {
    /// Join features into a single string suitable for passing to cargo.
    pub fn features_arg(&self) -> Option<String> {
        if self.features.is_empty() {
            None
        } else {
            Some(self.features.join(" "))
        }
    }
}

/// Detect build configuration from the current machine.
pub fn detect_config() -> BuildConfig {
    let nproc = detect_nproc();
    let extra = env::var("SRFFT_FEATURES").unwrap_or_default();
    let native = env::var("SRFFT_NATIVE").map(|v| v == "1").unwrap_or(false);
    compute_config(nproc, &extra, native)
}

fn detect_nproc() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Compute a [`BuildConfig`] from supplied inputs. This is separated for testing.
pub fn compute_config(nproc: usize, extra: &str, native: bool) -> BuildConfig {
    let mut features = Vec::new();

    // Batch transforms only benefit from rayon with more than one core.
    if nproc > 1 {
        features.push("parallel".to_string());
    }

    for feat in extra.split_whitespace() {
        if !features.iter().any(|f| f == feat) {
            features.push(feat.to_string());
        }
    }

    let rustflags = native.then(|| "-C target-cpu=native".to_string());

    BuildConfig {
        features,
        rustflags,
    }
}

fn cargo_with_features(subcommand: &str, cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.arg(subcommand);
    if let Some(f) = cfg.features_arg() {
        cmd.arg("--features").arg(f);
    }
    cmd
}

pub fn build_command(cfg: &BuildConfig) -> Command {
    cargo_with_features("build", cfg)
}

pub fn test_command(cfg: &BuildConfig) -> Command {
    cargo_with_features("test", cfg)
}

/// Runs the test suite once more without the `std` feature.
pub fn test_no_std_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["test", "--lib", "--no-default-features"]);
    cmd
}

pub fn clippy_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["clippy", "--all-targets", "--all-features"]);
    cmd
}

pub fn fmt_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["fmt", "--all"]);
    cmd
}

/// Criterion comparison against rustfft and realfft.
pub fn bench_command(cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    if let Some(rf) = &cfg.rustflags {
        cmd.env("RUSTFLAGS", rf);
    }
    cmd.args(["bench", "--manifest-path", "srfft-bench/Cargo.toml"]);
    if cfg.features.iter().any(|f| f == "parallel") {
        cmd.arg("--features").arg("parallel");
    }
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(cmd: &Command) -> Vec<String> {
        cmd.get_args()
            .map(|a| a.to_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_single_core_has_no_parallel() {
        let cfg = compute_config(1, "", false);
        assert!(cfg.features.is_empty());
        assert_eq!(cfg.features_arg(), None);
        assert_eq!(cfg.rustflags, None);
    }

    #[test]
    fn test_extra_features_are_deduplicated() {
        let cfg = compute_config(4, "parallel verbose-logging  parallel", false);
        assert_eq!(cfg.features, vec!["parallel", "verbose-logging"]);
        assert_eq!(
            cfg.features_arg().as_deref(),
            Some("parallel verbose-logging")
        );
    }

    #[test]
    fn test_commands_include_features() {
        let cfg = compute_config(2, "verbose-logging", false);
        let build = args(&build_command(&cfg));
        assert_eq!(build[0], "build");
        assert!(build.contains(&"--features".to_string()));
        assert!(build.iter().any(|a| a.contains("verbose-logging")));
        assert_eq!(args(&test_command(&cfg))[0], "test");
    }

    #[test]
    fn test_bench_env() {
        let cfg = compute_config(2, "", true);
        let cmd = bench_command(&cfg);
        let envs: Vec<_> = cmd
            .get_envs()
            .map(|(k, v)| {
                (
                    k.to_str().unwrap().to_string(),
                    v.unwrap().to_str().unwrap().to_string(),
                )
            })
            .collect();
        assert!(envs
            .iter()
            .any(|(k, v)| k == "RUSTFLAGS" && v.contains("target-cpu=native")));
        let a = args(&cmd);
        assert!(a.contains(&"srfft-bench/Cargo.toml".to_string()));
        assert!(a.contains(&"parallel".to_string()));
    }

    #[test]
    fn test_other_commands() {
        assert!(clippy_command().get_args().any(|a| a == "clippy"));
        assert!(fmt_command().get_args().any(|a| a == "fmt"));
        assert!(test_no_std_command()
            .get_args()
            .any(|a| a == "--no-default-features"));
    }

    #[test]
    fn test_detect_config() {
        let cfg = detect_config();
        assert!(detect_nproc() >= 1);
        if detect_nproc() > 1 {
            assert!(cfg.features.iter().any(|f| f == "parallel"));
        }
    }
}
