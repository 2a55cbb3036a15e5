//! Integration tests for oc-release

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    pub(crate) fn oc_release() -> Command {
        let mut cmd = cargo_bin_cmd!("oc-release");
        for var in [
            "OC_RELEASE_CONFIG",
            "OC_RELEASE_IMAGE",
            "OC_RELEASE_IMAGE_MIRROR",
            "OC_RELEASE_PULL_SECRET",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    #[test]
    fn help_displays() {
        oc_release()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("OpenShift release metadata resolver"));
    }

    #[test]
    fn version_displays() {
        oc_release()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("oc-release"));
    }

    #[test]
    fn missing_release_image() {
        let temp = TempDir::new().unwrap();
        oc_release()
            .arg("--config")
            .arg(temp.path().join("config.toml"))
            .arg("mco-image")
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "neither releaseImage, nor releaseImageMirror are provided",
            ))
            .stderr(predicate::str::contains("--release-image or --mirror"));
    }

    #[test]
    fn missing_pull_secret() {
        let temp = TempDir::new().unwrap();
        oc_release()
            .arg("--config")
            .arg(temp.path().join("config.toml"))
            .args(["--release-image", "quay.io/ocp/release:4.6", "version"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No pull secret provided"));
    }

    #[test]
    fn invalid_platform_rejected() {
        oc_release()
            .args(["extract", "--platform", "aws"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid value"));
    }

    #[test]
    fn config_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        oc_release()
            .arg("--config")
            .arg(&path)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("custom.toml"));
    }

    #[test]
    fn config_show() {
        let temp = TempDir::new().unwrap();
        oc_release()
            .arg("--config")
            .arg(temp.path().join("config.toml"))
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[general]"))
            .stdout(predicate::str::contains("oc_binary = \"oc\""));
    }

    #[test]
    fn config_init_writes_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");
        oc_release()
            .arg("--config")
            .arg(&path)
            .args(["config", "init"])
            .assert()
            .success();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("max_tries = 5"));

        oc_release()
            .arg("--config")
            .arg(&path)
            .args(["config", "init"])
            .assert()
            .success()
            .stdout(predicate::str::contains("already exists"));
    }

    #[test]
    fn invalid_config_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[release\n").unwrap();
        oc_release()
            .arg("--config")
            .arg(&path)
            .args(["config", "show"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"));
    }

    #[test]
    fn status_reports_missing_oc() {
        let temp = TempDir::new().unwrap();
        oc_release()
            .arg("--config")
            .arg(temp.path().join("config.toml"))
            .args(["--oc-binary", "/nonexistent/oc", "status"])
            .assert()
            .success()
            .stdout(predicate::str::contains("/nonexistent/oc"))
            .stdout(predicate::str::contains("not found"));
    }
}

#[cfg(unix)]
mod fake_oc_tests {
    use super::cli_tests::oc_release;
    use assert_cmd::Command;
    use oc_release::config::Config;
    use predicates::prelude::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const RELEASE: &str = "quay.io/openshift-release-dev/ocp-release:4.6.0-x86_64";
    const MIRROR: &str = "registry.local:5000/ocp/release:4.6.0-x86_64";
    const PULL_SECRET: &str = r#"{"auths":{"quay.io":{"auth":"dGVzdA=="}}}"#;

    /// Records every call, the registry config it was handed and that
    /// file's contents, then answers like oc would.
    const SCRIPT: &str = r#"#!/bin/sh
dir="$(dirname "$0")"
log="$dir/calls.log"
name=""
for arg in "$@"; do
  case "$arg" in
    --registry-config=*)
      f="${arg#--registry-config=}"
      echo "path:$f" >> "$log"
      echo "secret:$(cat "$f")" >> "$log"
      ;;
    --image-for=*)
      name="${arg#--image-for=}"
      ;;
  esac
done
echo "args:$*" >> "$log"
case "$*" in
  *"adm release info --image-for"*)
    echo "quay.io/ocp/$name@sha256:abc"
    ;;
  *"adm release info -o template"*)
    echo "'4.6.0-0.nightly-2020-08-31-220837'"
    ;;
  *"image info --show-multiarch"*)
    echo '[{"config":{"architecture":"amd64"}},{"config":{"architecture":"arm64"}},{"config":{"architecture":"amd64"}}]'
    ;;
  *"image info"*)
    echo '{"config":{"architecture":"amd64"}}'
    ;;
  *"adm release extract"*)
    failures="$dir/extract-failures"
    if [ -f "$failures" ]; then
      n="$(cat "$failures")"
      if [ "$n" -gt 0 ]; then
        echo $((n - 1)) > "$failures"
        echo "error: unable to extract" >&2
        exit 1
      fi
    fi
    ;;
  *"version --client"*)
    echo "Client Version: 4.6.0"
    ;;
  *)
    echo "unexpected: $*" >&2
    exit 2
    ;;
esac
"#;

    struct FakeOc {
        dir: TempDir,
    }

    impl FakeOc {
        fn new(max_tries: u32) -> Self {
            let dir = TempDir::new().unwrap();
            let oc = dir.path().join("oc");
            std::fs::write(&oc, SCRIPT).unwrap();
            std::fs::set_permissions(&oc, std::fs::Permissions::from_mode(0o755)).unwrap();
            std::fs::write(dir.path().join("pull-secret.json"), PULL_SECRET).unwrap();
            std::fs::create_dir(dir.path().join("tmp")).unwrap();

            let mut config = Config::default();
            config.release.oc_binary = oc.display().to_string();
            config.release.max_tries = max_tries;
            config.release.retry_delay_secs = 0;
            config.release.cache_dir = dir.path().join("cache");
            config.release.pull_secret_file = Some(dir.path().join("pull-secret.json"));
            config.release.temp_dir = Some(dir.path().join("tmp"));
            std::fs::write(
                dir.path().join("config.toml"),
                toml::to_string_pretty(&config).unwrap(),
            )
            .unwrap();

            Self { dir }
        }

        fn path(&self) -> &Path {
            self.dir.path()
        }

        fn fail_extractions(&self, times: u32) {
            std::fs::write(self.path().join("extract-failures"), times.to_string()).unwrap();
        }

        fn command(&self) -> Command {
            let mut cmd = oc_release();
            cmd.arg("--config").arg(self.path().join("config.toml"));
            cmd
        }

        fn log_lines(&self, prefix: &str) -> Vec<String> {
            std::fs::read_to_string(self.path().join("calls.log"))
                .unwrap_or_default()
                .lines()
                .filter_map(|l| l.strip_prefix(prefix))
                .map(str::to_string)
                .collect()
        }

        fn calls(&self) -> Vec<String> {
            self.log_lines("args:")
        }

        fn assert_secrets_handled(&self) {
            let paths: Vec<PathBuf> = self
                .log_lines("path:")
                .into_iter()
                .map(PathBuf::from)
                .collect();
            assert!(!paths.is_empty());
            for path in &paths {
                assert!(path.starts_with(self.path().join("tmp")));
                assert!(!path.exists(), "{} should be removed", path.display());
            }
            for secret in self.log_lines("secret:") {
                assert_eq!(secret, PULL_SECRET);
            }
        }
    }

    #[test]
    fn mco_image_from_release_image() {
        let oc = FakeOc::new(5);
        oc.command()
            .args(["--release-image", RELEASE, "mco-image"])
            .assert()
            .success()
            .stdout("quay.io/ocp/machine-config-operator@sha256:abc\n");

        let calls = oc.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].starts_with(&format!(
            "adm release info --image-for=machine-config-operator --insecure=false {} --registry-config=",
            RELEASE
        )));
        oc.assert_secrets_handled();
    }

    #[test]
    fn must_gather_image_prefers_mirror() {
        let oc = FakeOc::new(5);
        oc.command()
            .args(["--release-image", RELEASE, "--mirror", MIRROR, "must-gather-image"])
            .assert()
            .success()
            .stdout("quay.io/ocp/must-gather@sha256:abc\n");

        assert!(oc.calls()[0].contains(&format!("--insecure=true {}", MIRROR)));
        oc.assert_secrets_handled();
    }

    #[test]
    fn named_image() {
        let oc = FakeOc::new(5);
        oc.command()
            .args(["--release-image", RELEASE, "image", "cli"])
            .assert()
            .success()
            .stdout("quay.io/ocp/cli@sha256:abc\n");
    }

    #[test]
    fn version_strips_quotes() {
        let oc = FakeOc::new(5);
        oc.command()
            .args(["--release-image", RELEASE, "version"])
            .assert()
            .success()
            .stdout("4.6.0-0.nightly-2020-08-31-220837\n");

        let calls = oc.calls();
        assert!(calls[0].starts_with(
            "adm release info -o template --template '{{.metadata.version}}' --insecure=false"
        ));
        oc.assert_secrets_handled();
    }

    #[test]
    fn major_minor() {
        let oc = FakeOc::new(5);
        oc.command()
            .args(["--mirror", MIRROR, "major-minor"])
            .assert()
            .success()
            .stdout("4.6\n");
    }

    #[test]
    fn architecture_is_normalized() {
        let oc = FakeOc::new(5);
        oc.command()
            .args(["--release-image", RELEASE, "arch"])
            .assert()
            .success()
            .stdout("x86_64\n");

        assert!(oc.calls()[0].starts_with(&format!("image info --output json {}", RELEASE)));
    }

    #[test]
    fn all_architectures() {
        let oc = FakeOc::new(5);
        oc.command()
            .args(["--release-image", RELEASE, "arch", "--all"])
            .assert()
            .success()
            .stdout("x86_64\narm64\n");
    }

    #[test]
    fn extract_installer() {
        let oc = FakeOc::new(5);
        let workdir = oc.path().join("cache").join(RELEASE);
        oc.command()
            .args(["--release-image", RELEASE, "extract"])
            .assert()
            .success()
            .stdout(format!(
                "{}\n",
                workdir.join("openshift-baremetal-install").display()
            ));

        assert!(workdir.is_dir());
        let calls = oc.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].starts_with(&format!(
            "adm release extract --command=openshift-baremetal-install --to={} --insecure=false {}",
            workdir.display(),
            RELEASE
        )));
        oc.assert_secrets_handled();
    }

    #[test]
    fn extract_platform_none_with_cache_dir_flag() {
        let oc = FakeOc::new(5);
        let cache = oc.path().join("elsewhere");
        oc.command()
            .args(["--mirror", MIRROR, "extract", "--platform", "none", "--cache-dir"])
            .arg(&cache)
            .assert()
            .success()
            .stdout(predicate::str::ends_with("openshift-install\n"));

        assert!(cache.join(MIRROR).is_dir());
        assert!(oc.calls()[0].contains("--command=openshift-install "));
    }

    #[test]
    fn extract_retries_until_success() {
        let oc = FakeOc::new(3);
        oc.fail_extractions(2);
        oc.command()
            .args(["--release-image", RELEASE, "extract"])
            .assert()
            .success();

        assert_eq!(oc.calls().len(), 3);
        oc.assert_secrets_handled();
    }

    #[test]
    fn extract_gives_up_after_max_tries() {
        let oc = FakeOc::new(2);
        oc.fail_extractions(10);
        oc.command()
            .args(["--release-image", RELEASE, "extract"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("exited with non-zero exit code 1"))
            .stderr(predicate::str::contains("unable to extract"));

        assert_eq!(oc.calls().len(), 2);
        oc.assert_secrets_handled();
    }

    #[test]
    fn status_with_fake_oc() {
        let oc = FakeOc::new(5);
        oc.command()
            .args(["--release-image", RELEASE, "status"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Client Version: 4.6.0"))
            .stdout(predicate::str::contains("All critical checks passed"));
    }
}
