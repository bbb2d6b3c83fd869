//! Pull configuration: manifest loading and flag precedence

use std::path::{Path, PathBuf};

use hubmount_cache::DEFAULT_MOUNT_ROOT;
use hubmount_fetch::ModelGroup;
use serde::Deserialize;

use crate::errors::CliError;

/// Command-line inputs for a pull run
#[derive(Debug, Clone, Default)]
pub struct PullOptions {
    /// TOML manifest listing model groups
    pub config: Option<PathBuf>,
    /// Repository id for an ad-hoc group
    pub repo: Option<String>,
    /// Ad-hoc file list in download order; the first file names the mount
    pub files: Vec<String>,
    /// Revision override for the ad-hoc group
    pub revision: Option<String>,
    /// Label override for the ad-hoc group
    pub label: Option<String>,
    /// Cache directory override
    pub cache_dir: Option<PathBuf>,
    /// Container mount root override
    pub mount_root: Option<PathBuf>,
}

/// Pull manifest, deserialized from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Container-side root used when printing mount paths
    pub mount_root: Option<PathBuf>,
    /// Explicit cache directory, overrides environment discovery
    pub cache_dir: Option<PathBuf>,
    /// Model groups to download, one `[[model]]` table each
    #[serde(rename = "model", default)]
    pub models: Vec<ModelGroup>,
}

impl Manifest {
    /// Load and parse a manifest file
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CliError::config_with_help(
                format!("cannot read manifest {}: {e}", path.display()),
                "Pass --config with a readable TOML file",
            )
        })?;
        toml::from_str(&text).map_err(|e| {
            CliError::config_with_help(
                format!("manifest {} is not valid TOML: {e}", path.display()),
                "Each model is a [[model]] table with label, repo_id and a files list",
            )
        })
    }
}

/// Fully resolved inputs for the pull command
#[derive(Debug, Clone)]
pub struct PullPlan {
    /// Model groups in download order
    pub groups: Vec<ModelGroup>,
    /// Explicit cache directory; None falls back to environment discovery
    pub cache_dir: Option<PathBuf>,
    /// Container-side root for mount paths
    pub mount_root: PathBuf,
}

impl PullPlan {
    /// Resolve flags and manifest into a concrete plan.
    ///
    /// Exactly one source of model groups is accepted: a manifest via
    /// `--config`, or a single ad-hoc group via `--repo` with `--file`.
    /// For the cache directory and mount root, a command-line flag beats
    /// the manifest key, which beats environment discovery.
    pub fn from_options(options: PullOptions) -> Result<Self, CliError> {
        if options.repo.is_none()
            && (!options.files.is_empty() || options.revision.is_some() || options.label.is_some())
        {
            return Err(CliError::config_with_help(
                "--file, --revision and --label only apply together with --repo",
                "Describe ad-hoc pulls with --repo, or list models in a manifest",
            ));
        }

        let (groups, manifest_cache_dir, manifest_mount_root) =
            match (options.config.as_deref(), options.repo) {
                (Some(_), Some(_)) => {
                    return Err(CliError::config_with_help(
                        "pass either --config or --repo, not both",
                        "The manifest already lists the models to pull",
                    ));
                }
                (Some(path), None) => {
                    let manifest = Manifest::load(path)?;
                    if manifest.models.is_empty() {
                        return Err(CliError::config_with_help(
                            format!("manifest {} lists no models", path.display()),
                            "Add at least one [[model]] table",
                        ));
                    }
                    (manifest.models, manifest.cache_dir, manifest.mount_root)
                }
                (None, Some(repo_id)) => {
                    if options.files.is_empty() {
                        return Err(CliError::config_with_help(
                            "at least one --file is required with --repo",
                            "Name the files to download; the first one names the mount",
                        ));
                    }
                    let group = ModelGroup {
                        label: options.label.unwrap_or_else(|| repo_id.clone()),
                        repo_id,
                        revision: options.revision,
                        filenames: options.files,
                    };
                    (vec![group], None, None)
                }
                (None, None) => {
                    return Err(CliError::config_with_help(
                        "nothing to pull",
                        "Pass --config with a manifest, or --repo with --file",
                    ));
                }
            };

        Ok(Self {
            groups,
            cache_dir: options.cache_dir.or(manifest_cache_dir),
            mount_root: options
                .mount_root
                .or(manifest_mount_root)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MOUNT_ROOT)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn manifest_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const FULL_MANIFEST: &str = r#"
mount_root = "/weights"
cache_dir = "/models/hub"

[[model]]
label = "target"
repo_id = "bartowski/Qwen_Qwen3-4B-GGUF"
files = ["Qwen_Qwen3-4B-Q4_K_M.gguf"]

[[model]]
label = "draft"
repo_id = "bartowski/Qwen_Qwen3-0.6B-GGUF"
revision = "main"
files = ["Qwen_Qwen3-0.6B-Q4_K_M.gguf"]
"#;

    // ================================================== //
    // Manifest parsing tests
    // ================================================== //

    #[test]
    fn test_full_manifest_parses() {
        let file = manifest_file(FULL_MANIFEST);
        let manifest = Manifest::load(file.path()).unwrap();

        assert_eq!(manifest.mount_root, Some(PathBuf::from("/weights")));
        assert_eq!(manifest.cache_dir, Some(PathBuf::from("/models/hub")));
        assert_eq!(manifest.models.len(), 2);
        assert_eq!(manifest.models[0].label, "target");
        assert_eq!(manifest.models[0].revision, None);
        assert_eq!(manifest.models[1].revision.as_deref(), Some("main"));
        assert_eq!(
            manifest.models[1].filenames,
            vec!["Qwen_Qwen3-0.6B-Q4_K_M.gguf"]
        );
    }

    #[test]
    fn test_missing_manifest_is_reported() {
        let err = Manifest::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("cannot read manifest"));
    }

    #[test]
    fn test_broken_manifest_is_reported() {
        let file = manifest_file("[[model]\nlabel = ");
        let err = Manifest::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("not valid TOML"));
    }

    // ================================================== //
    // Plan assembly tests
    // ================================================== //

    #[test]
    fn test_manifest_plan_keeps_group_order() {
        let file = manifest_file(FULL_MANIFEST);
        let plan = PullPlan::from_options(PullOptions {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(plan.groups.len(), 2);
        assert_eq!(plan.groups[0].label, "target");
        assert_eq!(plan.groups[1].label, "draft");
        assert_eq!(plan.cache_dir, Some(PathBuf::from("/models/hub")));
        assert_eq!(plan.mount_root, PathBuf::from("/weights"));
    }

    #[test]
    fn test_flags_beat_manifest_directories() {
        let file = manifest_file(FULL_MANIFEST);
        let plan = PullPlan::from_options(PullOptions {
            config: Some(file.path().to_path_buf()),
            cache_dir: Some(PathBuf::from("/flag/hub")),
            mount_root: Some(PathBuf::from("/flag/mount")),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(plan.cache_dir, Some(PathBuf::from("/flag/hub")));
        assert_eq!(plan.mount_root, PathBuf::from("/flag/mount"));
    }

    #[test]
    fn test_empty_manifest_is_rejected() {
        let file = manifest_file("mount_root = \"/weights\"\n");
        let err = PullPlan::from_options(PullOptions {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        })
        .unwrap_err();

        assert!(err.to_string().contains("lists no models"));
    }

    #[test]
    fn test_adhoc_plan_builds_single_group() {
        let plan = PullPlan::from_options(PullOptions {
            repo: Some("bartowski/Qwen_Qwen3-4B-GGUF".into()),
            files: vec!["a.gguf".into(), "b.gguf".into()],
            revision: Some("v2".into()),
            label: Some("target".into()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(plan.groups.len(), 1);
        let group = &plan.groups[0];
        assert_eq!(group.label, "target");
        assert_eq!(group.repo_id, "bartowski/Qwen_Qwen3-4B-GGUF");
        assert_eq!(group.revision.as_deref(), Some("v2"));
        assert_eq!(group.filenames, vec!["a.gguf", "b.gguf"]);
        assert_eq!(plan.mount_root, PathBuf::from(DEFAULT_MOUNT_ROOT));
    }

    #[test]
    fn test_adhoc_label_defaults_to_repo_id() {
        let plan = PullPlan::from_options(PullOptions {
            repo: Some("org/repo".into()),
            files: vec!["a.gguf".into()],
            ..Default::default()
        })
        .unwrap();

        assert_eq!(plan.groups[0].label, "org/repo");
    }

    #[test]
    fn test_adhoc_pull_requires_files() {
        let err = PullPlan::from_options(PullOptions {
            repo: Some("org/repo".into()),
            ..Default::default()
        })
        .unwrap_err();

        assert!(err.to_string().contains("--file"));
    }

    #[test]
    fn test_manifest_and_repo_are_mutually_exclusive() {
        let file = manifest_file(FULL_MANIFEST);
        let err = PullPlan::from_options(PullOptions {
            config: Some(file.path().to_path_buf()),
            repo: Some("org/repo".into()),
            files: vec!["a.gguf".into()],
            ..Default::default()
        })
        .unwrap_err();

        assert!(err.to_string().contains("not both"));
    }

    #[test]
    fn test_adhoc_flags_without_repo_are_rejected() {
        let err = PullPlan::from_options(PullOptions {
            files: vec!["a.gguf".into()],
            ..Default::default()
        })
        .unwrap_err();

        assert!(err.to_string().contains("--repo"));
    }

    #[test]
    fn test_empty_invocation_is_rejected() {
        let err = PullPlan::from_options(PullOptions::default()).unwrap_err();
        assert!(err.to_string().contains("nothing to pull"));
    }
}
