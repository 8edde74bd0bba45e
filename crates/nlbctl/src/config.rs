//! TOML profile configuration.
//!
//! Profiles map a name to a region (and optionally an endpoint override),
//! so switching between accounts/regions is one `-p` flag. Credentials
//! never live in the file — they always come from the standard
//! `ALIBABA_CLOUD_*` environment variables.
//!
//! Resolution order for the region: `--region` flag / env, then the
//! selected profile, then the `default_profile`.

use std::collections::HashMap;
use std::path::PathBuf;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::{Deserialize, Serialize};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Top-level TOML configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when `--profile` is not given.
    pub default_profile: Option<String>,

    /// Named profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

/// A named target: region plus optional endpoint override.
#[derive(Debug, Deserialize, Serialize)]
pub struct Profile {
    /// Region id, e.g. `cn-hangzhou`.
    pub region: String,

    /// Explicit endpoint URL (VPC endpoint, test server).
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// Path of the config file: `~/.config/nlbctl/config.toml` (per-platform
/// equivalent).
pub fn config_path() -> PathBuf {
    ProjectDirs::from("", "", "nlbctl")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("nlbctl.toml"))
}

/// Load the config file if present, merged with `NLBCTL_*` env overrides.
/// A missing file yields the default (empty) config.
pub fn load_config() -> Result<Config, CliError> {
    let figment = Figment::new()
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("NLBCTL_CONFIG_"));
    Ok(figment.extract()?)
}

/// Resolved connection settings for one invocation.
#[derive(Debug)]
pub struct Target {
    pub region: Option<String>,
    pub endpoint: Option<String>,
}

/// Combine CLI flags, env, and the config file into the target to talk to.
pub fn resolve_target(global: &GlobalOpts, cfg: &Config) -> Result<Target, CliError> {
    let profile_name = global
        .profile
        .clone()
        .or_else(|| cfg.default_profile.clone());

    let profile = match &profile_name {
        Some(name) => match cfg.profiles.get(name) {
            Some(profile) => Some(profile),
            // An explicitly requested profile must exist; a missing
            // default profile is fine.
            None if global.profile.is_some() => {
                let mut available: Vec<&str> =
                    cfg.profiles.keys().map(String::as_str).collect();
                available.sort_unstable();
                return Err(CliError::ProfileNotFound {
                    name: name.clone(),
                    available: available.join(", "),
                });
            }
            None => None,
        },
        None => None,
    };

    Ok(Target {
        region: global
            .region
            .clone()
            .or_else(|| profile.map(|p| p.region.clone())),
        endpoint: global
            .endpoint
            .clone()
            .or_else(|| profile.and_then(|p| p.endpoint.clone())),
    })
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn global_from(args: &[&str]) -> GlobalOpts {
        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            global: GlobalOpts,
        }
        Wrapper::parse_from(args).global
    }

    #[test]
    fn flag_beats_profile() {
        let mut cfg = Config::default();
        cfg.profiles.insert(
            "prod".into(),
            Profile {
                region: "cn-shanghai".into(),
                endpoint: None,
            },
        );
        cfg.default_profile = Some("prod".into());

        let global = global_from(&["nlbctl", "--region", "cn-hangzhou"]);
        let target = resolve_target(&global, &cfg).unwrap();
        assert_eq!(target.region.as_deref(), Some("cn-hangzhou"));
    }

    #[test]
    fn default_profile_supplies_region_and_endpoint() {
        let mut cfg = Config::default();
        cfg.profiles.insert(
            "dev".into(),
            Profile {
                region: "cn-qingdao".into(),
                endpoint: Some("http://127.0.0.1:9090".into()),
            },
        );
        cfg.default_profile = Some("dev".into());

        let global = global_from(&["nlbctl"]);
        let target = resolve_target(&global, &cfg).unwrap();
        assert_eq!(target.region.as_deref(), Some("cn-qingdao"));
        assert_eq!(target.endpoint.as_deref(), Some("http://127.0.0.1:9090"));
    }

    #[test]
    fn unknown_explicit_profile_is_an_error() {
        let cfg = Config::default();
        let global = global_from(&["nlbctl", "--profile", "nope"]);
        let err = resolve_target(&global, &cfg).unwrap_err();
        assert!(matches!(err, CliError::ProfileNotFound { .. }));
    }
}
