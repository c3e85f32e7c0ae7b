use crate::extract::extractor::StrictnessPolicy;
use crate::prelude::*;
use crate::util::path_service::resolve_path;
use anyhow::anyhow;
use std::{env::var, path::PathBuf, str::FromStr};
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub source_path: PathBuf,
    pub output_path: PathBuf,
    pub json_path: Option<PathBuf>,
    pub policy: StrictnessPolicy,
}

pub async fn load_config() -> Result<PipelineConfig> {
    Ok(PipelineConfig {
        source_path: resolve_path(&get_path_var("MAP_SOURCE_PATH", "script.js").await?)?,
        output_path: resolve_path(&get_path_var("MAP_OUTPUT_PATH", "sri-lanka-map.js").await?)?,
        json_path: match get_json_path().await? {
            Some(path) => Some(resolve_path(&path)?),
            None => None,
        },
        policy: StrictnessPolicy {
            require_complete: get_require_complete().await?,
        },
    })
}

pub async fn get_path_var(name: &str, default: &str) -> Result<String> {
    match var(name) {
        Ok(path) => match path.trim().is_empty() {
            true => {
                let err = format!("{} is empty", name);
                tracing::error!(err);
                Err(anyhow!(err))
            }
            false => Ok(path.trim().to_string()),
        },
        Err(_) => Ok(default.to_string()),
    }
}

pub async fn get_json_path() -> Result<Option<String>> {
    match var("MAP_JSON_PATH") {
        Ok(path) => match path.trim().is_empty() {
            true => {
                tracing::info!("MAP_JSON_PATH is empty");
                Ok(None)
            }
            false => Ok(Some(path.trim().to_string())),
        },
        Err(_) => Ok(None),
    }
}

pub async fn get_require_complete() -> Result<bool> {
    match var("REQUIRE_COMPLETE") {
        Ok(value) => parse_flag(&value).ok_or_else(|| {
            let err = format!("Failed to parse REQUIRE_COMPLETE as a boolean: {}", value);
            tracing::error!(err);
            anyhow!(err)
        }),
        Err(_) => Ok(false),
    }
}

pub fn get_log_level() -> Result<LevelFilter> {
    match var("LOG_LEVEL") {
        Ok(level) => match LevelFilter::from_str(level.trim()) {
            Ok(level) => Ok(level),
            Err(e) => Err(anyhow!("Failed to parse LOG_LEVEL {}: {}", level, e)),
        },
        Err(_) => Ok(LevelFilter::INFO),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" | "" => Some(false),
        _ => None,
    }
}
