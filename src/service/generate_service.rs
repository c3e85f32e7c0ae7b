use crate::emit::emitter::{emit_json, emit_module};
use crate::extract::extractor::extract;
use crate::prelude::*;
use crate::region::catalog::District;
use crate::service::var_service::PipelineConfig;
use anyhow::Context;
use std::path::Path;
use tokio::fs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineReport {
    pub found: usize,
    pub expected: usize,
}

pub async fn run_pipeline(config: &PipelineConfig) -> Result<PipelineReport> {
    let source = fs::read_to_string(&config.source_path)
        .await
        .with_context(|| format!("Failed to read {}", config.source_path.display()))?;

    let extraction = extract(&source, &District::ALL)?;
    if let Err(e) = extraction.check(config.policy) {
        tracing::error!("{}", e);
        return Err(e.into());
    }

    let mapping = extraction.to_mapping();
    let module = emit_module(&mapping)?;
    write_artifact(&config.output_path, &module).await?;
    tracing::info!("Successfully generated {}", config.output_path.display());

    if let Some(json_path) = &config.json_path {
        write_artifact(json_path, &emit_json(&mapping)?).await?;
        tracing::info!("Wrote district mapping to {}", json_path.display());
    }

    Ok(PipelineReport {
        found: extraction.found(),
        expected: extraction.expected(),
    })
}

async fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EmitError, PipelineError};
    use crate::extract::extractor::StrictnessPolicy;
    use crate::region::mapping::DistrictMapping;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn legacy_source(skip: &[District]) -> String {
        let mut source = String::from("var rsr = Raphael('map', '449.68774', '792.54926');\n");
        for district in District::ALL.iter().filter(|d| !skip.contains(d)) {
            source.push_str(&format!(
                "var {} = rsr.path(\"m 10,20 1.5,-2 {} z\");\n{}.attr({{id: '{}'}});\n",
                district.var_name(),
                district.key().len(),
                district.var_name(),
                district.var_name()
            ));
        }
        source
    }

    fn config(dir: &TempDir, require_complete: bool) -> PipelineConfig {
        PipelineConfig {
            source_path: dir.path().join("script.js"),
            output_path: dir.path().join("out/sri-lanka-map.js"),
            json_path: Some(dir.path().join("out/districts.json")),
            policy: StrictnessPolicy { require_complete },
        }
    }

    async fn read(path: &PathBuf) -> String {
        fs::read_to_string(path).await.unwrap()
    }

    #[tokio::test]
    async fn test_pipeline_writes_both_artifacts_deterministically() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir, true);
        fs::write(&config.source_path, legacy_source(&[])).await.unwrap();

        let report = run_pipeline(&config).await.unwrap();
        assert_eq!(report, PipelineReport { found: 25, expected: 25 });
        let module = read(&config.output_path).await;
        let json = read(config.json_path.as_ref().unwrap()).await;
        assert_eq!(module.matches("        path: \"").count(), 25);
        assert_eq!(DistrictMapping::from_json(&json).unwrap().len(), 25);

        run_pipeline(&config).await.unwrap();
        assert_eq!(read(&config.output_path).await, module);
        assert_eq!(read(config.json_path.as_ref().unwrap()).await, json);
    }

    #[tokio::test]
    async fn test_lenient_policy_emits_partial_mapping() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir, false);
        fs::write(&config.source_path, legacy_source(&[District::Vavuniya])).await.unwrap();

        let report = run_pipeline(&config).await.unwrap();
        assert_eq!(report, PipelineReport { found: 24, expected: 25 });
        assert!(!read(&config.output_path).await.contains("'VAVUNIYA'"));
    }

    #[tokio::test]
    async fn test_strict_policy_writes_nothing_when_incomplete() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir, true);
        fs::write(&config.source_path, legacy_source(&[District::Vavuniya])).await.unwrap();

        let err = run_pipeline(&config).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::IncompleteExtraction { found: 24, expected: 25, .. })
        ));
        assert!(!config.output_path.exists());
    }

    #[tokio::test]
    async fn test_unescapable_payload_aborts_generation() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir, false);
        let source = legacy_source(&[]).replace(
            "var galle = rsr.path(\"m 10,20",
            "var galle = rsr.path(\"m\u{1} 10,20",
        );
        fs::write(&config.source_path, source).await.unwrap();

        let err = run_pipeline(&config).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EmitError>(),
            Some(EmitError::UnescapableCharacter { district: District::Galle, .. })
        ));
        assert!(!config.output_path.exists());
    }

    #[tokio::test]
    async fn test_missing_source_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(run_pipeline(&config(&dir, false)).await.is_err());
    }
}
