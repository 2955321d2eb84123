#![deny(missing_docs)]
//! healthbeat command-line interface.
//!
//! Runs the predictive health analysis and the stub audit over a local
//! project directory.

mod service;

use clap::{Args, Parser, Subcommand, ValueEnum};
use healthbeat_core::{
    Analyzer, PredictionSource, Report, ScanConfig, SourceFile, StdFileSystem, StubAudit,
    audit_stubs, candidate_files, render_json, render_report_text, render_stub_audit_text,
};
use service::HttpPredictionService;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

pub(crate) type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Parser)]
#[command(name = "healthbeat", version, about = "Predictive codebase health checks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct ProjectArgs {
    /// Project root to scan.
    #[arg(long, default_value = ".")]
    path: PathBuf,
    /// Source extensions to scan (repeatable or comma-separated).
    #[arg(long, value_delimiter = ',', env = "HEALTHBEAT_EXTENSIONS")]
    extensions: Vec<String>,
    /// Directory names to skip, replacing the defaults.
    #[arg(long = "exclude-dirs", value_delimiter = ',', env = "HEALTHBEAT_EXCLUDE_DIRS")]
    exclude_dirs: Vec<String>,
}

#[derive(Args, Clone)]
struct ServiceArgs {
    /// Prediction service endpoint; the built-in rules are used when absent.
    #[arg(long, env = "HEALTHBEAT_SERVICE_URL")]
    service_url: Option<String>,
    /// Bearer token for the prediction service.
    #[arg(long, env = "HEALTHBEAT_SERVICE_TOKEN", hide_env_values = true)]
    service_token: Option<String>,
}

#[derive(Args, Clone)]
struct OutputArgs {
    /// Output format for report data.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write the report to a file instead of stdout.
    #[arg(long = "report-output")]
    report_output: Option<PathBuf>,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict issues and optimizations and compile a health score.
    Predict {
        #[command(flatten)]
        project: ProjectArgs,
        #[command(flatten)]
        service: ServiceArgs,
        /// Maximum number of files read concurrently.
        #[arg(short = 'j', long, default_value_t = 8)]
        concurrency: usize,
        #[command(flatten)]
        report: OutputArgs,
    },
    /// List stub files and directories that hold nothing but stubs.
    Stubs {
        #[command(flatten)]
        project: ProjectArgs,
        #[command(flatten)]
        report: OutputArgs,
    },
}

#[cfg(not(test))]
#[tokio::main]
async fn main() -> CliResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Predict {
            project,
            service,
            concurrency,
            report,
        } => run_predict(project, service, concurrency, report).await?,
        Commands::Stubs { project, report } => run_stubs(project, report).await?,
    }

    Ok(())
}

#[cfg(test)]
fn main() {}

async fn run_predict(
    project: ProjectArgs,
    service: ServiceArgs,
    concurrency: usize,
    output: OutputArgs,
) -> CliResult<()> {
    let root = resolve_root(&project.path)?;
    let config = scan_config(&project);
    let paths = candidate_files(&StdFileSystem::new(), &root, &config)?;
    if paths.is_empty() {
        log::info!("no candidate files under {}", root.display());
    }

    let sources = read_sources(paths, concurrency).await?;
    // The blocking HTTP client must be built and dropped off the async runtime.
    let report =
        tokio::task::spawn_blocking(move || analyze(&service, sources)).await??;

    emit_report(&report, &output).await
}

async fn run_stubs(project: ProjectArgs, output: OutputArgs) -> CliResult<()> {
    let root = resolve_root(&project.path)?;
    let config = scan_config(&project);
    let audit = audit_stubs(&StdFileSystem::new(), &root, &config)?;
    emit_stub_audit(&audit, &output).await
}

fn resolve_root(path: &Path) -> CliResult<PathBuf> {
    if !path.is_dir() {
        return Err(format!("path not found: {}", path.display()).into());
    }
    Ok(path.to_path_buf())
}

fn scan_config(project: &ProjectArgs) -> ScanConfig {
    let mut config = ScanConfig::default();
    let extensions = non_blank(&project.extensions);
    if !extensions.is_empty() {
        config = config.with_extensions(&extensions);
    }
    let exclude_dirs = non_blank(&project.exclude_dirs);
    if !exclude_dirs.is_empty() {
        config = config.with_excluded_dirs(&exclude_dirs);
    }
    config
}

fn non_blank(values: &[String]) -> Vec<&str> {
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .collect()
}

fn prediction_source(service: &ServiceArgs) -> PredictionSource {
    match service.service_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => PredictionSource::external(HttpPredictionService::new(
            url,
            service.service_token.clone(),
        )),
        _ => PredictionSource::StaticDefault,
    }
}

fn analyze(service: &ServiceArgs, sources: Vec<SourceFile>) -> CliResult<Report> {
    let analyzer = Analyzer::new(prediction_source(service));
    Ok(analyzer.analyze_sources(sources)?)
}

async fn read_sources(paths: Vec<PathBuf>, concurrency: usize) -> CliResult<Vec<SourceFile>> {
    let concurrency = if concurrency == 0 { 1 } else { concurrency };
    let semaphore = Arc::new(Semaphore::new(concurrency));
    let mut tasks = JoinSet::new();

    for path in paths {
        let permit = semaphore.clone().acquire_owned().await?;
        tasks.spawn(async move {
            let _permit = permit;
            match tokio::fs::read_to_string(&path).await {
                Ok(contents) => Some(SourceFile { path, contents }),
                Err(err) => {
                    log::debug!("skipping unreadable file {}: {err}", path.display());
                    None
                }
            }
        });
    }

    let mut sources = Vec::new();
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Some(source)) => sources.push(source),
            Ok(None) => {}
            Err(err) => log::warn!("file read task failed: {err}"),
        }
    }
    sources.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(sources)
}

async fn emit_report(report: &Report, output: &OutputArgs) -> CliResult<()> {
    let contents = match output.format {
        OutputFormat::Text => render_report_text(report),
        OutputFormat::Json => render_json(report)?,
    };
    emit_output(output, contents).await
}

async fn emit_stub_audit(audit: &StubAudit, output: &OutputArgs) -> CliResult<()> {
    let contents = match output.format {
        OutputFormat::Text => render_stub_audit_text(audit),
        OutputFormat::Json => render_json(audit)?,
    };
    emit_output(output, contents).await
}

async fn emit_output(output: &OutputArgs, contents: String) -> CliResult<()> {
    if let Some(path) = &output.report_output {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, contents).await?;
    } else {
        print!("{contents}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        OutputArgs, OutputFormat, ProjectArgs, ServiceArgs, analyze, prediction_source,
        read_sources, resolve_root, run_predict, run_stubs, scan_config,
    };
    use healthbeat_core::HealthTrend;
    use std::path::{Path, PathBuf};

    static UNIQUE_COUNTER: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(0);

    fn unique_dir_name() -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("system time")
            .as_nanos();
        let counter = UNIQUE_COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        PathBuf::from(format!("healthbeat_cli_test_{nanos}_{counter}"))
    }

    fn temp_project(files: &[(&str, &str)]) -> PathBuf {
        let root = std::env::temp_dir().join(unique_dir_name());
        for (rel_path, contents) in files {
            let path = root.join(rel_path);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).expect("create parent");
            }
            std::fs::write(&path, contents).expect("write file");
        }
        std::fs::create_dir_all(&root).expect("create root");
        root
    }

    fn project(path: &Path, extensions: &[&str]) -> ProjectArgs {
        ProjectArgs {
            path: path.to_path_buf(),
            extensions: extensions.iter().map(|ext| ext.to_string()).collect(),
            exclude_dirs: Vec::new(),
        }
    }

    fn no_service() -> ServiceArgs {
        ServiceArgs {
            service_url: None,
            service_token: None,
        }
    }

    fn json_output(path: PathBuf) -> OutputArgs {
        OutputArgs {
            format: OutputFormat::Json,
            report_output: Some(path),
        }
    }

    const KNOB: &str = "export function Knob() {\n  const [v, setV] = useState(0);\n  return (<div>{v}</div>);\n}\n";

    #[test]
    fn resolve_root_rejects_missing_directory() {
        let missing = std::env::temp_dir().join(unique_dir_name());
        assert!(resolve_root(&missing).is_err());
    }

    #[test]
    fn scan_config_defaults_when_extensions_blank() {
        let root = PathBuf::from(".");
        let config = scan_config(&project(&root, &[" ", ""]));
        assert!(config.matches(Path::new("src/App.tsx")));

        let custom = scan_config(&project(&root, &["vue"]));
        assert!(custom.matches(Path::new("src/App.vue")));
        assert!(!custom.matches(Path::new("src/App.tsx")));
    }

    #[test]
    fn scan_config_replaces_excluded_dirs() {
        let root = PathBuf::from(".");
        let default = scan_config(&project(&root, &[]));
        assert!(!default.matches(Path::new("dist/app.js")));

        let mut args = project(&root, &[]);
        args.exclude_dirs = vec!["vendor".to_string(), " ".to_string()];
        let custom = scan_config(&args);
        assert!(custom.matches(Path::new("dist/app.js")));
        assert!(!custom.matches(Path::new("vendor/lib/index.js")));
    }

    #[tokio::test]
    async fn stubs_honours_excluded_dirs() {
        let root = temp_project(&[("src/Knob.jsx", KNOB), ("generated/index.js", "export {};")]);
        let output = root.join("stubs.json");
        let mut args = project(&root, &[]);
        args.exclude_dirs = vec!["generated".to_string()];

        run_stubs(args, json_output(output.clone()))
            .await
            .expect("stubs");

        let contents = std::fs::read_to_string(&output).expect("audit written");
        let parsed: serde_json::Value = serde_json::from_str(&contents).expect("json");
        assert_eq!(parsed["scanned"], 1);
        assert_eq!(parsed["trivialFiles"], serde_json::json!([]));

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[test]
    fn prediction_source_selected_from_service_url() {
        assert_eq!(prediction_source(&no_service()).name(), "static-default");

        let blank = ServiceArgs {
            service_url: Some("  ".to_string()),
            service_token: None,
        };
        assert_eq!(prediction_source(&blank).name(), "static-default");

        let remote = ServiceArgs {
            service_url: Some("http://127.0.0.1:9/predict".to_string()),
            service_token: Some("token".to_string()),
        };
        assert_eq!(prediction_source(&remote).name(), "external-service");
    }

    #[test]
    fn analyze_without_sources_is_perfect() {
        let report = analyze(&no_service(), Vec::new()).expect("report");
        assert_eq!(report.score, 100);
        assert_eq!(report.trend, HealthTrend::Excellent);
    }

    #[tokio::test]
    async fn read_sources_skips_unreadable_and_sorts() {
        let root = temp_project(&[("b.js", "b"), ("a.js", "a")]);
        let paths = vec![root.join("b.js"), root.join("missing.js"), root.join("a.js")];

        let sources = read_sources(paths, 0).await.expect("read sources");

        let names: Vec<_> = sources
            .iter()
            .map(|source| source.contents.as_str())
            .collect();
        assert_eq!(names, vec!["a", "b"]);

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn predict_writes_json_report() {
        let root = temp_project(&[("src/Knob.jsx", KNOB), ("README.md", "# demo")]);
        let output = root.join("out").join("report.json");

        run_predict(project(&root, &[]), no_service(), 4, json_output(output.clone()))
            .await
            .expect("predict");

        let contents = std::fs::read_to_string(&output).expect("report written");
        let parsed: serde_json::Value = serde_json::from_str(&contents).expect("json");
        assert_eq!(parsed["score"], 80);
        assert_eq!(parsed["trend"], "good");
        assert_eq!(parsed["issues"][0]["type"], "maintenance");

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn stubs_writes_json_audit() {
        let root = temp_project(&[("src/Knob.jsx", KNOB), ("src/legacy/index.js", "export {};")]);
        let output = root.join("stubs.json");

        run_stubs(project(&root, &[]), json_output(output.clone()))
            .await
            .expect("stubs");

        let contents = std::fs::read_to_string(&output).expect("audit written");
        let parsed: serde_json::Value = serde_json::from_str(&contents).expect("json");
        assert_eq!(parsed["scanned"], 2);
        assert_eq!(parsed["trivialFiles"][0]["reason"], "too short");
        assert_eq!(parsed["hollowDirectories"].as_array().map(Vec::len), Some(1));

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn predict_fails_for_missing_root() {
        let missing = std::env::temp_dir().join(unique_dir_name());
        let result = run_predict(
            project(&missing, &[]),
            no_service(),
            1,
            OutputArgs {
                format: OutputFormat::Text,
                report_output: None,
            },
        )
        .await;
        assert!(result.is_err());
    }
}
