use std::fs;
use std::path::Path;

use crate::building::{FixedSpatialProvider, SpatialMetadataProvider};
use crate::config::{self, Config};
use crate::i18n::{keys, Translator};
use crate::seismic::{compute_spectrum, SiteClass, SpectrumError};
use crate::triage;
use crate::ui_cli::{self, Command, ConfigAction, OutputFormat, SpectrumArgs, TriageArgs};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] config::ConfigError),
    /// 스펙트럼 입력 오류
    #[error("스펙트럼 입력 오류: {0}")]
    Spectrum(#[from] SpectrumError),
    /// CSV 출력 오류
    #[error("CSV 출력 오류: {0}")]
    Csv(#[from] csv::Error),
    /// JSON 출력 오류
    #[error("JSON 출력 오류: {0}")]
    Json(#[from] serde_json::Error),
    /// TOML 출력 오류
    #[error("TOML 출력 오류: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// 파싱된 명령 하나를 실행한다.
pub fn run(
    command: &Command,
    cfg: &Config,
    config_path: &Path,
    tr: &Translator,
) -> Result<(), AppError> {
    match command {
        Command::Spectrum(args) => handle_spectrum(args, cfg, tr),
        Command::Classes => {
            print!("{}", ui_cli::render_classes(tr));
            Ok(())
        }
        Command::Triage(args) => handle_triage(args, cfg, &FixedSpatialProvider::default(), tr),
        Command::Config { action } => handle_config(*action, cfg, config_path, tr),
    }
}

fn handle_spectrum(args: &SpectrumArgs, cfg: &Config, tr: &Translator) -> Result<(), AppError> {
    let request = args.params.resolve(&cfg.defaults)?;
    let curve = compute_spectrum(&request);
    if SiteClass::from_code(&request.site_class).is_none() {
        tracing::warn!(site_class = %request.site_class, "unknown site class replaced by SD");
        eprintln!("{} {}", tr.t(keys::SPECTRUM_FALLBACK), request.site_class);
    }

    let rendered = match args.format {
        OutputFormat::Table => ui_cli::render_table(&request, &curve, tr),
        OutputFormat::Csv => ui_cli::render_csv(&curve)?,
        OutputFormat::Json => ui_cli::render_json(&request, &curve)?,
    };
    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            println!("{} {}", tr.t(keys::OUTPUT_WRITTEN), path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn handle_triage(
    args: &TriageArgs,
    cfg: &Config,
    provider: &dyn SpatialMetadataProvider,
    tr: &Translator,
) -> Result<(), AppError> {
    let request = args.params.resolve(&cfg.defaults)?;
    let lat = args.lat.unwrap_or(cfg.location.latitude);
    let lon = args.lon.unwrap_or(cfg.location.longitude);
    let building = provider.fetch(lat, lon);
    let assessment =
        triage::assess_building(&request, building, args.structure.into(), &cfg.triage);
    print!("{}", ui_cli::render_assessment(lat, lon, &assessment, tr));
    Ok(())
}

fn handle_config(
    action: ConfigAction,
    cfg: &Config,
    config_path: &Path,
    tr: &Translator,
) -> Result<(), AppError> {
    match action {
        ConfigAction::Show => print!("{}", toml::to_string_pretty(cfg)?),
        ConfigAction::Init => {
            config::save_to(&Config::default(), config_path)?;
            println!("{} {}", tr.t(keys::CONFIG_WRITTEN), config_path.display());
        }
    }
    Ok(())
}
