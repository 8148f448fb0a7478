use std::fmt::Write as _;
use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::config::SpectrumDefaults;
use crate::i18n::{keys, Translator};
use crate::seismic::{
    site_class_profiles, SiteClass, SpectrumCurve, SpectrumError, SpectrumPoint, SpectrumRequest,
    StructureType,
};
use crate::triage::{BuildingAssessment, RiskLevel};

/// BNBC 2020 설계 응답스펙트럼 계산기
#[derive(Parser, Debug)]
#[command(name = "design_spectrum_cli", author, version, about, long_about = None)]
pub struct Cli {
    /// 출력 언어 (auto/ko/en-us)
    #[arg(long, short = 'L', global = true)]
    pub lang: Option<String>,

    /// 설정 파일 경로
    #[arg(long, global = true, default_value = crate::config::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// 로그 상세도 (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 스펙트럼 곡선을 계산해 출력한다
    Spectrum(SpectrumArgs),
    /// 지반 분류 계수표를 출력한다
    Classes,
    /// 위치의 건물 정보와 스펙트럼으로 위험도를 분류한다
    Triage(TriageArgs),
    /// 설정 파일 관리
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// 현재 설정을 TOML로 출력
    Show,
    /// 기본 설정을 파일에 기록
    Init,
}

/// 스펙트럼 입력값. 생략한 값은 설정 파일 기본값을 쓴다.
#[derive(Args, Debug, Clone, Default)]
pub struct SpectrumParams {
    /// 지역계수 Z [g]
    #[arg(short = 'z', long = "zone")]
    pub zone_coefficient: Option<f64>,
    /// 지반 분류 (SA, SB, SC, SD, SE)
    #[arg(short = 's', long)]
    pub site_class: Option<String>,
    /// 중요도계수 I (1.0 / 1.25 / 1.5)
    #[arg(short = 'i', long, value_parser = parse_importance)]
    pub importance: Option<f64>,
    /// 감쇠비 ζ [%]
    #[arg(short = 'd', long = "damping", allow_negative_numbers = true)]
    pub damping_ratio: Option<f64>,
    /// 알 수 없는 지반 분류를 SD로 대체하지 않고 오류로 처리
    #[arg(long)]
    pub strict_site_class: bool,
}

/// 점유 등급별 중요도계수.
pub const IMPORTANCE_CHOICES: [f64; 3] = [1.0, 1.25, 1.5];

fn parse_importance(s: &str) -> Result<f64, String> {
    let value: f64 = s.trim().parse().map_err(|e| format!("{e}"))?;
    if IMPORTANCE_CHOICES.contains(&value) {
        Ok(value)
    } else {
        Err(format!("importance must be one of {IMPORTANCE_CHOICES:?}"))
    }
}

impl SpectrumParams {
    /// 설정 기본값과 합쳐 검증된 요청을 만든다.
    pub fn resolve(&self, defaults: &SpectrumDefaults) -> Result<SpectrumRequest, SpectrumError> {
        let mut request = defaults.to_request();
        if let Some(z) = self.zone_coefficient {
            request.zone_coefficient = z;
        }
        if let Some(code) = &self.site_class {
            request.site_class = code.clone();
        }
        if let Some(i) = self.importance {
            request.importance = i;
        }
        if let Some(zeta) = self.damping_ratio {
            request.damping_ratio = zeta;
        }
        if self.strict_site_class {
            // 엄격 모드에서는 "se" 같은 입력도 표준 코드로 바꿔 둔다
            request.site_class = request.site_class.parse::<SiteClass>()?.code().to_string();
        }
        request.validate()?;
        Ok(request)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct SpectrumArgs {
    #[command(flatten)]
    pub params: SpectrumParams,
    /// 출력 형식
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
    /// 결과를 파일로 저장
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StructureArg {
    RcFrame,
    SteelFrame,
    Ebf,
    Other,
}

impl From<StructureArg> for StructureType {
    fn from(value: StructureArg) -> Self {
        match value {
            StructureArg::RcFrame => StructureType::ConcreteMomentFrame,
            StructureArg::SteelFrame => StructureType::SteelMomentFrame,
            StructureArg::Ebf => StructureType::EccentricallyBracedSteel,
            StructureArg::Other => StructureType::Other,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct TriageArgs {
    #[command(flatten)]
    pub params: SpectrumParams,
    /// 위도 (생략 시 설정값)
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,
    /// 경도 (생략 시 설정값)
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,
    /// 구조 형식
    #[arg(long, value_enum, default_value_t = StructureArg::RcFrame)]
    pub structure: StructureArg,
}

/// JSON 출력용 묶음.
#[derive(Debug, Serialize)]
pub struct SpectrumReport<'a> {
    pub request: &'a SpectrumRequest,
    pub peak: Option<SpectrumPoint>,
    pub curve: &'a SpectrumCurve,
}

pub fn render_table(request: &SpectrumRequest, curve: &SpectrumCurve, tr: &Translator) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", tr.t(keys::SPECTRUM_HEADING));
    let _ = writeln!(
        out,
        "{} Z={:.3} site={} I={:.2} ζ={:.1}%",
        tr.t(keys::SPECTRUM_PARAMETERS),
        request.zone_coefficient,
        curve.site_class,
        request.importance,
        request.damping_ratio
    );
    let _ = writeln!(out, "{} {:.4}", tr.t(keys::SPECTRUM_ETA), curve.eta);
    let _ = writeln!(
        out,
        "{:>14}  {:>10}",
        tr.t(keys::SPECTRUM_COL_PERIOD),
        tr.t(keys::SPECTRUM_COL_SA)
    );
    for p in curve.points() {
        let _ = writeln!(out, "{:>14.4}  {:>10.5}", p.period, p.spectral_acceleration);
    }
    if let Some(peak) = curve.peak() {
        let _ = writeln!(
            out,
            "{} {:.3} g @ T={:.3} s",
            tr.t(keys::SPECTRUM_PEAK),
            peak.spectral_acceleration,
            peak.period
        );
    }
    out
}

/// 곡선을 `period_s,sa_g` 헤더의 CSV로 기록한다.
pub fn write_csv<W: io::Write>(curve: &SpectrumCurve, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["period_s", "sa_g"])?;
    for p in curve.points() {
        wtr.serialize((p.period, p.spectral_acceleration))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn render_csv(curve: &SpectrumCurve) -> Result<String, csv::Error> {
    let mut buf = Vec::new();
    write_csv(curve, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn render_json(request: &SpectrumRequest, curve: &SpectrumCurve) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&SpectrumReport {
        request,
        peak: curve.peak(),
        curve,
    })
}

pub fn render_classes(tr: &Translator) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", tr.t(keys::CLASSES_HEADING));
    let _ = writeln!(
        out,
        "{:<4} {:>5} {:>6} {:>6} {:>6}  description",
        "code", "S", "TB", "TC", "TD"
    );
    for p in site_class_profiles() {
        let _ = writeln!(
            out,
            "{:<4} {:>5.2} {:>6.2} {:>6.2} {:>6.2}  {}",
            p.class.code(),
            p.soil_factor,
            p.tb,
            p.tc,
            p.td,
            p.class.description()
        );
    }
    out
}

pub fn render_assessment(
    latitude: f64,
    longitude: f64,
    assessment: &BuildingAssessment,
    tr: &Translator,
) -> String {
    let b = &assessment.building;
    let risk = match assessment.risk {
        RiskLevel::Critical => tr.t(keys::RISK_CRITICAL),
        RiskLevel::Standard => tr.t(keys::RISK_STANDARD),
    };
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", tr.t(keys::TRIAGE_HEADING));
    let _ = writeln!(out, "{} {latitude}, {longitude}", tr.t(keys::TRIAGE_LOCATION));
    let _ = writeln!(
        out,
        "{} {} floors, {:.1} m, {:.0} sq.ft",
        tr.t(keys::TRIAGE_BUILDING),
        b.levels,
        b.height_m,
        b.footprint
    );
    let _ = writeln!(out, "{} {:.3} g", tr.t(keys::SPECTRUM_PEAK), assessment.peak_sa_g);
    let _ = writeln!(
        out,
        "{} {:.3} s ({:?})",
        tr.t(keys::TRIAGE_APPROX_PERIOD),
        assessment.approximate_period_s,
        assessment.structure
    );
    let _ = writeln!(
        out,
        "{} {:.3} g",
        tr.t(keys::TRIAGE_SA_AT_PERIOD),
        assessment.sa_at_period_g
    );
    let _ = writeln!(out, "{} {risk}", tr.t(keys::TRIAGE_RISK));
    out
}
