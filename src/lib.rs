//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 외의 화면(대시보드 등)에서도 재사용한다.

pub mod app;
pub mod building;
pub mod config;
pub mod i18n;
pub mod seismic;
pub mod triage;
pub mod ui_cli;

pub use seismic::{compute_spectrum, SpectrumCurve, SpectrumPoint, SpectrumRequest};
