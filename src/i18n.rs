use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";

    pub const SPECTRUM_HEADING: &str = "spectrum.heading";
    pub const SPECTRUM_PARAMETERS: &str = "spectrum.parameters";
    pub const SPECTRUM_FALLBACK: &str = "spectrum.fallback";
    pub const SPECTRUM_COL_PERIOD: &str = "spectrum.col_period";
    pub const SPECTRUM_COL_SA: &str = "spectrum.col_sa";
    pub const SPECTRUM_PEAK: &str = "spectrum.peak";
    pub const SPECTRUM_ETA: &str = "spectrum.eta";
    pub const OUTPUT_WRITTEN: &str = "spectrum.output_written";

    pub const CLASSES_HEADING: &str = "classes.heading";

    pub const TRIAGE_HEADING: &str = "triage.heading";
    pub const TRIAGE_LOCATION: &str = "triage.location";
    pub const TRIAGE_BUILDING: &str = "triage.building";
    pub const TRIAGE_APPROX_PERIOD: &str = "triage.approx_period";
    pub const TRIAGE_SA_AT_PERIOD: &str = "triage.sa_at_period";
    pub const TRIAGE_RISK: &str = "triage.risk";
    pub const RISK_CRITICAL: &str = "risk.critical";
    pub const RISK_STANDARD: &str = "risk.standard";

    pub const CONFIG_WRITTEN: &str = "config.written";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 한국어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko".into()),
        "en" | "en-us" | "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // en-us 가 없으면 en 을 시도
    let (base, _) = lang.split_once(['-', '_'])?;
    try_load(base)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        SPECTRUM_HEADING => "설계 응답스펙트럼 (BNBC 2020 Figure 6.2.25)",
        SPECTRUM_PARAMETERS => "입력값:",
        SPECTRUM_FALLBACK => "알 수 없는 지반 분류이므로 SD 프로파일로 계산했습니다:",
        SPECTRUM_COL_PERIOD => "주기 T [s]",
        SPECTRUM_COL_SA => "Sa [g]",
        SPECTRUM_PEAK => "최대 Sa:",
        SPECTRUM_ETA => "감쇠 보정계수 η:",
        OUTPUT_WRITTEN => "결과를 저장했습니다:",
        CLASSES_HEADING => "지반 분류별 계수 (BNBC 2020 Table 6.2.16)",
        TRIAGE_HEADING => "건물 위험도 분류",
        TRIAGE_LOCATION => "위치:",
        TRIAGE_BUILDING => "건물:",
        TRIAGE_APPROX_PERIOD => "근사 고유주기 Ta:",
        TRIAGE_SA_AT_PERIOD => "Ta에서의 Sa:",
        TRIAGE_RISK => "위험도:",
        RISK_CRITICAL => "CRITICAL (높은 지진 증폭)",
        RISK_STANDARD => "STANDARD",
        CONFIG_WRITTEN => "설정 파일을 기본값으로 저장했습니다:",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        SPECTRUM_HEADING => "Design response spectrum (BNBC 2020 Figure 6.2.25)",
        SPECTRUM_PARAMETERS => "Inputs:",
        SPECTRUM_FALLBACK => "Unknown site class; computed with the SD profile:",
        SPECTRUM_COL_PERIOD => "Period T [s]",
        SPECTRUM_COL_SA => "Sa [g]",
        SPECTRUM_PEAK => "Peak Sa:",
        SPECTRUM_ETA => "Damping correction η:",
        OUTPUT_WRITTEN => "Output written to:",
        CLASSES_HEADING => "Site class parameters (BNBC 2020 Table 6.2.16)",
        TRIAGE_HEADING => "Building risk triage",
        TRIAGE_LOCATION => "Location:",
        TRIAGE_BUILDING => "Building:",
        TRIAGE_APPROX_PERIOD => "Approximate period Ta:",
        TRIAGE_SA_AT_PERIOD => "Sa at Ta:",
        TRIAGE_RISK => "Risk:",
        RISK_CRITICAL => "CRITICAL (high seismic amplification)",
        RISK_STANDARD => "STANDARD",
        CONFIG_WRITTEN => "Default configuration written to:",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_falls_back_to_korean_for_unknown_key() {
        let tr = Translator::new("en-us");
        assert_eq!(tr.t(keys::SPECTRUM_PEAK), "Peak Sa:");
        assert_eq!(tr.t("no.such.key"), "[missing translation]");
    }

    #[test]
    fn unknown_language_uses_korean() {
        let tr = Translator::new("fr");
        assert_eq!(tr.language(), Language::Ko);
        assert_eq!(tr.t(keys::ERROR_PREFIX), "오류");
    }

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language("ko-KR", Some("en")), "ko");
        assert_eq!(resolve_language("auto", Some("en")), "en-us");
    }

    #[test]
    fn nested_tables_flatten_to_dotted_keys() {
        let map = parse_toml_to_map("[spectrum]\npeak = \"Max Sa:\"\n").unwrap();
        assert_eq!(map.get(keys::SPECTRUM_PEAK).map(String::as_str), Some("Max Sa:"));
    }
}
