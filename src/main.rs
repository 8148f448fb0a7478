use clap::Parser;
use design_spectrum_toolbox::{app, config, i18n, ui_cli::Cli};
use tracing_subscriber::EnvFilter;

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(err) = try_run(&cli) {
        let lang = i18n::resolve_language(cli.lang.as_deref().unwrap_or("auto"), None);
        let tr = i18n::Translator::new(&lang);
        eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn try_run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::load_or_default_at(&cli.config)?;
    let lang = i18n::resolve_language(
        cli.lang.as_deref().unwrap_or("auto"),
        Some(cfg.language.as_str()),
    );
    let tr = i18n::Translator::new_with_pack(&lang, None);
    app::run(&cli.command, &cfg, &cli.config, &tr)?;
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
