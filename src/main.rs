use clap::{Parser, Subcommand};
use std::path::PathBuf;

use neutron_property_calculator::{
    app::{self, AppError},
    chart::format_value,
    config, conversion, i18n,
    quantity::QuantityKind,
    sampling::{self, AxisScale, AxisSpec},
    ui_cli,
};

/// 중성자 물리량 변환 CLI. 하위 명령이 없으면 대화형 메뉴를 실행한다.
#[derive(Parser, Debug)]
#[command(author, version, about = "Neutron property calculator (Å, eV, K, m/s, 1/Å)")]
struct Cli {
    /// 표시 언어 (auto/ko/en)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,

    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// 로그 상세도 (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 하나의 값에서 다섯 물리량을 모두 계산한다
    All {
        /// 입력 물리량 (wavelength/energy/temperature/velocity/wavenumber)
        kind: QuantityKind,
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },
    /// 값을 다른 한 물리량으로 변환한다
    Convert {
        #[arg(allow_hyphen_values = true)]
        value: f64,
        #[arg(long)]
        from: QuantityKind,
        #[arg(long)]
        to: QuantityKind,
    },
    /// 차트용 곡선 데이터를 출력한다
    Sample {
        #[arg(long)]
        x_kind: QuantityKind,
        #[arg(long, allow_hyphen_values = true)]
        x_min: f64,
        #[arg(long, allow_hyphen_values = true)]
        x_max: f64,
        #[arg(long, default_value = "log")]
        x_scale: AxisScale,
        #[arg(long)]
        y_kind: QuantityKind,
        #[arg(long, allow_hyphen_values = true)]
        y_min: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        y_max: Option<f64>,
        #[arg(long, default_value = "log")]
        y_scale: AxisScale,
        #[arg(long, default_value_t = sampling::DEFAULT_SAMPLE_COUNT)]
        count: usize,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령 또는 대화형 메뉴를 실행한다.
fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(err) = try_run(cli) {
        eprintln!("{}: {err}", i18n::Translator::new("en").t(i18n::keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_from(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let mut tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    log::info!("언어: {}, 설정: {}", tr.language_code(), cli.config.display());

    match cli.command {
        None => app::run(&mut cfg, &mut tr, &cli.config)?,
        Some(Command::All { kind, value }) => {
            let state = conversion::convert_all(value, kind);
            ui_cli::print_state(&tr, &state, cfg.decimals);
        }
        Some(Command::Convert { value, from, to }) => {
            let result = conversion::convert(value, from, to);
            println!("{} {}", format_value(result, cfg.decimals), to.unit_symbol());
        }
        Some(Command::Sample {
            x_kind,
            x_min,
            x_max,
            x_scale,
            y_kind,
            y_min,
            y_max,
            y_scale,
            count,
        }) => {
            let x_axis = AxisSpec::new(x_kind, x_min, x_max, x_scale);
            let y_axis = AxisSpec::new(
                y_kind,
                y_min.unwrap_or(f64::NAN),
                y_max.unwrap_or(f64::NAN),
                y_scale,
            );
            let curve = sampling::sample_with_count(&x_axis, &y_axis, count);
            ui_cli::print_curve(&tr, &curve, &x_axis, &y_axis, cfg.decimals);
        }
    }
    Ok(())
}
