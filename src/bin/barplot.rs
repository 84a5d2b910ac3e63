use barplot::api::BarChart;
use barplot::core::{
    DEFAULT_SAMPLE_COUNT, LayoutConfig, NARROW_PRESET_MAX, UniformSampleSource, WIDE_PRESET_MAX,
};
use barplot::render::{SvgRenderer, html_page};
use barplot::telemetry::init_default_tracing;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Preset {
    Wide,
    Narrow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Svg,
    Html,
    Json,
}

#[derive(Debug)]
struct CliArgs {
    preset: Option<Preset>,
    config_path: Option<PathBuf>,
    count: usize,
    max_value: Option<f64>,
    seed: Option<u64>,
    format: OutputFormat,
    output: Option<PathBuf>,
    help: bool,
}

impl CliArgs {
    fn preset_or_default(&self) -> Preset {
        self.preset.unwrap_or(Preset::Wide)
    }

    /// Upper bound of the sample range. With `--config` and no `--max`, the
    /// wide preset's range applies.
    fn sample_max(&self) -> f64 {
        self.max_value.unwrap_or(match self.preset_or_default() {
            Preset::Wide => WIDE_PRESET_MAX,
            Preset::Narrow => NARROW_PRESET_MAX,
        })
    }
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        print_usage();
        return Ok(());
    }

    let output = render_output(&args)?;
    match &args.output {
        Some(path) => fs::write(path, output)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?,
        None => print!("{output}"),
    }
    Ok(())
}

fn load_config(args: &CliArgs) -> Result<LayoutConfig, String> {
    match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            LayoutConfig::from_json_str(&raw).map_err(|err| err.to_string())
        }
        None => Ok(match args.preset_or_default() {
            Preset::Wide => LayoutConfig::wide_steelblue(),
            Preset::Narrow => LayoutConfig::narrow_blue(),
        }),
    }
}

fn render_output(args: &CliArgs) -> Result<String, String> {
    let config = load_config(args)?;
    let mut source = match args.seed {
        Some(seed) => UniformSampleSource::new(args.count, args.sample_max(), seed),
        None => UniformSampleSource::from_entropy(args.count, args.sample_max()),
    }
    .map_err(|err| err.to_string())?;

    let mut chart = BarChart::new(SvgRenderer::new(), config).map_err(|err| err.to_string())?;
    let frame = chart
        .render_from(&mut source)
        .map_err(|err| err.to_string())?;

    match args.format {
        OutputFormat::Svg => Ok(chart.renderer_mut().take_document()),
        OutputFormat::Html => Ok(html_page("Bar plot", chart.renderer().document())),
        OutputFormat::Json => frame
            .to_json_contract_v1_pretty(chart.config())
            .map_err(|err| err.to_string()),
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliArgs, String> {
    let mut cli = CliArgs {
        preset: None,
        config_path: None,
        count: DEFAULT_SAMPLE_COUNT,
        max_value: None,
        seed: None,
        format: OutputFormat::Svg,
        output: None,
        help: false,
    };

    while let Some(arg) = args.next() {
        let mut value_for = |flag: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match arg.as_str() {
            "--preset" => {
                cli.preset = Some(match value_for("--preset")?.as_str() {
                    "wide" => Preset::Wide,
                    "narrow" => Preset::Narrow,
                    other => return Err(format!("unknown preset `{other}`")),
                });
            }
            "--config" => cli.config_path = Some(PathBuf::from(value_for("--config")?)),
            "--count" => {
                let value = value_for("--count")?;
                cli.count = value
                    .parse()
                    .map_err(|err| format!("invalid --count `{value}`: {err}"))?;
            }
            "--max" => {
                let value = value_for("--max")?;
                cli.max_value = Some(
                    value
                        .parse()
                        .map_err(|err| format!("invalid --max `{value}`: {err}"))?,
                );
            }
            "--seed" => {
                let value = value_for("--seed")?;
                cli.seed = Some(
                    value
                        .parse()
                        .map_err(|err| format!("invalid --seed `{value}`: {err}"))?,
                );
            }
            "--format" => {
                cli.format = match value_for("--format")?.as_str() {
                    "svg" => OutputFormat::Svg,
                    "html" => OutputFormat::Html,
                    "json" => OutputFormat::Json,
                    other => return Err(format!("unknown format `{other}`")),
                };
            }
            "--output" => cli.output = Some(PathBuf::from(value_for("--output")?)),
            "--help" | "-h" => cli.help = true,
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    if cli.preset.is_some() && cli.config_path.is_some() {
        return Err("--preset and --config are mutually exclusive".to_owned());
    }

    Ok(cli)
}

fn print_usage() {
    println!("{}", usage_message());
}

fn usage_message() -> String {
    format!(
        "usage: barplot [--preset wide|narrow | --config <file.json>] [--count <n>] \
         [--max <value>] [--seed <u64>] [--format svg|html|json] [--output <path>]\n\
         defaults: --preset wide --count {DEFAULT_SAMPLE_COUNT} --format svg, output to stdout\n\
         samples are drawn from [0, max); max defaults to {WIDE_PRESET_MAX} for the wide preset \
         and --config, {NARROW_PRESET_MAX} for the narrow preset"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use barplot::api::BarLayoutJsonContractV1;

    fn parse(args: &[&str]) -> Result<CliArgs, String> {
        parse_args(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn defaults_are_wide_preset_ten_samples_svg() {
        let args = parse(&[]).expect("parse");
        assert_eq!(args.preset_or_default(), Preset::Wide);
        assert_eq!(args.count, DEFAULT_SAMPLE_COUNT);
        assert_eq!(args.count, 10);
        assert_eq!(args.format, OutputFormat::Svg);
        assert_eq!(args.sample_max(), WIDE_PRESET_MAX);
        assert!(args.config_path.is_none());
        assert!(args.output.is_none());
        assert!(!args.help);
    }

    #[test]
    fn presets_select_layout_and_sample_range() {
        let narrow = parse(&["--preset", "narrow"]).expect("parse");
        assert_eq!(narrow.preset_or_default(), Preset::Narrow);
        assert_eq!(narrow.sample_max(), NARROW_PRESET_MAX);
        assert_eq!(
            load_config(&narrow).expect("config"),
            LayoutConfig::narrow_blue()
        );

        let wide = parse(&["--preset", "wide"]).expect("parse");
        assert_eq!(wide.preset_or_default(), Preset::Wide);
        assert_eq!(
            load_config(&wide).expect("config"),
            LayoutConfig::wide_steelblue()
        );
    }

    #[test]
    fn explicit_max_overrides_preset_range() {
        let args = parse(&["--preset", "narrow", "--max", "12.5"]).expect("parse");
        assert_eq!(args.sample_max(), 12.5);
    }

    #[test]
    fn unknown_preset_is_rejected() {
        let err = parse(&["--preset", "tall"]).expect_err("unknown preset must fail");
        assert!(err.contains("unknown preset `tall`"));
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = parse(&["--format", "png"]).expect_err("unknown format must fail");
        assert!(err.contains("unknown format `png`"));
    }

    #[test]
    fn missing_flag_value_is_rejected() {
        let err = parse(&["--seed"]).expect_err("missing value must fail");
        assert_eq!(err, "missing value for --seed");
    }

    #[test]
    fn non_numeric_count_is_rejected() {
        let err = parse(&["--count", "ten"]).expect_err("non-numeric count must fail");
        assert!(err.contains("invalid --count `ten`"));
    }

    #[test]
    fn unknown_argument_is_rejected_with_usage() {
        let err = parse(&["--width", "10"]).expect_err("unknown argument must fail");
        assert!(err.contains("unknown argument `--width`"));
        assert!(err.contains("usage: barplot"));
    }

    #[test]
    fn preset_and_config_together_are_rejected() {
        let err = parse(&["--config", "bars.json", "--preset", "narrow"])
            .expect_err("conflicting layout sources must fail");
        assert!(err.contains("mutually exclusive"));
    }

    #[test]
    fn help_flag_is_recorded() {
        assert!(parse(&["-h"]).expect("parse").help);
    }

    #[test]
    fn json_output_is_a_valid_layout_contract() {
        let args = parse(&["--preset", "narrow", "--seed", "9", "--format", "json"])
            .expect("parse");
        let json = render_output(&args).expect("render");

        let contract = BarLayoutJsonContractV1::from_json_str(&json).expect("contract");
        assert_eq!(contract.config, LayoutConfig::narrow_blue());
        assert_eq!(contract.rects.len(), 10);
        for rect in &contract.rects {
            assert!((0.0..NARROW_PRESET_MAX).contains(&rect.height));
            assert_eq!(rect.fill, "blue");
        }
    }

    #[test]
    fn svg_and_html_outputs_wrap_the_same_seeded_chart() {
        let svg = render_output(&parse(&["--seed", "4"]).expect("parse")).expect("svg");
        let html = render_output(&parse(&["--seed", "4", "--format", "html"]).expect("parse"))
            .expect("html");

        assert!(svg.starts_with("<svg "));
        assert_eq!(svg.matches("<rect").count(), DEFAULT_SAMPLE_COUNT);
        assert!(html.contains(&svg));
        assert!(html.contains(r#"<div id="barplot">"#));
    }

    #[test]
    fn missing_config_file_is_reported() {
        let args = parse(&["--config", "/nonexistent/barplot-config.json"]).expect("parse");
        let err = render_output(&args).expect_err("missing file must fail");
        assert!(err.contains("failed to read config"));
    }
}
