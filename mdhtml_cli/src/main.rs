use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use mdhtml_cli::Commands;
use mdhtml_cli::MdHtmlCli;
use mdhtml_cli::OutputFormat;
use mdhtml_core::AnyEmptyResult;
use mdhtml_core::AnyResult;
use mdhtml_core::DEFAULT_TEMPLATE;
use mdhtml_core::MdHtmlConfig;
use mdhtml_core::extract_title;
use mdhtml_core::parse_document;
use mdhtml_core::render_page;
use owo_colors::OwoColorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = MdHtmlCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_logging(args.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Render { file, format }) => run_render(file, *format),
		Some(Commands::Title { file }) => run_title(file),
		Some(Commands::Page {
			file,
			template,
			output,
		}) => run_page(&args, file, template.as_deref(), output.as_deref()),
		None => {
			eprintln!("No subcommand specified. Run `mdhtml --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<mdhtml_core::MdHtmlError>() {
			Ok(mdhtml_err) => {
				let report: miette::Report = (*mdhtml_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Log to stderr. `MDHTML_LOG` takes a filter directive, otherwise only
/// warnings are shown unless `--verbose` is set.
fn init_logging(verbose: bool, use_color: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_env("MDHTML_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.without_time()
		.init();
}

fn resolve_root(args: &MdHtmlCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn read_markdown(file: &Path) -> AnyResult<String> {
	std::fs::read_to_string(file)
		.map_err(|e| format!("failed to read {}: {e}", file.display()).into())
}

fn run_render(file: &Path, format: OutputFormat) -> AnyEmptyResult {
	let markdown = read_markdown(file)?;
	let node = parse_document(&markdown)?;

	match format {
		OutputFormat::Html => println!("{}", node.serialize()?),
		OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&node)?),
	}

	Ok(())
}

fn run_title(file: &Path) -> AnyEmptyResult {
	let markdown = read_markdown(file)?;
	println!("{}", extract_title(&markdown)?);

	Ok(())
}

fn run_page(
	args: &MdHtmlCli,
	file: &Path,
	template: Option<&Path>,
	output: Option<&Path>,
) -> AnyEmptyResult {
	let root = resolve_root(args);
	let config = MdHtmlConfig::load(&root)?.unwrap_or_default();

	let template = match template {
		Some(path) => {
			debug!(path = %path.display(), "using template from flag");
			std::fs::read_to_string(path)
				.map_err(|e| format!("failed to read template {}: {e}", path.display()))?
		}
		None => match config.template_path(&root) {
			Some(path) => {
				debug!(path = %path.display(), "using configured template");
				std::fs::read_to_string(&path)?
			}
			None => {
				debug!("using built-in template");
				DEFAULT_TEMPLATE.to_string()
			}
		},
	};

	let output = output.map_or_else(
		|| file.with_extension(&config.page.output_extension),
		Path::to_path_buf,
	);
	if output == file {
		return Err(format!(
			"refusing to overwrite the input file {}; pass --output",
			file.display()
		)
		.into());
	}

	let markdown = read_markdown(file)?;
	let page = render_page(&template, &markdown)?;
	std::fs::write(&output, page)?;

	println!("{} {}", colored!("Wrote", green), output.display());

	Ok(())
}
