use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Convert markdown documents into html.",
	long_about = "mdhtml converts a subset of markdown (headings, paragraphs, lists, \
	              blockquotes, fenced code, links, images and inline emphasis) into \
	              html.\n\nQuick start:\n  mdhtml render README.md  Print the html \
	              fragment\n  mdhtml title README.md   Print the document title\n  \
	              mdhtml page README.md    Write a full html page"
)]
pub struct MdHtmlCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory. Used to discover `mdhtml.toml`.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Convert a markdown file and print the result.
	///
	/// The whole document is wrapped in a single `div`. Use `--format json`
	/// to print the node tree instead of the serialized html.
	Render {
		/// The markdown file to convert.
		file: PathBuf,

		/// Output format for the converted document.
		#[arg(long, value_enum, default_value_t = OutputFormat::Html)]
		format: OutputFormat,
	},
	/// Print the title of a markdown file.
	///
	/// The title is the text of the first line that starts with a single `#`.
	/// Fails when the document has no such line.
	Title {
		/// The markdown file to read.
		file: PathBuf,
	},
	/// Render a markdown file into a full html page.
	///
	/// The template receives `{{ Title }}` and `{{ Content }}`. It is taken
	/// from `--template`, then from the `[page]` section of `mdhtml.toml`,
	/// and falls back to a built-in minimal page.
	Page {
		/// The markdown file to convert.
		file: PathBuf,

		/// Path to the html template.
		#[arg(long, short)]
		template: Option<PathBuf>,

		/// Where to write the page. Defaults to the input path with the
		/// configured output extension.
		#[arg(long, short)]
		output: Option<PathBuf>,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// The serialized html fragment.
	Html,
	/// The node tree as JSON for programmatic consumption.
	Json,
}
