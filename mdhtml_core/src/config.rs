use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::MdHtmlError;
use crate::MdHtmlResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["mdhtml.toml", ".mdhtml.toml", ".config/mdhtml.toml"];

/// Configuration loaded from `mdhtml.toml`.
///
/// ```toml
/// [page]
/// template = "layout/page.html"
/// output_extension = "htm"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct MdHtmlConfig {
	/// Settings for rendering full html pages.
	#[serde(default)]
	pub page: PageConfig,
}

/// Configuration for the `[page]` section.
#[derive(Debug, Deserialize)]
pub struct PageConfig {
	/// Path to the html template, relative to the project root. The template
	/// receives `{{ Title }}` and `{{ Content }}`.
	#[serde(default = "default_template")]
	pub template: PathBuf,
	/// Extension given to generated pages when no output path is provided.
	#[serde(default = "default_output_extension")]
	pub output_extension: String,
}

impl Default for PageConfig {
	fn default() -> Self {
		Self {
			template: default_template(),
			output_extension: default_output_extension(),
		}
	}
}

fn default_template() -> PathBuf {
	PathBuf::from("template.html")
}

fn default_output_extension() -> String {
	"html".to_string()
}

impl MdHtmlConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> MdHtmlResult<Option<MdHtmlConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config: MdHtmlConfig =
			toml::from_str(&content).map_err(|e| MdHtmlError::ConfigParse(e.to_string()))?;

		Ok(Some(config))
	}

	/// The template path resolved against `root`, if the file exists.
	pub fn template_path(&self, root: &Path) -> Option<PathBuf> {
		let path = root.join(&self.page.template);
		path.is_file().then_some(path)
	}
}
