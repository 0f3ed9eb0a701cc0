use std::fmt::Display;
use std::sync::LazyLock;

use regex::Captures;
use regex::Regex;

use crate::ContainerNode;
use crate::LeafNode;
use crate::MdHtmlError;
use crate::MdHtmlResult;
use crate::Node;

/// `![alt](url)` where the url may contain one level of nested parentheses.
static IMAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"!\[(.*?)\]\(([^()]*(?:\([^()]*\)[^()]*)*)\)").expect("valid image pattern")
});

/// `[text](url)` with the same url grammar as images.
static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"\[(.*?)\]\(([^()]*(?:\([^()]*\)[^()]*)*)\)").expect("valid link pattern")
});

/// A typed span of inline text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextRun {
	/// Text without any markup.
	Plain(String),
	/// `**text**`
	Bold(String),
	/// `*text*`
	Italic(String),
	/// `` `text` ``
	Code(String),
	/// `[text](target)`
	Link { text: String, target: String },
	/// `![text](target)`, where `text` is the alt text.
	Image { text: String, target: String },
}

impl TextRun {
	pub fn plain(text: impl Into<String>) -> Self {
		Self::Plain(text.into())
	}

	pub fn link(text: impl Into<String>, target: impl Into<String>) -> Self {
		Self::Link {
			text: text.into(),
			target: target.into(),
		}
	}

	pub fn image(text: impl Into<String>, target: impl Into<String>) -> Self {
		Self::Image {
			text: text.into(),
			target: target.into(),
		}
	}

	/// The text carried by the run.
	pub fn text(&self) -> &str {
		match self {
			Self::Plain(text)
			| Self::Bold(text)
			| Self::Italic(text)
			| Self::Code(text)
			| Self::Link { text, .. }
			| Self::Image { text, .. } => text,
		}
	}

	/// Lower the run into its node tree fragment.
	pub fn into_node(self) -> Node {
		match self {
			Self::Plain(text) => Node::text(text),
			Self::Bold(text) => Node::container("b", vec![Node::text(text)]),
			Self::Italic(text) => Node::container("i", vec![Node::text(text)]),
			Self::Code(text) => Node::container("code", vec![Node::text(text)]),
			Self::Link { text, target } => {
				ContainerNode::with_children("a", vec![Node::text(text)])
					.with_attribute("href", target)
					.into()
			}
			Self::Image { text, target } => {
				LeafNode::new("")
					.with_tag("img")
					.with_attribute("src", target)
					.with_attribute("alt", text)
					.into()
			}
		}
	}
}

impl Display for TextRun {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Plain(text) => write!(f, "{text}"),
			Self::Bold(text) => write!(f, "**{text}**"),
			Self::Italic(text) => write!(f, "*{text}*"),
			Self::Code(text) => write!(f, "`{text}`"),
			Self::Link { text, target } => write!(f, "[{text}]({target})"),
			Self::Image { text, target } => write!(f, "![{text}]({target})"),
		}
	}
}

/// The paired markers that split plain text into typed runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
	Bold,
	Italic,
	Code,
}

impl Delimiter {
	pub fn marker(self) -> &'static str {
		match self {
			Self::Bold => "**",
			Self::Italic => "*",
			Self::Code => "`",
		}
	}

	fn wrap(self, text: &str) -> TextRun {
		let text = text.to_string();
		match self {
			Self::Bold => TextRun::Bold(text),
			Self::Italic => TextRun::Italic(text),
			Self::Code => TextRun::Code(text),
		}
	}
}

/// Split `text` into typed runs.
///
/// The passes run in a fixed order: images, links, bold, italic, then code.
/// Each pass only looks at the `Plain` runs left by the passes before it, so
/// markup inside an already typed run is kept as literal text.
pub fn tokenize(text: &str) -> MdHtmlResult<Vec<TextRun>> {
	let runs = vec![TextRun::plain(text)];
	let runs = split_images(runs);
	let runs = split_links(runs);
	let runs = split_delimiter(runs, Delimiter::Bold)?;
	let runs = split_delimiter(runs, Delimiter::Italic)?;
	split_delimiter(runs, Delimiter::Code)
}

/// Tokenize `text` and lower every run into a node.
pub fn text_to_nodes(text: &str) -> MdHtmlResult<Vec<Node>> {
	Ok(tokenize(text)?
		.into_iter()
		.map(TextRun::into_node)
		.collect())
}

pub fn split_images(runs: Vec<TextRun>) -> Vec<TextRun> {
	split_pattern(runs, &IMAGE_PATTERN, |_, _| true, |caps| {
		TextRun::image(&caps[1], &caps[2])
	})
}

/// Links are only taken when they are not preceded by `!`, which marks an
/// image that failed to match.
pub fn split_links(runs: Vec<TextRun>) -> Vec<TextRun> {
	split_pattern(
		runs,
		&LINK_PATTERN,
		|text, start| !text[..start].ends_with('!'),
		|caps| TextRun::link(&caps[1], &caps[2]),
	)
}

fn split_pattern(
	runs: Vec<TextRun>,
	pattern: &Regex,
	accept: impl Fn(&str, usize) -> bool,
	build: impl Fn(&Captures<'_>) -> TextRun,
) -> Vec<TextRun> {
	let mut output = Vec::with_capacity(runs.len());

	for run in runs {
		let TextRun::Plain(text) = run else {
			output.push(run);
			continue;
		};

		let mut cursor = 0;
		for caps in pattern.captures_iter(&text) {
			let Some(whole) = caps.get(0) else {
				continue;
			};

			if !accept(&text, whole.start()) {
				continue;
			}

			push_plain(&mut output, &text[cursor..whole.start()]);
			output.push(build(&caps));
			cursor = whole.end();
		}

		push_plain(&mut output, &text[cursor..]);
	}

	output
}

/// Split every `Plain` run on the delimiter's marker. Odd segments become the
/// typed run. An odd number of markers in a run leaves the last one unclosed
/// and fails the whole tokenization.
pub fn split_delimiter(runs: Vec<TextRun>, delimiter: Delimiter) -> MdHtmlResult<Vec<TextRun>> {
	let marker = delimiter.marker();
	let mut output = Vec::with_capacity(runs.len());

	for run in runs {
		let TextRun::Plain(text) = run else {
			output.push(run);
			continue;
		};

		let markers = text.matches(marker).count();
		if markers == 0 {
			output.push(TextRun::Plain(text));
			continue;
		}

		if markers % 2 == 1 {
			return Err(MdHtmlError::UnbalancedDelimiter {
				delimiter: marker.to_string(),
				text,
			});
		}

		for (index, segment) in text.split(marker).enumerate() {
			if segment.trim().is_empty() {
				continue;
			}

			if index % 2 == 1 {
				output.push(delimiter.wrap(segment));
			} else {
				output.push(TextRun::plain(segment));
			}
		}
	}

	Ok(output)
}

fn push_plain(output: &mut Vec<TextRun>, text: &str) {
	if !text.trim().is_empty() {
		output.push(TextRun::plain(text));
	}
}
