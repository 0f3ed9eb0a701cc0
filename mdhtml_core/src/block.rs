use std::fmt::Display;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// The marker that opens and closes a fenced code block.
pub const FENCE: &str = "```";

/// Anchored at the start of the whole block, never at later lines, so a `#`
/// line inside a fence or paragraph does not make a heading.
static HEADING_PATTERN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^#{1,6}[ \t]").expect("valid heading pattern"));

/// The kind of a segmented block, decided by [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockKind {
	Heading,
	Code,
	Quote,
	OrderedList,
	UnorderedList,
	Paragraph,
	Link,
	Image,
}

impl Display for BlockKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			Self::Heading => "heading",
			Self::Code => "code",
			Self::Quote => "quote",
			Self::OrderedList => "ordered list",
			Self::UnorderedList => "unordered list",
			Self::Paragraph => "paragraph",
			Self::Link => "link",
			Self::Image => "image",
		};

		write!(f, "{name}")
	}
}

/// Decide the kind of a block. The first matching rule wins:
///
/// 1. the block starts with a `#` to `######` heading marker
/// 2. the block starts and ends with a fence
/// 3. every line is quoted with `>`
/// 4. every line starts with `* ` or `- `
/// 5. every line `i` starts with `{i + 1}. `
/// 6. the block is a lone `![alt](src)` image
/// 7. the block is a lone `[text](href)` link
/// 8. anything else is a paragraph
pub fn classify(block: &str) -> BlockKind {
	let trimmed = block.trim();

	if trimmed.is_empty() {
		return BlockKind::Paragraph;
	}

	if HEADING_PATTERN.is_match(block) {
		BlockKind::Heading
	} else if block.starts_with(FENCE) && block.ends_with(FENCE) {
		BlockKind::Code
	} else if block.lines().all(|line| line.starts_with('>')) {
		BlockKind::Quote
	} else if block
		.lines()
		.all(|line| line.starts_with("* ") || line.starts_with("- "))
	{
		BlockKind::UnorderedList
	} else if block
		.lines()
		.enumerate()
		.all(|(index, line)| line.starts_with(&ordered_marker(index + 1)))
	{
		BlockKind::OrderedList
	} else if trimmed.starts_with("![") && trimmed.ends_with(')') {
		BlockKind::Image
	} else if trimmed.starts_with('[') && trimmed.ends_with(')') {
		BlockKind::Link
	} else {
		BlockKind::Paragraph
	}
}

/// The marker of the ordered list item at 1-based `position`, e.g. `3. `.
pub(crate) fn ordered_marker(position: usize) -> String {
	format!("{position}. ")
}
