use tracing::debug;
use tracing::trace;

use crate::BlockKind;
use crate::ContainerNode;
use crate::MdHtmlError;
use crate::MdHtmlResult;
use crate::Node;
use crate::classify;
use crate::segment;
use crate::text_to_nodes;

/// The tag of the container wrapping a whole document.
pub const ROOT_TAG: &str = "div";

/// Parse a markdown document into a node tree rooted at a `div` container.
///
/// Every block is segmented, classified and converted in document order. Any
/// error aborts the whole conversion.
pub fn parse_document(markdown: &str) -> MdHtmlResult<Node> {
	if markdown.trim().is_empty() {
		return Err(MdHtmlError::EmptyDocument);
	}

	let blocks = segment(markdown);
	debug!(bytes = markdown.len(), blocks = blocks.len(), "parsing document");

	let mut root = ContainerNode::new(ROOT_TAG);
	for block in &blocks {
		if block.trim().is_empty() {
			continue;
		}

		let kind = classify(block);
		trace!(%kind, "converting block");
		root.children.extend(block_to_nodes(block, kind)?);
	}

	Ok(root.into())
}

/// Convert a single block into the nodes it contributes to the document.
pub fn block_to_nodes(block: &str, kind: BlockKind) -> MdHtmlResult<Vec<Node>> {
	let nodes = match kind {
		BlockKind::Heading => vec![heading_to_node(block)?],
		BlockKind::Code => vec![code_to_node(block)],
		BlockKind::Paragraph => vec![Node::container("p", text_to_nodes(block)?)],
		BlockKind::Image | BlockKind::Link => text_to_nodes(block)?,
		BlockKind::OrderedList => vec![list_to_node("ol", block, strip_ordered_marker)?],
		BlockKind::UnorderedList => vec![list_to_node("ul", block, strip_unordered_marker)?],
		BlockKind::Quote => quote_to_node(block)?.into_iter().collect(),
	};

	Ok(nodes)
}

fn heading_to_node(block: &str) -> MdHtmlResult<Node> {
	let level = block.chars().take_while(|ch| *ch == '#').count().clamp(1, 6);
	let text = block.trim_start_matches('#').trim();

	Ok(Node::container(format!("h{level}"), text_to_nodes(text)?))
}

/// The fence backticks are stripped from both ends. Anything after the opening
/// fence, including a language name, stays part of the code.
fn code_to_node(block: &str) -> Node {
	let code = block.trim_start_matches('`').trim_end_matches('`');

	Node::container("pre", vec![Node::container("code", vec![Node::text(code)])])
}

fn list_to_node(tag: &str, block: &str, strip_marker: fn(&str) -> &str) -> MdHtmlResult<Node> {
	let mut list = ContainerNode::new(tag);

	for line in block.lines() {
		let line = line.trim();
		if line.is_empty() {
			continue;
		}

		let item = text_to_nodes(strip_marker(line))?;
		list.append_child(Node::container("li", item));
	}

	Ok(list.into())
}

fn strip_ordered_marker(line: &str) -> &str {
	line.trim_start_matches(|ch: char| ch.is_ascii_digit() || ch == '.')
		.trim_start()
}

fn strip_unordered_marker(line: &str) -> &str {
	line.strip_prefix(['*', '-']).unwrap_or(line).trim_start()
}

/// Count the `>` markers in the leading run of `>` and spaces, returning the
/// level and the trimmed content after the markers.
fn quote_level(line: &str) -> (usize, &str) {
	let content = line.trim_start_matches(['>', ' ']);
	let prefix = &line[..line.len() - content.len()];
	let level = prefix.chars().filter(|ch| *ch == '>').count();

	(level, content.trim())
}

/// Nest quoted lines by their marker level.
///
/// Open `blockquote` containers live on a stack with one entry per level.
/// Text at the current level is collected until the level changes, then
/// tokenized into the container on top of the stack. Deeper levels push new
/// containers; shallower levels pop containers into their parents.
fn quote_to_node(block: &str) -> MdHtmlResult<Option<Node>> {
	let mut stack: Vec<ContainerNode> = vec![];
	let mut pending: Vec<&str> = vec![];

	for line in block.lines() {
		let (level, content) = quote_level(line);
		let level = level.max(1);

		if level != stack.len() {
			flush_quote_text(&mut stack, &mut pending)?;
		}

		while stack.len() < level {
			stack.push(ContainerNode::new("blockquote"));
		}

		close_quotes(&mut stack, level);
		pending.push(content);
	}

	flush_quote_text(&mut stack, &mut pending)?;
	close_quotes(&mut stack, 1);
	trace!(open = stack.len(), "closed quote block");

	Ok(stack.pop().map(Node::from))
}

fn flush_quote_text(stack: &mut [ContainerNode], pending: &mut Vec<&str>) -> MdHtmlResult<()> {
	let text = pending.join("\n");
	pending.clear();

	let Some(top) = stack.last_mut() else {
		return Ok(());
	};

	if !text.is_empty() {
		top.children.extend(text_to_nodes(&text)?);
	}

	Ok(())
}

/// Pop open quotes until only `level` remain, nesting each popped quote inside
/// the one below it.
fn close_quotes(stack: &mut Vec<ContainerNode>, level: usize) {
	while stack.len() > level.max(1) {
		let Some(quote) = stack.pop() else {
			break;
		};

		if let Some(parent) = stack.last_mut() {
			parent.append_child(quote);
		}
	}
}

/// Find the document title: the text of the first line that starts with a
/// single `#`. Deeper headings never count.
pub fn extract_title(markdown: &str) -> MdHtmlResult<String> {
	markdown
		.lines()
		.find_map(|line| {
			let rest = line.strip_prefix('#')?;
			if rest.starts_with('#') {
				return None;
			}

			Some(rest.trim().to_string())
		})
		.ok_or(MdHtmlError::TitleNotFound)
}
