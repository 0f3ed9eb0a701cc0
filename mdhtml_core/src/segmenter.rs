use tracing::trace;

use crate::block::FENCE;
use crate::block::ordered_marker;

/// What the lines accumulated so far look like. Decides how the next line is
/// treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Accumulating {
	/// Nothing accumulated yet.
	Nothing,
	/// A fenced code block that has not been closed.
	Fence,
	/// A single heading line.
	Heading,
	/// Lines that all start with `*`, `-` or a digit.
	List,
	/// Lines that all start with `>`.
	Quote,
	/// Any other single line.
	Line,
}

/// Walks a document line by line, grouping lines into blocks.
struct Segmenter<'a> {
	/// The lines of the block currently being built.
	current: Vec<&'a str>,
	/// Completed blocks, in document order.
	blocks: Vec<String>,
}

impl<'a> Segmenter<'a> {
	fn new() -> Self {
		Self {
			current: vec![],
			blocks: vec![],
		}
	}

	fn state(&self) -> Accumulating {
		let Some(first) = self.current.first() else {
			return Accumulating::Nothing;
		};

		if first.starts_with(FENCE) {
			Accumulating::Fence
		} else if self.current.len() == 1 && first.starts_with('#') {
			Accumulating::Heading
		} else if self.current.iter().all(|line| is_list_line(line)) {
			Accumulating::List
		} else if self.current.iter().all(|line| line.starts_with('>')) {
			Accumulating::Quote
		} else {
			Accumulating::Line
		}
	}

	fn push_line(&mut self, line: &'a str) {
		let state = self.state();

		if line.trim().is_empty() {
			match state {
				Accumulating::Quote => {
					self.flush();
					return;
				}
				Accumulating::Fence => {}
				_ => return,
			}
		}

		match state {
			Accumulating::Fence => {
				self.current.push(line);
				if line.ends_with(FENCE) {
					self.flush();
				}
			}
			Accumulating::List => {
				if self.continues_ordered_list(line) || is_unordered_marker(line) {
					self.current.push(line);
				} else {
					self.start_block(line);
				}
			}
			Accumulating::Quote if line.starts_with('>') => {
				self.current.push(line);
			}
			Accumulating::Nothing
			| Accumulating::Heading
			| Accumulating::Quote
			| Accumulating::Line => {
				self.start_block(line);
			}
		}
	}

	/// A line continues an ordered list when it carries the next index. The
	/// index is derived from the number of non-blank lines accumulated so far.
	fn continues_ordered_list(&self, line: &str) -> bool {
		let items = self
			.current
			.iter()
			.filter(|line| !line.trim().is_empty())
			.count();

		line.starts_with(&ordered_marker(items + 1))
	}

	/// Flush the current block and start a new one with `line`. A fence that
	/// opens and closes on the same line is complete immediately: the lines
	/// after it start new blocks instead of being absorbed into the fence until
	/// the next line ending in a fence marker.
	fn start_block(&mut self, line: &'a str) {
		self.flush();
		self.current.push(line);

		if line.len() >= FENCE.len() * 2 && line.starts_with(FENCE) && line.ends_with(FENCE) {
			self.flush();
		}
	}

	fn flush(&mut self) {
		if self.current.is_empty() {
			return;
		}

		let block = self.current.join("\n");
		trace!(lines = self.current.len(), "segmented block");
		self.current.clear();
		self.blocks.push(block);
	}

	fn finish(mut self) -> Vec<String> {
		self.flush();
		self.blocks
	}
}

fn is_list_line(line: &str) -> bool {
	is_unordered_marker(line) || line.starts_with(|ch: char| ch.is_ascii_digit())
}

fn is_unordered_marker(line: &str) -> bool {
	line.starts_with('*') || line.starts_with('-')
}

/// Split a document into blocks.
///
/// Paragraph lines become blocks of their own. Lists and quotes absorb the
/// lines that continue them, fenced code is kept verbatim including blank
/// lines, and a blank line ends a quote.
pub fn segment(document: &str) -> Vec<String> {
	let mut segmenter = Segmenter::new();

	for line in document.lines() {
		segmenter.push_line(line);
	}

	segmenter.finish()
}
