//! `mdhtml_core` is the core library for the `mdhtml` command line tool. It turns a markdown document into a tree of generic markup nodes that serializes to html, and extracts the document title for page templates.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Markdown document
//!   → Segmenter (groups lines into blocks: headings, lists, quotes, fenced code, paragraphs)
//!   → Classifier (decides the kind of each block by ordered precedence)
//!   → Inline tokenizer (splits text into plain, bold, italic, code, link and image runs)
//!   → Assembler (builds nodes per block, nesting quotes by marker level)
//!   → Node tree (a `div` root that serializes to html)
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading from `mdhtml.toml`.
//! - [`page`]: Rendering a document into an html page template.
//!
//! ## Key Types
//!
//! - [`Node`]: A leaf or container node of the generated markup tree.
//! - [`TextRun`]: A typed span of inline text.
//! - [`BlockKind`]: The kind of a segmented block.
//! - [`MdHtmlError`]: Every failure the pipeline can report.
//!
//! ## Quick Start
//!
//! ```rust
//! use mdhtml_core::extract_title;
//! use mdhtml_core::parse_document;
//!
//! let markdown = "# Hello\n\nSome **bold** text.";
//! let title = extract_title(markdown).unwrap();
//! let html = parse_document(markdown).unwrap().serialize().unwrap();
//!
//! assert_eq!(title, "Hello");
//! assert_eq!(
//! 	html,
//! 	"<div><h1>Hello</h1><p>Some <b>bold</b> text.</p></div>"
//! );
//! ```

pub use block::*;
pub use config::*;
pub use document::*;
pub use error::*;
pub use inline::*;
pub use node::*;
pub use page::*;
pub use segmenter::*;

mod block;
pub mod config;
mod document;
#[allow(unused_assignments)]
mod error;
mod inline;
mod node;
pub mod page;
mod segmenter;

#[cfg(test)]
mod __fixtures;
