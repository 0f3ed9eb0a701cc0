mod common;

use mdhtml_core::AnyEmptyResult;
use rstest::rstest;
use serde_json::Value;
use similar_asserts::assert_eq;

#[rstest]
#[case::heading_and_paragraph(
	"# Hello\n\nSome **bold** text.",
	"<div><h1>Hello</h1><p>Some <b>bold</b> text.</p></div>\n"
)]
#[case::list("* one\n* two", "<div><ul><li>one</li><li>two</li></ul></div>\n")]
#[case::nested_quote(
	"> outer\n>> inner",
	"<div><blockquote>outer<blockquote>inner</blockquote></blockquote></div>\n"
)]
#[case::fence_with_comment(
	"```\n# install\npip install x\n```",
	"<div><pre><code>\n# install\npip install x\n</code></pre></div>\n"
)]
#[case::link(
	"[home](https://example.com)",
	"<div><a href=\"https://example.com\">home</a></div>\n"
)]
fn render_prints_html(#[case] markdown: &str, #[case] expected: &str) -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("doc.md");
	std::fs::write(&file, markdown)?;

	common::mdhtml_cmd()
		.arg("render")
		.arg(&file)
		.assert()
		.success()
		.stdout(expected.to_string());

	Ok(())
}

#[test]
fn render_prints_json_tree() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("doc.md");
	std::fs::write(&file, "# Hello\n\n![logo](logo.png)")?;

	let output = common::mdhtml_cmd()
		.arg("render")
		.arg(&file)
		.arg("--format")
		.arg("json")
		.output()?;
	assert!(output.status.success());

	let json: Value = serde_json::from_slice(&output.stdout)?;
	assert_eq!(json["kind"], "container");
	assert_eq!(json["tag"], "div");

	let heading = &json["children"][0];
	assert_eq!(heading["tag"], "h1");
	assert_eq!(heading["children"][0]["kind"], "leaf");
	assert_eq!(heading["children"][0]["value"], "Hello");

	let image = &json["children"][1];
	assert_eq!(image["kind"], "leaf");
	assert_eq!(image["tag"], "img");
	assert_eq!(image["attributes"]["src"], "logo.png");
	assert_eq!(image["attributes"]["alt"], "logo");

	Ok(())
}

#[test]
fn render_reports_unbalanced_markup() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("doc.md");
	std::fs::write(&file, "some **broken text")?;

	common::mdhtml_cmd()
		.arg("render")
		.arg(&file)
		.assert()
		.code(2)
		.stderr(predicates::str::contains("unbalanced"));

	Ok(())
}

#[test]
fn render_reports_empty_document() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("doc.md");
	std::fs::write(&file, "\n\n")?;

	common::mdhtml_cmd()
		.arg("render")
		.arg(&file)
		.assert()
		.code(2)
		.stderr(predicates::str::contains("empty"));

	Ok(())
}

#[test]
fn render_reports_missing_file() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::mdhtml_cmd()
		.arg("render")
		.arg(tmp.path().join("missing.md"))
		.assert()
		.code(2)
		.stderr(predicates::str::contains("failed to read"));

	Ok(())
}

#[test]
fn no_subcommand_exits_with_usage_hint() {
	common::mdhtml_cmd()
		.assert()
		.code(1)
		.stderr(predicates::str::contains("No subcommand specified"));
}
