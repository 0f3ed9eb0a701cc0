mod common;

use mdhtml_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;
use similar_asserts::assert_eq;

#[test]
fn page_uses_built_in_template() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("doc.md");
	std::fs::write(&file, "# Hi\n\nSome *text*")?;

	common::mdhtml_cmd()
		.arg("page")
		.arg(&file)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Wrote").and(predicates::str::contains("doc.html")));

	let page = std::fs::read_to_string(tmp.path().join("doc.html"))?;
	assert!(page.contains("<title>Hi</title>"));
	assert!(page.contains("<article><div><h1>Hi</h1><p>Some <i>text</i></p></div></article>"));

	Ok(())
}

#[test]
fn page_uses_template_flag() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("doc.md");
	let template = tmp.path().join("custom.html");
	let output = tmp.path().join("out.html");
	std::fs::write(&file, "# Hi\n\ntext")?;
	std::fs::write(&template, "<h1>{{ Title }}</h1>{{ Content }}")?;

	common::mdhtml_cmd()
		.arg("page")
		.arg(&file)
		.arg("--template")
		.arg(&template)
		.arg("--output")
		.arg(&output)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	assert_eq!(
		std::fs::read_to_string(&output)?,
		"<h1>Hi</h1><div><h1>Hi</h1><p>text</p></div>"
	);

	Ok(())
}

#[test]
fn page_uses_configured_template() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("doc.md");
	std::fs::create_dir_all(tmp.path().join("layout"))?;
	std::fs::write(&file, "# Hi\n\ntext")?;
	std::fs::write(
		tmp.path().join("mdhtml.toml"),
		"[page]\ntemplate = \"layout/page.html\"\noutput_extension = \"htm\"\n",
	)?;
	std::fs::write(
		tmp.path().join("layout/page.html"),
		"<main data-title=\"{{ Title }}\">{{ Content }}</main>",
	)?;

	common::mdhtml_cmd()
		.arg("page")
		.arg(&file)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	assert_eq!(
		std::fs::read_to_string(tmp.path().join("doc.htm"))?,
		"<main data-title=\"Hi\"><div><h1>Hi</h1><p>text</p></div></main>"
	);

	Ok(())
}

#[test]
fn page_refuses_to_overwrite_input() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("doc.html");
	std::fs::write(&file, "# Hi")?;

	common::mdhtml_cmd()
		.arg("page")
		.arg(&file)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("refusing to overwrite"));

	assert_eq!(std::fs::read_to_string(&file)?, "# Hi");

	Ok(())
}

#[test]
fn page_reports_invalid_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("doc.md");
	std::fs::write(&file, "# Hi")?;
	std::fs::write(tmp.path().join("mdhtml.toml"), "[page\n")?;

	common::mdhtml_cmd()
		.arg("page")
		.arg(&file)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("failed to parse config file"));

	Ok(())
}

#[test]
fn page_requires_title() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("doc.md");
	std::fs::write(&file, "no title here")?;

	common::mdhtml_cmd()
		.arg("page")
		.arg(&file)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("no top-level title found"));

	assert!(!tmp.path().join("doc.html").exists());

	Ok(())
}

#[test]
fn page_verbose_logs_template_choice() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("doc.md");
	std::fs::write(&file, "# Hi")?;

	common::mdhtml_cmd()
		.arg("page")
		.arg(&file)
		.arg("--path")
		.arg(tmp.path())
		.arg("--verbose")
		.assert()
		.success()
		.stderr(predicates::str::contains("using built-in template"));

	Ok(())
}
