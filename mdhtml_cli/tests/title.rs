mod common;

use mdhtml_core::AnyEmptyResult;

#[test]
fn title_prints_first_heading() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("doc.md");
	std::fs::write(&file, "## Subtitle\n\n#  My Title  \n\nBody")?;

	common::mdhtml_cmd()
		.arg("title")
		.arg(&file)
		.assert()
		.success()
		.stdout("My Title\n");

	Ok(())
}

#[test]
fn title_fails_without_heading() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("doc.md");
	std::fs::write(&file, "## Only a subtitle")?;

	common::mdhtml_cmd()
		.arg("title")
		.arg(&file)
		.assert()
		.code(2)
		.stderr(predicates::str::contains("no top-level title found"));

	Ok(())
}
