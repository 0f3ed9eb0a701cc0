use assert_cmd::Command;

pub fn mdhtml_cmd() -> Command {
	let mut cmd = Command::new(env!("CARGO_BIN_EXE_mdhtml"));
	cmd.env("NO_COLOR", "1").env_remove("MDHTML_LOG");
	cmd
}
