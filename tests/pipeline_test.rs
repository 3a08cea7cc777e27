//! End-to-end pipeline tests against a mock machine.

use std::fs;
use std::path::PathBuf;

use devboot::config::{DevbootConfig, DEFAULT_HOMEBREW_INSTALL_URL};
use devboot::host::{Host, MockHost};
use devboot::runner::Pipeline;
use devboot::shell::ShellType;
use devboot::steps::BootstrapContext;
use devboot::ui::MockUI;
use devboot::DevbootError;
use tempfile::TempDir;

struct Machine {
    home: TempDir,
    project: TempDir,
}

impl Machine {
    fn new(manifest: Option<&str>) -> Self {
        let machine = Self {
            home: TempDir::new().unwrap(),
            project: TempDir::new().unwrap(),
        };
        if let Some(content) = manifest {
            fs::write(machine.project.path().join("mise.toml"), content).unwrap();
        }
        machine
    }

    fn ctx(&self) -> BootstrapContext {
        BootstrapContext {
            home: self.home.path().to_path_buf(),
            project_root: self.project.path().to_path_buf(),
            shell: ShellType::Zsh,
            config: DevbootConfig::default(),
        }
    }

    fn read(&self, dotfile: &str) -> String {
        fs::read_to_string(self.home.path().join(dotfile)).unwrap()
    }

    fn has(&self, dotfile: &str) -> bool {
        self.home.path().join(dotfile).exists()
    }
}

/// A Mac with nothing installed whose installers behave.
fn fresh_mac() -> MockHost {
    let mut host = MockHost::new();
    host.respond("uname -s", "Darwin\n");
    host.serve(DEFAULT_HOMEBREW_INSTALL_URL, "#!/bin/bash\necho install\n");
    host.creates("/bin/bash -c <script>", "/opt/homebrew/bin/brew");
    host.respond(
        "/opt/homebrew/bin/brew shellenv",
        "export HOMEBREW_PREFIX=\"/opt/homebrew\";\nexport PATH=\"/opt/homebrew/bin:/opt/homebrew/sbin${PATH+:$PATH}\";\n",
    );
    host.creates("brew install mise", "/opt/homebrew/bin/mise");
    host.respond(
        "mise activate bash --shims",
        "export PATH=\"/shims:$PATH\"\n",
    );
    host.creates("mise install", "/shims/node");
    host.respond("node --version", "v20.11.0\n");
    host
}

const NODE_MANIFEST: &str = "[tools]\nnode = \"20\"\n";

fn position(commands: &[String], command: &str) -> usize {
    commands
        .iter()
        .position(|c| c == command)
        .unwrap_or_else(|| panic!("`{command}` was not run: {commands:?}"))
}

#[test]
fn fresh_mac_is_fully_bootstrapped() {
    let machine = Machine::new(Some(NODE_MANIFEST));
    let mut host = fresh_mac();
    let mut ui = MockUI::new();

    let result = Pipeline::standard()
        .run(&machine.ctx(), &mut host, &mut ui)
        .unwrap();

    assert_eq!(result.steps.len(), 6);
    let commands = host.commands();
    assert!(position(&commands, "uname -s") < position(&commands, "/bin/bash -c <script>"));
    assert!(
        position(&commands, "/bin/bash -c <script>") < position(&commands, "brew install mise")
    );
    assert!(position(&commands, "brew install mise") < position(&commands, "mise install"));
    assert!(position(&commands, "mise install") < position(&commands, "brew install awscli"));
    assert!(position(&commands, "brew install awscli") < position(&commands, "node --version"));

    assert!(machine
        .read(".zprofile")
        .contains("eval \"$(/opt/homebrew/bin/brew shellenv)\""));
    assert!(machine.read(".zshrc").contains("eval \"$(mise activate zsh)\""));

    assert!(ui.has_success("node: v20.11.0"));
    assert!(ui.has_success("Bootstrap complete!"));
    assert!(ui.has_hint("source ~/.zshrc"));
    assert!(ui.warnings().is_empty(), "{:?}", ui.warnings());
}

#[test]
fn second_run_changes_nothing() {
    let machine = Machine::new(Some(NODE_MANIFEST));
    let ctx = machine.ctx();
    let mut host = fresh_mac();

    Pipeline::standard()
        .run(&ctx, &mut host, &mut MockUI::new())
        .unwrap();
    let zprofile = machine.read(".zprofile");
    let zshrc = machine.read(".zshrc");

    let mut ui = MockUI::new();
    Pipeline::standard().run(&ctx, &mut host, &mut ui).unwrap();

    assert_eq!(machine.read(".zprofile"), zprofile);
    assert_eq!(machine.read(".zshrc"), zshrc);
    assert_eq!(host.fetched().len(), 1);
    assert!(host.ran("brew upgrade mise"));
    assert!(ui.has_message("already installed"));
    assert!(ui.has_success("Bootstrap complete!"));
}

#[test]
fn other_platforms_stop_before_any_install() {
    let machine = Machine::new(Some(NODE_MANIFEST));
    let mut host = fresh_mac();
    host.respond("uname -s", "Linux\n");
    let mut ui = MockUI::new();

    let err = Pipeline::standard()
        .run(&machine.ctx(), &mut host, &mut ui)
        .unwrap_err();

    assert!(err.to_string().contains("Linux"));
    assert_eq!(host.commands(), vec!["uname -s"]);
    assert!(host.fetched().is_empty());
    assert!(!machine.has(".zprofile"));
    assert!(!machine.has(".zshrc"));
}

#[test]
fn missing_manifest_stops_before_named_tool() {
    let machine = Machine::new(None);
    let mut host = fresh_mac();
    let mut ui = MockUI::new();

    let err = Pipeline::standard()
        .run(&machine.ctx(), &mut host, &mut ui)
        .unwrap_err();

    match err {
        DevbootError::StepFailed { step, source } => {
            assert_eq!(step, "project-tools");
            assert!(matches!(*source, DevbootError::ManifestNotFound { .. }));
        }
        other => panic!("expected StepFailed, got {other:?}"),
    }
    assert!(!host.ran("brew install awscli"));
    assert!(!ui.has_success("Bootstrap complete!"));
}

#[test]
fn tolerated_failures_still_complete() {
    let machine = Machine::new(Some(NODE_MANIFEST));
    let mut host = fresh_mac();
    host.fail("mise trust mise.toml", 1, "untrusted");
    host.fail("mise install", 1, "mise ERROR failed to install node@20");
    let mut ui = MockUI::new();

    Pipeline::standard()
        .run(&machine.ctx(), &mut host, &mut ui)
        .unwrap();

    assert!(ui.has_warning("mise trust failed"));
    assert!(ui.has_warning("mise install failed"));
    assert!(ui.has_warning("node is not installed or not on PATH"));
    assert!(ui.has_success("Bootstrap complete!"));
}

#[test]
fn verification_covers_every_manifest_key() {
    let machine = Machine::new(Some("foo = \"1.0\"\nbar = \"2.0\"\n"));
    let mut host = fresh_mac();
    host.creates("mise install", "/shims/foo");
    host.fail("foo --version", 1, "");
    let mut ui = MockUI::new();

    Pipeline::standard()
        .run(&machine.ctx(), &mut host, &mut ui)
        .unwrap();

    assert!(ui.has_success("foo: Unknown version"));
    assert!(ui.has_warning("bar is not installed or not on PATH"));
}

#[test]
fn existing_dotfile_content_is_preserved() {
    let machine = Machine::new(Some(NODE_MANIFEST));
    fs::write(machine.home.path().join(".zshrc"), "alias ll='ls -la'").unwrap();
    let mut host = fresh_mac();

    Pipeline::standard()
        .run(&machine.ctx(), &mut host, &mut MockUI::new())
        .unwrap();

    assert_eq!(
        machine.read(".zshrc"),
        "alias ll='ls -la'\neval \"$(mise activate zsh)\"\n"
    );
}

#[test]
fn installer_failure_is_fatal() {
    let machine = Machine::new(Some(NODE_MANIFEST));
    let mut host = fresh_mac();
    host.fail("/bin/bash -c <script>", 1, "Don't run this as root!");
    let mut ui = MockUI::new();

    let err = Pipeline::standard()
        .run(&machine.ctx(), &mut host, &mut ui)
        .unwrap_err();

    assert!(err.to_string().contains("homebrew"));
    assert!(!host.ran("brew install mise"));
}

#[test]
fn mise_install_failure_is_fatal() {
    let machine = Machine::new(Some(NODE_MANIFEST));
    let mut host = fresh_mac();
    host.fail("brew install mise", 1, "Error: No such formula");

    let err = Pipeline::standard()
        .run(&machine.ctx(), &mut host, &mut MockUI::new())
        .unwrap_err();

    assert!(err.to_string().contains("Failed to install mise"));
    assert!(!host.ran("mise install"));
}

#[test]
fn named_tool_failure_is_fatal() {
    let machine = Machine::new(Some(NODE_MANIFEST));
    let mut host = fresh_mac();
    host.fail("brew install awscli", 1, "");

    let err = Pipeline::standard()
        .run(&machine.ctx(), &mut host, &mut MockUI::new())
        .unwrap_err();

    assert!(err.to_string().contains("awscli"));
    assert!(!host.ran("node --version"));
}

#[test]
fn configured_tool_and_shell_are_used() {
    let machine = Machine::new(Some(NODE_MANIFEST));
    let mut ctx = machine.ctx();
    ctx.shell = ShellType::Bash;
    ctx.config.tool = "gh".to_string();
    let mut host = fresh_mac();

    Pipeline::standard()
        .run(&ctx, &mut host, &mut MockUI::new())
        .unwrap();

    assert!(host.ran("brew install gh"));
    assert!(machine.read(".bash_profile").contains("brew shellenv"));
    assert!(machine.read(".bashrc").contains("mise activate bash"));
    assert!(!machine.has(".zshrc"));
}

#[test]
fn path_is_updated_for_later_steps() {
    let machine = Machine::new(Some(NODE_MANIFEST));
    let mut host = fresh_mac();

    Pipeline::standard()
        .run(&machine.ctx(), &mut host, &mut MockUI::new())
        .unwrap();

    let path = host.var("PATH").unwrap();
    assert!(path.starts_with("/shims:/opt/homebrew/bin:"));
    assert_eq!(host.resolve("node"), Some(PathBuf::from("/shims/node")));
}
