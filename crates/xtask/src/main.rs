use anyhow::Context;
use serde::Deserialize;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

/// Workspace crates each crate may NOT depend on.
const FORBIDDEN: &[(&str, &[&str])] = &[
    (
        "charforge-domain",
        &["charforge-shared", "charforge-engine", "charforge-player"],
    ),
    ("charforge-shared", &["charforge-engine", "charforge-player"]),
    ("charforge-engine", &["charforge-player"]),
    ("charforge-player", &["charforge-engine"]),
];

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    /// `null` for normal dependencies, "dev" or "build" otherwise
    kind: Option<String>,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let violations = violations(&metadata);
    if !violations.is_empty() {
        for violation in &violations {
            eprintln!("arch-check: {violation}");
        }
        anyhow::bail!("{} dependency rule(s) violated", violations.len());
    }

    println!("arch-check: OK ({} packages)", metadata.packages.len());
    Ok(())
}

fn violations(metadata: &Metadata) -> Vec<String> {
    let mut out = Vec::new();
    for package in &metadata.packages {
        let Some((_, forbidden)) = FORBIDDEN.iter().find(|(name, _)| *name == package.name) else {
            continue;
        };
        for dep in &package.dependencies {
            if dep.kind.as_deref() == Some("dev") {
                continue;
            }
            if forbidden.contains(&dep.name.as_str()) {
                out.push(format!("{} must not depend on {}", package.name, dep.name));
            }
        }
    }
    out
}
