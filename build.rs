use regex::Regex;
use std::fs;
use std::process::Command;

const UNDETERMINED: &str = "undetermined";

fn git(args: &[&str]) -> String {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|stdout| stdout.trim().to_string())
        .filter(|stdout| !stdout.is_empty())
        .unwrap_or_else(|| UNDETERMINED.into())
}

fn main() {
    println!("cargo:rustc-env=GIT_HASH={}", git(&["rev-parse", "HEAD"]));
    println!("cargo:rustc-env=GIT_COUNT={}", git(&["rev-list", "--count", "HEAD"]));
    println!("cargo:rerun-if-changed=.git/HEAD");

    // Rebuild when the checked out branch moves, not only when HEAD switches
    if let Ok(head) = fs::read_to_string(".git/HEAD") {
        let re = Regex::new(r"ref: (.*)").expect("valid HEAD regex");
        if let Some(branch) = re.captures(&head).and_then(|c| c.get(1)) {
            println!("cargo:rerun-if-changed=.git/{}", branch.as_str().trim());
        }
    }
}
