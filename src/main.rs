//! Topological commit ordering CLI.
//!
//! Reads the Git repository governing the current (or given) directory and
//! prints every commit reachable from a local branch head, descendants
//! first, with sticky annotations at lineage breaks and branch names on
//! head commits.
//!
//! # Exit Codes
//!
//! - `0`: Success
//! - `1`: Runtime failure (not a repository, packed storage, corrupt object)
//! - `2`: Invalid arguments

use std::env;
use std::path::PathBuf;
use std::process;

use topo_rs::{topo_order_output, ReadLimits};

fn print_usage(exe: &std::ffi::OsStr) {
    eprintln!(
        "usage: {} [OPTIONS] [<path>]

Prints a deterministic topological ordering of all commits reachable from
the repository's local branch heads. <path> defaults to the current
directory; the repository root is found by walking upward from it.

OPTIONS:
    --help, -h    Show this help message",
        exe.to_string_lossy()
    );
}

fn main() {
    let mut args = env::args_os();
    let exe = args.next().unwrap_or_else(|| "topo-rs".into());
    let mut start: Option<PathBuf> = None;

    for arg in args {
        if let Some(flag) = arg.to_str() {
            match flag {
                "--help" | "-h" => {
                    print_usage(&exe);
                    return;
                }
                _ if flag.starts_with('-') => {
                    eprintln!("unknown option: {flag}");
                    print_usage(&exe);
                    process::exit(2);
                }
                _ => {}
            }
        }
        if start.is_some() {
            eprintln!("at most one <path> argument is accepted");
            print_usage(&exe);
            process::exit(2);
        }
        start = Some(PathBuf::from(arg));
    }

    let start = start.unwrap_or_else(|| PathBuf::from("."));

    match topo_order_output(&start, &ReadLimits::default()) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("{}: {err}", exe.to_string_lossy());
            process::exit(1);
        }
    }
}
