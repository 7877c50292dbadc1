//! End-to-end tests: fixture repository in, rendered listing out.

use topo_rs::{topo_order_output, ReadLimits, TopoOrderError};

use crate::repo_fixture::{full_hex, RepoFixture};

#[test]
fn linear_history_lists_head_to_root() {
    let repo = RepoFixture::new();
    let a = full_hex(b'a');
    let b = full_hex(b'b');
    let c = full_hex(b'c');
    repo.write_commit(&a, &[]);
    repo.write_commit(&b, &[&a]);
    repo.write_commit(&c, &[&b]);
    repo.write_ref("main", &c);

    let out = topo_order_output(&repo.work_dir, &ReadLimits::default()).unwrap();
    assert_eq!(out, format!("{c} main\n{b}\n{a}"));
}

#[test]
fn discovery_walks_up_from_nested_working_directory() {
    let repo = RepoFixture::new();
    let a = full_hex(b'a');
    repo.write_commit(&a, &[]);
    repo.write_ref("main", &a);

    let nested = repo.work_dir.join("src").join("deep");
    std::fs::create_dir_all(&nested).unwrap();

    let out = topo_order_output(&nested, &ReadLimits::default()).unwrap();
    assert_eq!(out, format!("{a} main"));
}

#[test]
fn sibling_branches_insert_sticky_annotations_at_the_break() {
    // main -> C -> B -> A and feature -> D -> B. The ascending tie-break
    // emits C before D, so the lineage break falls between them: C's
    // parents close the first segment and D's (empty) children open the
    // next one.
    let repo = RepoFixture::new();
    let a = full_hex(b'a');
    let b = full_hex(b'b');
    let c = full_hex(b'c');
    let d = full_hex(b'd');
    repo.write_commit(&a, &[]);
    repo.write_commit(&b, &[&a]);
    repo.write_commit(&c, &[&b]);
    repo.write_commit(&d, &[&b]);
    repo.write_ref("main", &c);
    repo.write_ref("feature", &d);

    let out = topo_order_output(&repo.work_dir, &ReadLimits::default()).unwrap();
    let expected = format!("{c} main\n{b}=\n\n=\n{d} feature\n{b}\n{a}");
    assert_eq!(out, expected);

    let head_section = out.split("\n\n").next().unwrap();
    assert!(head_section.contains("main"));
    let tail_section = out.split("\n\n").nth(1).unwrap();
    assert!(tail_section.contains(&a));
}

#[test]
fn merge_commit_keeps_both_parents_before_it() {
    let repo = RepoFixture::new();
    let a = full_hex(b'a');
    let b = full_hex(b'b');
    let c = full_hex(b'c');
    let d = full_hex(b'd');
    repo.write_commit(&a, &[]);
    repo.write_commit(&b, &[&a]);
    repo.write_commit(&c, &[&a]);
    repo.write_commit(&d, &[&b, &c]);
    repo.write_ref("main", &d);

    // Order is D, B, C, A; the jump from B to its sibling C breaks lineage,
    // so B's parents close the first segment and C's children (the merge)
    // open the next.
    let out = topo_order_output(&repo.work_dir, &ReadLimits::default()).unwrap();
    let expected = format!("{d} main\n{b}\n{a}=\n\n={d}\n{c}\n{a}");
    assert_eq!(out, expected);
}

#[test]
fn nested_branch_name_round_trips_in_the_label() {
    let repo = RepoFixture::new();
    let a = full_hex(b'a');
    repo.write_commit(&a, &[]);
    repo.write_ref("feature/ui/button", &a);

    let out = topo_order_output(&repo.work_dir, &ReadLimits::default()).unwrap();
    assert_eq!(out, format!("{a} feature/ui/button"));
}

#[test]
fn shared_head_collapses_and_lists_branches_sorted() {
    let repo = RepoFixture::new();
    let a = full_hex(b'a');
    let c = full_hex(b'c');
    repo.write_commit(&a, &[]);
    repo.write_commit(&c, &[&a]);
    repo.write_ref("main", &c);
    repo.write_ref("dev", &c);

    let out = topo_order_output(&repo.work_dir, &ReadLimits::default()).unwrap();
    assert_eq!(out, format!("{c} dev main\n{a}"));
}

#[test]
fn parent_word_in_commit_message_adds_no_edge() {
    let repo = RepoFixture::new();
    let a = full_hex(b'a');
    let b = full_hex(b'b');
    let message = format!("mentions\nparent {}\nin the body\n", full_hex(b'f'));
    repo.write_commit(&a, &[]);
    repo.write_commit_with_message(&b, &[&a], &message);
    repo.write_ref("main", &b);

    let out = topo_order_output(&repo.work_dir, &ReadLimits::default()).unwrap();
    assert_eq!(out, format!("{b} main\n{a}"));
}

#[test]
fn repository_without_branches_renders_nothing() {
    let repo = RepoFixture::new();

    let out = topo_order_output(&repo.work_dir, &ReadLimits::default()).unwrap();
    assert_eq!(out, "");
}

#[test]
fn missing_object_reports_unsupported_storage() {
    let repo = RepoFixture::new();
    repo.write_ref("main", &full_hex(b'a'));
    // no object written for 'a'

    let err = topo_order_output(&repo.work_dir, &ReadLimits::default()).unwrap_err();
    assert!(matches!(
        err,
        TopoOrderError::Object(topo_rs::ObjectReadError::UnsupportedStorage { .. })
    ));
    assert!(err.to_string().contains("packfiles"));
}

#[test]
fn malformed_ref_is_fatal() {
    let repo = RepoFixture::new();
    repo.write_ref("broken", "not a hash at all");

    let err = topo_order_output(&repo.work_dir, &ReadLimits::default()).unwrap_err();
    assert!(matches!(err, TopoOrderError::Refs(_)));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let repo = RepoFixture::new();
    let a = full_hex(b'a');
    let b = full_hex(b'b');
    let c = full_hex(b'c');
    let d = full_hex(b'd');
    repo.write_commit(&a, &[]);
    repo.write_commit(&b, &[&a]);
    repo.write_commit(&c, &[&b]);
    repo.write_commit(&d, &[&b]);
    repo.write_ref("main", &c);
    repo.write_ref("feature", &d);
    repo.write_ref("nested/name", &d);

    let first = topo_order_output(&repo.work_dir, &ReadLimits::default()).unwrap();
    let second = topo_order_output(&repo.work_dir, &ReadLimits::default()).unwrap();
    assert_eq!(first, second);
}
