//! End-to-end version resolution over real on-disk git repositories.

use git2::Oid;
use semrel::analyzer::{next_version, NextVersionOptions};
use semrel::domain::VersionTranslator;
use semrel::git::{Git2Repository, Repository};
use semrel::parsers::ConventionalParser;
use tempfile::TempDir;

struct TestRepo {
    _dir: TempDir,
    repo: git2::Repository,
}

impl TestRepo {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let repo = git2::Repository::init(dir.path()).unwrap();
        TestRepo { _dir: dir, repo }
    }

    fn commit(&self, message: &str) -> Oid {
        let sig = git2::Signature::now("Test Author", "test@example.com").unwrap();
        let tree_id = self.repo.index().unwrap().write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();

        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|h| h.target())
            .map(|oid| self.repo.find_commit(oid).unwrap());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    fn tag(&self, name: &str, target: Oid) {
        let object = self.repo.find_object(target, None).unwrap();
        self.repo.tag_lightweight(name, &object, false).unwrap();
    }

    fn annotated_tag(&self, name: &str, target: Oid) {
        let sig = git2::Signature::now("Test Author", "test@example.com").unwrap();
        let object = self.repo.find_object(target, None).unwrap();
        self.repo
            .tag(name, &object, &sig, &format!("release {}", name), false)
            .unwrap();
    }

    fn open(&self) -> Git2Repository {
        Git2Repository::open(self._dir.path()).unwrap()
    }
}

fn resolve(repo: &Git2Repository, options: &NextVersionOptions) -> String {
    let translator = VersionTranslator::default();
    let parser = ConventionalParser::default();
    next_version(repo, &translator, &parser, options)
        .unwrap()
        .to_string()
}

#[test]
fn test_first_release_in_fresh_repository() {
    let test = TestRepo::new();
    test.commit("initial commit");
    test.commit("feat: x");
    test.commit("fix: y");

    let repo = test.open();
    assert_eq!(resolve(&repo, &NextVersionOptions::default()), "0.1.0");
}

#[test]
fn test_patch_release_after_lightweight_tag() {
    let test = TestRepo::new();
    let base = test.commit("feat: base");
    test.tag("v1.0.0", base);
    test.commit("fix: crash on empty input");

    let repo = test.open();
    assert_eq!(resolve(&repo, &NextVersionOptions::default()), "1.0.1");
}

#[test]
fn test_release_after_annotated_tag() {
    // Annotated tags must peel through to their target commit.
    let test = TestRepo::new();
    let base = test.commit("feat: base");
    test.annotated_tag("v2.0.0", base);
    test.commit("feat: new capability");

    let repo = test.open();
    assert_eq!(resolve(&repo, &NextVersionOptions::default()), "2.1.0");
}

#[test]
fn test_no_release_when_only_docs_commits() {
    let test = TestRepo::new();
    let base = test.commit("feat: base");
    test.tag("v1.3.0", base);
    test.commit("docs: update readme");
    test.commit("chore: bump ci image");

    let repo = test.open();
    assert_eq!(resolve(&repo, &NextVersionOptions::default()), "1.3.0");
}

#[test]
fn test_breaking_footer_triggers_major() {
    let test = TestRepo::new();
    let base = test.commit("feat: base");
    test.tag("v1.0.0", base);
    test.commit("fix: rename field\n\nBREAKING CHANGE: field renamed from X to Y");

    let repo = test.open();
    assert_eq!(resolve(&repo, &NextVersionOptions::default()), "2.0.0");
}

#[test]
fn test_non_version_tags_do_not_interfere() {
    let test = TestRepo::new();
    let base = test.commit("feat: base");
    test.tag("v0.3.0", base);
    test.tag("nightly", base);
    test.tag("deploy-2024-01-01", base);
    test.commit("fix: y");

    let repo = test.open();
    assert_eq!(resolve(&repo, &NextVersionOptions::default()), "0.3.1");
}

#[test]
fn test_prerelease_flow_on_real_repo() {
    let test = TestRepo::new();
    let base = test.commit("feat: base");
    test.tag("v1.0.0", base);
    test.commit("feat: new thing");

    let repo = test.open();
    let options = NextVersionOptions {
        prerelease: true,
        ..NextVersionOptions::default()
    };
    assert_eq!(resolve(&repo, &options), "1.1.0-rc.1");
}

#[test]
fn test_create_tag_round_trip() {
    let test = TestRepo::new();
    let base = test.commit("feat: base");

    let repo = test.open();
    repo.create_tag("v0.1.0", base).unwrap();

    let tags = repo.list_tags().unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].name, "v0.1.0");
    assert_eq!(tags[0].target, base);
}

#[test]
fn test_find_commit_exposes_parents_and_message() {
    let test = TestRepo::new();
    let first = test.commit("feat: first");
    let second = test.commit("fix: second");

    let repo = test.open();
    let info = repo.find_commit(second).unwrap();
    assert_eq!(info.parents, vec![first]);
    assert_eq!(info.message, "fix: second");
    assert_eq!(info.author, "Test Author");
}

#[test]
fn test_merge_bases_on_real_repo() {
    let test = TestRepo::new();
    let base = test.commit("feat: base");
    let tip = test.commit("fix: later");

    let repo = test.open();
    assert_eq!(repo.merge_bases(tip, base).unwrap(), vec![base]);
}
