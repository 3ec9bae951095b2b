use crate::add_test;
use crate::common::{tarball, Fixture};

fn sample_tarball() -> Vec<u8> {
    tarball(&[
        ("docs/readme.md", b"# readme\n"),
        ("docs/guide.md", b"# guide\n"),
        ("src/main.rs", b"fn main() {}\n"),
    ])
}

// .tar compresses to .tpxz and back
add_test!(tarball_suffixes, async {
    let tar = sample_tarball();
    let fixture = Fixture::with_file("project.tar", &tar);

    let output = fixture.run(&["project.tar"]).await;
    assert!(output.status.success(), "{output:?}");
    assert!(fixture.file_exists("project.tpxz"));
    assert!(!fixture.file_exists("project.tar"));

    let output = fixture.run(&["-d", "project.tpxz"]).await;
    assert!(output.status.success(), "{output:?}");
    assert_eq!(fixture.read_file("project.tar"), tar);
});

add_test!(tarball_list, async {
    let fixture = Fixture::with_file("project.tar", &sample_tarball());

    let output = fixture.run(&["-k", "project.tar"]).await;
    assert!(output.status.success());

    let output = fixture.run(&["-l", "project.tpxz"]).await;
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "docs/readme.md\ndocs/guide.md\nsrc/main.rs\n"
    );
    // Listing never removes the archive
    assert!(fixture.file_exists("project.tpxz"));
});

add_test!(tarball_extract_member, async {
    let fixture = Fixture::with_file("project.tar", &sample_tarball());

    let output = fixture.run(&["project.tar", "project.tpxz"]).await;
    assert!(output.status.success());

    let archive = fixture.read_file("project.tpxz");
    let output = fixture.run_with_stdin(&["-x", "src/main.rs"], &archive).await;
    assert!(output.status.success(), "{output:?}");
    assert_eq!(output.stdout, tarball(&[("src/main.rs", b"fn main() {}\n")]));
});

add_test!(tarball_extract_missing_member, async {
    let fixture = Fixture::with_file("project.tar", &sample_tarball());

    let output = fixture.run(&["project.tar", "project.tpxz"]).await;
    assert!(output.status.success());

    let output = fixture.run(&["-x", "-i", "project.tpxz", "nope"]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope"));
});

add_test!(no_tar_list_prints_sizes, async {
    let fixture = Fixture::with_file("blob.bin", &[42u8; 2048]);

    let output = fixture.run(&["-k", "blob.bin"]).await;
    assert!(output.status.success());

    let output = fixture.run(&["-t", "-l", "blob.bin.xz"]).await;
    assert!(output.status.success());
    let listing = String::from_utf8_lossy(&output.stdout);
    assert!(listing.trim_end().ends_with(" 2048"), "{listing}");
});
