use crate::add_test;
use crate::common::{Fixture, SAMPLE_TEXT};

// A single file argument derives the output name and removes the input
add_test!(compress_decompress_in_place, async {
    let data = SAMPLE_TEXT.as_bytes();
    let fixture = Fixture::with_file("notes.txt", data);

    let output = fixture.run(&["notes.txt"]).await;
    assert!(output.status.success(), "{output:?}");
    assert!(fixture.file_exists("notes.txt.xz"));
    assert!(!fixture.file_exists("notes.txt"));

    let output = fixture.run(&["-d", "notes.txt.xz"]).await;
    assert!(output.status.success(), "{output:?}");
    assert!(!fixture.file_exists("notes.txt.xz"));
    assert_eq!(fixture.read_file("notes.txt"), data);
});

// -k keeps the input next to the derived output
add_test!(compress_keep_original, async {
    let fixture = Fixture::with_file("keep.txt", SAMPLE_TEXT.as_bytes());

    let output = fixture.run(&["-k", "keep.txt"]).await;
    assert!(output.status.success());
    assert!(fixture.file_exists("keep.txt"));
    assert!(fixture.file_exists("keep.txt.xz"));
});

// Two positionals name input and output, the input stays
add_test!(explicit_output_keeps_input, async {
    let fixture = Fixture::with_file("in.txt", SAMPLE_TEXT.as_bytes());

    let output = fixture.run(&["in.txt", "custom.pxz"]).await;
    assert!(output.status.success());
    assert!(fixture.file_exists("in.txt"));
    assert!(fixture.file_exists("custom.pxz"));

    let output = fixture.run(&["-d", "custom.pxz", "restored.txt"]).await;
    assert!(output.status.success());
    assert_eq!(fixture.read_file("restored.txt"), SAMPLE_TEXT.as_bytes());
});

// -i and -o behave like positionals without removing anything
add_test!(input_output_flags, async {
    let fixture = Fixture::with_file("src.txt", SAMPLE_TEXT.as_bytes());

    let output = fixture.run(&["-i", "src.txt", "-o", "dst.xz"]).await;
    assert!(output.status.success());
    assert!(fixture.file_exists("src.txt"));

    let output = fixture.run(&["-d", "-i", "dst.xz"]).await;
    assert!(output.status.success());
    assert_eq!(output.stdout, SAMPLE_TEXT.as_bytes());
});

// Without arguments data flows from stdin to stdout
add_test!(stdin_to_stdout, async {
    let fixture = Fixture::new();
    let data = SAMPLE_TEXT.repeat(50);

    let compressed = fixture.run_with_stdin(&[], data.as_bytes()).await;
    assert!(compressed.status.success());
    assert!(compressed.stdout.starts_with(b"\xFD7zXZ\x00"));

    let decompressed = fixture.run_with_stdin(&["-d"], &compressed.stdout).await;
    assert!(decompressed.status.success());
    assert_eq!(decompressed.stdout, data.as_bytes());
});

// -c writes to stdout and leaves the input alone
add_test!(stdout_flag_keeps_input, async {
    let fixture = Fixture::with_file("report.txt", SAMPLE_TEXT.as_bytes());

    let output = fixture.run(&["-c", "report.txt"]).await;
    assert!(output.status.success());
    assert!(output.stdout.starts_with(b"\xFD7zXZ\x00"));
    assert!(fixture.file_exists("report.txt"));
    assert!(!fixture.file_exists("report.txt.xz"));
});

// Level, extreme and tuning flags are accepted
add_test!(tuning_flags_accepted, async {
    let fixture = Fixture::with_file("tuned.txt", SAMPLE_TEXT.as_bytes());

    let output = fixture
        .run(&["-9", "-e", "-p", "2", "-q", "4", "-f", "1.5", "-k", "tuned.txt"])
        .await;
    assert!(output.status.success(), "{output:?}");
    assert!(fixture.file_exists("tuned.txt.xz"));
});
