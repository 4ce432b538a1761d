use assert_cmd::Command;
use predicates::prelude::*;

fn cellsprite() -> Command {
    Command::cargo_bin("cellsprite").unwrap()
}

#[test]
fn renders_a_block_preview() {
    cellsprite()
        .args(["render", "▄", "--width", "4", "--height", "4"])
        .assert()
        .success()
        .stdout("    \n    \n████\n████\n");
}

#[test]
fn accepts_hex_codepoints() {
    cellsprite()
        .args(["render", "U+2502", "--width", "10", "--height", "2"])
        .assert()
        .success()
        .stdout("    █     \n    █     \n");
}

#[test]
fn rejects_unsupported_codepoints() {
    cellsprite()
        .args(["render", "A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a procedurally drawn glyph"));
}

#[test]
fn renders_sprites_by_name() {
    cellsprite()
        .args(["sprite", "cursor-block", "--width", "3", "--height", "2"])
        .assert()
        .success()
        .stdout("███\n███\n");

    cellsprite()
        .args(["sprite", "sparkles"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown sprite"));
}

#[test]
fn lists_ranges_and_sprites() {
    cellsprite()
        .arg("ranges")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("U+2500-U+257F box drawing")
                .and(predicate::str::contains("U+1CD00-U+1CDE5 octants"))
                .and(predicate::str::contains("underline-curly")),
        );
}

#[test]
fn writes_pgm_files() {
    let dir = std::env::temp_dir().join(format!("cellsprite-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("block.pgm");
    cellsprite()
        .args(["render", "█", "--width", "4", "--height", "8", "--pgm"])
        .arg(&path)
        .assert()
        .success()
        .stdout("");
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"P5\n4 8\n255\n"));
    assert!(bytes.ends_with(&[255; 32]));
    std::fs::remove_dir_all(&dir).unwrap();
}
