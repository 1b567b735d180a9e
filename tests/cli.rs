use std::{
    fs::{ read_to_string, write, },
    path::Path,
    process::{ Command, Output, },
};
use tempfile::tempdir;


const BIN: &'static str = env!("CARGO_BIN_EXE_ar-quiz-maker");


fn shim(dir: &Path, args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .current_dir(dir)
        .env("RUST_LOG", "debug")
        .output()
        .unwrap()
}


#[test]
fn missing_input_prints_usage() {
    let dir = tempdir().unwrap();

    let output = shim(dir.path(), &[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "{stderr}");
    assert!(!dir.path().join("outputs").exists());
}

#[test]
fn help_mentions_the_input() {
    let dir = tempdir().unwrap();
    let output = shim(dir.path(), &["--help"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("<INPUT>"));
}

#[test]
fn missing_java_is_reported() {
    let dir = tempdir().unwrap();
    write(dir.path().join("quiz1.txt"), "").unwrap();
    write(
        dir.path().join("shim.json"),
        r#"{ "java": "./no-such-java" }"#,
    ).unwrap();

    let output = shim(dir.path(), &["quiz1.txt", "--config", "shim.json"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not start"), "{stderr}");
    assert!(!dir.path().join("outputs").exists());
}

#[test]
fn bad_config_is_reported() {
    let dir = tempdir().unwrap();
    write(dir.path().join("shim.json"), "{ not json").unwrap();

    let output = shim(dir.path(), &["quiz1.txt", "--config", "shim.json"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("loading configuration"), "{stderr}");
}


#[cfg(unix)]
mod fake_java {
    use super::*;
    use std::{
        fs::{ set_permissions, Permissions, },
        os::unix::fs::PermissionsExt,
    };

    /// Stands in for `java -cp <cp> ARHtmlMain <input> <output>`.
    fn install(dir: &Path, body: &str) {
        let script = dir.join("fake-java");
        write(&script, format!("#!/bin/sh\n{body}\n")).unwrap();
        set_permissions(&script, Permissions::from_mode(0o755)).unwrap();
        write(
            dir.join("shim.json"),
            serde_json::json!({ "java": script }).to_string(),
        ).unwrap();
        write(dir.join("quiz1.txt"), "quiz \"sample\"\n").unwrap();
    }

    #[test]
    fn page_ends_up_in_outputs() {
        let dir = tempdir().unwrap();
        install(dir.path(), r#"printf '<html></html>' > "$5"; echo "Wrote: $5""#);

        let output = shim(dir.path(), &["quiz1.txt", "--config", "shim.json"]);

        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
        let artifact = dir.path().join("outputs").join("quiz1.html");
        assert_eq!(read_to_string(artifact).unwrap(), "<html></html>");
        assert!(!dir.path().join("quiz1.html").exists());
    }

    #[test]
    fn arguments_reach_the_generator() {
        let dir = tempdir().unwrap();
        install(dir.path(), r#"echo "$@" > args.txt; touch "$5""#);

        let output = shim(dir.path(), &["quiz1.txt", "--config", "shim.json"]);

        assert!(output.status.success());
        assert_eq!(
            read_to_string(dir.path().join("args.txt")).unwrap().trim(),
            "-cp ANTLR/out/testbin:ANTLR/antlr-runtime-4.13.2.jar ARHtmlMain quiz1.txt quiz1.html");
    }

    #[test]
    fn validation_failure_is_fatal() {
        let dir = tempdir().unwrap();
        install(dir.path(), r#"echo "Validation errors:" >&2; exit 2"#);

        let output = shim(dir.path(), &["quiz1.txt", "--config", "shim.json"]);

        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("quiz validation failed"), "{stderr}");
        assert_eq!(stderr.matches("Validation errors:").count(), 1, "{stderr}");
        assert!(!dir.path().join("outputs").exists());
    }

    #[test]
    fn stderr_is_logged_when_the_run_carries_on() {
        let dir = tempdir().unwrap();
        install(dir.path(), r#"echo "careful" >&2; touch "$5"; exit 3"#);
        write(
            dir.path().join("shim.json"),
            serde_json::json!({ "java": dir.path().join("fake-java"), "strict": false }).to_string(),
        ).unwrap();

        let output = shim(dir.path(), &["quiz1.txt", "--config", "shim.json"]);

        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert_eq!(stderr.matches("careful").count(), 1, "{stderr}");
        assert!(dir.path().join("outputs/quiz1.html").is_file());
    }

    #[test]
    fn custom_output_dir() {
        let dir = tempdir().unwrap();
        install(dir.path(), r#"touch "$5""#);

        let output = shim(dir.path(), &["quiz1.txt", "--config", "shim.json", "--output-dir", "site/pages"]);

        assert!(output.status.success());
        assert!(dir.path().join("site/pages/quiz1.html").is_file());
    }
}
