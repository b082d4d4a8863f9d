//! graph-demo 命令行测试

use std::process::Command;

fn run_demo(args: &[&str], rust_log: &str) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_graph-demo"))
        .args(args)
        .env("RUST_LOG", rust_log)
        .output()
        .unwrap()
}

#[test]
fn test_demo_prints_directed_graph() {
    let output = run_demo(&["--directed"], "off");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let expected = "Vertex(element=V) is connected to\n\
                    \tVertex(element=U) with\n\
                    \tEdge(origin=Vertex(element=V), destination=Vertex(element=U), weight=e)\n\
                    \n\
                    \tVertex(element=W) with\n\
                    \tEdge(origin=Vertex(element=V), destination=Vertex(element=W), weight=f)\n\
                    \n\
                    Vertex(element=U) is connected to\n\
                    \tVertex(element=W) with\n\
                    \tEdge(origin=Vertex(element=U), destination=Vertex(element=W), weight=g)\n\
                    \n\
                    Vertex(element=W) is connected to\n\
                    \tVertex(element=Z) with\n\
                    \tEdge(origin=Vertex(element=W), destination=Vertex(element=Z), weight=h)\n\
                    \n\
                    Vertex(element=Z) is not connected to anything.\n";
    assert_eq!(stdout, expected);
}

#[test]
fn test_demo_logs_after_subscriber_init() {
    let output = run_demo(&[], "info");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("示例图已构建"));
    assert!(!stdout.contains("is not connected to anything"));
}

#[test]
fn test_demo_rejects_missing_config() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("graph.json");
    let output = run_demo(&["--config", missing.to_str().unwrap()], "off");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("IO 错误"));
}
