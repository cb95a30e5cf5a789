//! Loading charts from gzip'd tar archives

mod common;

use chartloader::{ChartError, ErrorKind, LoadOptions, load_archive, load_file};

fn load(data: &[u8]) -> chartloader::Result<chartloader::Chart> {
    load_archive(data, &LoadOptions::default())
}

#[test]
fn test_basic_archive() {
    let archive = common::chart_archive(
        "mychart",
        &[
            ("Chart.yaml", b"name: x\nversion: 0.1.0\n"),
            ("values.yaml", b"replicas: 1\n"),
            ("templates/a.yaml", b"kind: Pod\n"),
        ],
    );

    let chart = load(&archive).unwrap();
    assert_eq!(chart.metadata.name, "x");
    assert_eq!(chart.metadata.version.as_deref(), Some("0.1.0"));
    assert_eq!(chart.values.as_deref(), Some(&b"replicas: 1\n"[..]));
    assert_eq!(chart.templates.len(), 1);
    assert_eq!(chart.templates[0].name, "templates/a.yaml");
    assert_eq!(chart.templates[0].data, b"kind: Pod\n");
    assert!(chart.files.is_empty());
    assert!(chart.dependencies.is_empty());
}

#[test]
fn test_root_segment_is_stripped_from_every_path() {
    let archive = common::chart_archive(
        "some-root",
        &[
            ("Chart.yaml", b"name: x\n"),
            ("templates/deep/nested.yaml", b""),
            ("files/config.ini", b"[a]\n"),
            ("README.md", b"# x\n"),
        ],
    );

    let chart = load(&archive).unwrap();
    let names: Vec<_> = chart
        .templates
        .iter()
        .map(|t| t.name.as_str())
        .chain(chart.files.iter().map(|f| f.name.as_str()))
        .collect();
    assert_eq!(
        names,
        vec!["templates/deep/nested.yaml", "files/config.ini", "README.md"]
    );
    assert!(names.iter().all(|n| !n.starts_with("some-root")));
}

#[test]
fn test_directory_dependency_in_archive() {
    let archive = common::chart_archive(
        "mychart",
        &[
            ("Chart.yaml", b"name: top\n"),
            ("charts/sub/Chart.yaml", b"name: sub\n"),
            ("charts/sub/templates/s.yaml", b"kind: Service\n"),
        ],
    );

    let chart = load(&archive).unwrap();
    assert_eq!(chart.dependencies.len(), 1);
    let sub = &chart.dependencies[0];
    assert_eq!(sub.metadata.name, "sub");
    assert_eq!(sub.templates[0].name, "templates/s.yaml");
}

#[test]
fn test_nested_archive_dependency() {
    let leaf = common::chart_archive("leaf", &[("Chart.yaml", b"name: leaf\n")]);
    let sub = common::chart_archive(
        "sub",
        &[
            ("Chart.yaml", b"name: sub\n"),
            ("charts/leaf-1.0.0.tgz", leaf.as_slice()),
        ],
    );
    let archive = common::chart_archive(
        "top",
        &[
            ("Chart.yaml", b"name: top\n"),
            ("charts/sub-0.1.0.tgz", sub.as_slice()),
            ("charts/sub-0.1.0.tgz.prov", b"-----BEGIN PGP SIGNED MESSAGE-----\n"),
        ],
    );

    let chart = load(&archive).unwrap();
    assert_eq!(chart.dependencies.len(), 1);
    assert_eq!(chart.dependencies[0].name(), "sub");
    assert_eq!(chart.dependencies[0].dependencies[0].name(), "leaf");
    assert!(chart.file("charts/sub-0.1.0.tgz.prov").is_some());
    assert_eq!(chart.total_charts(), 3);
}

#[test]
fn test_zero_file_entries_is_empty_archive() {
    let archive = common::directories_only_archive(&["mychart/", "mychart/templates/"]);
    let err = load(&archive).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyArchive);
}

#[test]
fn test_missing_chart_yaml() {
    let archive = common::chart_archive("mychart", &[("values.yaml", b"a: 1\n")]);
    let err = load(&archive).unwrap_err();
    assert!(matches!(err, ChartError::MissingMetadata));
}

#[test]
fn test_chart_yaml_without_root_directory() {
    let archive = common::raw_archive(&[("Chart.yaml", b"name: x\n")]);
    let err = load(&archive).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Structure);
}

#[test]
fn test_values_toml_rejected_regardless_of_other_content() {
    let archive = common::chart_archive(
        "mychart",
        &[
            ("Chart.yaml", b"name: x\n"),
            ("values.yaml", b"a: 1\n"),
            ("templates/a.yaml", b""),
            ("values.toml", b"a = 1\n"),
        ],
    );
    let err = load(&archive).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
}

#[test]
fn test_corrupt_nested_archive_is_wrapped() {
    let archive = common::chart_archive(
        "top",
        &[
            ("Chart.yaml", b"name: top\n"),
            ("charts/broken-1.0.0.tgz", b"this is not gzip"),
        ],
    );

    let err = load(&archive).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    let message = err.to_string();
    assert!(message.contains("broken-1.0.0.tgz"), "{message}");
    assert!(message.contains("top"), "{message}");
}

#[test]
fn test_not_gzip() {
    let err = load(b"plain text, not an archive").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn test_load_file_from_disk() {
    let workspace = common::TestWorkspace::new();
    let archive = common::chart_archive("mychart", &[("Chart.yaml", b"name: ondisk\n")]);
    let path = workspace.write_file("mychart-0.1.0.tgz", &archive);

    let chart = load_file(&path, &LoadOptions::default()).unwrap();
    assert_eq!(chart.name(), "ondisk");
}
