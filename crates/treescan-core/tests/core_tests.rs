use treescan_core::name::{full_name, segments, split_file_name, split_file_path};
use treescan_core::{
    DirId, FileInfo, NodeStore, ScanConfig, ScanError, ScanReport, WalkStrategy, WarningKind,
};

#[test]
fn test_node_ids() {
    let id1 = DirId(42);
    let id2 = DirId(42);

    assert_eq!(id1, id2);
    assert_eq!(id1.index(), 42);
    assert_eq!(DirId::ROOT.index(), 0);
}

#[test]
fn test_store_builds_tree() {
    let mut store = NodeStore::new("/assets");
    let shaders = store.add_dir(DirId::ROOT, "shaders").unwrap();
    let post = store.add_dir(shaders, "post").unwrap();
    let blur = store.add_file(post, "blur.frag.glsl", 512).unwrap();
    store.add_file(shaders, "basic.vert", 128).unwrap();

    assert_eq!(store.folder_count(), 2);
    assert_eq!(store.file_count(), 2);

    let file = store.file(blur);
    assert_eq!(file.stem, "blur.frag");
    assert_eq!(file.extension, "glsl");
    assert_eq!(file.size, 512);
    assert_eq!(file.parent, post);
    assert_eq!(store.dir(post).parent, Some(shaders));
    assert_eq!(store.dir(shaders).parent, Some(DirId::ROOT));
    assert_eq!(store.root().dirs, [shaders]);
}

#[test]
fn test_store_keeps_discovery_order() {
    let mut store = NodeStore::new("/r");
    for name in ["zeta", "alpha", "mid"] {
        store.add_dir(DirId::ROOT, name).unwrap();
    }
    let names: Vec<_> = store
        .root()
        .dirs
        .iter()
        .map(|&id| store.dir(id).name.as_str())
        .collect();
    assert_eq!(names, ["zeta", "alpha", "mid"]);
}

#[test]
fn test_name_codec_edge_cases() {
    let cases = [
        ("appveyor.yml", "appveyor", "yml"),
        ("readme.md", "readme", "md"),
        (".gitignore", ".gitignore", ""),
        ("c++", "c++", ""),
        ("файл", "файл", ""),
        ("notes.", "notes.", ""),
        ("libfoo.so.1", "libfoo.so", "1"),
    ];
    for (name, stem, ext) in cases {
        assert_eq!(split_file_name(name), (stem, ext), "{name}");
        assert_eq!(full_name(stem, ext), name);
    }
}

#[test]
fn test_path_codec() {
    assert_eq!(split_file_path("a/b/c.txt"), ("a/b", "c.txt"));
    assert_eq!(split_file_path("c.txt"), ("", "c.txt"));
    assert_eq!(segments("a/b/c").collect::<Vec<_>>(), ["a", "b", "c"]);
    assert!(segments("").next().is_none());
}

#[test]
fn test_config_builder_strategy() {
    let config = ScanConfig::builder().root("assets").build().unwrap();
    assert_eq!(config.strategy, WalkStrategy::Native);

    let config = ScanConfig::builder()
        .root("assets")
        .strategy(WalkStrategy::Jwalk)
        .build()
        .unwrap();
    assert_eq!(config.strategy, WalkStrategy::Jwalk);
}

#[test]
fn test_scan_error_messages() {
    let err = ScanError::io(
        "/locked",
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    );
    assert_eq!(err.to_string(), "Permission denied: /locked");

    let err = ScanError::NotADirectory {
        path: "/etc/hosts".into(),
    };
    assert!(err.to_string().contains("not a directory"));
}

#[test]
fn test_warning_kind_serializes() {
    let json = serde_json::to_string(&WarningKind::PermissionDenied).unwrap();
    assert_eq!(json, "\"PermissionDenied\"");
}

#[test]
fn test_file_info_json() {
    let info = FileInfo {
        path: "/assets/readme.md".to_string(),
        size: 58,
    };
    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["path"], "/assets/readme.md");
    assert_eq!(json["size"], 58);

    let back: FileInfo = serde_json::from_value(json).unwrap();
    assert_eq!(back, info);
}

#[test]
fn test_report_copy() {
    let report = ScanReport {
        total_files: 3,
        ..Default::default()
    };
    let copy = report;
    assert_eq!(copy, report);
    assert!(!copy.initialized);
}
