use super::*;

#[test]
fn normalize_rel_path_cleans_and_rejects() {
    assert_eq!(
        normalize_rel_path("templates\\./model_y//template.png").unwrap(),
        "templates/model_y/template.png"
    );
    assert!(normalize_rel_path("/etc/passwd").is_err());
    assert!(normalize_rel_path("a/../b.png").is_err());
    assert!(normalize_rel_path("").is_err());
    assert!(normalize_rel_path("./.").is_err());
    assert!(normalize_rel_path("\\share\\x.png").is_err());
    assert!(normalize_rel_path("C:/wraps/x.png").is_err());
}

#[test]
fn normalize_rel_path_errors_name_the_path() {
    let err = normalize_rel_path("patterns/../../secret.png").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("patterns/../../secret.png"), "{msg}");
    assert!(msg.contains("'..'"), "{msg}");
}

#[test]
fn missing_file_is_an_io_error_not_a_validation_error() {
    let root = std::env::temp_dir().join(format!("wrapsmith_store_io_{}", std::process::id()));
    std::fs::create_dir_all(&root).unwrap();
    let src = DirAssetSource::new(&root);

    let err = src.read("templates/nope/template.png").unwrap_err();
    assert!(matches!(err, WrapError::Other(_)), "{err:?}");
    assert!(format!("{err:#}").contains("read asset"));
    assert!(matches!(src.read("../x.png"), Err(WrapError::Validation(_))));

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn path_convention_per_vehicle() {
    let id = VehicleId::new("model_y").unwrap();
    assert_eq!(template_rel_path(&id), "templates/model_y/template.png");
    assert_eq!(preview_rel_path(&id), "templates/model_y/vehicle_image.png");
}

#[test]
fn dir_source_reads_below_root() {
    let root = std::env::temp_dir().join(format!("wrapsmith_store_{}", std::process::id()));
    let dir = root.join("templates").join("v1");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("template.png"), b"bytes").unwrap();

    let src = DirAssetSource::new(&root);
    let id = VehicleId::new("v1").unwrap();
    assert_eq!(src.template_bytes(&id).unwrap(), b"bytes");
    assert!(src.preview_bytes(&id).is_err());
    assert!(src.read("../outside.png").is_err());

    std::fs::remove_dir_all(&root).unwrap();
}
