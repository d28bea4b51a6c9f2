//! `GenerateService` driven over the in-memory filesystem.

use std::path::PathBuf;

use modgen_adapters::MemoryFilesystem;
use modgen_core::{application::ApplicationError, prelude::*};

fn shape_spec() -> Specification {
    Specification::new(vec![InterfaceRecord::new("Shape", ["Circle", "Square"])])
}

fn service(fs: &MemoryFilesystem) -> GenerateService {
    GenerateService::new(Box::new(fs.clone()))
}

#[test]
fn writes_the_four_fragments_in_order() {
    let fs = MemoryFilesystem::new();
    let options = GenerationOptions::default();

    let report = service(&fs).generate(&shape_spec(), &options).unwrap();

    let expected: Vec<PathBuf> = ArtifactKind::ALL
        .iter()
        .map(|kind| kind.path_with_prefix("./"))
        .collect();
    assert_eq!(fs.write_log(), expected);
    assert_eq!(report.artifacts.len(), 4);

    for artifact in render_all(&shape_spec(), &options).unwrap() {
        let path = artifact.kind.path_with_prefix("./");
        assert_eq!(fs.read_file(&path).as_deref(), Some(artifact.content.as_str()));
    }
}

#[test]
fn creates_missing_output_directory() {
    let fs = MemoryFilesystem::new();
    let options = GenerationOptions {
        ipp_prefix: "gen/ipp/".into(),
        ..GenerationOptions::default()
    };

    service(&fs).generate(&shape_spec(), &options).unwrap();

    assert!(fs.exists(std::path::Path::new("gen/ipp")));
    assert_eq!(fs.write_log().len(), 4);
}

#[test]
fn write_failure_stops_after_earlier_fragments() {
    let fs = MemoryFilesystem::new();
    fs.deny_writes("./moduleLoaderNames.ipp");

    let err = service(&fs)
        .generate(&shape_spec(), &GenerationOptions::default())
        .unwrap_err();

    assert!(matches!(
        err,
        ModgenError::Application(ApplicationError::FilesystemError { ref path, .. })
            if path == &PathBuf::from("./moduleLoaderNames.ipp")
    ));
    assert_eq!(
        fs.write_log(),
        [
            PathBuf::from("./moduleLoaderHeaders.ipp"),
            PathBuf::from("./moduleLoaderFunctions.ipp"),
        ]
    );
    assert_eq!(fs.read_file("./moduleLoaderAssignments.ipp"), None);
}

#[test]
fn invalid_specification_writes_nothing() {
    let fs = MemoryFilesystem::new();
    let spec = shape_spec().with_interface(InterfaceRecord::new("geo::Shape", ["Triangle"]));

    let err = service(&fs)
        .generate(&spec, &GenerationOptions::default())
        .unwrap_err();

    assert!(matches!(err, ModgenError::Domain(_)));
    assert!(fs.write_log().is_empty());
}
