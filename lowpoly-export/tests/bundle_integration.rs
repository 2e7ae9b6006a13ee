//! End-to-end export: generate, package, then read the archive back

use std::io::{Cursor, Read};

use glam::Vec3;
use lowpoly_core::{generate, GenerateError, Mesh, MeshBuilder, ModelType};
use lowpoly_export::{export_bundle, ExportError, FormatFailureReason};
use zip::ZipArchive;

fn read_archive(bytes: &[u8]) -> Vec<(String, Vec<u8>)> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    (0..archive.len())
        .map(|i| {
            let mut file = archive.by_index(i).unwrap();
            let mut contents = Vec::new();
            file.read_to_end(&mut contents).unwrap();
            (file.name().to_string(), contents)
        })
        .collect()
}

fn entry<'a>(entries: &'a [(String, Vec<u8>)], name: &str) -> &'a [u8] {
    entries
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, b)| b.as_slice())
        .unwrap_or_else(|| panic!("missing entry {name}"))
}

fn vehicle() -> Mesh {
    generate(ModelType::Vehicle, 1.0, 0.5, Some(3)).unwrap()
}

#[test]
fn test_glb_obj_bundle_has_exact_entries() {
    let exported = export_bundle(&vehicle(), "car", &["glb", "obj"]).unwrap();
    assert!(exported.failed.is_empty());

    let entries = read_archive(&exported.archive);
    let names: Vec<&str> = entries.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["car.glb", "car.obj", "README_car.txt"]);
}

#[test]
fn test_readme_counts_match_combined_vehicle() {
    let mesh = vehicle();
    let exported = export_bundle(&mesh, "car", &["stl"]).unwrap();
    let entries = read_archive(&exported.archive);
    let readme = std::str::from_utf8(entry(&entries, "README_car.txt")).unwrap();

    assert!(readme.contains(&format!("- Polygons: {}\n", mesh.face_count())));
    assert!(readme.contains(&format!("- Vertices: {}\n", mesh.vertex_count())));
    assert!(readme.contains("- Polygons: 140\n"));
    assert!(readme.contains("- Vertices: 80\n"));
    assert!(readme.contains("- Format: STL\n"));
}

#[test]
fn test_every_format_decodes() {
    let mesh = generate(ModelType::Rock, 1.2, 0.6, Some(9)).unwrap();
    let exported = export_bundle(&mesh, "rock", &["GLB", "Obj", "stl"]).unwrap();
    let entries = read_archive(&exported.archive);
    assert_eq!(entries.len(), 4);

    let stl = entry(&entries, "rock.stl");
    assert_eq!(stl.len(), 84 + 50 * mesh.face_count());

    let obj = std::str::from_utf8(entry(&entries, "rock.obj")).unwrap();
    assert_eq!(obj.lines().filter(|l| l.starts_with("v ")).count(), mesh.vertex_count());
    assert_eq!(obj.lines().filter(|l| l.starts_with("f ")).count(), mesh.face_count());

    let (document, buffers, _) = gltf::import_slice(entry(&entries, "rock.glb")).unwrap();
    let primitive = document.meshes().next().unwrap().primitives().next().unwrap();
    let reader = primitive.reader(|b| Some(&buffers[b.index()]));
    let positions: Vec<[f32; 3]> = reader.read_positions().unwrap().collect();
    let indices: Vec<u32> = reader.read_indices().unwrap().into_u32().collect();
    assert_eq!(positions, mesh.vertices());
    assert_eq!(indices, mesh.triangle_indices());
}

#[test]
fn test_partial_success_keeps_good_formats() {
    let exported = export_bundle(&vehicle(), "car", &["glb", "bogus"]).unwrap();
    let entries = read_archive(&exported.archive);
    let names: Vec<&str> = entries.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["car.glb", "README_car.txt"]);

    assert_eq!(exported.failed.len(), 1);
    assert_eq!(exported.failed[0].requested, "bogus");
    assert_eq!(exported.failed[0].reason, FormatFailureReason::UnsupportedFormat);
}

#[test]
fn test_duplicate_requests_yield_one_entry() {
    let exported = export_bundle(&vehicle(), "car", &["obj", "obj", "OBJ"]).unwrap();
    assert_eq!(read_archive(&exported.archive).len(), 2);
}

#[test]
fn test_empty_request_is_fatal() {
    let formats: Vec<String> = Vec::new();
    assert!(matches!(
        export_bundle(&vehicle(), "car", &formats),
        Err(ExportError::EmptyFormatSet)
    ));
}

#[test]
fn test_only_unsupported_is_fatal() {
    match export_bundle(&vehicle(), "car", &["BOGUS"]) {
        Err(ExportError::AllFormatsFailed(failed)) => {
            assert_eq!(failed.len(), 1);
            assert_eq!(failed[0].requested, "BOGUS");
        }
        other => panic!("expected AllFormatsFailed, got {other:?}"),
    }
}

#[test]
fn test_dangling_face_index_is_rejected_before_encoding() {
    let mut mesh = Mesh::new();
    mesh.add_vertex(Vec3::ZERO);
    mesh.add_triangle(0, 1, 99);

    for format in ["obj", "stl", "glb"] {
        match export_bundle(&mesh, "broken", &[format]) {
            Err(ExportError::InvalidMesh(GenerateError::MeshIndexOutOfRange {
                face,
                index,
                vertex_count,
            })) => {
                assert_eq!((face, index, vertex_count), (0, 1, 1));
            }
            other => panic!("{format}: expected InvalidMesh, got {other:?}"),
        }
    }
}

#[test]
fn test_exports_are_independent() {
    let mesh = vehicle();
    let a = export_bundle(&mesh, "car", &["obj"]).unwrap();
    let b = export_bundle(&mesh, "car", &["obj"]).unwrap();
    assert_eq!(read_archive(&a.archive), read_archive(&b.archive));
}
