use pd_fluids::FixedProvider;
use pd_project::FluidDef;
use pd_core::units::{k, kg_per_m3};
use std::path::Path;

fn projects_dir() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../projects")
}

#[test]
fn projects_load_and_validate() {
    for name in ["sample_geometry_1.yaml", "diameter_study.yaml"] {
        let path = projects_dir().join(name);
        let project = pd_project::load_yaml(&path)
            .unwrap_or_else(|e| panic!("Failed to load {}: {}", name, e));
        pd_project::validate_project(&project)
            .unwrap_or_else(|e| panic!("Failed to validate {}: {}", name, e));
        assert_eq!(project.geometry.len(), 3);
    }
}

#[test]
fn sample_geometry_evaluates() {
    let project = pd_project::load_yaml(&projects_dir().join("sample_geometry_1.yaml")).unwrap();
    assert!(matches!(project.fluid, FluidDef::Saturated { .. }));

    // Frozen N2O liquid properties near 4 MPa saturation
    let provider = FixedProvider::new(k(278.0), kg_per_m3(880.0));
    let (fluid, path) = pd_project::flow_path(&project, &provider).unwrap();

    assert_eq!(fluid.mdot().value, 0.054);
    assert!(fluid.dynamic_viscosity().value > 0.0);
    let names: Vec<String> = path.breakdown().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["pipe 0", "IS_1", "CV_1"]);
    assert!(path.total_drop().value > 0.0);
}

#[test]
fn diameter_study_duct_is_tapered() {
    let project = pd_project::load_yaml(&projects_dir().join("diameter_study.yaml")).unwrap();
    let elements = pd_project::elements(&project).unwrap();
    let duct = elements[0].as_duct().unwrap();

    let stations = duct.stations(pd_components::DEFAULT_STATIONS);
    assert_eq!(stations.len(), 500);
    assert!((stations[0].value - 0.00127).abs() < 1e-15);
    assert!((stations[499].value - 0.0635).abs() < 1e-15);
}
