use pd_components::Material;
use pd_path::{GeometryRow, LossDef};
use pd_project::schema::*;
use pd_project::{ProjectError, ValidationError, load_json, load_yaml, save_json, save_yaml};

fn sample_project() -> Project {
    Project {
        version: 1,
        name: "Feed line".to_string(),
        fluid: FluidDef::Saturated {
            species: "N2O".to_string(),
            pressure_pa: 4.0e6,
            quality: 0.0,
            mdot_kg_s: 0.054,
            dynamic_viscosity_pa_s: 0.0,
            kinematic_viscosity_m2_s: 0.0,
        },
        geometry: vec![
            GeometryRow::pipe(0.3, 0.0064, Material::Smooth, vec![90.0; 4]),
            GeometryRow::component("IS_1", 0.0607, 0.00475, LossDef::Cv { cv: 1.4 }),
            GeometryRow::component("elbow", 0.02, 0.0064, LossDef::K(0.3)),
        ],
        settings: SettingsDef::default(),
    }
}

#[test]
fn roundtrip_yaml() {
    let project = sample_project();
    let path = std::env::temp_dir().join("pd_project_roundtrip.yaml");

    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn roundtrip_json_with_settings() {
    let mut project = sample_project();
    project.fluid = FluidDef::Direct {
        mdot_kg_s: 0.054,
        temperature_k: 90.0,
        density_kg_m3: 800.0,
        dynamic_viscosity_pa_s: 0.0,
        kinematic_viscosity_m2_s: 1.25e-7,
    };
    project.settings = SettingsDef {
        bend_radius_diameters: 3.0,
        friction_factor: Some(0.02),
    };
    let path = std::env::temp_dir().join("pd_project_roundtrip.json");

    save_json(&path, &project).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn yaml_defaults_are_applied() {
    let yaml = r#"
version: 1
name: Minimal
fluid:
  type: Direct
  mdot_kg_s: 0.054
  temperature_k: 90.0
  density_kg_m3: 800.0
"#;
    let project: Project = serde_yaml::from_str(yaml).unwrap();
    assert!(project.geometry.is_empty());
    assert_eq!(project.settings, SettingsDef::default());
    assert_eq!(project.fluid.mdot_kg_s(), 0.054);
}

#[test]
fn invalid_project_is_not_saved() {
    let mut project = sample_project();
    project.version = 99;
    let path = std::env::temp_dir().join("pd_project_invalid.yaml");
    let err = save_yaml(&path, &project).unwrap_err();
    assert!(matches!(
        err,
        ProjectError::Validation(ValidationError::UnsupportedVersion { version: 99 })
    ));
}
