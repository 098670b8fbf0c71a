use std::fs;
use std::io::Write;

use marcyb::config::{ConfigError, load_thrusters};
use marcyb::thrust::{ThrusterType, abs_guide, imca};

#[test]
fn catalog_covers_all_four_thruster_classes() {
    let thrusters = load_thrusters("data/thrusters.yaml").expect("thrusters yaml");
    assert!(thrusters.len() >= 4);
    for thruster_type in [
        ThrusterType::Tunnel,
        ThrusterType::Azimuth,
        ThrusterType::Propeller,
        ThrusterType::Waterjet,
    ] {
        assert!(
            thrusters.iter().any(|t| t.thruster_type == thruster_type),
            "catalog is missing a {thruster_type:?} entry"
        );
    }

    // Tunnel entries carry no diameter, so only the IMCA path applies.
    let tunnel = thrusters
        .iter()
        .find(|t| t.thruster_type == ThrusterType::Tunnel)
        .unwrap();
    assert!(tunnel.geometry().is_none());
}

#[test]
fn catalog_records_drive_both_converters() {
    let thrusters = load_thrusters("data/thrusters.yaml").unwrap();
    let azimuth = thrusters
        .iter()
        .find(|t| t.thruster_type == ThrusterType::Azimuth)
        .unwrap();

    let imca_thrust = imca::power_to_force(azimuth.thruster_type, &azimuth.power_rating()).unwrap();
    assert!(imca_thrust.positive_kn > 0.0);
    assert!(imca_thrust.negative_kn < 0.0);

    let geometry = azimuth.geometry().expect("azimuth entry has a diameter");
    assert!(geometry.ducted);
    let abs_thrust = abs_guide::power_to_force(&azimuth.power_rating(), &geometry).unwrap();
    assert!(abs_thrust.positive_kn > 0.0);

    // Ducted azimuths should beat the open-propeller constant for the same inputs.
    let open = abs_guide::power_to_force(
        &azimuth.power_rating(),
        &marcyb::thrust::ThrusterGeometry {
            ducted: false,
            ..geometry
        },
    )
    .unwrap();
    assert!(abs_thrust.positive_kn > open.positive_kn);
}

#[test]
fn yaml_catalog_loads_from_arbitrary_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "- name: Test Tunnel\n  thruster_type: tunnel\n  max_power_positive_kw: 750.0\n  max_power_negative_kw: 750.0\n"
    )
    .unwrap();

    let thrusters = load_thrusters(file.path()).expect("generated yaml");
    assert_eq!(thrusters.len(), 1);
    assert_eq!(thrusters[0].name, "Test Tunnel");
    assert_eq!(thrusters[0].thruster_type, ThrusterType::Tunnel);
    assert!(!thrusters[0].ducted);
}

#[test]
fn unknown_thruster_class_in_yaml_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "- name: Mystery Drive\n  thruster_type: jetski\n  max_power_positive_kw: 500.0\n  max_power_negative_kw: 500.0\n"
    )
    .unwrap();

    let err = load_thrusters(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
}

#[test]
fn unknown_thruster_class_in_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("mystery.toml"),
        "name = \"Mystery Drive\"\nthruster_type = \"jetski\"\nmax_power_positive_kw = 500.0\nmax_power_negative_kw = 500.0\n",
    )
    .unwrap();

    let err = load_thrusters(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)), "got {err:?}");
}

#[test]
fn toml_directory_loads_records_in_path_order() {
    let dir = tempfile::tempdir().unwrap();

    fs::write(
        dir.path().join("b_stern.toml"),
        "name = \"Stern Azimuth\"\nthruster_type = \"azimuth\"\nmax_power_positive_kw = 2000.0\nmax_power_negative_kw = 2000.0\ndiameter_m = 2.8\nducted = true\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("a_bow.toml"),
        "name = \"Bow Tunnel\"\nthruster_type = \"tunnel\"\nmax_power_positive_kw = 900.0\nmax_power_negative_kw = 900.0\n",
    )
    .unwrap();
    // Non-TOML files in the directory are ignored.
    fs::write(dir.path().join("notes.txt"), "not a record").unwrap();

    let thrusters = load_thrusters(dir.path()).expect("toml directory");
    assert_eq!(thrusters.len(), 2);
    assert_eq!(thrusters[0].name, "Bow Tunnel");
    assert_eq!(thrusters[1].name, "Stern Azimuth");
    assert_eq!(thrusters[1].geometry().unwrap().diameter_m, 2.8);
}
