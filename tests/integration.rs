use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn facat_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("facat");
    path
}

const AAS_XML: &str = r#"<?xml version="1.0"?>
<VOTABLE>
 <RESOURCE>
  <TABLE>
   <FIELD name="ID" datatype="char"/>
   <FIELD name="Name" datatype="char"/>
   <FIELD name="Location" datatype="char"/>
   <FIELD name="Gamma-Ray" datatype="char"/>
   <FIELD name="X-Ray" datatype="char"/>
   <FIELD name="Ultraviolet" datatype="char"/>
   <FIELD name="Optical" datatype="char"/>
   <FIELD name="Infrared" datatype="char"/>
   <FIELD name="Millimeter" datatype="char"/>
   <FIELD name="Radio" datatype="char"/>
   <FIELD name="Particles" datatype="char"/>
   <FIELD name="Solar" datatype="char"/>
   <DATA><TABLEDATA>
    <TR><TD>HST</TD><TD>Hubble Space Telescope</TD><TD>Space</TD><TD>&#160;</TD><TD>&#160;</TD><TD>x</TD><TD>x</TD><TD>x</TD><TD>&#160;</TD><TD>&#160;</TD><TD>&#160;</TD><TD>&#160;</TD></TR>
    <TR><TD>ALMA</TD><TD>Atacama Large Millimeter Array</TD><TD>Chile</TD><TD>&#160;</TD><TD>&#160;</TD><TD>&#160;</TD><TD>&#160;</TD><TD>&#160;</TD><TD>x</TD><TD>x</TD><TD>&#160;</TD><TD>&#160;</TD></TR>
   </TABLEDATA></DATA>
  </TABLE>
 </RESOURCE>
</VOTABLE>
"#;

const MPC_TXT: &str = "\
Code  Long.   cos      sin    Name
250                           Hubble Space Telescope
809 289.2664 0.87490 -0.48289 European Southern Observatory, La Silla
";

const DSN_TXT: &str = "31 'Voyager 1'\n32 'Voyager 2'\n";

fn setup_test_env() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();

    let config_dir = root.join("config");
    fs::create_dir_all(&config_dir).unwrap();

    let data_dir = root.join("data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(data_dir.join("AAS.xml"), AAS_XML).unwrap();
    fs::write(data_dir.join("IAU-MPC.txt"), MPC_TXT).unwrap();
    fs::write(data_dir.join("DSN.txt"), DSN_TXT).unwrap();

    let config_content = format!(
        r#"[data]
dir = "{}/data"

[remote]
timeout_secs = 5

[vocabulary]
"Millimeter" = "em.mm.custom"
"#,
        root.display()
    );

    let config_path = config_dir.join("facat.toml");
    fs::write(&config_path, config_content).unwrap();

    (tmp, config_path)
}

fn run_facat(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = facat_binary();
    let output = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run facat binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

fn parse_catalog(json: &str) -> serde_json::Map<String, serde_json::Value> {
    match serde_json::from_str::<serde_json::Value>(json).unwrap() {
        serde_json::Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}

#[test]
fn test_build_all_to_stdout() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_facat(&config_path, &["build"]);
    assert!(success, "build failed: stdout={}, stderr={}", stdout, stderr);

    let catalog = parse_catalog(&stdout);
    assert_eq!(catalog.len(), 6);
    for key in ["aas:HST", "aas:ALMA", "iau-mpc:250", "iau-mpc:809", "dsn:31", "dsn:32"] {
        assert!(catalog.contains_key(key), "missing {}", key);
    }
    assert_eq!(catalog["aas:HST"]["facilityType"], "spacecraft");
    assert_eq!(catalog["aas:ALMA"]["facilityType"], "observatory");
    assert_eq!(
        catalog["aas:ALMA"]["measurementType"],
        serde_json::json!(["em.mm.custom", "em.radio"])
    );
    assert!(catalog["iau-mpc:250"].get("location").is_none());
    assert!(catalog["iau-mpc:809"]["location"]["coordinates"]["lon"].is_number());

    // Summary goes to stderr and lists the absent inputs.
    assert!(stderr.contains("total      6 records"));
    assert!(stderr.contains("NAIF.xml"));
}

#[test]
fn test_build_selected_to_file() {
    let (tmp, config_path) = setup_test_env();
    let output = tmp.path().join("out").join("catalog.json");

    let (stdout, stderr, success) = run_facat(
        &config_path,
        &["build", "dsn,iau-mpc", "--compact", "--output", output.to_str().unwrap()],
    );
    assert!(success, "build failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.is_empty());

    let written = fs::read_to_string(&output).unwrap();
    assert!(!written.contains('\n'));
    let catalog = parse_catalog(&written);
    assert_eq!(catalog.len(), 4);
    assert!(!catalog.contains_key("aas:HST"));
}

#[test]
fn test_build_unknown_authority_fails() {
    let (_tmp, config_path) = setup_test_env();

    let (_, stderr, success) = run_facat(&config_path, &["build", "simbad"]);
    assert!(!success);
    assert!(stderr.contains("Unknown authority"));
}

#[test]
fn test_build_over_existing_catalog() {
    let (tmp, config_path) = setup_test_env();
    fs::write(
        tmp.path().join("data").join("published.json"),
        r#"{"nssdc:1977-084A": {"alternateName": [{"name": "Voyager 1", "namingAuthority": "nssdc"}],
            "measurementType": ["Radio"]}}"#,
    )
    .unwrap();

    let (stdout, stderr, success) =
        run_facat(&config_path, &["build", "dsn", "--existing", "published.json"]);
    assert!(success, "build failed: stdout={}, stderr={}", stdout, stderr);

    let catalog = parse_catalog(&stdout);
    assert_eq!(catalog.len(), 3);
    assert_eq!(
        catalog["nssdc:1977-084A"]["measurementType"],
        serde_json::json!(["em.radio"])
    );
}

#[test]
fn test_get_prints_one_record() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_facat(&config_path, &["get", "iau-mpc:809"]);
    assert!(success, "get failed: stdout={}, stderr={}", stdout, stderr);

    let record: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(record["facilityType"], "observatory");
    assert_eq!(
        record["alternateName"][0]["name"],
        "European Southern Observatory, La Silla"
    );
}

#[test]
fn test_get_unknown_key_fails() {
    let (_tmp, config_path) = setup_test_env();

    let (_, stderr, success) = run_facat(&config_path, &["get", "dsn:999"]);
    assert!(!success);
    assert!(stderr.contains("record not found"));
}

#[test]
fn test_sources_lists_every_authority() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_facat(&config_path, &["sources"]);
    assert!(success);
    assert!(stdout.contains("AUTHORITY"));
    for authority in [
        "aas", "pds-ppi", "ads", "nssdc", "xephem", "naif", "iau-mpc", "iraf", "dsn",
    ] {
        assert!(stdout.contains(authority), "missing {}", authority);
    }
    let dsn_line = stdout.lines().find(|l| l.starts_with("dsn ")).unwrap();
    assert!(dsn_line.contains("OK"));
    let naif_line = stdout.lines().find(|l| l.starts_with("naif ")).unwrap();
    assert!(naif_line.contains("MISSING"));
}

#[test]
fn test_translate_labels() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_facat(&config_path, &["translate", "X-Ray", "Sonar"]);
    assert!(success);
    assert!(stdout.contains("X-Ray\tem.X-ray"));
    assert!(stdout.contains("Sonar\tSonar"));
}

#[test]
fn test_data_dir_flag_overrides_config() {
    let (tmp, config_path) = setup_test_env();
    let other = tmp.path().join("other");
    fs::create_dir_all(&other).unwrap();
    fs::write(other.join("DSN.txt"), "-74 'MRO'\n").unwrap();

    let (stdout, stderr, success) = run_facat(
        &config_path,
        &["--data-dir", other.to_str().unwrap(), "build", "dsn"],
    );
    assert!(success, "build failed: stdout={}, stderr={}", stdout, stderr);
    let catalog = parse_catalog(&stdout);
    assert_eq!(catalog.len(), 1);
    assert!(catalog.contains_key("dsn:-74"));
}

#[test]
fn test_missing_config_uses_defaults() {
    let tmp = TempDir::new().unwrap();
    let (stdout, _, success) =
        run_facat(&tmp.path().join("nope.toml"), &["translate", "radio"]);
    assert!(success);
    assert!(stdout.contains("radio\tem.radio"));
}
