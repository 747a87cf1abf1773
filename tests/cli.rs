use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `bodai` command pointed at a scratch data directory with cheap hashing
fn bodai(data_dir: &TempDir) -> Command {
    let settings = data_dir.path().join("config.json");
    if !settings.exists() {
        std::fs::write(
            &settings,
            r#"{"password_hashing": {"memory_cost": 1024, "time_cost": 1, "parallelism": 1}}"#,
        )
        .unwrap();
    }

    let mut cmd = Command::cargo_bin("bodai").unwrap();
    cmd.env("BODAI_DATA_DIR", data_dir.path())
        .env_remove("BODAI_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn init_and_config() {
    let data_dir = TempDir::new().unwrap();

    bodai(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    bodai(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("127.0.0.1:3000"))
        .stdout(predicate::str::contains("0.01 ETH"));
}

#[test]
fn register_list_and_duplicate() {
    let data_dir = TempDir::new().unwrap();

    bodai(&data_dir)
        .args(["user", "register", "Ada", "Ada@Example.com", "--password", "hunter22"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered user: Ada <ada@example.com>"));

    bodai(&data_dir)
        .args(["user", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ada@example.com"))
        .stdout(predicate::str::contains("argon2").not());

    bodai(&data_dir)
        .args(["user", "register", "Ada Again", "ada@example.com", "--password", "pw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    bodai(&data_dir)
        .args(["user", "show", "ada@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User: Ada"));
}

#[test]
fn password_from_environment() {
    let data_dir = TempDir::new().unwrap();

    bodai(&data_dir)
        .env("BODAI_PASSWORD", "from-env")
        .args(["user", "register", "Grace", "grace@example.com"])
        .assert()
        .success();

    bodai(&data_dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("grace@example.com"))
        .stdout(predicate::str::contains("from-env").not());
}

#[test]
fn onboarding_session_submits_profile() {
    let data_dir = TempDir::new().unwrap();
    let script = [
        "", "175 cm", "70 kg", "25",
        "Two years lifting", "",
        "2", "Desk job",
        "1", "",
        "2", "2",
        "",
    ]
    .join("\n")
        + "\n";

    bodai(&data_dir)
        .args(["onboard", "--email", "ada@example.com"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile setup completed successfully!"));

    bodai(&data_dir)
        .args(["profile", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ada@example.com"))
        .stdout(predicate::str::contains("Fat Loss"));

    bodai(&data_dir)
        .args(["profile", "export", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"primaryGoal\": \"fat-loss\""));
}

#[test]
fn empty_profile_list() {
    let data_dir = TempDir::new().unwrap();

    bodai(&data_dir)
        .args(["profile", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No profiles found."));
}

#[test]
fn tracking_session_exports_csv() {
    let data_dir = TempDir::new().unwrap();
    let csv_path = data_dir.path().join("workouts.csv");
    let script = format!(
        "add Squats\ndate 2024-01-01\nadd Squats\nset 1\nupdate 1 1 weight 40\ndone 1 1\nsave\nhistory\nexport {}\nquit\n",
        csv_path.display()
    );

    bodai(&data_dir)
        .arg("track")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Select a date first"))
        .stdout(predicate::str::contains("Workout saved."))
        .stdout(predicate::str::contains("Goodbye!"));

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv.contains("2024-01-01,Squats,1,0,40,true"));
}
