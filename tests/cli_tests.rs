mod common;
use common::{gb, init_db, write_config};
use predicates::str::contains;

fn book(name: &str, db: &str, date: &str, time: &str) -> assert_cmd::assert::Assert {
    gb(name)
        .args([
            "--db", db, "book", date, time, "--client", "Ana Souza", "--pet", "Rex", "--size",
            "medium", "--contact", "11987654321", "--bath", "therapeutic", "--hydration",
        ])
        .assert()
}

#[test]
fn init_creates_database() {
    let db_path = init_db("cli_init");
    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn rule_add_then_list() {
    let name = "cli_rule_add";
    let db = init_db(name);

    gb(name)
        .args([
            "--db", &db, "rule", "add", "--day", "terça", "--time", "09:00", "--pet", "Thor",
            "--frequency", "mensal", "--start", "2099-03-03",
        ])
        .assert()
        .success()
        .stdout(contains("Rule #1 created"));

    gb(name)
        .args(["--db", &db, "rule", "list"])
        .assert()
        .success()
        .stdout(contains("Thor"))
        .stdout(contains("monthly"))
        .stdout(contains("2099-03-03"));
}

#[test]
fn rule_add_rejects_off_grid_time() {
    let name = "cli_rule_bad_time";
    let db = init_db(name);

    gb(name)
        .args(["--db", &db, "rule", "add", "--day", "2", "--time", "09:10", "--pet", "Thor"])
        .assert()
        .failure()
        .stderr(contains("Invalid time"));
}

#[test]
fn booking_takes_the_slot() {
    let name = "cli_book";
    let db = init_db(name);

    book(name, &db, "2099-03-04", "10:00")
        .success()
        .stdout(contains("Booking #1 confirmed"))
        .stdout(contains("R$ 76,25"));

    gb(name)
        .args(["--db", &db, "slots", "2099-03-04"])
        .assert()
        .success()
        .stdout(contains("09:30 10:30"));

    book(name, &db, "2099-03-04", "10:00")
        .failure()
        .stderr(contains("not available"));
}

#[test]
fn sunday_has_no_slots() {
    let name = "cli_sunday";
    let db = init_db(name);

    gb(name)
        .args(["--db", &db, "slots", "2099-03-08"])
        .assert()
        .success()
        .stdout(contains("nenhum horário disponível"));
}

#[test]
fn agenda_json_merges_bookings_and_rules() {
    let name = "cli_agenda_json";
    let db = init_db(name);

    gb(name)
        .args([
            "--db", &db, "rule", "add", "--day", "quarta", "--time", "09:30", "--pet", "Luna",
            "--start", "2099-03-04", "--bath", "2",
        ])
        .assert()
        .success();
    book(name, &db, "2099-03-04", "10:00").success();

    gb(name)
        .args(["--db", &db, "agenda", "2099-03-04", "--json"])
        .assert()
        .success()
        .stdout(contains(r#""kind": "recurring""#))
        .stdout(contains(r#""visit_ordinal": 2"#))
        .stdout(contains(r#""kind": "client""#))
        .stdout(contains("2099-03-04T09:30:00"));
}

#[test]
fn block_and_cancel() {
    let name = "cli_block_cancel";
    let db = init_db(name);
    book(name, &db, "2099-03-04", "10:00").success();

    gb(name)
        .args(["--db", &db, "block", "2099-03-04", "11:00", "11:30"])
        .assert()
        .success()
        .stdout(contains("2 slot(s) blocked"))
        .stdout(contains("Block ids: #"));

    gb(name)
        .args(["--db", &db, "agenda", "2099-03-04"])
        .assert()
        .success()
        .stdout(contains("Horário Bloqueado"));

    let listing = gb(name)
        .args(["--db", &db, "appointments", "--date", "2099-03-04", "--blocked"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let listing = String::from_utf8(listing).unwrap();
    assert!(!listing.contains("Ana Souza"));

    let block_id: i64 = listing
        .lines()
        .find(|l| l.contains("11:00"))
        .and_then(|l| l.split_whitespace().next())
        .and_then(|id| id.parse().ok())
        .expect("listing shows the 11:00 block with its id");

    gb(name)
        .args(["--db", &db, "cancel", &block_id.to_string(), "--yes"])
        .assert()
        .success()
        .stdout(contains(format!("Appointment #{} has been cancelled", block_id)));

    gb(name)
        .args(["--db", &db, "slots", "2099-03-04"])
        .assert()
        .success()
        .stdout(contains("09:30 10:30 11:00 12:00"));

    gb(name)
        .args(["--db", &db, "cancel", &block_id.to_string(), "--yes"])
        .assert()
        .failure()
        .stderr(contains(format!("No appointment with id {}", block_id)));
}

#[test]
fn agenda_json_exposes_appointment_ids() {
    let name = "cli_agenda_ids";
    let db = init_db(name);
    book(name, &db, "2099-03-04", "10:00").success();

    let out = gb(name)
        .args(["--db", &db, "agenda", "2099-03-04", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let entries: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let id = entries[0]["id"].as_i64().expect("client entry carries its id");

    gb(name)
        .args(["--db", &db, "appointments"])
        .assert()
        .success()
        .stdout(contains("Ana Souza"))
        .stdout(contains(id.to_string()));
}

#[test]
fn block_is_refused_when_legacy_blocks_are_off() {
    let name = "cli_block_disabled";
    let db = init_db(name);
    write_config(name, "legacy_blocked_appointments: false\n");

    gb(name)
        .args(["--db", &db, "block", "2099-03-04", "11:00"])
        .assert()
        .failure()
        .stderr(contains("Blocking slots is disabled"));
}

#[test]
fn admin_commands_require_an_admin() {
    let name = "cli_admin";
    let db = init_db(name);
    write_config(name, "admin_emails:\n  - dona@petshop.com\n");

    gb(name)
        .args(["--db", &db, "rule", "list"])
        .assert()
        .failure()
        .stderr(contains("Access denied"));

    gb(name)
        .args(["--db", &db, "--as", "intruso@example.com", "agenda", "2099-03-04"])
        .assert()
        .failure()
        .stderr(contains("Access denied"));

    gb(name)
        .args(["--db", &db, "--as", "DONA@petshop.com", "rule", "list"])
        .assert()
        .success()
        .stdout(contains("No recurrence rules."));

    // customers can still look up and book slots
    gb(name)
        .args(["--db", &db, "slots", "2099-03-04"])
        .assert()
        .success();
}

#[test]
fn rule_import_from_csv() {
    let name = "cli_import";
    let db = init_db(name);

    let mut csv_path = std::env::temp_dir();
    csv_path.push("cli_import_rules.csv");
    std::fs::write(
        &csv_path,
        "dayOfWeek,time,petName,frequency\nterça,09:00,Thor,semanal\nsegunda,25:00,Bob,semanal\n",
    )
    .unwrap();
    let csv_arg = csv_path.to_string_lossy().to_string();

    gb(name)
        .args(["--db", &db, "rule", "import", &csv_arg])
        .assert()
        .success()
        .stdout(contains("line 3 skipped"))
        .stdout(contains("Imported 1 rule(s), skipped 1."));
}

#[test]
fn log_records_operations() {
    let name = "cli_log";
    let db = init_db(name);
    book(name, &db, "2099-03-04", "10:00").success();

    gb(name)
        .args(["--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("book"));
}
