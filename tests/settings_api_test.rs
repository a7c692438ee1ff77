// ==========================================
// SettingsApi integration tests
// ==========================================
// Administrative edits flowing through to the engines.
// ==========================================


use pensum_planner::api::ApiError;
use pensum_planner::domain::types::Role;
use test_helpers::{create_test_apis, create_test_db};

#[test]
fn test_settings_edits_change_the_calculation() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let apis = create_test_apis(&db_path).expect("apis");

    let profile = apis.planner.new_profile().expect("profile");
    let before = apis.planner.evaluate(&profile).expect("evaluate");
    assert_eq!(before.pensum_percentage, 100.0);

    // Halve the teaching load baseline: the same 26 lessons are
    // now worth more hours each.
    let mut settings = apis.settings.get_global_settings().expect("settings");
    settings.base_lessons.insert(Role::Klp, 13.0);
    apis.settings
        .update_global_settings(&settings)
        .expect("update");

    let after = apis.planner.evaluate(&profile).expect("evaluate");
    assert!(after.total_hours > before.total_hours);
}

#[test]
fn test_reference_year_shifts_age_relief() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let apis = create_test_apis(&db_path).expect("apis");

    let profile = apis.planner.new_profile().expect("profile");
    // Born 1975: 51 in 2026, no relief.
    let profile = apis.planner.set_birth_year(&profile, 1975).expect("year");
    let before = apis.planner.evaluate(&profile).expect("evaluate");

    apis.settings.set_reference_year(2031).expect("set year");
    assert_eq!(apis.settings.get_reference_year().expect("year"), 2031);

    // Now 56: 1 WL of age relief enters the total.
    let after = apis.planner.evaluate(&profile).expect("evaluate");
    assert_eq!(after.total_hours, before.total_hours + 60.0);
}

#[test]
fn test_invalid_settings_surface_as_api_error() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let apis = create_test_apis(&db_path).expect("apis");

    let mut settings = apis.settings.get_global_settings().expect("settings");
    settings.annual_hours = -100.0;
    let err = apis.settings.update_global_settings(&settings);
    assert!(matches!(err, Err(ApiError::Config(_))));
}

#[test]
fn test_catalogue_edit_roundtrip() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let apis = create_test_apis(&db_path).expect("apis");

    let mut catalogue = apis.settings.get_special_functions().expect("catalogue");
    catalogue
        .iter_mut()
        .find(|d| d.id == "sf-health")
        .expect("sf-health")
        .hours = 40.0;
    apis.settings
        .update_special_functions(&catalogue)
        .expect("update");

    let loaded = apis.settings.get_special_functions().expect("reload");
    assert_eq!(
        loaded.iter().find(|d| d.id == "sf-health").unwrap().hours,
        40.0
    );
}
