// ==========================================
// PlannerApi integration tests
// ==========================================
// The full editing surface end to end: edits, evaluation,
// validation rules and persistence.
// ==========================================


use pensum_planner::api::ApiError;
use pensum_planner::domain::function::function_ids;
use pensum_planner::domain::types::{InputUnit, Role, WorkField};
use pensum_planner::logging;
use test_helpers::{create_test_apis, create_test_db};

// ==========================================
// Profile lifecycle
// ==========================================

#[test]
fn test_new_profile_is_full_time_klp() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let apis = create_test_apis(&db_path).expect("apis");

    let profile = apis.planner.new_profile().expect("profile");
    assert_eq!(profile.role, Role::Klp);
    assert_eq!(profile.teaching_lessons, 26.0);
    assert!(profile.is_function_active(function_ids::KLP_STANDARD));

    // 1985 at reference year 2026 is 41, no age relief.
    assert!(!profile.is_function_active(function_ids::AGE_RELIEF));

    let result = apis.planner.evaluate(&profile).expect("evaluate");
    assert_eq!(result.total_hours, 1890.0);
    assert_eq!(result.pensum_percentage, 100.0);
}

#[test]
fn test_save_and_load_roundtrip() {
    logging::init_test();
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let apis = create_test_apis(&db_path).expect("apis");

    let mut profile = apis.planner.new_profile().expect("profile");
    profile.last_name = "Muster".to_string();
    profile.first_name = "Anna".to_string();

    let saved = apis
        .planner
        .save(&profile, None, "default")
        .expect("save");
    assert!(saved.id.starts_with("a-"));
    assert_eq!(saved.cached_pensum_percentage, 100.0);

    let loaded = apis.planner.load_profile(&saved.id).expect("load");
    assert_eq!(loaded.last_name, "Muster");

    // Saving under the same id updates instead of duplicating.
    let saved2 = apis
        .planner
        .save(&loaded, Some(&saved.id), "default")
        .expect("resave");
    assert_eq!(saved2.id, saved.id);
    assert_eq!(apis.agreement_repo.list_all().expect("list").len(), 1);
}

#[test]
fn test_save_requires_last_name() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let apis = create_test_apis(&db_path).expect("apis");

    let profile = apis.planner.new_profile().expect("profile");
    let err = apis.planner.save(&profile, None, "default");
    assert!(matches!(err, Err(ApiError::Validation(_))));
}

#[test]
fn test_load_unknown_profile_is_not_found() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let apis = create_test_apis(&db_path).expect("apis");

    let err = apis.planner.load_profile("a-missing");
    assert!(matches!(err, Err(ApiError::NotFound(_))));
}

// ==========================================
// Edits
// ==========================================

#[test]
fn test_change_role_resets_lessons_and_standard_function() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let apis = create_test_apis(&db_path).expect("apis");

    let profile = apis.planner.new_profile().expect("profile");
    let profile = apis.planner.change_role(&profile, Role::Shp).expect("role");

    assert_eq!(profile.teaching_lessons, 28.0);
    assert!(profile.is_function_active(function_ids::SHP_STANDARD));
    assert!(!profile.is_function_active(function_ids::KLP_STANDARD));
}

#[test]
fn test_birth_year_drives_age_relief() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let apis = create_test_apis(&db_path).expect("apis");

    let profile = apis.planner.new_profile().expect("profile");

    // 62 at reference year 2026: 3 WL on the Teacher field.
    let profile = apis.planner.set_birth_year(&profile, 1964).expect("year");
    assert!(profile.is_function_active(function_ids::AGE_RELIEF));
    let result = apis.planner.evaluate(&profile).expect("evaluate");
    assert_eq!(result.category(WorkField::Teacher).correction, 180.0);

    // Back under the threshold the relief disappears.
    let profile = apis.planner.set_birth_year(&profile, 1990).expect("year");
    assert!(!profile.is_function_active(function_ids::AGE_RELIEF));
}

#[test]
fn test_toggle_rules() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let apis = create_test_apis(&db_path).expect("apis");

    let profile = apis.planner.new_profile().expect("profile");

    // Optional functions toggle freely.
    let profile = apis
        .planner
        .toggle_function(&profile, "sf-picts", true)
        .expect("toggle on");
    assert!(profile.is_function_active("sf-picts"));
    let profile = apis
        .planner
        .toggle_function(&profile, "sf-picts", false)
        .expect("toggle off");
    assert!(!profile.is_function_active("sf-picts"));

    // Standard functions and the age relief are policy-managed.
    let err = apis
        .planner
        .toggle_function(&profile, function_ids::KLP_STANDARD, false);
    assert!(matches!(err, Err(ApiError::Validation(_))));
    let err = apis
        .planner
        .toggle_function(&profile, function_ids::AGE_RELIEF, true);
    assert!(matches!(err, Err(ApiError::Validation(_))));

    let err = apis.planner.toggle_function(&profile, "sf-nope", true);
    assert!(matches!(err, Err(ApiError::NotFound(_))));
}

#[test]
fn test_toggle_respects_role_restriction() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let apis = create_test_apis(&db_path).expect("apis");

    // Restrict sf-picts to SHP in the persisted catalogue.
    let mut catalogue = apis.config.get_special_functions().expect("catalogue");
    catalogue
        .iter_mut()
        .find(|d| d.id == "sf-picts")
        .unwrap()
        .allowed_roles = pensum_planner::domain::types::AllowedRoles::Only(Role::Shp);
    apis.config.set_special_functions(&catalogue).expect("set");

    let profile = apis.planner.new_profile().expect("profile");
    let err = apis.planner.toggle_function(&profile, "sf-picts", true);
    assert!(matches!(err, Err(ApiError::Validation(_))));
}

#[test]
fn test_function_hours_override_in_lessons() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let apis = create_test_apis(&db_path).expect("apis");

    let profile = apis.planner.new_profile().expect("profile");
    let profile = apis
        .planner
        .toggle_function(&profile, "sf-picts", true)
        .expect("toggle");

    // 2 WL override -> 120h on School.
    let profile = apis
        .planner
        .set_function_hours(&profile, "sf-picts", 2.0, InputUnit::Lessons)
        .expect("override");
    let result = apis.planner.evaluate(&profile).expect("evaluate");
    assert_eq!(result.category(WorkField::School).correction, 120.0);
}

#[test]
fn test_single_class_flag() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let apis = create_test_apis(&db_path).expect("apis");

    let profile = apis.planner.new_profile().expect("profile");
    let profile = apis.planner.change_role(&profile, Role::Shp).expect("role");

    let profile = apis
        .planner
        .set_single_class(&profile, function_ids::SHP_STANDARD, true)
        .expect("single class");
    let config = profile
        .function_config
        .get(function_ids::SHP_STANDARD)
        .expect("config");
    assert_eq!(config.hours, 60.0);
    assert_eq!(config.single_class, Some(true));

    // The flag only exists on the SHP/DaZ coordination.
    let err = apis
        .planner
        .set_single_class(&profile, function_ids::KLP_STANDARD, true);
    assert!(matches!(err, Err(ApiError::Validation(_))));
}

#[test]
fn test_manual_corrections_are_signed_and_unclamped() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let apis = create_test_apis(&db_path).expect("apis");

    let profile = apis.planner.new_profile().expect("profile");
    let profile = apis
        .planner
        .set_manual_correction(&profile, WorkField::School, Some(-10_000.0))
        .expect("correction");

    let result = apis.planner.evaluate(&profile).expect("evaluate");
    assert!(result.category(WorkField::School).hours < 0.0);
    assert!(result.total_hours < 0.0 || result.total_hours < 1890.0);

    // Clearing restores the base value.
    let profile = apis
        .planner
        .set_manual_correction(&profile, WorkField::School, None)
        .expect("clear");
    let result = apis.planner.evaluate(&profile).expect("evaluate");
    assert!(result.category(WorkField::School).hours > 0.0);
}

#[test]
fn test_custom_function_lifecycle() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let apis = create_test_apis(&db_path).expect("apis");

    let profile = apis.planner.new_profile().expect("profile");
    let profile = apis.planner.add_custom_function(&profile).expect("add");
    assert_eq!(profile.custom_functions.len(), 1);

    let mut custom = profile.custom_functions[0].clone();
    custom.name = "Schulgarten".to_string();
    custom.value = 45.0;
    custom.work_field = WorkField::School;
    let profile = apis
        .planner
        .update_custom_function(&profile, custom.clone())
        .expect("update");

    let result = apis.planner.evaluate(&profile).expect("evaluate");
    assert_eq!(result.category(WorkField::School).correction, 45.0);

    let profile = apis
        .planner
        .remove_custom_function(&profile, &custom.id)
        .expect("remove");
    assert!(profile.custom_functions.is_empty());

    let err = apis.planner.remove_custom_function(&profile, &custom.id);
    assert!(matches!(err, Err(ApiError::NotFound(_))));
}
