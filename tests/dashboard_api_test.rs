// ==========================================
// DashboardApi integration tests
// ==========================================
// Folder management and cached-scalar listings.
// ==========================================


use pensum_planner::domain::types::Role;
use test_helpers::{create_test_apis, create_test_db};

/// Saves one agreement via the planner so the cached scalars are
/// real values, not fixtures.
fn save_agreement(
    apis: &test_helpers::TestApis,
    last_name: &str,
    role: Role,
    folder_id: &str,
) -> String {
    let profile = apis.planner.new_profile().expect("profile");
    let mut profile = apis.planner.change_role(&profile, role).expect("role");
    profile.last_name = last_name.to_string();
    apis.planner
        .save(&profile, None, folder_id)
        .expect("save")
        .id
}

#[test]
fn test_listing_filters_by_folder_and_role() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let apis = create_test_apis(&db_path).expect("apis");

    save_agreement(&apis, "Muster", Role::Klp, "default");
    save_agreement(&apis, "Beispiel", Role::Shp, "default");
    save_agreement(&apis, "Probe", Role::Klp, "sj2627");

    let all = apis.dashboard.list_agreements(None, None).expect("list");
    assert_eq!(all.len(), 3);

    let default_only = apis
        .dashboard
        .list_agreements(Some("default"), None)
        .expect("list");
    assert_eq!(default_only.len(), 2);

    let klp_only = apis
        .dashboard
        .list_agreements(None, Some(Role::Klp))
        .expect("list");
    assert_eq!(klp_only.len(), 2);

    let both = apis
        .dashboard
        .list_agreements(Some("default"), Some(Role::Shp))
        .expect("list");
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].last_name, "Beispiel");
}

#[test]
fn test_totals_sum_cached_scalars() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let apis = create_test_apis(&db_path).expect("apis");

    save_agreement(&apis, "Muster", Role::Klp, "default");
    save_agreement(&apis, "Beispiel", Role::Klp, "default");

    let rows = apis
        .dashboard
        .list_agreements(Some("default"), None)
        .expect("list");
    let totals = apis.dashboard.totals(Some("default"), None).expect("totals");

    assert_eq!(totals.record_count, 2);
    let expected_pensum: f64 = rows.iter().map(|r| r.pensum_percentage).sum();
    let expected_hours: f64 = rows.iter().map(|r| r.total_hours).sum();
    assert_eq!(totals.total_pensum_percentage, expected_pensum);
    assert_eq!(totals.total_hours, expected_hours);

    let empty = apis.dashboard.totals(Some("sj2627"), None).expect("totals");
    assert_eq!(empty.record_count, 0);
    assert_eq!(empty.total_hours, 0.0);
}

#[test]
fn test_folder_lifecycle() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let apis = create_test_apis(&db_path).expect("apis");

    let folder = apis
        .dashboard
        .create_folder("Schuljahr 2027/28")
        .expect("create");
    assert!(folder.id.starts_with("f-"));

    let folders = apis.dashboard.list_folders().expect("folders");
    assert!(folders.iter().any(|f| f.id == folder.id));

    let id = save_agreement(&apis, "Muster", Role::Klp, &folder.id);
    apis.dashboard.delete_folder(&folder.id).expect("delete");

    // Cascade removed the agreement with it.
    assert!(apis
        .agreement_repo
        .find_by_id(&id)
        .expect("find")
        .is_none());
}

#[test]
fn test_move_and_delete_agreement() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let apis = create_test_apis(&db_path).expect("apis");

    let id = save_agreement(&apis, "Muster", Role::Klp, "default");

    apis.dashboard
        .move_agreement(&id, "sj2627")
        .expect("move");
    let moved = apis
        .dashboard
        .list_agreements(Some("sj2627"), None)
        .expect("list");
    assert_eq!(moved.len(), 1);
    assert_eq!(moved[0].id, id);

    apis.dashboard.delete_agreement(&id).expect("delete");
    assert!(apis
        .dashboard
        .list_agreements(None, None)
        .expect("list")
        .is_empty());
}
