//! Validation rules on the replace-collection DTOs.

use validator::Validate;
use vitals_db::models::supplement::{CreateSupplement, ReplaceSupplements};
use vitals_db::models::workout::{CreateWorkoutItem, ReplaceWorkoutPlan};

fn supplement(name: &str) -> CreateSupplement {
    CreateSupplement {
        name: name.to_string(),
        dose: None,
        target_minute: Some(480),
        days_mask: None,
        is_enabled: None,
    }
}

fn workout_item(target_minute: i16) -> CreateWorkoutItem {
    CreateWorkoutItem {
        kind: "run".to_string(),
        target_minute,
        days_mask: 127,
        duration_minutes: 30,
        intensity: None,
        note: None,
    }
}

#[test]
fn supplement_schedule_limits_entry_count() {
    let ok = ReplaceSupplements {
        entries: (0..50).map(|i| supplement(&format!("S{i}"))).collect(),
    };
    assert!(ok.validate().is_ok());

    let too_many = ReplaceSupplements {
        entries: (0..51).map(|i| supplement(&format!("S{i}"))).collect(),
    };
    let errors = too_many.validate().unwrap_err();
    assert!(errors.field_errors().contains_key("entries"));
}

#[test]
fn supplement_entries_are_validated_individually() {
    let replace = ReplaceSupplements {
        entries: vec![supplement("Zinc"), supplement("")],
    };
    assert!(replace.validate().is_err());
}

#[test]
fn workout_plan_limits_and_checks_items() {
    let ok = ReplaceWorkoutPlan {
        name: "Base".to_string(),
        items: vec![workout_item(420)],
    };
    assert!(ok.validate().is_ok());

    let too_many = ReplaceWorkoutPlan {
        name: "Base".to_string(),
        items: (0..51).map(|_| workout_item(420)).collect(),
    };
    assert!(too_many.validate().is_err());

    let bad_item = ReplaceWorkoutPlan {
        name: "Base".to_string(),
        items: vec![workout_item(1440)],
    };
    assert!(bad_item.validate().is_err());
}
