// tests/order_store_tests.rs
mod common; // Reference the common module

use chrono::{Duration, Utc};
use common::*;
use labtrack::{
  AdminOrderPatch, Carrier, OrderPriority, OrderStatus, OrderStore, PhotoUpload, StoreError,
};
use uuid::Uuid;

#[test]
fn test_create_assigns_sequential_numbers_within_a_year() {
  setup_tracing();
  let store = OrderStore::new();

  let first = store.create(new_order("John Smith", "Downtown Dental")).unwrap();
  let second = store.create(new_order("Sarah Johnson", "Smile Center")).unwrap();
  let third = store.create(new_order("Michael Brown", "Smile Center")).unwrap();

  let numbers = [&first.order_number, &second.order_number, &third.order_number];
  let year = Utc::now().format("%Y").to_string();
  for (idx, number) in numbers.iter().enumerate() {
    assert_eq!(**number, format!("ORD-{}-{:03}", year, idx + 1));
  }

  // Unique and strictly increasing in assignment order.
  assert!(numbers[0] < numbers[1] && numbers[1] < numbers[2]);
}

#[test]
fn test_create_seeds_history_and_timestamps() {
  setup_tracing();
  let store = OrderStore::new();
  let order = store.create(new_order("John Smith", "Downtown Dental")).unwrap();

  assert_eq!(order.status, OrderStatus::Preparation);
  assert_eq!(order.priority, OrderPriority::Normal); // default when unset
  assert_eq!(order.created_at, order.updated_at);
  assert_eq!(order.status_history.len(), 1);
  let entry = &order.status_history[0];
  assert_eq!(entry.status, OrderStatus::Preparation);
  assert_eq!(entry.notes.as_deref(), Some("Order created"));
  assert!(order.production_photos.is_empty());
}

#[test]
fn test_create_rejects_missing_required_fields() {
  setup_tracing();
  let store = OrderStore::new();

  let no_patient = store.create(new_order("", "Downtown Dental"));
  assert!(matches!(no_patient, Err(StoreError::Validation(_))));

  let no_clinic = store.create(new_order("John Smith", "  "));
  assert!(matches!(no_clinic, Err(StoreError::Validation(_))));

  // Failed creations leave the store unchanged.
  assert!(store.is_empty());
}

#[test]
fn test_status_history_grows_by_one_per_update_and_tracks_current_status() {
  setup_tracing();
  let store = OrderStore::new();
  let order = store.create(new_order("John Smith", "Downtown Dental")).unwrap();

  let transitions = [
    OrderStatus::InProduction,
    OrderStatus::PostProductionProcessing,
    // Backward move: allowed, still audited.
    OrderStatus::InProduction,
    OrderStatus::Delivered,
  ];
  for status in transitions {
    store.update_status(order.id, status, None).unwrap();
  }

  let updated = store.get(order.id).unwrap();
  assert_eq!(updated.status_history.len(), transitions.len() + 1);
  assert_eq!(updated.status, OrderStatus::Delivered);
  assert_eq!(
    updated.status_history.last().unwrap().status,
    updated.status
  );
  assert!(updated.updated_at >= updated.created_at);
}

#[test]
fn test_update_status_defaults_the_note() {
  setup_tracing();
  let store = OrderStore::new();
  let order = store.create(new_order("John Smith", "Downtown Dental")).unwrap();

  let updated = store
    .update_status(order.id, OrderStatus::InProduction, None)
    .unwrap();
  assert_eq!(
    updated.status_history.last().unwrap().notes.as_deref(),
    Some("Status updated to In Production")
  );

  let updated = store
    .update_status(order.id, OrderStatus::Shipped, Some("left warehouse".into()))
    .unwrap();
  assert_eq!(
    updated.status_history.last().unwrap().notes.as_deref(),
    Some("left warehouse")
  );
}

#[test]
fn test_field_patches_bump_updated_at_only_where_addressed() {
  setup_tracing();
  let store = OrderStore::new();
  let order = store.create(new_order("John Smith", "Downtown Dental")).unwrap();
  let other = store.create(new_order("Sarah Johnson", "Smile Center")).unwrap();

  store
    .update_tracking(order.id, "1Z999AA1234567890".into(), Some(Carrier::Ups))
    .unwrap();
  store.update_priority(order.id, OrderPriority::Urgent).unwrap();
  let estimate = Utc::now() + Duration::days(10);
  store.update_estimated_completion(order.id, estimate).unwrap();

  let updated = store.get(order.id).unwrap();
  assert_eq!(updated.tracking_number.as_deref(), Some("1Z999AA1234567890"));
  assert_eq!(updated.carrier, Some(Carrier::Ups));
  assert_eq!(updated.priority, OrderPriority::Urgent);
  assert_eq!(updated.estimated_completion_time, Some(estimate));
  assert!(updated.updated_at > updated.created_at);
  // No history entries for non-status mutations.
  assert_eq!(updated.status_history.len(), 1);

  let untouched = store.get(other.id).unwrap();
  assert_eq!(untouched.updated_at, untouched.created_at);
}

#[test]
fn test_assign_to_lab_stamps_the_admin_actor() {
  setup_tracing();
  let store = OrderStore::new();
  let order = store.create(new_order("John Smith", "Downtown Dental")).unwrap();

  let updated = store.assign_to_lab(order.id, "Premium Dental Lab".into()).unwrap();
  assert_eq!(updated.assigned_lab.as_deref(), Some("Premium Dental Lab"));
  assert_eq!(updated.last_modified_by.as_deref(), Some("Admin"));
}

#[test]
fn test_attach_photo_appends_with_generated_identity() {
  setup_tracing();
  let store = OrderStore::new();
  let order = store.create(new_order("Robert Wilson", "Downtown Dental")).unwrap();

  store
    .attach_photo(
      order.id,
      PhotoUpload {
        stage: OrderStatus::InProduction,
        url: "/photos/crown-progress.jpg".into(),
        caption: Some("Implant crown progress".into()),
      },
    )
    .unwrap();
  let updated = store
    .attach_photo(
      order.id,
      PhotoUpload {
        stage: OrderStatus::PostProductionProcessing,
        url: "/photos/crown-polished.jpg".into(),
        caption: None,
      },
    )
    .unwrap();

  assert_eq!(updated.production_photos.len(), 2);
  assert_ne!(updated.production_photos[0].id, updated.production_photos[1].id);
  assert_eq!(updated.production_photos[0].stage, OrderStatus::InProduction);
}

#[test]
fn test_admin_override_keeps_the_audit_trail() {
  setup_tracing();
  let store = OrderStore::new();
  let order = store.create(new_order("Emily Davis", "Elite Dental Care")).unwrap();

  let updated = store
    .admin_override_status(order.id, OrderStatus::Shipped, "expedited per clinic call".into())
    .unwrap();

  assert_eq!(updated.status, OrderStatus::Shipped);
  assert_eq!(updated.admin_notes.as_deref(), Some("expedited per clinic call"));
  assert_eq!(updated.last_modified_by.as_deref(), Some("Admin"));
  let entry = updated.status_history.last().unwrap();
  assert_eq!(
    entry.notes.as_deref(),
    Some("Admin override: expedited per clinic call")
  );
  assert_eq!(entry.updated_by.as_deref(), Some("Admin"));
}

#[test]
fn test_admin_patch_touches_only_present_fields() {
  setup_tracing();
  let store = OrderStore::new();
  let order = store.create(new_order("Lisa Anderson", "Healthy Smiles Clinic")).unwrap();

  let updated = store
    .admin_update(
      order.id,
      AdminOrderPatch {
        priority: Some(OrderPriority::High),
        lab_notes: Some("flexible base material confirmed".into()),
        ..AdminOrderPatch::default()
      },
    )
    .unwrap();

  assert_eq!(updated.priority, OrderPriority::High);
  assert_eq!(updated.lab_notes.as_deref(), Some("flexible base material confirmed"));
  assert_eq!(updated.patient_name, "Lisa Anderson");
  assert_eq!(updated.last_modified_by.as_deref(), Some("Admin"));
}

#[test]
fn test_mutations_on_unknown_ids_fail_without_side_effects() {
  setup_tracing();
  let store = OrderStore::new();
  store.create(new_order("John Smith", "Downtown Dental")).unwrap();

  let ghost = Uuid::new_v4();
  let result = store.update_status(ghost, OrderStatus::Shipped, None);
  assert!(matches!(
    result,
    Err(StoreError::NotFound { entity: "order", .. })
  ));
  assert_eq!(store.len(), 1);
  assert_eq!(store.all()[0].status_history.len(), 1);
}

// End-to-end: create, ship with a note, then query by status.
#[test]
fn test_created_order_is_queryable_after_shipping() {
  setup_tracing();
  let store = OrderStore::new();
  let order = store.create(new_order("John Smith", "Downtown Dental")).unwrap();

  store
    .update_status(order.id, OrderStatus::Shipped, Some("left warehouse".into()))
    .unwrap();

  let shipped = store.orders_by_status(OrderStatus::Shipped);
  assert_eq!(shipped.len(), 1);
  assert_eq!(shipped[0].id, order.id);
  assert_eq!(shipped[0].status_history.len(), 2);
  let last = shipped[0].status_history.last().unwrap();
  assert_eq!(last.status, OrderStatus::Shipped);
  assert_eq!(last.notes.as_deref(), Some("left warehouse"));

  assert!(store.orders_by_status(OrderStatus::Delivered).is_empty());
}

#[test]
fn test_store_clones_share_state() {
  setup_tracing();
  let store = OrderStore::new();
  let view = store.clone();

  store.create(new_order("John Smith", "Downtown Dental")).unwrap();
  assert_eq!(view.len(), 1);
}
