// tests/progress_tests.rs

use labtrack::progress::{self, StepState};
use labtrack::{OrderStatus, STATUS_SEQUENCE};

#[test]
fn test_step_classification_for_every_status() {
  for status in STATUS_SEQUENCE {
    let current_idx = progress::position(status);
    for step in 0..STATUS_SEQUENCE.len() {
      let expected = if step < current_idx {
        StepState::Completed
      } else if step == current_idx {
        StepState::Current
      } else {
        StepState::Upcoming
      };
      assert_eq!(
        progress::step_state(step, status),
        expected,
        "step {step} against {status}"
      );
    }
  }
}

#[test]
fn test_summary_renders_one_based_steps() {
  let summary = progress::summary(OrderStatus::PostProductionProcessing);
  assert_eq!(summary.step, 3);
  assert_eq!(summary.total, 6);
  assert_eq!(summary.current, OrderStatus::PostProductionProcessing);
  assert_eq!(
    summary.steps,
    [
      StepState::Completed,
      StepState::Completed,
      StepState::Current,
      StepState::Upcoming,
      StepState::Upcoming,
      StepState::Upcoming,
    ]
  );
}

#[test]
fn test_delivered_completes_every_prior_step() {
  let summary = progress::summary(OrderStatus::Delivered);
  assert_eq!(summary.step, 6);
  assert_eq!(summary.steps[5], StepState::Current);
  assert!(summary.steps[..5].iter().all(|s| *s == StepState::Completed));
  assert!(progress::is_terminal(OrderStatus::Delivered));
}

#[test]
fn test_short_labels_cover_the_sequence() {
  let labels: Vec<&str> = STATUS_SEQUENCE.iter().map(|s| progress::short_label(*s)).collect();
  assert_eq!(
    labels,
    ["Prep", "Production", "Processing", "Ready", "Shipped", "Delivered"]
  );
}

#[test]
fn test_statuses_order_along_the_sequence() {
  // The derived ordering on OrderStatus agrees with sequence position.
  for window in STATUS_SEQUENCE.windows(2) {
    assert!(window[0] < window[1]);
  }
}
