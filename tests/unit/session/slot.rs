use super::*;

#[test]
fn latest_ticket_wins_regardless_of_completion_order() {
    let mut slot = AssetSlot::<&str>::new(SlotKind::Template);
    let first = slot.begin();
    let second = slot.begin();

    assert_eq!(slot.complete(second, Some("b")), SlotUpdate::Applied);
    assert_eq!(slot.complete(first, Some("a")), SlotUpdate::Stale);
    assert_eq!(slot.get(), Some(&"b"));
}

#[test]
fn stale_completion_before_current_one_is_dropped() {
    let mut slot = AssetSlot::<u32>::new(SlotKind::Pattern);
    let first = slot.begin();
    let second = slot.begin();

    assert_eq!(slot.complete(first, Some(1)), SlotUpdate::Stale);
    assert!(!slot.is_loaded());
    assert_eq!(slot.complete(second, Some(2)), SlotUpdate::Applied);
    assert_eq!(slot.get(), Some(&2));
}

#[test]
fn previous_value_stays_visible_while_loading() {
    let mut slot = AssetSlot::new(SlotKind::Pattern);
    slot.set(7u8);
    let _ticket = slot.begin();
    assert_eq!(slot.get(), Some(&7));
}

#[test]
fn failed_load_clears_value() {
    let mut slot = AssetSlot::new(SlotKind::Pattern);
    slot.set(7u8);
    let ticket = slot.begin();
    assert_eq!(slot.complete(ticket, None), SlotUpdate::Failed);
    assert!(!slot.is_loaded());
}

#[test]
fn clear_invalidates_in_flight_loads() {
    let mut slot = AssetSlot::<u8>::new(SlotKind::Template);
    let ticket = slot.begin();
    slot.clear();
    assert_eq!(slot.complete(ticket, Some(1)), SlotUpdate::Stale);
    assert!(!slot.is_loaded());
}

#[test]
fn tickets_are_bound_to_their_slot_kind() {
    let mut template = AssetSlot::<u8>::new(SlotKind::Template);
    let mut pattern = AssetSlot::<u8>::new(SlotKind::Pattern);
    let _ = template.begin();
    let p = pattern.begin();
    assert_eq!(p.generation, 1);
    assert_eq!(template.complete(p, Some(1)), SlotUpdate::Stale);
}

#[test]
fn revision_tracks_value_changes_not_tickets() {
    let mut slot = AssetSlot::<u8>::new(SlotKind::Pattern);
    assert_eq!(slot.revision(), None);

    slot.set(1);
    let shown = slot.revision();
    assert!(shown.is_some());

    let ticket = slot.begin();
    assert_eq!(slot.revision(), shown);

    assert_eq!(slot.complete(ticket, Some(2)), SlotUpdate::Applied);
    assert_ne!(slot.revision(), shown);

    slot.clear();
    assert_eq!(slot.revision(), None);
}
