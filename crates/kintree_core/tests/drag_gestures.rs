use kintree_core::{FamilyTreeService, Gender, Person};

fn service_with_pair() -> FamilyTreeService {
    let mut service = FamilyTreeService::new();
    service.add_person(Person::with_id("1", "A", 1950, Gender::Male));
    service.add_person(Person::with_id("2", "B", 1980, Gender::Female).father("1"));
    service
}

#[test]
fn adding_people_rebuilds_the_scene() {
    let service = service_with_pair();
    assert_eq!(service.scene().nodes.len(), 2);
    assert_eq!(service.scene().edges.len(), 1);
}

#[test]
fn drag_commit_survives_the_triggered_rebuild() {
    let mut service = service_with_pair();
    let (cx, cy) = {
        let node = service.scene().node("2").unwrap();
        (node.x, node.y)
    };

    // Grab the node dead center, move, release.
    assert!(service.begin_drag("2", cx, cy));
    service.drag_to(600.0, 500.0);
    let committed = service.end_drag().unwrap();
    assert_eq!((committed.x, committed.y), (600.0, 500.0));

    // The rebuild triggered by the commit reproduces the coordinate exactly.
    let node = service.scene().node("2").unwrap();
    assert_eq!((node.x, node.y), (600.0, 500.0));
    assert_eq!(
        service.store().get("2").unwrap().position.map(|p| (p.x, p.y)),
        Some((600.0, 500.0))
    );
}

#[test]
fn edges_track_the_node_during_the_gesture() {
    let mut service = service_with_pair();
    let (cx, cy) = {
        let node = service.scene().node("2").unwrap();
        (node.x, node.y)
    };

    service.begin_drag("2", cx + 5.0, cy - 5.0);
    service.drag_to(305.0, 395.0);

    // Offset (5, -5): the center is now (300, 400) and the connector's
    // child endpoint moved with it, before any store commit happened.
    let node = service.scene().node("2").unwrap();
    assert_eq!((node.x, node.y), (300.0, 400.0));
    let edge = &service.scene().edges[0];
    assert_eq!((edge.target_x, edge.target_y), (300.0, 400.0));
    assert_eq!(service.store().get("2").unwrap().position, None);
}

#[test]
fn dragged_node_is_raised_in_draw_order() {
    let mut service = service_with_pair();
    let first_id = service.scene().nodes[0].id.clone();
    service.begin_drag(&first_id, 0.0, 0.0);
    assert_eq!(service.scene().nodes.last().unwrap().id, first_id);
}

#[test]
fn gesture_calls_without_begin_are_noops() {
    let mut service = service_with_pair();
    assert_eq!(service.drag_to(10.0, 10.0), None);
    assert_eq!(service.end_drag(), None);
}

#[test]
fn unconfirmed_clear_leaves_all_data_intact() {
    let mut service = service_with_pair();
    assert!(!service.clear_people(false));
    assert_eq!(service.store().len(), 2);
    assert_eq!(service.scene().nodes.len(), 2);

    assert!(service.clear_people(true));
    assert!(service.store().is_empty());
    assert!(service.scene().nodes.is_empty());
}

#[test]
fn eligibility_lists_come_from_the_store() {
    let service = service_with_pair();
    assert_eq!(service.store().eligible_fathers().len(), 1);
    assert_eq!(service.store().eligible_mothers().len(), 1);
}
