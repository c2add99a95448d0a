use super::*;
use crate::fake_node::FakeNode;

const VISIBLE: Visibility = Visibility { intersecting: true, ratio: 0.5 };
const HIDDEN: Visibility = Visibility { intersecting: false, ratio: 0.0 };

fn tracker(n: usize) -> (RevealTracker<FakeNode>, Vec<FakeNode>) {
    let nodes: Vec<FakeNode> = (0..n).map(|_| FakeNode::new()).collect();
    (RevealTracker::new(nodes.clone(), 0.2), nodes)
}

#[test]
fn first_visible_report_reveals() {
    let (mut t, nodes) = tracker(1);
    assert_eq!(t.on_visibility(0, VISIBLE), RevealOutcome::Revealed);
    assert!(nodes[0].has_class("animated"));
    assert_eq!(t.state(0), Some(RevealState::Revealed));
}

#[test]
fn reentering_viewport_is_ignored_after_reveal() {
    let (mut t, nodes) = tracker(1);
    t.on_visibility(0, VISIBLE);
    nodes[0].set_class("animated", false);

    assert_eq!(t.on_visibility(0, HIDDEN), RevealOutcome::Ignored);
    assert_eq!(t.on_visibility(0, VISIBLE), RevealOutcome::Ignored);
    assert!(!nodes[0].has_class("animated"));
}

#[test]
fn below_threshold_keeps_observing() {
    let (mut t, nodes) = tracker(1);
    let sliver = Visibility { intersecting: true, ratio: 0.05 };
    assert_eq!(t.on_visibility(0, sliver), RevealOutcome::Pending);
    assert_eq!(t.on_visibility(0, HIDDEN), RevealOutcome::Pending);
    assert!(!nodes[0].has_class("animated"));
    assert_eq!(t.state(0), Some(RevealState::Observing));
}

#[test]
fn ratio_reported_just_under_threshold_counts() {
    let (mut t, _) = tracker(1);
    let edge = Visibility { intersecting: true, ratio: 0.199_9 };
    assert_eq!(t.on_visibility(0, edge), RevealOutcome::Revealed);
}

#[test]
fn completes_once_every_item_revealed() {
    let (mut t, _) = tracker(3);
    assert_eq!(t.observing(), 3);
    t.on_visibility(0, VISIBLE);
    t.on_visibility(2, VISIBLE);
    assert!(!t.is_complete());
    t.on_visibility(1, VISIBLE);
    assert!(t.is_complete());
}

#[test]
fn unknown_index_is_ignored() {
    let (mut t, _) = tracker(1);
    assert_eq!(t.on_visibility(9, VISIBLE), RevealOutcome::Ignored);
}

#[test]
fn index_of_finds_observed_node() {
    let (t, nodes) = tracker(2);
    assert_eq!(t.index_of(&nodes[1]), Some(1));
    assert_eq!(t.index_of(&FakeNode::new()), None);
    assert_eq!(t.nodes().count(), 2);
}
