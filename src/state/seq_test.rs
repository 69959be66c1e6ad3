use super::*;

#[test]
fn first_ticket_is_current() {
    let mut seq = RequestSeq::default();
    let t = seq.issue();
    assert!(seq.is_current(t));
}

#[test]
fn newer_ticket_supersedes_older() {
    let mut seq = RequestSeq::default();
    let first = seq.issue();
    let second = seq.issue();
    assert!(!seq.is_current(first));
    assert!(seq.is_current(second));
    assert!(first < second);
}

#[test]
fn initial_counter_never_fires() {
    assert!(!seq_advanced(0, 0));
}

#[test]
fn counter_fires_once_per_bump() {
    assert!(seq_advanced(1, 0));
    assert!(!seq_advanced(1, 1));
    assert!(seq_advanced(2, 1));
}
