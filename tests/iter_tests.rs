use zc_vec::{VecBase, ZcVec};

#[test]
fn test_iter_yields_copies_in_order() {
    let vec = ZcVec::adopt(vec![1, 2, 3]);
    let collected: Vec<i32> = vec.iter().collect();
    assert_eq!(collected, vec![1, 2, 3]);
}

#[test]
fn test_iter_is_restartable() {
    let vec = ZcVec::adopt(vec![1, 2]);
    let first: Vec<i32> = vec.iter().collect();
    let second: Vec<i32> = vec.iter().collect();
    assert_eq!(first, second);
}

#[test]
fn test_iter_reads_live_state() {
    let mut vec = ZcVec::adopt(vec![1, 2]);
    let mut iter = vec.iter();

    assert_eq!(iter.next(), Some(1));
    vec.push(3);
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), Some(3));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_iter_stops_at_current_end() {
    let mut vec = ZcVec::adopt(vec![1, 2, 3, 4]);
    let mut iter = vec.iter();

    assert_eq!(iter.next(), Some(1));
    vec.clear();
    assert_eq!(iter.next(), None);

    // A later regrowth is also live; the cursor does not rewind.
    vec.extend([9, 9]);
    assert_eq!(iter.next(), Some(9));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_iter_sees_writes_through_a_slice() {
    let vec = ZcVec::adopt(vec![1, 2, 3]);
    let mut slice = vec.slice(1, 3);
    let mut iter = vec.iter();

    assert_eq!(iter.next(), Some(1));
    slice.set(0, 99).unwrap();
    assert_eq!(iter.next(), Some(99));
}

#[test]
fn test_for_loop_over_ref() {
    let vec = ZcVec::adopt(vec![1, 2, 3]);
    let mut total = 0;
    for value in &vec {
        total += value;
    }
    assert_eq!(total, 6);
}

#[test]
fn test_consuming_into_iter() {
    let vec = ZcVec::adopt(vec![1, 2, 3]);
    let collected: Vec<i32> = vec.into_iter().collect();
    assert_eq!(collected, vec![1, 2, 3]);
}
