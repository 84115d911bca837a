use zc_vec::{Error, ZcSlice, ZcVec};

#[test]
fn test_resize_ops_are_refused() {
    let vec = ZcVec::adopt(vec![1, 2, 3, 4]);
    let mut slice = vec.slice(1, 3);

    assert_eq!(
        slice.push(9).unwrap_err(),
        Error::UnsupportedOperation("push")
    );
    assert_eq!(slice.pop().unwrap_err(), Error::UnsupportedOperation("pop"));
    assert_eq!(
        slice.insert(0, 9).unwrap_err(),
        Error::UnsupportedOperation("insert")
    );
    assert_eq!(
        slice.remove(0).unwrap_err(),
        Error::UnsupportedOperation("remove")
    );
    assert_eq!(
        slice.clear().unwrap_err(),
        Error::UnsupportedOperation("clear")
    );
    assert_eq!(
        slice.extend_from([9, 9]).unwrap_err(),
        Error::UnsupportedOperation("extend_from")
    );

    // Nothing was touched.
    assert_eq!(vec, [1, 2, 3, 4]);
    assert_eq!(slice.len(), 2);
}

#[test]
fn test_reorder_ops_are_refused() {
    let vec = ZcVec::adopt(vec![3, 1, 2]);
    let mut slice = vec.slice(0, 3);

    assert_eq!(
        slice.sort().unwrap_err(),
        Error::UnsupportedOperation("sort")
    );
    assert_eq!(
        slice.reverse().unwrap_err(),
        Error::UnsupportedOperation("reverse")
    );
    assert_eq!(vec, [3, 1, 2]);
}

#[test]
fn test_refusal_does_not_depend_on_root_state() {
    // Refused on an empty window, a full window, and a stale one alike.
    let mut vec = ZcVec::adopt(vec![1, 2, 3]);

    let mut empty = vec.slice(0, 0);
    assert_eq!(
        empty.push(9).unwrap_err(),
        Error::UnsupportedOperation("push")
    );

    let mut full = vec.slice(0, 3);
    assert_eq!(
        full.push(9).unwrap_err(),
        Error::UnsupportedOperation("push")
    );

    vec.clear();
    assert_eq!(
        full.push(9).unwrap_err(),
        Error::UnsupportedOperation("push")
    );
}

#[test]
fn test_plain_sequences_cannot_back_a_slice() {
    let plain = vec![1, 2, 3];
    assert_eq!(
        ZcSlice::over(&plain, 0, 2).unwrap_err(),
        Error::UnsupportedType("Vec")
    );
    assert_eq!(
        ZcSlice::over(plain.as_slice(), 0, 2).unwrap_err(),
        Error::UnsupportedType("slice")
    );

    // Adopting first is the supported path.
    let vec = ZcVec::adopt(plain);
    assert!(ZcSlice::over(&vec, 0, 2).is_ok());
}
