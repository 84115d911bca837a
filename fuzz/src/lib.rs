use zc_vec::{Error, VecBase, ZcSlice, ZcVec};

const MAX_SLICES: usize = 8;

/// Interpret `data` as a script of vector and slice operations, mirroring
/// every step against a plain `Vec` model. Divergence panics.
pub fn run_ops(data: &[u8]) {
    let mut input = data.iter().copied();
    let mut model: Vec<i8> = Vec::new();
    let mut subject: ZcVec<i8> = ZcVec::new();
    let mut slices: Vec<ZcSlice<i8>> = Vec::new();

    while let Some(op) = input.next() {
        match op % 10 {
            0 => {
                let value = next_value(&mut input);
                subject.push(value);
                model.push(value);
            }
            1 => match subject.pop() {
                Ok(value) => assert_eq!(Some(value), model.pop()),
                Err(err) => {
                    assert!(model.is_empty());
                    assert_eq!(err, Error::IndexOutOfRange { index: -1, len: 0 });
                }
            },
            2 => {
                let index = next_index(&mut input);
                let value = next_value(&mut input);
                match resolve(index, model.len()) {
                    Some(at) => {
                        subject.set(index, value).unwrap();
                        model[at] = value;
                    }
                    None => assert_eq!(
                        subject.set(index, value).unwrap_err(),
                        Error::IndexOutOfRange { index, len: model.len() }
                    ),
                }
            }
            3 => {
                let index = next_index(&mut input);
                match resolve(index, model.len()) {
                    Some(at) => assert_eq!(subject.get(index).unwrap(), model[at]),
                    None => assert!(subject.get(index).is_err()),
                }
            }
            4 => {
                let index = next_index(&mut input);
                match resolve(index, model.len()) {
                    Some(at) => assert_eq!(subject.remove(index).unwrap(), model.remove(at)),
                    None => assert!(subject.remove(index).is_err()),
                }
            }
            5 => {
                let index = next_index(&mut input);
                let value = next_value(&mut input);
                subject.insert(index, value);
                let len = model.len() as isize;
                let at = if index < 0 {
                    (index + len).max(0)
                } else {
                    index.min(len)
                } as usize;
                model.insert(at, value);
            }
            6 => {
                let start = next_index(&mut input);
                let end = next_index(&mut input);
                let slice = subject.slice(start, end);
                assert!(slice.offset() + slice.len() <= model.len());
                if slices.len() == MAX_SLICES {
                    slices.remove(0);
                }
                slices.push(slice);
            }
            7 => {
                let Some(slice) = pick(&slices, &mut input) else {
                    continue;
                };
                let index = next_index(&mut input);
                if slice.offset() + slice.len() > model.len() {
                    assert!(matches!(
                        slice.get(index).unwrap_err(),
                        Error::StaleSlice { .. }
                    ));
                } else {
                    match resolve(index, slice.len()) {
                        Some(at) => {
                            assert_eq!(slice.get(index).unwrap(), model[slice.offset() + at])
                        }
                        None => assert!(slice.get(index).is_err()),
                    }
                }
            }
            8 => {
                let Some(slice) = pick(&slices, &mut input) else {
                    continue;
                };
                let mut slice = slice.clone();
                let index = next_index(&mut input);
                let value = next_value(&mut input);
                if slice.offset() + slice.len() > model.len() {
                    assert!(matches!(
                        slice.set(index, value).unwrap_err(),
                        Error::StaleSlice { .. }
                    ));
                } else if let Some(at) = resolve(index, slice.len()) {
                    slice.set(index, value).unwrap();
                    model[slice.offset() + at] = value;
                } else {
                    assert!(slice.set(index, value).is_err());
                }
            }
            9 => {
                let Some(slice) = pick(&slices, &mut input) else {
                    continue;
                };
                let mut slice = slice.clone();
                let value = next_value(&mut input);
                assert_eq!(
                    slice.push(value).unwrap_err(),
                    Error::UnsupportedOperation("push")
                );
                assert_eq!(slice.pop().unwrap_err(), Error::UnsupportedOperation("pop"));
                assert_eq!(
                    slice.sort().unwrap_err(),
                    Error::UnsupportedOperation("sort")
                );
            }
            _ => unreachable!(),
        }

        assert_eq!(subject, model);
    }
}

fn next_value(input: &mut impl Iterator<Item = u8>) -> i8 {
    input.next().unwrap_or(0) as i8
}

fn next_index(input: &mut impl Iterator<Item = u8>) -> isize {
    (input.next().unwrap_or(0) as i8) as isize
}

fn resolve(index: isize, len: usize) -> Option<usize> {
    let resolved = if index < 0 {
        index + len as isize
    } else {
        index
    };
    if resolved < 0 || resolved as usize >= len {
        None
    } else {
        Some(resolved as usize)
    }
}

fn pick<'s>(
    slices: &'s [ZcSlice<i8>],
    input: &mut impl Iterator<Item = u8>,
) -> Option<&'s ZcSlice<i8>> {
    if slices.is_empty() {
        return None;
    }
    let at = input.next().unwrap_or(0) as usize % slices.len();
    Some(&slices[at])
}
