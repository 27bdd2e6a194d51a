use super::{BufferResource, Global, Storage};
use crate::error::Error;

#[test]
fn global_fills() {
    let buffer = Global.allocate(6, 7u32).unwrap();
    assert_eq!(buffer, vec![7; 6]);
    assert_eq!(buffer.capacity(), 6);
}

#[test]
fn global_reports_capacity_overflow() {
    let result = Storage::<u64>::allocate(&mut Global, usize::MAX, 0);
    assert!(matches!(result, Err(Error::Alloc(_))));
}

#[test]
fn buffer_resource_carves_in_order() {
    let mut backing = [9i32; 10];
    {
        let mut resource = BufferResource::new(&mut backing);
        let first = resource.allocate(4, 1).unwrap();
        first[0] = 100;
        assert_eq!(resource.remaining(), 6);
        let second = resource.allocate(6, 2).unwrap();
        assert_eq!(second, &[2; 6]);
        assert_eq!(resource.remaining(), 0);
    }
    assert_eq!(backing, [100, 1, 1, 1, 2, 2, 2, 2, 2, 2]);
}

#[test]
fn buffer_resource_exhausted() {
    let mut backing = [0u8; 3];
    let mut resource = BufferResource::new(&mut backing);
    match resource.allocate(4, 0) {
        Err(Error::StorageExhausted {
            requested,
            available,
        }) => {
            assert_eq!(requested, 4);
            assert_eq!(available, 3);
        }
        other => panic!("unexpected result: {:?}", other),
    }
    // 失敗しても残りは減らない.
    assert_eq!(resource.remaining(), 3);
}
