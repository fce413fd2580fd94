use std::collections::HashMap;
use std::ptr;
use std::rc::{Rc, Weak};
use std::sync::mpsc;

use super::mock;
use super::prelude::*;

#[test]
fn absent_values_are_nil() {
    let map: Option<HashMap<String, String>> = None;
    let vec: Option<Vec<u8>> = None;
    let function: Option<Box<dyn Fn()>> = None;
    let channel: Option<mpsc::Sender<u32>> = None;
    let reference: Option<&u32> = None;

    assert!(map.is_nil());
    assert!(vec.is_nil());
    assert!(function.is_nil());
    assert!(channel.is_nil());
    assert!(reference.is_nil());
    assert!(ptr::null::<u8>().is_nil());
    assert!(ptr::null_mut::<u8>().is_nil());
    assert!(Weak::<u8>::new().is_nil());
}

#[test]
fn present_values_are_not_nil() {
    let (sender, _receiver) = mpsc::channel::<u32>();
    let value = 42u32;
    let rc = Rc::new(1);

    assert!(!Some(HashMap::<String, String>::new()).is_nil());
    assert!(!Some(Vec::<u8>::new()).is_nil());
    assert!(!Some(Box::new(|| ()) as Box<dyn Fn()>).is_nil());
    assert!(!Some(sender).is_nil());
    assert!(!Some(&value).is_nil());
    assert!(!(&value as *const u32).is_nil());
    assert!(!Rc::downgrade(&rc).is_nil());
}

#[test]
fn dropped_weak_references_are_nil() {
    let rc = Rc::new(1);
    let weak = Rc::downgrade(&rc);
    assert!(!weak.is_nil());
    drop(rc);
    assert!(weak.is_nil());
}

#[test]
fn wrapping_preserves_nil() {
    let map: Option<HashMap<String, String>> = None;

    assert!((&map).is_nil());
    assert!((&&map).is_nil());
    assert!(Box::new(map.clone()).is_nil());
    assert!(Rc::new(map.clone()).is_nil());
    assert!(std::sync::Arc::new(map).is_nil());

    let boxed: Box<dyn Nilable> = Box::new(None::<u8>);
    assert!(boxed.is_nil());
}

#[test]
fn plain_values_are_never_nil() {
    assert!(!0i32.is_nil());
    assert!(!0.0f64.is_nil());
    assert!(!false.is_nil());
    assert!(!'\0'.is_nil());
    assert!(!"".is_nil());
    assert!(!String::new().is_nil());
    assert!(!Vec::<u8>::new().is_nil());
    assert!(!HashMap::<u8, u8>::new().is_nil());
    assert!(![0u8; 0].is_nil());
    assert!(!().is_nil());

    let boxed: Box<dyn Nilable> = Box::new(0u8);
    assert!(!boxed.is_nil());
}

#[test]
fn checks() {
    let map: Option<HashMap<String, String>> = None;

    let t = mock(|t| {
        assert!(check::nil(t, &map));
        assert!(check::not_nil(t, Some(HashMap::from([("hello", "world")]))));
        assert!(check::not_nil(t, 5));
        assert!(check::not_nil(t, "hello"));
    });

    assert!(!t.failed(), "{:?}", t.messages());

    let t = mock(|t| {
        assert!(!check::nil(t, 5));
        assert!(!check::not_nil(t, None::<u8>));
    });

    assert_eq!(
        t.messages(),
        [
            "expected nil, received a non-nil `i32`",
            "expected a non-nil value, received a nil `core::option::Option<u8>`",
        ]
    );
}
