use std::cell::RefCell;

use kl_toolkit::core::meta::{FilterT, Predicate, False, True, TypeList};
use kl_toolkit::core::{base64, hash, text};
use kl_toolkit::{defer, string_switch, type_pack};

#[test]
fn test_base64_round_trip() {
    // deterministic pseudo-random inputs
    let mut state: u32 = 0x1234_5678;
    for len in [0usize, 1, 2, 3, 4, 5, 17, 64, 255, 1000] {
        let bytes: Vec<u8> = (0..len)
            .map(|_| {
                state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                (state >> 16) as u8
            })
            .collect();
        let encoded = base64::encode(&bytes);
        assert_eq!(base64::decode(&encoded), Some(bytes));
    }
}

#[test]
fn test_base64_malformed_is_absent() {
    for input in ["a", "ab", "abc", "aa=a", "a===", "====", "ab?d", "SGVsbG8=SGVs"] {
        assert_eq!(base64::decode(input), None, "input {:?}", input);
    }
}

#[test]
fn test_fnv1a_is_stable() {
    const AT_COMPILE_TIME: u32 = hash::fnv1a_str("kl_toolkit");
    for _ in 0..3 {
        assert_eq!(hash::fnv1a(b"kl_toolkit"), AT_COMPILE_TIME);
    }
    assert_eq!(hash::fnv1a(b"foobar"), 0xBF9CF968);
}

fn dispatch(command: &str) -> &'static str {
    string_switch!(command, {
        "start" => "starting",
        "stop" => "stopping",
        "status" => "reporting",
        _ => "unknown",
    })
}

#[test]
fn test_string_switch_dispatch() {
    assert_eq!(dispatch("start"), "starting");
    assert_eq!(dispatch("stop"), "stopping");
    assert_eq!(dispatch(&String::from("status")), "reporting");
    assert_eq!(dispatch("restart"), "unknown");
    assert_eq!(dispatch(""), "unknown");
}

#[test]
fn test_defer_runs_once_after_early_exit() {
    let log = RefCell::new(Vec::new());

    let work = |fail: bool| -> Result<(), String> {
        defer! { log.borrow_mut().push("cleanup") }
        log.borrow_mut().push("start");
        if fail {
            return Err("failed".to_string());
        }
        log.borrow_mut().push("done");
        Ok(())
    };

    assert!(work(true).is_err());
    assert_eq!(*log.borrow(), vec!["start", "cleanup"]);

    log.borrow_mut().clear();
    assert!(work(false).is_ok());
    assert_eq!(*log.borrow(), vec!["start", "done", "cleanup"]);
}

struct IsUnsigned;

impl Predicate<u8> for IsUnsigned {
    type Holds = True;
}
impl Predicate<u64> for IsUnsigned {
    type Holds = True;
}
impl Predicate<i16> for IsUnsigned {
    type Holds = False;
}
impl Predicate<char> for IsUnsigned {
    type Holds = False;
}

#[test]
fn test_type_pack_filter() {
    type Unsigned = FilterT<IsUnsigned, type_pack![i16, u64, char, u8]>;
    assert_eq!(<Unsigned as TypeList>::LEN, 2);
    assert_eq!(<Unsigned as TypeList>::type_names(), vec!["u64", "u8"]);
}

#[test]
fn test_split_and_join() {
    let tokens = text::split("usr/local//bin", "/", true);
    assert_eq!(tokens, vec!["usr", "local", "bin"]);
    assert_eq!(text::stream_join(&tokens).delimiter("/").to_string(), "usr/local/bin");
}
