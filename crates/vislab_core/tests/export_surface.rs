//! Exercise the exported surface of the showcase module from outside it.
//!
//! This test crate sits across the crate boundary, so everything it compiles
//! against is, by construction, the exported half of the demonstration. The
//! private half is unreachable from here; the compiler enforces that, and the
//! in-module unit tests cover it.

use std::io;

use vislab_core::showcase::{
    self, PI, Profile, SCREEN_SIZE, Years, demo_constants, demo_statics, demo_structs,
    demo_types, public_func, run_all,
};

fn transcript(run: impl Fn(&mut Vec<u8>) -> io::Result<()>) -> String {
    let mut out = Vec::new();
    run(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn exported_values_readable_across_crates() {
    assert_eq!(PI, 3.1415);
    assert_eq!(SCREEN_SIZE, 1080);
}

#[test]
fn exported_function_prints_its_line() {
    assert_eq!(transcript(public_func), "This is a public function 100\n");
}

#[test]
fn exported_alias_usable_across_crates() {
    let age: Years = 7;
    assert_eq!(age + 1, 8);
}

#[test]
fn profile_surface_from_outside() {
    // Struct literal syntax is unavailable out here (the `name` field is
    // hidden), so `new` is the only constructor.
    let mut profile = Profile::new(36, "Ada Lovelace");
    profile.age += 1;
    assert_eq!(profile.age, 37);

    assert_eq!(
        transcript(|out| profile.public_method(out)),
        "This is a public method\n"
    );
}

#[test]
fn demo_runners_are_exported() {
    // The runners themselves are public entry points; each produces a
    // non-empty fixed transcript.
    for run in [
        demo_constants as fn(&mut Vec<u8>) -> io::Result<()>,
        demo_statics,
        showcase::demo_functions,
        demo_types,
        demo_structs,
    ] {
        assert!(!transcript(run).is_empty());
    }
}

#[test]
fn tour_contains_both_halves_of_each_pair() {
    let full = transcript(run_all);
    // Exported half, visible everywhere.
    assert!(full.contains("PI (pub) = 3.1415"));
    assert!(full.contains("This is a public function 100"));
    assert!(full.contains("This is a public method"));
    // Private half, printed on our behalf by code inside the module.
    assert!(full.contains("PI_PRECISE (module-private) = 3.141516"));
    assert!(full.contains("This is a private function"));
    assert!(full.contains("This is a private method"));
}
