//! Demonstrate item visibility across every kind of declaration.
//!
//! Each declaration below comes in an exported/private pair: a `pub` constant
//! next to a module-private one, a `pub` function next to a private one, and
//! so on through statics, type aliases, structs, fields, and methods. None of
//! them interact; each pair is a standalone example.
//!
//! The per-topic demo runners (`demo_constants` .. `demo_structs`) live in
//! this module on purpose: they are the one place that can exercise the
//! private half of each pair, which is itself the point being demonstrated.
//!
//! ## Notes
//!
//! - All output goes through a caller-supplied [`io::Write`] sink so the
//!   exact lines are testable; the CLI passes `io::stdout()`.
//! - Demo lines are fixed strings. Nothing here has state or can fail except
//!   the sink.

use std::io;

// ============================================================================
// Constants and statics
// ============================================================================

/// An exported constant. Any crate that depends on this one can read it.
pub const PI: f64 = 3.1415;

/// A module-private constant. Only code in this module can read it.
const PI_PRECISE: f64 = 3.141516;

/// An exported static.
pub static SCREEN_SIZE: i32 = 1080;

/// A module-private static, left at its zero value.
static SCREEN_HEIGHT: i32 = 0;

// ============================================================================
// Functions
// ============================================================================

/// Print the public-function demonstration line.
///
/// The `100` in the output comes from a function-local constant: locals are
/// never visible outside their function, regardless of how they are named.
///
/// ## Returns
/// - (`io::Result<()>`): errors only if the sink does.
pub fn public_func(out: &mut impl io::Write) -> io::Result<()> {
    const LOCAL_LIMIT: i32 = 100;
    writeln!(out, "This is a public function {LOCAL_LIMIT}")
}

/// Print the private-function demonstration line. Callable only from inside
/// this module.
fn private_func(out: &mut impl io::Write) -> io::Result<()> {
    writeln!(out, "This is a private function")
}

// ============================================================================
// Type aliases
// ============================================================================

/// An exported type alias.
pub type Years = i64;

/// A module-private type alias, used for the hidden struct fields below.
type Name = String;

// ============================================================================
// Structs, fields, and methods
// ============================================================================

/// An exported struct with one exported field and one hidden field.
///
/// Because `name` is module-private, other crates cannot construct a
/// `Profile` with struct literal syntax; they go through [`Profile::new`].
#[derive(Debug, Clone)]
pub struct Profile {
    /// Exported field, readable and writable from anywhere.
    pub age: Years,
    /// Hidden field, reachable only inside this module.
    name: Name,
}

impl Profile {
    /// Construct a profile. This is the only way in from outside the module,
    /// since the `name` field cannot be named there.
    pub fn new(age: Years, name: impl Into<Name>) -> Self {
        Self {
            age,
            name: name.into(),
        }
    }

    /// Print the public-method demonstration line.
    pub fn public_method(&self, out: &mut impl io::Write) -> io::Result<()> {
        writeln!(out, "This is a public method")
    }

    /// Print the private-method demonstration line. A method without `pub` is
    /// private even when its type is exported.
    fn private_method(&self, out: &mut impl io::Write) -> io::Result<()> {
        writeln!(out, "This is a private method")
    }
}

/// A module-private struct. Everything about it, fields and methods alike, is
/// invisible outside this module.
struct AuditRecord {
    age: Years,
    name: Name,
}

impl AuditRecord {
    /// A `pub` method on a private type. The modifier is legal but moot:
    /// outside code cannot name `AuditRecord`, so it can never call this.
    pub fn describe(&self, out: &mut impl io::Write) -> io::Result<()> {
        writeln!(out, "This is a private method")
    }
}

// ============================================================================
// Demo runners
// ============================================================================

/// Print both constants, including the private one this module can still see.
pub fn demo_constants(out: &mut impl io::Write) -> io::Result<()> {
    writeln!(out, "PI (pub) = {PI}")?;
    writeln!(out, "PI_PRECISE (module-private) = {PI_PRECISE}")
}

/// Print both statics.
pub fn demo_statics(out: &mut impl io::Write) -> io::Result<()> {
    writeln!(out, "SCREEN_SIZE (pub) = {SCREEN_SIZE}")?;
    writeln!(out, "SCREEN_HEIGHT (module-private) = {SCREEN_HEIGHT}")
}

/// Run the exported function, then the private one only this module can call.
pub fn demo_functions(out: &mut impl io::Write) -> io::Result<()> {
    public_func(out)?;
    private_func(out)
}

/// Bind a value through each alias and print it.
pub fn demo_types(out: &mut impl io::Write) -> io::Result<()> {
    let age: Years = 42;
    let label: Name = Name::from("Grace");
    writeln!(out, "Years (pub alias) holds {age}")?;
    writeln!(out, "Name (module-private alias) holds {label:?}")
}

/// Exercise both structs: the exported one with its method pair, and the
/// private one nothing outside this module can touch.
pub fn demo_structs(out: &mut impl io::Write) -> io::Result<()> {
    let profile = Profile::new(36, "Ada Lovelace");
    profile.public_method(out)?;
    profile.private_method(out)?;
    writeln!(out, "profile.name reads {:?} inside its module", profile.name)?;

    let audit = AuditRecord {
        age: 85,
        name: Name::from("Grace Hopper"),
    };
    audit.describe(out)?;
    writeln!(out, "audit record: {:?}, age {}", audit.name, audit.age)
}

/// Run every demonstration in order, one topic heading per group.
pub fn run_all(out: &mut impl io::Write) -> io::Result<()> {
    writeln!(out, "== constants ==")?;
    demo_constants(out)?;
    writeln!(out, "== statics ==")?;
    demo_statics(out)?;
    writeln!(out, "== functions ==")?;
    demo_functions(out)?;
    writeln!(out, "== types ==")?;
    demo_types(out)?;
    writeln!(out, "== structs ==")?;
    demo_structs(out)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Collect the output of a demo runner as a string.
    fn transcript(run: impl Fn(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn public_func_exact_line() {
        assert_eq!(transcript(public_func), "This is a public function 100\n");
    }

    #[test]
    fn private_func_exact_line() {
        // Only this module can make this call at all.
        assert_eq!(transcript(private_func), "This is a private function\n");
    }

    #[test]
    fn method_pair_exact_lines() {
        let profile = Profile::new(1, "x");
        assert_eq!(
            transcript(|out| profile.public_method(out)),
            "This is a public method\n"
        );
        assert_eq!(
            transcript(|out| profile.private_method(out)),
            "This is a private method\n"
        );
    }

    #[test]
    fn private_struct_method_exact_line() {
        let audit = AuditRecord {
            age: 0,
            name: Name::from("n"),
        };
        assert_eq!(
            transcript(|out| audit.describe(out)),
            "This is a private method\n"
        );
    }

    #[test]
    fn private_declarations_visible_here() {
        // The private half of each pair is in scope inside the module.
        assert_eq!(PI_PRECISE, 3.141516);
        assert_eq!(SCREEN_HEIGHT, 0);
        let hidden: Name = Name::from("local");
        assert_eq!(hidden, "local");
    }

    #[test]
    fn hidden_field_readable_in_module() {
        let profile = Profile::new(36, "Ada Lovelace");
        assert_eq!(profile.name, "Ada Lovelace");
        assert_eq!(profile.age, 36);
    }

    #[test]
    fn constants_demo_lines() {
        assert_eq!(
            transcript(demo_constants),
            "PI (pub) = 3.1415\nPI_PRECISE (module-private) = 3.141516\n"
        );
    }

    #[test]
    fn statics_demo_lines() {
        assert_eq!(
            transcript(demo_statics),
            "SCREEN_SIZE (pub) = 1080\nSCREEN_HEIGHT (module-private) = 0\n"
        );
    }

    #[test]
    fn functions_demo_is_both_lines() {
        assert_eq!(
            transcript(demo_functions),
            "This is a public function 100\nThis is a private function\n"
        );
    }

    #[test]
    fn run_all_covers_every_topic_in_order() {
        let full = transcript(run_all);
        let headings: Vec<&str> = full.lines().filter(|l| l.starts_with("== ")).collect();
        assert_eq!(
            headings,
            vec![
                "== constants ==",
                "== statics ==",
                "== functions ==",
                "== types ==",
                "== structs =="
            ]
        );
        // The tour is exactly the five demos with their headings.
        let expected = format!(
            "== constants ==\n{}== statics ==\n{}== functions ==\n{}== types ==\n{}== structs ==\n{}",
            transcript(demo_constants),
            transcript(demo_statics),
            transcript(demo_functions),
            transcript(demo_types),
            transcript(demo_structs),
        );
        assert_eq!(full, expected);
    }
}
