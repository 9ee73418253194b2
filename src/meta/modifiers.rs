use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Access and behavior modifiers of a class or member, as a bit mask.
    ///
    /// Filters test masks with intersection semantics: a member passes a
    /// modifier filter if it carries *any* of the bits in the filter mask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u32 {
        const PUBLIC = 0x0001;
        const PRIVATE = 0x0002;
        const PROTECTED = 0x0004;
        const STATIC = 0x0008;
        const FINAL = 0x0010;
        const SYNCHRONIZED = 0x0020;
        const VOLATILE = 0x0040;
        const TRANSIENT = 0x0080;
        const NATIVE = 0x0100;
        const ABSTRACT = 0x0400;
        const STRICT = 0x0800;
    }
}

impl Modifiers {
    /// The three access-modifier bits combined.
    pub const ACCESS: Modifiers = Modifiers::PUBLIC
        .union(Modifiers::PROTECTED)
        .union(Modifiers::PRIVATE);
}

impl fmt::Display for Modifiers {
    /// Renders the mask as space-separated lower-case modifier names,
    /// access modifier first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        if self.contains(Modifiers::PUBLIC) {
            names.push("public");
        } else if self.contains(Modifiers::PRIVATE) {
            names.push("private");
        } else if self.contains(Modifiers::PROTECTED) {
            names.push("protected");
        }
        if self.contains(Modifiers::ABSTRACT) {
            names.push("abstract");
        }
        if self.contains(Modifiers::STATIC) {
            names.push("static");
        }
        if self.contains(Modifiers::FINAL) {
            names.push("final");
        }
        if self.contains(Modifiers::TRANSIENT) {
            names.push("transient");
        }
        if self.contains(Modifiers::VOLATILE) {
            names.push("volatile");
        }
        if self.contains(Modifiers::SYNCHRONIZED) {
            names.push("synchronized");
        }
        if self.contains(Modifiers::NATIVE) {
            names.push("native");
        }
        if self.contains(Modifiers::STRICT) {
            names.push("strictfp");
        }
        write!(f, "{}", names.join(" "))
    }
}

bitflags! {
    /// Structural flags of a class declaration that are not modifiers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ClassFlags: u8 {
        const ANONYMOUS = 0x01;
        const LOCAL = 0x02;
        const MEMBER = 0x04;
        const SYNTHETIC = 0x08;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_orders_access_modifier_first() {
        let m = Modifiers::STATIC | Modifiers::PUBLIC | Modifiers::FINAL;
        assert_eq!(m.to_string(), "public static final");
    }

    #[test]
    fn display_picks_single_access_modifier() {
        assert_eq!(Modifiers::PRIVATE.to_string(), "private");
        assert_eq!(Modifiers::PROTECTED.to_string(), "protected");
    }

    #[test]
    fn empty_mask_displays_empty() {
        assert_eq!(Modifiers::empty().to_string(), "");
    }
}
