flatframe::group! {
    /// Documented group.
    #[allow(dead_code)]
    pub(crate) group Documented(documented) {
        /// Documented field.
        Level: f64,
        #[doc = "Attribute-documented field."]
        Flags: [bool; 2],
    }
}

flatframe::frame! {
    /// Documented frame.
    pub(crate) frame Wrapper {
        Documented
    }
}

fn main() {
    use flatframe::FrameLayout;
    assert_eq!(Wrapper::SIZE, 10);
    assert_eq!(Wrapper::offset(documented::Flags), 8);
}
